//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type FolderId = i64;
pub type NoteId = i64;

/// Folder record (flat form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// `GET /folders` may answer with a flat list or with nested `children`
#[derive(Debug, Clone, Deserialize)]
pub struct FolderRecord {
    pub id: FolderId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub children: Vec<FolderRecord>,
}

/// Flatten folder records depth-first into the flat list the tree builder
/// consumes. Nested records without a `parent_id` inherit it from their
/// enclosing record; duplicated ids keep their first occurrence.
pub fn flatten_folder_records(records: Vec<FolderRecord>) -> Vec<Folder> {
    fn walk(record: FolderRecord, parent: Option<FolderId>, seen: &mut HashSet<FolderId>, out: &mut Vec<Folder>) {
        let FolderRecord { id, name, parent_id, user_id, children } = record;
        if seen.insert(id) {
            out.push(Folder {
                id,
                name,
                parent_id: parent_id.or(parent),
                user_id,
            });
        }
        for child in children {
            walk(child, Some(id), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        walk(record, None, &mut seen, &mut out);
    }
    out
}

/// Note record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Timestamp used for "recent" ordering
    pub fn last_touched(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamps arrive either as RFC 3339 or as naive ISO date-times (UTC).
/// Anything unreadable decodes as `None`.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Text(raw)) => {
                let parsed = parse(&raw);
                if parsed.is_none() {
                    log::warn!("[Models] Ignoring unreadable timestamp {:?}", raw);
                }
                parsed
            }
            Some(Raw::Other(_)) => {
                log::warn!("[Models] Ignoring non-string timestamp");
                None
            }
        };
        Ok(parsed)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

// ========================
// Request Bodies
// ========================

/// `POST /folders`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFolder {
    pub name: String,
    pub parent_id: Option<FolderId>,
}

/// `PATCH /folders/{id}`; `parent_id: Some(None)` moves to the root
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<FolderId>>,
}

impl FolderPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn reparent(parent_id: Option<FolderId>) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Default::default()
        }
    }
}

/// `POST /notes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub folder_id: Option<FolderId>,
}

/// `PATCH /notes/{id}`; `folder_id: Some(None)` moves to the root
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Option<FolderId>>,
}

impl NotePatch {
    pub fn rename(title: impl Into<String>, folder_id: Option<FolderId>) -> Self {
        Self {
            title: Some(title.into()),
            folder_id: Some(folder_id),
            ..Default::default()
        }
    }

    pub fn move_to(folder_id: Option<FolderId>) -> Self {
        Self {
            folder_id: Some(folder_id),
            ..Default::default()
        }
    }
}

/// `PATCH /notes/{id}/favorite`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoritePatch {
    pub is_favorite: bool,
}

// ========================
// Files
// ========================

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// File read from a drop event, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn is_image(&self) -> bool {
        if self.mime.starts_with("image/") {
            return true;
        }
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// `POST /files/upload` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedFile {
    #[serde(alias = "file_url")]
    pub url: String,
    #[serde(default)]
    pub original_name: Option<String>,
}

// ========================
// View selection
// ========================

/// Which notes the main pane shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteFilter {
    #[default]
    All,
    Recent,
    Favorites,
}

impl NoteFilter {
    pub const ALL: [NoteFilter; 3] = [NoteFilter::All, NoteFilter::Recent, NoteFilter::Favorites];

    pub fn label(&self) -> &'static str {
        match self {
            NoteFilter::All => "My folders",
            NoteFilter::Recent => "Recent notes",
            NoteFilter::Favorites => "Favorites",
        }
    }
}
