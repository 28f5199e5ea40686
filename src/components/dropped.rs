//! Drop Dispatch
//!
//! Turns browser drop payloads into uploads and runs the drop protocol.

use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{DropPayload, DropTarget};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::context::AppContext;
use crate::models::UploadFile;
use crate::sidebar::handle_drop;
use crate::store::AppStateStoreFields;

/// Read a dropped file into memory
async fn read_upload_file(file: &web_sys::File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(UploadFile {
        name: file.name(),
        mime: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

async fn read_payload(payload: DropPayload<web_sys::File>) -> DropPayload<UploadFile> {
    match payload {
        DropPayload::Files(files) => {
            let mut uploads = Vec::with_capacity(files.len());
            for file in &files {
                match read_upload_file(file).await {
                    Ok(upload) => uploads.push(upload),
                    Err(err) => log::error!("[DND] Could not read \"{}\": {:?}", file.name(), err),
                }
            }
            DropPayload::Files(uploads)
        }
        DropPayload::Note(id) => DropPayload::Note(id),
        DropPayload::Folder(id) => DropPayload::Folder(id),
    }
}

/// Handle a drop on a folder label or the root zone
pub fn dispatch_drop(ctx: AppContext, target: DropTarget, payload: DropPayload<web_sys::File>) {
    spawn_local(async move {
        let payload = read_payload(payload).await;
        let folders = ctx.store.folders().get_untracked();
        let outcome = handle_drop(&ctx.api(), &ctx.host(), &folders, target, payload).await;
        log::debug!("[DND] Drop on {:?} finished: {:?}", target, outcome);
    });
}
