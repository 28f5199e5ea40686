//! Application Configuration
//!
//! Settings baked in at build time through environment variables
//! (`NOTEFLOW_API_BASE_URL`, `NOTEFLOW_LOG_LEVEL`).

use log::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme and host of the REST API; empty means same origin
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("NOTEFLOW_API_BASE_URL"), option_env!("NOTEFLOW_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_base_url: api_base_url.unwrap_or_default().trim().trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Base of every endpoint, e.g. `https://host/api/v1`.
    ///
    /// An empty base URL means same origin and is resolved against `origin`
    /// (the page's `location.origin`), since request URLs must be absolute.
    pub fn api_root(&self, origin: Option<&str>) -> String {
        let base = if self.api_base_url.is_empty() {
            origin.unwrap_or_default().trim().trim_end_matches('/')
        } else {
            self.api_base_url.as_str()
        };
        format!("{}{}", base, API_PREFIX)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_same_origin_and_info() {
        let config = AppConfig::default();
        let root = config.api_root(Some("http://localhost:8080/"));
        assert_eq!(root, "http://localhost:8080/api/v1");
        assert!(reqwest::Url::parse(&root).is_ok());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_explicit_base_ignores_page_origin() {
        let config = AppConfig::from_values(Some("https://api.example.com"), None);
        assert_eq!(config.api_root(Some("http://localhost:8080")), "https://api.example.com/api/v1");
    }

    #[test]
    fn test_trims_trailing_slashes_and_parses_level() {
        let config = AppConfig::from_values(Some(" https://notes.example.com// "), Some("DEBUG"));
        assert_eq!(config.api_root(None), "https://notes.example.com/api/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig::from_values(None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
