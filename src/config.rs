//! Runtime Configuration
//!
//! Read once at startup from `<meta name="lms:...">` tags in index.html.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_PROJECT_ID: &str = "lms-landing";

const META_BASE_URL: &str = "lms:firestore-base-url";
const META_PROJECT_ID: &str = "lms:firestore-project-id";
const META_API_KEY: &str = "lms:firestore-api-key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub store_base_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; blank values count as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            store_base_url: get(META_BASE_URL).unwrap_or(defaults.store_base_url),
            project_id: get(META_PROJECT_ID).unwrap_or(defaults.project_id),
            api_key: get(META_API_KEY),
        }
    }

    /// Read the page's meta tags
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|win| win.document());
        Self::from_lookup(|key| {
            let doc = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", key);
            doc.query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let values: HashMap<&str, &str> = [
            (META_BASE_URL, "http://localhost:8080/v1"),
            (META_PROJECT_ID, "demo-lms"),
            (META_API_KEY, " key-123 "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| values.get(k).map(|v| v.to_string()));
        assert_eq!(config.store_base_url, "http://localhost:8080/v1");
        assert_eq!(config.project_id, "demo-lms");
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
