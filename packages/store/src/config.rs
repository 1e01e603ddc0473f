//! # Dashboard configuration: `dashboard.toml`
//!
//! Defines the TOML configuration embedded in the web binary (filename:
//! [`DashboardConfig::filename`] = `"dashboard.toml"`). It is read once at
//! startup to locate the backend and to tune the offers list.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://dummy-1.hiublue.com/api"
//!
//! [list]
//! search_debounce_ms = 500
//! page_sizes = [5, 10, 25, 50]
//! default_page_size = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config. Provides builder helpers (`with_base_url`), TOML (de)serialisation, and the canonical filename constant. |
//! | [`ApiConfig`] | Backend section: the `base_url` every request path is joined to. |
//! | [`ListConfig`] | List section: debounce interval and the page size options. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Paginated list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Quiet period after the last keystroke before a search request fires.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Page sizes offered to the user.
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<u32>,
    /// Page size on first load. Must be one of `page_sizes`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

fn default_base_url() -> String {
    "https://dummy-1.hiublue.com/api".to_string()
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_page_sizes() -> Vec<u32> {
    vec![5, 10, 25, 50]
}

fn default_page_size() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            page_sizes: default_page_sizes(),
            default_page_size: default_page_size(),
        }
    }
}

impl ListConfig {
    /// The default page size, or the first option when the configured default
    /// is not among the options.
    pub fn initial_page_size(&self) -> u32 {
        if self.page_sizes.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            self.page_sizes.first().copied().unwrap_or(default_page_size())
        }
    }
}

impl DashboardConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.list.page_sizes, vec![5, 10, 25, 50]);
        assert_eq!(config.api.base_url, "https://dummy-1.hiublue.com/api");
    }

    #[test]
    fn test_partial_sections() {
        let config = DashboardConfig::from_toml(
            r#"
            [list]
            search_debounce_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.list.search_debounce_ms, 250);
        assert_eq!(config.list.default_page_size, 5);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_initial_page_size_falls_back_to_first_option() {
        let list = ListConfig {
            page_sizes: vec![20, 40],
            default_page_size: 5,
            ..ListConfig::default()
        };
        assert_eq!(list.initial_page_size(), 20);
        assert_eq!(ListConfig::default().initial_page_size(), 5);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = DashboardConfig::default().with_base_url("http://localhost:8000/api/");
        assert_eq!(config.api.base_url, "http://localhost:8000/api");

        let reparsed = DashboardConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(DashboardConfig::from_toml("[list]\npage_sizes = \"many\"").is_err());
    }
}
