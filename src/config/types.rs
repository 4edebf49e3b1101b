use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Remote collection endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the recipes API (e.g., "https://dummyjson.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 20).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 20).
    #[serde(default = "default_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Page sizes used by reload and load-next-page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Size of the first page requested by reload (default: 20).
    #[serde(default = "default_initial_page_size")]
    pub initial_page_size: usize,
    /// Size of each page appended by load-next-page (default: 10).
    #[serde(default = "default_incremental_page_size")]
    pub incremental_page_size: usize,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_timeout() -> u32 {
    20
}

fn default_initial_page_size() -> usize {
    20
}

fn default_incremental_page_size() -> usize {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_timeout(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            initial_page_size: default_initial_page_size(),
            incremental_page_size: default_incremental_page_size(),
        }
    }
}
