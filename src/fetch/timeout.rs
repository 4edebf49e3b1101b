use std::time::Duration;

use crate::config::ApiConfig;

/// Deadlines applied to every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Time allowed to establish the connection.
    pub connect: Duration,
    /// Time allowed for the whole request, body included.
    pub request: Duration,
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds as u64),
            request: Duration::from_secs(api.timeout_seconds as u64),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}
