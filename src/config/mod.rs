//! Configuration: endpoint settings and page sizes, loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, PagingConfig};
