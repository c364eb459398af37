//! Configuration types, loading and storage.

mod loader;
mod store;
mod types;

pub use loader::{ConfigError, SESSION_TOKEN_ENV};
pub use store::ConfigStore;
pub use types::{ApiConfig, Config};
