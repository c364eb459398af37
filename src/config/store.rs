//! Shared configuration storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Config container shared between the CLI and the clients it builds.
///
/// Readers get a clone; `reload` swaps the whole value atomically.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Loads from `path` with environment overrides applied.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?.with_env_overrides();
        Ok(Self::new(config, path))
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-reads the file. On failure the old config stays in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?.with_env_overrides();
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
