//! API state management for the REST server.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Component catalog, read-only for the server's lifetime
    pub catalog: Arc<Catalog>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    /// State backed by the builtin catalog and default config
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(Catalog::builtin()?), Config::default()))
    }
}
