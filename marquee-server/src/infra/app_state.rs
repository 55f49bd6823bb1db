use std::{fmt, sync::Arc};

use marquee_core::MovieCatalog;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: MovieCatalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("mode", &self.catalog.mode())
            .finish_non_exhaustive()
    }
}
