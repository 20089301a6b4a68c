use std::{fmt, sync::Arc};

use ecoalbum_core::{GalleryService, SpeciesRepository};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn SpeciesRepository>,
    pub gallery: Arc<GalleryService>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(repo: Arc<dyn SpeciesRepository>, config: Config) -> Self {
        let gallery = Arc::new(GalleryService::new(repo.clone()));
        Self {
            repo,
            gallery,
            config: Arc::new(config),
        }
    }
}
