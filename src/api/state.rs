use std::sync::Arc;

use crate::config::Config;
use crate::services::{DiscoveryService, GenreCatalog, LocaleDefaults, Recommender, TmdbProvider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }

    /// Wires the TMDB provider, genre catalog and recommender from config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let discovery: Arc<dyn DiscoveryService> = Arc::new(TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_image_url.clone(),
        ));
        Self::with_discovery(discovery, config)
    }

    /// Same wiring over any discovery provider
    pub fn with_discovery(
        discovery: Arc<dyn DiscoveryService>,
        config: &Config,
    ) -> anyhow::Result<Self> {
        let catalog = Arc::new(GenreCatalog::new(
            discovery.clone(),
            config.genre_cache_ttl()?,
        ));
        let locale = LocaleDefaults::new(&config.default_region, &config.default_language);

        Ok(Self::new(Recommender::new(discovery, catalog, locale)))
    }

    pub fn catalog(&self) -> &Arc<GenreCatalog> {
        self.recommender.catalog()
    }
}
