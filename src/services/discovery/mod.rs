/// Content discovery provider abstraction
///
/// The recommendation core only talks to the movie database through this trait,
/// so the concrete HTTP client can be swapped or mocked. Every call returns an
/// explicit `AppResult`; callers decide per call site whether a failure is
/// swallowed (availability enrichment, genre refresh) or terminal (discovery).
use crate::{
    error::AppResult,
    models::{ContentDetails, ContentItem, Genre, MediaType, PlatformInfo},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Filters for a discovery query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverQuery {
    pub genre_ids: Vec<u32>,
    pub platform_ids: Vec<u32>,
    pub region: String,
    pub language: String,
    pub page: u32,
}

impl DiscoverQuery {
    pub fn new(region: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            genre_ids: Vec::new(),
            platform_ids: Vec::new(),
            region: region.into(),
            language: language.into(),
            page: 1,
        }
    }

    pub fn with_genres(mut self, genre_ids: &[u32]) -> Self {
        self.genre_ids = genre_ids.to_vec();
        self
    }

    pub fn with_platforms(mut self, platform_ids: &[u32]) -> Self {
        self.platform_ids = platform_ids.to_vec();
        self
    }
}

/// Trait for content discovery providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DiscoveryService: Send + Sync {
    /// Discover titles matching the filters, in the provider's popularity order
    async fn discover(
        &self,
        media_type: MediaType,
        query: &DiscoverQuery,
    ) -> AppResult<Vec<ContentItem>>;

    /// Search titles by name
    async fn search_by_title(
        &self,
        media_type: MediaType,
        query: &str,
        language: &str,
    ) -> AppResult<Vec<ContentItem>>;

    /// Titles the provider recommends for a given title
    async fn recommendations_for(
        &self,
        media_type: MediaType,
        content_id: u64,
        language: &str,
    ) -> AppResult<Vec<ContentItem>>;

    /// Full record of one title, without platforms
    async fn details(
        &self,
        media_type: MediaType,
        content_id: u64,
        language: &str,
    ) -> AppResult<ContentDetails>;

    /// Canonical genre list for one media type in the given language
    async fn genres(&self, media_type: MediaType, language: &str) -> AppResult<Vec<Genre>>;

    /// Platforms offering a title in a region
    ///
    /// Subscription platforms are preferred; rental platforms are only returned
    /// when no subscription platform carries the title.
    async fn availability(
        &self,
        media_type: MediaType,
        content_id: u64,
        region: &str,
    ) -> AppResult<Vec<PlatformInfo>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
