use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{ContentScope, Genre, MediaType},
    services::discovery::DiscoveryService,
};

/// Language retried when the requested one fails to load
pub const REFERENCE_LANGUAGE: &str = "en-US";

/// Source of the current time, injectable for TTL tests
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Point-in-time copy of both genre lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreSnapshot {
    pub movie: Vec<Genre>,
    pub tv: Vec<Genre>,
}

impl GenreSnapshot {
    pub fn genres(&self, media_type: MediaType) -> &[Genre] {
        match media_type {
            MediaType::Movie => &self.movie,
            MediaType::Tv => &self.tv,
        }
    }

    /// Movie and TV genres, movies first
    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.movie.iter().chain(self.tv.iter())
    }

    /// Name of a genre id, looked up in movies first
    pub fn genre_name(&self, id: u32) -> Option<&str> {
        self.iter().find(|g| g.id == id).map(|g| g.name.as_str())
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.iter().any(|g| g.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.movie.is_empty() && self.tv.is_empty()
    }

    /// Copy holding only the lists searched for `scope`
    pub fn scoped(&self, scope: ContentScope) -> GenreSnapshot {
        let list = |media_type: MediaType| {
            if scope.includes(media_type) {
                self.genres(media_type).to_vec()
            } else {
                Vec::new()
            }
        };

        GenreSnapshot {
            movie: list(MediaType::Movie),
            tv: list(MediaType::Tv),
        }
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    genres: GenreSnapshot,
    last_refreshed_at: Option<DateTime<Utc>>,
}

/// Genre lists fetched for one scope; `None` means out of scope
struct FetchedGenres {
    movie: Option<Vec<Genre>>,
    tv: Option<Vec<Genre>>,
}

/// Provider genre lists with time-based refresh.
///
/// Lists are loaded lazily per content scope and kept until the TTL expires or
/// `invalidate` is called. A failed load falls back to `en-US`; if that fails
/// too the previous lists (possibly empty) stay in place. No lock is held
/// while fetching, so concurrent callers may refresh redundantly and the last
/// writer wins.
pub struct GenreCatalog {
    discovery: Arc<dyn DiscoveryService>,
    state: RwLock<CatalogState>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl GenreCatalog {
    pub fn new(discovery: Arc<dyn DiscoveryService>, ttl: Duration) -> Self {
        Self::with_clock(discovery, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(
        discovery: Arc<dyn DiscoveryService>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            discovery,
            state: RwLock::new(CatalogState::default()),
            ttl,
            clock,
        }
    }

    /// Loads the genre lists for `scope` if they are missing or stale
    ///
    /// Never fails: load errors are logged and leave the catalog as it was.
    pub async fn ensure_loaded(&self, language: &str, scope: ContentScope) {
        let now = self.clock.now();
        if !self.needs_refresh(scope, now).await {
            return;
        }

        tracing::debug!(language = %language, scope = %scope, "Refreshing genre catalog");

        let fetched = match self.fetch(language, scope).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    language = %language,
                    scope = %scope,
                    "Failed to load genres"
                );

                if language == REFERENCE_LANGUAGE {
                    return;
                }

                match self.fetch(REFERENCE_LANGUAGE, scope).await {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            scope = %scope,
                            "Fallback to reference language also failed, keeping previous genres"
                        );
                        return;
                    }
                }
            }
        };

        let mut state = self.state.write().await;
        if let Some(movie) = fetched.movie {
            state.genres.movie = movie;
        }
        if let Some(tv) = fetched.tv {
            state.genres.tv = tv;
        }
        state.last_refreshed_at = Some(now);

        tracing::info!(
            movie_genres = state.genres.movie.len(),
            tv_genres = state.genres.tv.len(),
            scope = %scope,
            "Genre catalog loaded"
        );
    }

    async fn needs_refresh(&self, scope: ContentScope, now: DateTime<Utc>) -> bool {
        let state = self.state.read().await;
        let expired = match state.last_refreshed_at {
            Some(at) => now - at > self.ttl,
            None => true,
        };

        expired
            || scope
                .media_types()
                .iter()
                .any(|media_type| state.genres.genres(*media_type).is_empty())
    }

    /// Fetches every list in scope; all of them must succeed
    async fn fetch(&self, language: &str, scope: ContentScope) -> AppResult<FetchedGenres> {
        let fetched = match scope {
            ContentScope::Movie => FetchedGenres {
                movie: Some(self.discovery.genres(MediaType::Movie, language).await?),
                tv: None,
            },
            ContentScope::Tv => FetchedGenres {
                movie: None,
                tv: Some(self.discovery.genres(MediaType::Tv, language).await?),
            },
            ContentScope::Both => {
                let (movie, tv) = tokio::try_join!(
                    self.discovery.genres(MediaType::Movie, language),
                    self.discovery.genres(MediaType::Tv, language),
                )?;
                FetchedGenres {
                    movie: Some(movie),
                    tv: Some(tv),
                }
            }
        };
        Ok(fetched)
    }

    /// Genres currently loaded for one media type
    pub async fn all_genres(&self, media_type: MediaType) -> Vec<Genre> {
        self.state.read().await.genres.genres(media_type).to_vec()
    }

    pub async fn snapshot(&self) -> GenreSnapshot {
        self.state.read().await.genres.clone()
    }

    pub async fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_refreshed_at
    }

    /// Marks the catalog stale so the next `ensure_loaded` refetches.
    /// Loaded lists stay usable until then.
    pub async fn invalidate(&self) {
        self.state.write().await.last_refreshed_at = None;
        tracing::info!("Genre catalog invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::discovery::MockDiscoveryService;
    use std::sync::Mutex;

    struct ManualClock(Mutex<DateTime<Utc>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Mutex::new(Utc::now()))
        }

        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn movie_genres() -> Vec<Genre> {
        vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 35, name: "Comedy".to_string() },
            Genre { id: 27, name: "Horror".to_string() },
        ]
    }

    fn tv_genres() -> Vec<Genre> {
        vec![
            Genre { id: 10759, name: "Action & Adventure".to_string() },
            Genre { id: 35, name: "Comedy".to_string() },
        ]
    }

    fn catalog_with(mock: MockDiscoveryService, clock: Arc<ManualClock>) -> GenreCatalog {
        GenreCatalog::with_clock(Arc::new(mock), Duration::hours(24), clock)
    }

    #[tokio::test]
    async fn test_ensure_loaded_movie_scope_only_fetches_movies() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .withf(|media_type, language| *media_type == MediaType::Movie && language == "es-ES")
            .times(1)
            .returning(|_, _| Ok(movie_genres()));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded("es-ES", ContentScope::Movie).await;

        assert_eq!(catalog.all_genres(MediaType::Movie).await, movie_genres());
        assert!(catalog.all_genres(MediaType::Tv).await.is_empty());
        assert!(catalog.last_refreshed_at().await.is_some());
    }

    #[tokio::test]
    async fn test_ensure_loaded_is_cached_within_ttl() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .times(2)
            .returning(|media_type, _| match media_type {
                MediaType::Movie => Ok(movie_genres()),
                MediaType::Tv => Ok(tv_genres()),
            });

        let clock = Arc::new(ManualClock::new());
        let catalog = catalog_with(mock, clock.clone());

        catalog.ensure_loaded("en-US", ContentScope::Both).await;
        clock.advance(Duration::hours(23));
        catalog.ensure_loaded("en-US", ContentScope::Both).await;

        assert_eq!(catalog.snapshot().await.tv, tv_genres());
    }

    #[tokio::test]
    async fn test_ensure_loaded_refreshes_after_ttl() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .withf(|media_type, _| *media_type == MediaType::Movie)
            .times(2)
            .returning(|_, _| Ok(movie_genres()));

        let clock = Arc::new(ManualClock::new());
        let catalog = catalog_with(mock, clock.clone());

        catalog.ensure_loaded("en-US", ContentScope::Movie).await;
        clock.advance(Duration::hours(25));
        catalog.ensure_loaded("en-US", ContentScope::Movie).await;
    }

    #[tokio::test]
    async fn test_ensure_loaded_fetches_missing_scope_even_when_fresh() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .withf(|media_type, _| *media_type == MediaType::Movie)
            .times(1)
            .returning(|_, _| Ok(movie_genres()));
        mock.expect_genres()
            .withf(|media_type, _| *media_type == MediaType::Tv)
            .times(1)
            .returning(|_, _| Ok(tv_genres()));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded("en-US", ContentScope::Movie).await;
        catalog.ensure_loaded("en-US", ContentScope::Tv).await;

        let snapshot = catalog.snapshot().await;
        assert_eq!(snapshot.movie, movie_genres());
        assert_eq!(snapshot.tv, tv_genres());
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_to_reference_language_once() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .withf(|_, language| language == "fr-FR")
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("down".to_string())));
        mock.expect_genres()
            .withf(|_, language| language == REFERENCE_LANGUAGE)
            .times(1)
            .returning(|_, _| Ok(movie_genres()));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded("fr-FR", ContentScope::Movie).await;

        assert_eq!(catalog.all_genres(MediaType::Movie).await, movie_genres());
    }

    #[tokio::test]
    async fn test_double_failure_keeps_previous_state() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .withf(|_, language| language == "fr-FR")
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("down".to_string())));
        mock.expect_genres()
            .withf(|_, language| language == REFERENCE_LANGUAGE)
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("still down".to_string())));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded("fr-FR", ContentScope::Movie).await;

        assert!(catalog.snapshot().await.is_empty());
        assert!(catalog.last_refreshed_at().await.is_none());
    }

    #[tokio::test]
    async fn test_reference_language_failure_is_not_retried() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("down".to_string())));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded(REFERENCE_LANGUAGE, ContentScope::Tv).await;

        assert!(catalog.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_lists() {
        let mut mock = MockDiscoveryService::new();
        let mut calls = 0;
        mock.expect_genres().times(3).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(movie_genres())
            } else {
                Err(AppError::ExternalApi("down".to_string()))
            }
        });

        let clock = Arc::new(ManualClock::new());
        let catalog = catalog_with(mock, clock.clone());

        catalog.ensure_loaded("es-ES", ContentScope::Movie).await;
        clock.advance(Duration::hours(30));
        catalog.ensure_loaded("es-ES", ContentScope::Movie).await;

        assert_eq!(catalog.all_genres(MediaType::Movie).await, movie_genres());
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let mut mock = MockDiscoveryService::new();
        mock.expect_genres()
            .times(2)
            .returning(|_, _| Ok(movie_genres()));

        let catalog = catalog_with(mock, Arc::new(ManualClock::new()));
        catalog.ensure_loaded("en-US", ContentScope::Movie).await;
        catalog.invalidate().await;
        assert!(catalog.last_refreshed_at().await.is_none());
        assert_eq!(catalog.all_genres(MediaType::Movie).await.len(), 3);
        catalog.ensure_loaded("en-US", ContentScope::Movie).await;
    }

    #[test]
    fn test_snapshot_genre_name_prefers_movies() {
        let snapshot = GenreSnapshot {
            movie: vec![Genre { id: 35, name: "Comedy".to_string() }],
            tv: vec![
                Genre { id: 35, name: "Comedia TV".to_string() },
                Genre { id: 10762, name: "Kids".to_string() },
            ],
        };
        assert_eq!(snapshot.genre_name(35), Some("Comedy"));
        assert_eq!(snapshot.genre_name(10762), Some("Kids"));
        assert_eq!(snapshot.genre_name(1), None);
        assert!(snapshot.contains_id(10762));
    }

    #[test]
    fn test_scoped_snapshot_drops_out_of_scope_lists() {
        let snapshot = GenreSnapshot {
            movie: movie_genres(),
            tv: tv_genres(),
        };
        let movies_only = snapshot.scoped(ContentScope::Movie);
        assert_eq!(movies_only.movie.len(), 3);
        assert!(movies_only.tv.is_empty());
        assert!(!movies_only.contains_id(10759));
        assert_eq!(snapshot.scoped(ContentScope::Both), snapshot);
    }
}
