use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        ContentDetails, ContentItem, ContextualQuery, DetailsResponse, MediaType,
        RecommendationContext, RecommendationResponse, RecommendedItem, ResponseKind,
        SearchResponse, SimilarResponse,
    },
    services::{
        assembler::{RecommendationAssembler, RESULT_BUDGET},
        classifier::{ContentTypeClassifier, KeywordClassifier},
        discovery::{DiscoverQuery, DiscoveryService},
        filters::{ContentPolicy, ContextualFilterBuilder, LexicalContentPolicy},
        genres::GenreCatalog,
        locale::{Locale, LocaleDefaults},
        platforms::attach_availability,
    },
};

/// Titles returned by search and similar-content lookups
const SHORT_LIST_BUDGET: usize = 5;
/// Related titles shown under a title's details
const DETAILS_SIMILAR_BUDGET: usize = 3;

/// Entry point for every recommendation flow.
///
/// Owns the discovery collaborator, the shared genre catalog and the
/// replaceable heuristics. Every public call returns a response payload;
/// failures are reported in it with `type = "error"`.
pub struct Recommender {
    discovery: Arc<dyn DiscoveryService>,
    catalog: Arc<GenreCatalog>,
    classifier: Arc<dyn ContentTypeClassifier>,
    policy: Arc<dyn ContentPolicy>,
    locale: LocaleDefaults,
}

impl Recommender {
    pub fn new(
        discovery: Arc<dyn DiscoveryService>,
        catalog: Arc<GenreCatalog>,
        locale: LocaleDefaults,
    ) -> Self {
        Self {
            discovery,
            catalog,
            classifier: Arc::new(KeywordClassifier),
            policy: Arc::new(LexicalContentPolicy),
            locale,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn ContentTypeClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn catalog(&self) -> &Arc<GenreCatalog> {
        &self.catalog
    }

    pub fn locale(&self) -> &LocaleDefaults {
        &self.locale
    }

    /// Recommendations tailored to who is watching, when, and in what mood
    pub async fn contextual_recommendations(&self, query: &ContextualQuery) -> RecommendationResponse {
        let locale = self.locale.resolve(&query.region, &query.language);
        let context = RecommendationContext::from_query(query, locale.region, locale.language);

        let scope = self.classifier.classify(&context.user_query);
        self.catalog.ensure_loaded(&context.language, scope).await;

        let snapshot = self.catalog.snapshot().await.scoped(scope);
        let genre_ids = ContextualFilterBuilder::new(&snapshot).build_genre_filter(
            &context.user_query,
            context.age_group,
            context.mood,
            &context.genre,
        );

        for id in &genre_ids {
            tracing::debug!(
                genre_id = id,
                genre_name = snapshot.genre_name(*id).unwrap_or("unknown"),
                "Genre filter entry"
            );
        }

        RecommendationAssembler::new(self.discovery.as_ref(), self.policy.as_ref())
            .assemble(scope, &genre_ids, &context)
            .await
    }

    /// Popular titles of one type on the given platforms
    pub async fn platform_recommendations(
        &self,
        platforms: &[u32],
        media_type: MediaType,
        region: &str,
        language: &str,
    ) -> RecommendationResponse {
        let locale = self.locale.resolve(region, language);

        match self
            .discover_on_platforms(platforms, media_type, &locale.region, &locale.language)
            .await
        {
            Ok(items) => {
                let noun = plural_noun(media_type);
                let message = if items.is_empty() {
                    format!("No se encontraron {} disponibles en las plataformas especificadas.", noun)
                } else {
                    format!("Aquí tienes {} recomendadas para tus plataformas:", noun)
                };

                RecommendationResponse {
                    kind: ResponseKind::MovieRecommendations,
                    message,
                    context_analysis: None,
                    recommendations: items.into_iter().map(RecommendedItem::from).collect(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, media_type = %media_type, "Platform recommendations failed");
                RecommendationResponse::error(format!("Error obteniendo recomendaciones: {}", e), None)
            }
        }
    }

    async fn discover_on_platforms(
        &self,
        platforms: &[u32],
        media_type: MediaType,
        region: &str,
        language: &str,
    ) -> AppResult<Vec<ContentItem>> {
        if platforms.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one platform id is required".to_string(),
            ));
        }

        let query = DiscoverQuery::new(region, language).with_platforms(platforms);
        let mut items = self.discovery.discover(media_type, &query).await?;
        items.truncate(RESULT_BUDGET);

        attach_availability(self.discovery.as_ref(), &mut items, region, &[]).await;
        Ok(items)
    }

    /// Titles matching a name, with where to watch them
    pub async fn search_content(&self, query: &str, media_type: MediaType, region: &str) -> SearchResponse {
        let locale = self.locale.resolve(region, "");

        let found = async {
            let mut items = self
                .discovery
                .search_by_title(media_type, query, &locale.language)
                .await?;
            items.truncate(SHORT_LIST_BUDGET);
            attach_availability(self.discovery.as_ref(), &mut items, &locale.region, &[]).await;
            Ok::<_, AppError>(items)
        }
        .await;

        match found {
            Ok(results) => {
                let message = if results.is_empty() {
                    format!(
                        "No se encontraron resultados para '{}'. Intenta con un término de búsqueda diferente.",
                        query
                    )
                } else {
                    format!("Resultados de búsqueda para '{}':", query)
                };
                SearchResponse {
                    kind: ResponseKind::SearchResults,
                    message,
                    results,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, query = %query, "Search failed");
                SearchResponse {
                    kind: ResponseKind::Error,
                    message: format!("Error en la búsqueda: {}", e),
                    results: Vec::new(),
                }
            }
        }
    }

    /// Titles the provider relates to a given one
    pub async fn similar_content(&self, content_id: u64, media_type: MediaType, language: &str) -> SimilarResponse {
        let locale = self.locale.resolve("", language);

        match self
            .discovery
            .recommendations_for(media_type, content_id, &locale.language)
            .await
        {
            Ok(mut similar) => {
                similar.truncate(SHORT_LIST_BUDGET);
                let message = if similar.is_empty() {
                    "No se encontró contenido similar disponible."
                } else {
                    "Contenido similar encontrado:"
                };
                SimilarResponse {
                    kind: ResponseKind::SimilarContent,
                    message: message.to_string(),
                    similar,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, content_id = content_id, "Similar content lookup failed");
                SimilarResponse {
                    kind: ResponseKind::Error,
                    message: format!("Error obteniendo contenido similar: {}", e),
                    similar: Vec::new(),
                }
            }
        }
    }

    /// Everything known about one title plus a few related ones
    pub async fn content_details(
        &self,
        content_id: u64,
        media_type: MediaType,
        region: &str,
        language: &str,
    ) -> DetailsResponse {
        let locale = self.locale.resolve(region, language);

        match self.fetch_details(content_id, media_type, &locale).await {
            Ok((movie, similar)) => DetailsResponse {
                kind: ResponseKind::MovieDetails,
                message: format!("Detalles de {}:", movie.title),
                movie,
                similar,
            },
            Err(e) => {
                tracing::error!(error = %e, content_id = content_id, "Details lookup failed");
                DetailsResponse {
                    kind: ResponseKind::Error,
                    message: format!("Error obteniendo detalles: {}", e),
                    movie: ContentDetails::placeholder(content_id, media_type),
                    similar: Vec::new(),
                }
            }
        }
    }

    async fn fetch_details(
        &self,
        content_id: u64,
        media_type: MediaType,
        locale: &Locale,
    ) -> AppResult<(ContentDetails, Vec<ContentItem>)> {
        let (details, platforms) = tokio::join!(
            self.discovery.details(media_type, content_id, &locale.language),
            self.discovery.availability(media_type, content_id, &locale.region),
        );

        let mut details = details?;
        details.platforms = platforms.unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                content_id = content_id,
                region = %locale.region,
                "Availability lookup failed"
            );
            Vec::new()
        });

        let mut similar = self
            .discovery
            .recommendations_for(media_type, content_id, &locale.language)
            .await?;
        similar.truncate(DETAILS_SIMILAR_BUDGET);

        Ok((details, similar))
    }
}

fn plural_noun(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Movie => "películas",
        MediaType::Tv => "series",
    }
}
