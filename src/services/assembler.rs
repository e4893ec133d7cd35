use rand::seq::SliceRandom;

use crate::{
    error::AppResult,
    models::{
        ContentItem, ContentScope, MediaType, RecommendationContext, RecommendationResponse,
        RecommendedItem, ResponseKind,
    },
    services::{
        discovery::{DiscoverQuery, DiscoveryService},
        filters::ContentPolicy,
        platforms::{attach_availability, named_platforms},
        reasons,
    },
};

/// Items returned for a single content type, and in total
pub const RESULT_BUDGET: usize = 8;
/// Items taken from each pool when movies and series are mixed
pub const MIXED_POOL_BUDGET: usize = RESULT_BUDGET / 2;

/// Fetches, screens, truncates and justifies contextual recommendations
pub struct RecommendationAssembler<'a> {
    discovery: &'a dyn DiscoveryService,
    policy: &'a dyn ContentPolicy,
}

impl<'a> RecommendationAssembler<'a> {
    pub fn new(discovery: &'a dyn DiscoveryService, policy: &'a dyn ContentPolicy) -> Self {
        Self { discovery, policy }
    }

    /// Builds the response for one request. Discovery failures become an
    /// error payload rather than an `Err`.
    pub async fn assemble(
        &self,
        scope: ContentScope,
        genre_ids: &[u32],
        context: &RecommendationContext,
    ) -> RecommendationResponse {
        let query = DiscoverQuery::new(&context.region, &context.language)
            .with_genres(genre_ids)
            .with_platforms(&context.platforms);

        let mut items = match self.collect(scope, &query, context).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    scope = %scope,
                    provider = self.discovery.name(),
                    "Contextual recommendation failed"
                );
                return RecommendationResponse::error(
                    format!("Error obteniendo recomendaciones contextuales: {}", e),
                    Some("No se pudo analizar el contexto debido a un error.".to_string()),
                );
            }
        };

        let fallback = named_platforms(&context.platforms);
        attach_availability(self.discovery, &mut items, &context.region, &fallback).await;

        let reason = reasons::contextual_reason(context);
        let recommendations: Vec<RecommendedItem> = items
            .into_iter()
            .map(|item| RecommendedItem {
                item,
                contextual_reason: Some(reason.to_string()),
            })
            .collect();

        let found_results = !recommendations.is_empty();
        tracing::info!(
            scope = %scope,
            results = recommendations.len(),
            "Contextual recommendations assembled"
        );

        RecommendationResponse {
            kind: ResponseKind::ContextualRecommendations,
            message: reasons::contextual_message(scope, found_results).to_string(),
            context_analysis: Some(reasons::context_analysis(context, found_results)),
            recommendations,
        }
    }

    async fn collect(
        &self,
        scope: ContentScope,
        query: &DiscoverQuery,
        context: &RecommendationContext,
    ) -> AppResult<Vec<ContentItem>> {
        match scope {
            ContentScope::Movie => {
                self.fetch_pool(MediaType::Movie, query, context, RESULT_BUDGET)
                    .await
            }
            ContentScope::Tv => {
                self.fetch_pool(MediaType::Tv, query, context, RESULT_BUDGET)
                    .await
            }
            ContentScope::Both => {
                let (movies, shows) = tokio::try_join!(
                    self.fetch_pool(MediaType::Movie, query, context, MIXED_POOL_BUDGET),
                    self.fetch_pool(MediaType::Tv, query, context, MIXED_POOL_BUDGET),
                )?;

                let mut items: Vec<ContentItem> = movies.into_iter().chain(shows).collect();
                items.shuffle(&mut rand::thread_rng());
                items.truncate(RESULT_BUDGET);
                Ok(items)
            }
        }
    }

    /// Discovers one media type and keeps the first `limit` appropriate titles
    async fn fetch_pool(
        &self,
        media_type: MediaType,
        query: &DiscoverQuery,
        context: &RecommendationContext,
        limit: usize,
    ) -> AppResult<Vec<ContentItem>> {
        let discovered = self.discovery.discover(media_type, query).await?;
        let discovered_count = discovered.len();

        let items: Vec<ContentItem> = discovered
            .into_iter()
            .filter(|item| {
                self.policy.is_appropriate(
                    &item.title,
                    &item.overview,
                    context.age_group,
                    context.mood,
                )
            })
            .take(limit)
            .collect();

        tracing::debug!(
            media_type = %media_type,
            discovered = discovered_count,
            kept = items.len(),
            "Pool screened"
        );

        Ok(items)
    }
}
