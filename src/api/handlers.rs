use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{
    ContentScope, ContextualQuery, DetailsResponse, Genre, MediaType, RecommendationResponse,
    SearchResponse, SimilarResponse,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PlatformRecommendationRequest {
    pub platforms: Vec<u32>,
    #[serde(rename = "type", default = "default_media_type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub language: String,
}

fn default_media_type() -> MediaType {
    MediaType::Movie
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageParams {
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    pub region: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub movie: Vec<Genre>,
    pub tv: Vec<Genre>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

fn parse_media_type(raw: Option<&str>) -> AppResult<MediaType> {
    match raw {
        None => Ok(MediaType::Movie),
        Some(raw) => raw.parse().map_err(AppError::InvalidInput),
    }
}

// Handlers

pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Always 200; failures are carried in the payload's `type`
pub async fn contextual_recommendations(
    State(state): State<AppState>,
    Json(query): Json<ContextualQuery>,
) -> Json<RecommendationResponse> {
    tracing::info!(
        user_query = %query.user_query,
        platforms = ?query.platforms,
        "Contextual recommendation requested"
    );
    Json(state.recommender.contextual_recommendations(&query).await)
}

pub async fn platform_recommendations(
    State(state): State<AppState>,
    Json(request): Json<PlatformRecommendationRequest>,
) -> Json<RecommendationResponse> {
    let response = state
        .recommender
        .platform_recommendations(
            &request.platforms,
            request.media_type,
            &request.region,
            &request.language,
        )
        .await;
    Json(response)
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    if params.query.trim().is_empty() {
        return Err(AppError::InvalidInput("query must not be empty".to_string()));
    }
    let media_type = parse_media_type(params.media_type.as_deref())?;
    let region = params.region.unwrap_or_default();

    let response = state
        .recommender
        .search_content(params.query.trim(), media_type, &region)
        .await;
    Ok(Json(response))
}

pub async fn similar(
    State(state): State<AppState>,
    Path((media_type, content_id)): Path<(String, u64)>,
    Query(params): Query<LanguageParams>,
) -> AppResult<Json<SimilarResponse>> {
    let media_type = parse_media_type(Some(media_type.as_str()))?;
    let language = params.language.unwrap_or_default();

    let response = state
        .recommender
        .similar_content(content_id, media_type, &language)
        .await;
    Ok(Json(response))
}

pub async fn title_details(
    State(state): State<AppState>,
    Path((media_type, content_id)): Path<(String, u64)>,
    Query(params): Query<DetailsParams>,
) -> AppResult<Json<DetailsResponse>> {
    let media_type = parse_media_type(Some(media_type.as_str()))?;
    let region = params.region.unwrap_or_default();
    let language = params.language.unwrap_or_default();

    let response = state
        .recommender
        .content_details(content_id, media_type, &region, &language)
        .await;
    Ok(Json(response))
}

/// Loads both genre lists if needed and returns them
pub async fn genres(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> Json<GenresResponse> {
    let language = params
        .language
        .filter(|language| !language.trim().is_empty())
        .unwrap_or_else(|| state.recommender.locale().language.clone());

    let catalog = state.catalog();
    catalog.ensure_loaded(&language, ContentScope::Both).await;

    Json(GenresResponse {
        movie: catalog.all_genres(MediaType::Movie).await,
        tv: catalog.all_genres(MediaType::Tv).await,
        last_refreshed_at: catalog.last_refreshed_at().await,
    })
}

pub async fn invalidate_genres(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    state.catalog().invalidate().await;
    (StatusCode::OK, Json(json!({ "status": "invalidated" })))
}
