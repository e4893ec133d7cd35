/// TMDB (The Movie Database) v3 provider
///
/// API Flow:
/// 1. Discovery: /discover/{movie|tv} → popularity-sorted titles filtered by genre and platform
/// 2. Search: /search/{movie|tv} → titles by name
/// 3. Similar: /{movie|tv}/{id}/recommendations
/// 4. Details: /{movie|tv}/{id} → runtime and genre names
/// 5. Genres: /genre/{movie|tv}/list → canonical genre names in the requested language
/// 6. Availability: /{movie|tv}/{id}/watch/providers → platforms per region
use crate::{
    error::{AppError, AppResult},
    models::{
        tmdb::{
            ApiGenreList, ApiMovie, ApiMovieDetails, ApiPage, ApiTvDetails, ApiTvShow,
            ApiWatchProviders, ImageUrls,
        },
        ContentDetails, ContentItem, Genre, MediaType, PlatformInfo,
    },
    services::discovery::{DiscoverQuery, DiscoveryService},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

const SORT_BY_POPULARITY: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    images: ImageUrls,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, image_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            images: ImageUrls::new(image_url),
        }
    }

    /// Query parameters for a discovery request, api key excluded
    fn discover_params(query: &DiscoverQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sort_by", SORT_BY_POPULARITY.to_string()),
            ("page", query.page.max(1).to_string()),
            ("language", query.language.clone()),
            ("watch_region", query.region.clone()),
        ];

        if !query.genre_ids.is_empty() {
            params.push(("with_genres", join_ids(&query.genre_ids, ",")));
        }
        if !query.platform_ids.is_empty() {
            params.push(("with_watch_providers", join_ids(&query.platform_ids, "|")));
        }

        params
    }

    /// GET a TMDB endpoint and deserialize the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                path = %path,
                status = %status,
                body = %body,
                "TMDB request failed"
            );
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }

    /// Fetches a page of titles and converts it to content items
    async fn fetch_titles(
        &self,
        media_type: MediaType,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<Vec<ContentItem>> {
        let items: Vec<ContentItem> = match media_type {
            MediaType::Movie => {
                let page: ApiPage<ApiMovie> = self.get_json(path, params).await?;
                page.results
                    .into_iter()
                    .map(|movie| movie.into_content(&self.images))
                    .collect()
            }
            MediaType::Tv => {
                let page: ApiPage<ApiTvShow> = self.get_json(path, params).await?;
                page.results
                    .into_iter()
                    .map(|show| show.into_content(&self.images))
                    .collect()
            }
        };
        Ok(items)
    }
}

fn join_ids(ids: &[u32], separator: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[async_trait::async_trait]
impl DiscoveryService for TmdbProvider {
    async fn discover(
        &self,
        media_type: MediaType,
        query: &DiscoverQuery,
    ) -> AppResult<Vec<ContentItem>> {
        let path = format!("/discover/{}", media_type);
        let params = Self::discover_params(query);
        let items = self.fetch_titles(media_type, &path, &params).await?;

        tracing::info!(
            media_type = %media_type,
            genres = ?query.genre_ids,
            platforms = ?query.platform_ids,
            region = %query.region,
            results = items.len(),
            provider = "tmdb",
            "Discovery completed"
        );

        Ok(items)
    }

    async fn search_by_title(
        &self,
        media_type: MediaType,
        query: &str,
        language: &str,
    ) -> AppResult<Vec<ContentItem>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let path = format!("/search/{}", media_type);
        let params = vec![
            ("query", query.to_string()),
            ("language", language.to_string()),
            ("page", "1".to_string()),
        ];
        let items = self.fetch_titles(media_type, &path, &params).await?;

        tracing::info!(
            query = %query,
            media_type = %media_type,
            results = items.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(items)
    }

    async fn recommendations_for(
        &self,
        media_type: MediaType,
        content_id: u64,
        language: &str,
    ) -> AppResult<Vec<ContentItem>> {
        let path = format!("/{}/{}/recommendations", media_type, content_id);
        let params = vec![
            ("language", language.to_string()),
            ("page", "1".to_string()),
        ];
        self.fetch_titles(media_type, &path, &params).await
    }

    async fn details(
        &self,
        media_type: MediaType,
        content_id: u64,
        language: &str,
    ) -> AppResult<ContentDetails> {
        let path = format!("/{}/{}", media_type, content_id);
        let params = [("language", language.to_string())];

        let details = match media_type {
            MediaType::Movie => {
                let movie: ApiMovieDetails = self.get_json(&path, &params).await?;
                movie.into_details(&self.images)
            }
            MediaType::Tv => {
                let show: ApiTvDetails = self.get_json(&path, &params).await?;
                show.into_details(&self.images)
            }
        };

        tracing::debug!(
            content_id = content_id,
            media_type = %media_type,
            title = %details.title,
            "Details fetched"
        );

        Ok(details)
    }

    async fn genres(&self, media_type: MediaType, language: &str) -> AppResult<Vec<Genre>> {
        let path = format!("/genre/{}/list", media_type);
        let list: ApiGenreList = self
            .get_json(&path, &[("language", language.to_string())])
            .await?;

        tracing::debug!(
            media_type = %media_type,
            language = %language,
            genres = list.genres.len(),
            "Genre list fetched"
        );

        Ok(list.genres)
    }

    async fn availability(
        &self,
        media_type: MediaType,
        content_id: u64,
        region: &str,
    ) -> AppResult<Vec<PlatformInfo>> {
        let path = format!("/{}/{}/watch/providers", media_type, content_id);
        let providers: ApiWatchProviders = self.get_json(&path, &[]).await?;

        let platforms = providers
            .results
            .get(region)
            .map(|region_data| region_data.preferred_platforms(&self.images))
            .unwrap_or_default();

        tracing::debug!(
            content_id = content_id,
            media_type = %media_type,
            region = %region,
            platforms = platforms.len(),
            "Availability fetched"
        );

        Ok(platforms)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_discover_params_joins_genres_with_comma_and_platforms_with_pipe() {
        let query = DiscoverQuery::new("ES", "es-ES")
            .with_genres(&[27, 53])
            .with_platforms(&[8, 337]);

        let params = TmdbProvider::discover_params(&query);
        assert_eq!(param(&params, "with_genres"), Some("27,53"));
        assert_eq!(param(&params, "with_watch_providers"), Some("8|337"));
        assert_eq!(param(&params, "watch_region"), Some("ES"));
        assert_eq!(param(&params, "language"), Some("es-ES"));
        assert_eq!(param(&params, "sort_by"), Some("popularity.desc"));
        assert_eq!(param(&params, "page"), Some("1"));
    }

    #[test]
    fn test_discover_params_omits_empty_filters() {
        let query = DiscoverQuery::new("US", "en-US");
        let params = TmdbProvider::discover_params(&query);
        assert_eq!(param(&params, "with_genres"), None);
        assert_eq!(param(&params, "with_watch_providers"), None);
    }

    #[test]
    fn test_discover_params_clamps_page_zero() {
        let mut query = DiscoverQuery::new("US", "en-US");
        query.page = 0;
        let params = TmdbProvider::discover_params(&query);
        assert_eq!(param(&params, "page"), Some("1"));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let provider = TmdbProvider::new(
            "key".to_string(),
            "https://api.themoviedb.org/3/".to_string(),
            "https://image.tmdb.org/t/p".to_string(),
        );
        assert_eq!(provider.api_url, "https://api.themoviedb.org/3");
        assert_eq!(provider.name(), "tmdb");
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let provider = TmdbProvider::new(
            "key".to_string(),
            "http://test.local".to_string(),
            "http://img.local".to_string(),
        );
        let result = provider.search_by_title(MediaType::Movie, "   ", "en-US").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_genre_list_deserialization() {
        let json = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]}"#;
        let list: ApiGenreList = serde_json::from_str(json).unwrap();
        assert_eq!(list.genres.len(), 2);
        assert_eq!(list.genres[1].name, "Comedy");
    }

    #[test]
    fn test_watch_providers_region_lookup() {
        let json = r#"{
            "id": 550,
            "results": {
                "ES": {"flatrate": [{"provider_id": 8, "provider_name": "Netflix", "logo_path": "/n.png", "display_priority": 0}]},
                "US": {"rent": [{"provider_id": 2, "provider_name": "Apple TV", "logo_path": null, "display_priority": 4}]}
            }
        }"#;
        let providers: ApiWatchProviders = serde_json::from_str(json).unwrap();
        let images = ImageUrls::new("https://img");
        let es = providers.results.get("ES").unwrap().preferred_platforms(&images);
        assert_eq!(es[0].name, "Netflix");
        assert!(providers.results.get("AR").is_none());
    }
}
