use serde::Deserialize;
use std::collections::HashMap;

use super::{ContentDetails, ContentItem, Genre, MediaType, PlatformInfo};

const POSTER_SIZE: &str = "w500";
const BACKDROP_SIZE: &str = "w780";
const LOGO_SIZE: &str = "w92";

/// Builds absolute image URLs from the relative paths TMDB returns
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn build(&self, size: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/{}{}", self.base, size, p))
    }

    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.build(POSTER_SIZE, path)
    }

    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.build(BACKDROP_SIZE, path)
    }

    pub fn logo(&self, path: Option<&str>) -> Option<String> {
        self.build(LOGO_SIZE, path)
    }
}

/// One page of a list endpoint (`/discover`, `/search`, `/recommendations`)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl ApiMovie {
    pub fn into_content(self, images: &ImageUrls) -> ContentItem {
        ContentItem {
            id: self.id,
            poster_url: images.poster(self.poster_path.as_deref()),
            backdrop_url: images.backdrop(self.backdrop_path.as_deref()),
            title: self.title,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            media_type: MediaType::Movie,
            genre_ids: self.genre_ids,
            platforms: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTvShow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl ApiTvShow {
    pub fn into_content(self, images: &ImageUrls) -> ContentItem {
        ContentItem {
            id: self.id,
            poster_url: images.poster(self.poster_path.as_deref()),
            backdrop_url: images.backdrop(self.backdrop_path.as_deref()),
            title: self.name,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average,
            release_date: self.first_air_date.filter(|d| !d.is_empty()),
            media_type: MediaType::Tv,
            genre_ids: self.genre_ids,
            platforms: Vec::new(),
        }
    }
}

/// Response of `/movie/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl ApiMovieDetails {
    pub fn into_details(self, images: &ImageUrls) -> ContentDetails {
        ContentDetails {
            id: self.id,
            poster_url: images.poster(self.poster_path.as_deref()),
            backdrop_url: images.backdrop(self.backdrop_path.as_deref()),
            title: self.title,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            media_type: MediaType::Movie,
            runtime: self.runtime,
            genres: genre_names(self.genres),
            platforms: Vec::new(),
        }
    }
}

/// Response of `/tv/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTvDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl ApiTvDetails {
    pub fn into_details(self, images: &ImageUrls) -> ContentDetails {
        ContentDetails {
            id: self.id,
            poster_url: images.poster(self.poster_path.as_deref()),
            backdrop_url: images.backdrop(self.backdrop_path.as_deref()),
            title: self.name,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average,
            release_date: self.first_air_date.filter(|d| !d.is_empty()),
            media_type: MediaType::Tv,
            runtime: self.episode_run_time.first().copied(),
            genres: genre_names(self.genres),
            platforms: Vec::new(),
        }
    }
}

fn genre_names(genres: Vec<Genre>) -> Vec<String> {
    genres.into_iter().map(|genre| genre.name).collect()
}

/// Response of `/genre/{movie|tv}/list`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Response of `/{movie|tv}/{id}/watch/providers`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWatchProviders {
    #[serde(default)]
    pub results: HashMap<String, ApiWatchProviderRegion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiWatchProviderRegion {
    #[serde(default)]
    pub flatrate: Option<Vec<ApiWatchProvider>>,
    #[serde(default)]
    pub rent: Option<Vec<ApiWatchProvider>>,
}

impl ApiWatchProviderRegion {
    /// Subscription providers, or rental providers when there are none,
    /// de-duplicated by provider id
    pub fn preferred_platforms(&self, images: &ImageUrls) -> Vec<PlatformInfo> {
        let flatrate = self.flatrate.as_deref().unwrap_or_default();
        let source = if flatrate.is_empty() {
            self.rent.as_deref().unwrap_or_default()
        } else {
            flatrate
        };

        let mut platforms: Vec<PlatformInfo> = Vec::with_capacity(source.len());
        for provider in source {
            if platforms.iter().any(|p| p.id == provider.provider_id) {
                continue;
            }
            platforms.push(PlatformInfo {
                id: provider.provider_id,
                name: provider.provider_name.clone(),
                logo_url: images.logo(provider.logo_path.as_deref()),
            });
        }
        platforms
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiWatchProvider {
    pub provider_id: u32,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}
