use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of content the discovery provider catalogs separately
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Path segment used by the provider's REST endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaType::Movie),
            "tv" | "series" | "show" => Ok(MediaType::Tv),
            other => Err(format!("Unknown media type '{}'", other)),
        }
    }
}

/// What a user query asks for: one media type or both
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentScope {
    Movie,
    Tv,
    Both,
}

impl ContentScope {
    /// Media types covered by this scope, movies first
    pub fn media_types(&self) -> &'static [MediaType] {
        match self {
            ContentScope::Movie => &[MediaType::Movie],
            ContentScope::Tv => &[MediaType::Tv],
            ContentScope::Both => &[MediaType::Movie, MediaType::Tv],
        }
    }

    pub fn includes(&self, media_type: MediaType) -> bool {
        self.media_types().contains(&media_type)
    }
}

impl Display for ContentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentScope::Movie => write!(f, "movie"),
            ContentScope::Tv => write!(f, "tv"),
            ContentScope::Both => write!(f, "both"),
        }
    }
}

/// Provider genre entry; ids are unique only within one media type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// A streaming platform offering a title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformInfo {
    pub id: u32,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Movie or TV show as returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub vote_average: f64,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(skip_serializing, default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub platforms: Vec<PlatformInfo>,
}

/// A content item plus the one-line justification for recommending it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedItem {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(
        rename = "contextualReason",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contextual_reason: Option<String>,
}

/// Full record of one title, as shown on its detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentDetails {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub vote_average: f64,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Minutes; for TV the first listed episode run time
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub platforms: Vec<PlatformInfo>,
}

impl ContentDetails {
    /// Stand-in record sent with a failed details lookup
    pub fn placeholder(id: u64, media_type: MediaType) -> Self {
        Self {
            id,
            title: "Error".to_string(),
            overview: "No se pudieron obtener los detalles".to_string(),
            poster_url: None,
            vote_average: 0.0,
            release_date: None,
            media_type,
            runtime: None,
            genres: Vec::new(),
            backdrop_url: None,
            platforms: Vec::new(),
        }
    }
}

impl From<ContentItem> for RecommendedItem {
    fn from(item: ContentItem) -> Self {
        Self {
            item,
            contextual_reason: None,
        }
    }
}

// ============================================================================
// Response payloads
// ============================================================================

/// Discriminator carried in the `type` field of every response payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    ContextualRecommendations,
    MovieRecommendations,
    SearchResults,
    SimilarContent,
    MovieDetails,
    Error,
}

/// Result of one contextual recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_analysis: Option<String>,
    pub recommendations: Vec<RecommendedItem>,
}

impl RecommendationResponse {
    pub fn error(message: String, context_analysis: Option<String>) -> Self {
        Self {
            kind: ResponseKind::Error,
            message,
            context_analysis,
            recommendations: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ResponseKind::Error
    }
}

/// Result of a title search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub message: String,
    pub results: Vec<ContentItem>,
}

/// Titles similar to a given one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub message: String,
    pub similar: Vec<ContentItem>,
}

/// One title in full plus a few related ones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub message: String,
    pub movie: ContentDetails,
    pub similar: Vec<ContentItem>,
}
