pub mod content;
pub mod context;
pub mod tmdb;

pub use content::{
    ContentDetails, ContentItem, ContentScope, DetailsResponse, Genre, MediaType, PlatformInfo,
    RecommendationResponse, RecommendedItem, ResponseKind, SearchResponse, SimilarResponse,
};
pub use context::{AgeGroup, ContextualQuery, Mood, RecommendationContext, ViewingContext};
