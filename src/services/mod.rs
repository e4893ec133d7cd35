pub mod assembler;
pub mod classifier;
pub mod discovery;
pub mod filters;
pub mod genres;
pub mod locale;
pub mod platforms;
pub mod reasons;
pub mod recommendations;

pub use assembler::RecommendationAssembler;
pub use classifier::{ContentTypeClassifier, KeywordClassifier};
pub use discovery::{DiscoverQuery, DiscoveryService, TmdbProvider};
pub use filters::{ContentPolicy, ContextualFilterBuilder, LexicalContentPolicy};
pub use genres::{GenreCatalog, GenreResolver, GenreSnapshot};
pub use locale::LocaleDefaults;
pub use recommendations::Recommender;
