/// Genre taxonomy: the provider's canonical lists and free-text resolution onto them
pub mod catalog;
pub mod fuzzy;
pub mod resolver;
pub mod synonyms;

pub use catalog::{Clock, GenreCatalog, GenreSnapshot, SystemClock, REFERENCE_LANGUAGE};
pub use resolver::{GenreIds, GenreResolver};
