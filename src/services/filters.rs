use crate::models::{AgeGroup, Mood};
use crate::services::genres::{GenreIds, GenreResolver, GenreSnapshot};

/// Combines the signals of a request into one ordered genre filter.
///
/// Tiers, each consulted only while everything above produced nothing:
/// explicit genre, genre words in the query, age-group default, mood default.
pub struct ContextualFilterBuilder<'a> {
    resolver: GenreResolver<'a>,
}

impl<'a> ContextualFilterBuilder<'a> {
    pub fn new(catalog: &'a GenreSnapshot) -> Self {
        Self {
            resolver: GenreResolver::new(catalog),
        }
    }

    /// Genre ids to filter discovery by; empty means no genre filter
    pub fn build_genre_filter(
        &self,
        user_query: &str,
        age_group: AgeGroup,
        mood: Mood,
        explicit_genre: &str,
    ) -> Vec<u32> {
        let mut genres = GenreIds::default();
        let mut tier = "none";

        if !explicit_genre.trim().is_empty() {
            genres.extend(self.resolver.find_genre_ids(explicit_genre));
            tier = "explicit_genre";
        }

        if genres.is_empty() {
            genres.extend(self.resolver.find_genre_ids(user_query));
            tier = "user_query";
        }

        if genres.is_empty() {
            if let Some(phrase) = age_group_default(age_group) {
                genres.extend(self.resolver.find_genre_ids(phrase));
                tier = "age_group";
            }
        }

        if genres.is_empty() {
            if let Some(phrase) = mood_default(mood) {
                genres.extend(self.resolver.find_genre_ids(phrase));
                tier = "mood";
            }
        }

        if genres.is_empty() {
            tier = "none";
        }

        tracing::info!(
            genre_ids = ?genres.as_slice(),
            tier = tier,
            user_query = %user_query,
            explicit_genre = %explicit_genre,
            age_group = ?age_group,
            mood = ?mood,
            "Genre filter built"
        );

        genres.into_vec()
    }
}

fn age_group_default(age_group: AgeGroup) -> Option<&'static str> {
    match age_group {
        AgeGroup::Preschool | AgeGroup::Children => Some("animación familia"),
        AgeGroup::Teens => Some("comedia acción aventura"),
        AgeGroup::Family => Some("familia comedia aventura"),
        AgeGroup::Adults | AgeGroup::Couple => Some("drama acción comedia romance"),
        AgeGroup::Unspecified => None,
    }
}

fn mood_default(mood: Mood) -> Option<&'static str> {
    match mood {
        Mood::Relaxing => Some("comedia romance drama"),
        Mood::Fun => Some("comedia aventura"),
        Mood::Educational => Some("documental historia"),
        Mood::Exciting => Some("acción thriller aventura"),
        Mood::Emotional => Some("drama romance"),
        Mood::Adventurous | Mood::Unspecified => None,
    }
}

/// Decides whether a title suits the requested audience and mood
#[cfg_attr(test, mockall::automock)]
pub trait ContentPolicy: Send + Sync {
    fn is_appropriate(&self, title: &str, overview: &str, age_group: AgeGroup, mood: Mood) -> bool;
}

const MATURE_KEYWORDS: &[&str] = &[
    "horror", "terror", "violence", "violent", "murder", "kill", "death", "blood",
    "war", "gun", "weapon", "drug", "alcohol", "sex", "adult", "mature",
    "violencia", "muerte", "sangre", "guerra", "arma", "droga", "adulto",
];

const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "learn", "education", "science", "history", "nature", "documentary",
    "aprende", "educación", "ciencia", "historia", "naturaleza", "documental",
];

/// Keyword screen over title and overview.
///
/// Child audiences reject any mature keyword; the educational mood requires at
/// least one educational keyword. Matching is by substring, so "war" also hits
/// "award" and "Star Wars". Ratings are not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalContentPolicy;

impl ContentPolicy for LexicalContentPolicy {
    fn is_appropriate(&self, title: &str, overview: &str, age_group: AgeGroup, mood: Mood) -> bool {
        let content = format!("{} {}", title, overview).to_lowercase();

        if age_group.is_child_oriented()
            && MATURE_KEYWORDS.iter().any(|keyword| content.contains(keyword))
        {
            return false;
        }

        if mood == Mood::Educational {
            return EDUCATIONAL_KEYWORDS
                .iter()
                .any(|keyword| content.contains(keyword));
        }

        true
    }
}
