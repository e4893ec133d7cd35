use serde::{Deserialize, Serialize};

/// Raw contextual recommendation request as sent by the agent tool layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextualQuery {
    /// Original user message, e.g. "algo de terror para ver con mi pareja"
    pub user_query: String,
    /// Provider ids of the streaming platforms to search
    pub platforms: Vec<u32>,
    /// Free text: "familia", "pareja", "noche", "solo", ...
    pub viewing_context: String,
    /// Free text: "preescolar", "niños", "adolescentes", "adultos", "familia"
    pub age_group: String,
    /// Preferred genre, if the user named one
    pub genre: String,
    /// Free text: "relajante", "divertido", "educativo", "emocionante", "emocional"
    pub mood: String,
    pub region: String,
    pub language: String,
}

/// Target audience of a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Preschool,
    Children,
    Teens,
    Family,
    Adults,
    Couple,
    #[default]
    Unspecified,
}

impl AgeGroup {
    /// Maps free text onto an age group; unknown text is `Unspecified`
    pub fn from_raw(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return AgeGroup::Unspecified;
        }

        if text.contains("preescolar") || text.contains("preschool") {
            AgeGroup::Preschool
        } else if text.contains("niños") || text.contains("ninos") || text.contains("kids") || text.contains("children") {
            AgeGroup::Children
        } else if text.contains("adolescente") || text.contains("teen") {
            AgeGroup::Teens
        } else if text.contains("familia") || text.contains("family") {
            AgeGroup::Family
        } else if text.contains("adulto") || text.contains("adult") {
            AgeGroup::Adults
        } else if text.contains("pareja") || text.contains("couple") {
            AgeGroup::Couple
        } else {
            AgeGroup::Unspecified
        }
    }

    /// Whether mature content must be screened out
    pub fn is_child_oriented(&self) -> bool {
        matches!(self, AgeGroup::Preschool | AgeGroup::Children)
    }
}

/// Desired emotional tone of a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Relaxing,
    Fun,
    Educational,
    Exciting,
    Emotional,
    Adventurous,
    #[default]
    Unspecified,
}

impl Mood {
    pub fn from_raw(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Mood::Unspecified;
        }

        if text.contains("relajante") || text.contains("relax") {
            Mood::Relaxing
        } else if text.contains("divertid") || text.contains("fun") {
            Mood::Fun
        } else if text.contains("educativ") || text.contains("educational") {
            Mood::Educational
        } else if text.contains("emocionante") || text.contains("exciting") {
            Mood::Exciting
        } else if text.contains("emocional") || text.contains("emotional") {
            Mood::Emotional
        } else if text.contains("aventura") || text.contains("adventur") {
            Mood::Adventurous
        } else {
            Mood::Unspecified
        }
    }
}

/// Situation the content will be watched in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewingContext {
    Couple,
    Friends,
    Family,
    Children,
    Night,
    Weekend,
    Solo,
    #[default]
    Unspecified,
}

impl ViewingContext {
    pub fn from_raw(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return ViewingContext::Unspecified;
        }

        if text.contains("pareja") || text.contains("couple") {
            ViewingContext::Couple
        } else if text.contains("amigos") || text.contains("friends") {
            ViewingContext::Friends
        } else if text.contains("familia") || text.contains("family") {
            ViewingContext::Family
        } else if text.contains("niños") || text.contains("ninos") || text.contains("kids") {
            ViewingContext::Children
        } else if text.contains("noche") || text.contains("night") {
            ViewingContext::Night
        } else if text.contains("fin de semana") || text.contains("fin_de_semana") || text.contains("weekend") {
            ViewingContext::Weekend
        } else if text.contains("solo") || text.contains("alone") {
            ViewingContext::Solo
        } else {
            ViewingContext::Unspecified
        }
    }
}

/// A contextual query after boundary normalization
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationContext {
    pub user_query: String,
    pub platforms: Vec<u32>,
    pub viewing_context: ViewingContext,
    pub age_group: AgeGroup,
    pub mood: Mood,
    /// Mood as the user phrased it, echoed in the context analysis
    pub mood_text: String,
    pub genre: String,
    pub region: String,
    pub language: String,
}

impl RecommendationContext {
    /// Normalizes a raw query; region and language must already be resolved
    pub fn from_query(query: &ContextualQuery, region: String, language: String) -> Self {
        Self {
            user_query: query.user_query.trim().to_string(),
            platforms: query.platforms.clone(),
            viewing_context: ViewingContext::from_raw(&query.viewing_context),
            age_group: AgeGroup::from_raw(&query.age_group),
            mood: Mood::from_raw(&query.mood),
            mood_text: query.mood.trim().to_string(),
            genre: query.genre.trim().to_string(),
            region,
            language,
        }
    }
}
