//! User-facing texts attached to contextual recommendations

use crate::models::{AgeGroup, ContentScope, Mood, RecommendationContext, ViewingContext};

const NO_RESULTS_HINT: &str = "Lamentablemente, no se encontraron resultados disponibles que cumplan con estos criterios específicos. Intenta con criterios más amplios o diferentes plataformas.";

/// One-line justification for a recommended title.
///
/// Rules are checked in order and the first match wins.
pub fn contextual_reason(context: &RecommendationContext) -> &'static str {
    let viewing = context.viewing_context;
    let age = context.age_group;
    let mood = context.mood;

    if viewing == ViewingContext::Couple && mood == Mood::Exciting {
        "Perfecto para una noche de terror en pareja: suspenso y emociones fuertes garantizadas"
    } else if viewing == ViewingContext::Couple {
        "Ideal para ver en pareja: entretenimiento perfecto para dos"
    } else if viewing == ViewingContext::Friends {
        "Excelente para ver con amigos: diversión grupal asegurada"
    } else if age == AgeGroup::Children {
        "Perfecto para ver con niños: contenido familiar y apropiado para su edad"
    } else if age == AgeGroup::Family {
        "Ideal para disfrutar en familia: entretenimiento para todas las edades"
    } else if mood == Mood::Relaxing {
        "Perfecto para relajarse: historia tranquila y atmosfera calmante"
    } else if mood == Mood::Educational {
        "Contenido educativo: aprenderás algo nuevo mientras te entretienes"
    } else if mood == Mood::Exciting {
        "Lleno de emociones: te mantendrá al borde del asiento"
    } else if mood == Mood::Adventurous {
        "Lleno de aventuras: acción y emoción de principio a fin"
    } else if viewing == ViewingContext::Night {
        "Ideal para ver por la noche: ambiente perfecto para el horario"
    } else if viewing == ViewingContext::Solo {
        "Perfecto para ver solo: experiencia cinematográfica personal"
    } else {
        "Altamente recomendado: excelente calificación y gran popularidad"
    }
}

/// Summary of how the request was understood
pub fn context_analysis(context: &RecommendationContext, found_results: bool) -> String {
    let mut analysis = format!("Basado en tu consulta: '{}', ", context.user_query);

    if context.age_group.is_child_oriented() {
        analysis.push_str("he identificado que buscas contenido apropiado para niños. ");
    } else if context.viewing_context == ViewingContext::Family {
        analysis.push_str("he identificado que buscas contenido familiar. ");
    } else if !context.mood_text.is_empty() {
        analysis.push_str(&format!("he notado que buscas algo {}. ", context.mood_text));
    }

    analysis.push_str("He seleccionado contenido que se adapta perfectamente a estas necesidades.");

    if !found_results {
        analysis.push(' ');
        analysis.push_str(NO_RESULTS_HINT);
    }

    analysis
}

/// Headline message of a contextual response
pub fn contextual_message(scope: ContentScope, found_results: bool) -> &'static str {
    if found_results {
        return "Recomendaciones personalizadas basadas en tu situación:";
    }

    match scope {
        ContentScope::Movie => "No se encontraron películas que coincidan con tus criterios.",
        ContentScope::Tv => "No se encontraron series que coincidan con tus criterios.",
        ContentScope::Both => "No se encontraron recomendaciones que coincidan con tus criterios.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContextualQuery;

    fn context(viewing: &str, age: &str, mood: &str) -> RecommendationContext {
        let query = ContextualQuery {
            user_query: "algo para esta noche".to_string(),
            viewing_context: viewing.to_string(),
            age_group: age.to_string(),
            mood: mood.to_string(),
            ..Default::default()
        };
        RecommendationContext::from_query(&query, "ES".to_string(), "es-ES".to_string())
    }

    #[test]
    fn test_couple_and_exciting_wins_first() {
        let reason = contextual_reason(&context("pareja", "adultos", "emocionante"));
        assert!(reason.starts_with("Perfecto para una noche de terror en pareja"));
    }

    #[test]
    fn test_viewing_context_beats_age_and_mood() {
        assert!(contextual_reason(&context("pareja", "niños", "relajante")).starts_with("Ideal para ver en pareja"));
        assert!(contextual_reason(&context("amigos", "niños", "")).starts_with("Excelente para ver con amigos"));
    }

    #[test]
    fn test_age_then_mood_then_time_of_day() {
        assert!(contextual_reason(&context("noche", "niños", "")).starts_with("Perfecto para ver con niños"));
        assert!(contextual_reason(&context("", "familia", "educativo")).starts_with("Ideal para disfrutar en familia"));
        assert!(contextual_reason(&context("noche", "", "aventura")).starts_with("Lleno de aventuras"));
        assert!(contextual_reason(&context("noche", "", "")).starts_with("Ideal para ver por la noche"));
        assert!(contextual_reason(&context("solo", "", "")).starts_with("Perfecto para ver solo"));
    }

    #[test]
    fn test_default_reason() {
        assert_eq!(
            contextual_reason(&context("", "", "")),
            "Altamente recomendado: excelente calificación y gran popularidad"
        );
    }

    #[test]
    fn test_context_analysis_for_children() {
        let analysis = context_analysis(&context("familia", "preescolar", "divertido"), true);
        assert_eq!(
            analysis,
            "Basado en tu consulta: 'algo para esta noche', he identificado que buscas contenido apropiado para niños. He seleccionado contenido que se adapta perfectamente a estas necesidades."
        );
    }

    #[test]
    fn test_context_analysis_echoes_mood_text() {
        let analysis = context_analysis(&context("", "", "Relajante"), true);
        assert!(analysis.contains("he notado que buscas algo Relajante. "));
    }

    #[test]
    fn test_context_analysis_appends_hint_without_results() {
        let analysis = context_analysis(&context("", "", ""), false);
        assert!(analysis.starts_with("Basado en tu consulta: 'algo para esta noche', He seleccionado"));
        assert!(analysis.ends_with("diferentes plataformas."));
    }

    #[test]
    fn test_no_results_message_names_scope() {
        assert!(contextual_message(ContentScope::Tv, false).contains("series"));
        assert!(contextual_message(ContentScope::Movie, false).contains("películas"));
        assert!(contextual_message(ContentScope::Both, false).contains("recomendaciones"));
        assert_eq!(
            contextual_message(ContentScope::Both, true),
            "Recomendaciones personalizadas basadas en tu situación:"
        );
    }
}
