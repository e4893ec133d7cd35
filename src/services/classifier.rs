use crate::models::ContentScope;

const MOVIE_KEYWORDS: &[&str] = &[
    "pelicula", "película", "peliculas", "películas", "peli", "pelis",
    "film", "filme", "films", "filmes", "movie", "movies",
    "largometraje", "largometrajes", "cine",
];

const TV_KEYWORDS: &[&str] = &[
    "serie", "series", "programa", "programas", "show", "shows",
    "temporada", "temporadas", "episodio", "episodios",
    "capitulo", "capítulo", "capitulos", "capítulos",
    "miniserie", "miniseries", "docuserie", "docuseries", "tv show", "tv shows",
];

/// Decides which content types a free-text request is about
#[cfg_attr(test, mockall::automock)]
pub trait ContentTypeClassifier: Send + Sync {
    fn classify(&self, query: &str) -> ContentScope;
}

/// Counts movie and TV keywords by substring containment.
///
/// Each keyword counts once no matter how often it appears. Overlapping
/// keywords ("serie" inside "series") count separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ContentTypeClassifier for KeywordClassifier {
    fn classify(&self, query: &str) -> ContentScope {
        let query = query.to_lowercase();
        let movie_count = count_keywords(&query, MOVIE_KEYWORDS);
        let tv_count = count_keywords(&query, TV_KEYWORDS);

        let scope = if movie_count > tv_count {
            ContentScope::Movie
        } else if tv_count > movie_count {
            ContentScope::Tv
        } else {
            ContentScope::Both
        };

        tracing::debug!(
            movie_keywords = movie_count,
            tv_keywords = tv_count,
            scope = %scope,
            "Content type classified"
        );

        scope
    }
}

fn count_keywords(query: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|keyword| query.contains(*keyword)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tv_only_query_is_tv() {
        let classifier = KeywordClassifier;
        assert_eq!(
            classifier.classify("quiero ver una serie de comedia"),
            ContentScope::Tv
        );
        assert_eq!(
            classifier.classify("Una miniserie con pocos episodios"),
            ContentScope::Tv
        );
    }

    #[test]
    fn test_movie_only_query_is_movie() {
        let classifier = KeywordClassifier;
        assert_eq!(
            classifier.classify("una película de acción para hoy"),
            ContentScope::Movie
        );
        assert_eq!(classifier.classify("Recommend me a MOVIE"), ContentScope::Movie);
    }

    #[test]
    fn test_no_keywords_is_both() {
        assert_eq!(
            KeywordClassifier.classify("algo de terror para ver con mi pareja"),
            ContentScope::Both
        );
        assert_eq!(KeywordClassifier.classify(""), ContentScope::Both);
    }

    #[test]
    fn test_equal_counts_is_both() {
        // "peli" and "show" one each
        assert_eq!(KeywordClassifier.classify("peli o show"), ContentScope::Both);
    }

    #[test]
    fn test_overlapping_keywords_count_separately() {
        // "series" matches both "serie" and "series"; "peli" is one movie hit
        assert_eq!(
            KeywordClassifier.classify("peli o series"),
            ContentScope::Tv
        );
    }
}
