use super::catalog::GenreSnapshot;
use super::fuzzy::is_fuzzy_match;
use super::synonyms::{self, SYNONYMS};

/// Tokens dropped when a phrase is split into words
const STOPWORDS: &[&str] = &["de", "del", "la", "los", "las"];
/// Words this short or shorter are ignored
const MIN_WORD_LEN: usize = 3;

/// Genre ids in the order they were first matched, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreIds(Vec<u32>);

impl GenreIds {
    pub fn insert(&mut self, id: u32) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn extend<I: IntoIterator<Item = u32>>(&mut self, ids: I) {
        for id in ids {
            self.insert(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl IntoIterator for GenreIds {
    type Item = u32;
    type IntoIter = std::vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Maps free-text genre phrases (Spanish or catalog language) to catalog ids.
///
/// Matching runs in layers, each adding to the same result:
/// 1. exact synonym-table key → every mapped English name
/// 2. catalog names against the whole phrase
/// 3. if still empty, fuzzy synonym-table keys
/// 4. if still empty, the same per word of the phrase
pub struct GenreResolver<'a> {
    catalog: &'a GenreSnapshot,
}

impl<'a> GenreResolver<'a> {
    pub fn new(catalog: &'a GenreSnapshot) -> Self {
        Self { catalog }
    }

    /// Resolves a phrase to genre ids; empty when nothing matches
    pub fn find_genre_ids(&self, phrase: &str) -> GenreIds {
        let query = phrase.trim().to_lowercase();
        let mut matched = GenreIds::default();

        if query.is_empty() || self.catalog.is_empty() {
            return matched;
        }

        self.resolve_synonym(&query, &mut matched);
        matched.extend(self.find_genres_by_name(&query));

        if matched.is_empty() {
            self.resolve_fuzzy_synonyms(&query, &mut matched);
        }

        if matched.is_empty() {
            for word in tokenize(&query) {
                self.resolve_synonym(word, &mut matched);
                if matched.is_empty() {
                    self.resolve_fuzzy_synonyms(word, &mut matched);
                }
                matched.extend(self.find_genres_by_name(word));
            }
        }

        tracing::debug!(
            query = %query,
            genre_ids = ?matched.as_slice(),
            "Genre phrase resolved"
        );

        matched
    }

    /// Ids of every catalog genre whose name matches `name` exactly, by
    /// containment either way, or fuzzily. Movie genres come first.
    pub fn find_genres_by_name(&self, name: &str) -> GenreIds {
        let search = name.trim().to_lowercase();
        let mut found = GenreIds::default();

        if search.is_empty() {
            return found;
        }

        for genre in self.catalog.iter() {
            let genre_name = genre.name.to_lowercase();
            if genre_name.is_empty() {
                continue;
            }

            if genre_name == search
                || genre_name.contains(&search)
                || search.contains(&genre_name)
                || is_fuzzy_match(&search, &genre_name)
            {
                found.insert(genre.id);
            }
        }

        found
    }

    fn resolve_synonym(&self, term: &str, matched: &mut GenreIds) {
        if let Some(targets) = synonyms::lookup(term) {
            self.resolve_targets(term, targets, matched);
        }
    }

    fn resolve_fuzzy_synonyms(&self, term: &str, matched: &mut GenreIds) {
        for (key, targets) in SYNONYMS {
            if is_fuzzy_match(term, key) {
                self.resolve_targets(key, targets, matched);
            }
        }
    }

    fn resolve_targets(&self, key: &str, targets: &[&str], matched: &mut GenreIds) {
        for target in targets {
            let found = self.find_genres_by_name(target);
            tracing::trace!(key = %key, target = %target, ids = ?found.as_slice(), "Synonym mapped");
            matched.extend(found);
        }
    }
}

/// Splits a phrase into candidate genre words
fn tokenize(query: &str) -> impl Iterator<Item = &str> {
    query
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !STOPWORDS.contains(word))
        .filter(|word| word.chars().count() > MIN_WORD_LEN)
}
