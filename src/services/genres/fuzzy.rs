use strsim::levenshtein;

use super::synonyms;

/// Strings this short or shorter never match by edit distance
const MIN_EDIT_DISTANCE_LEN: usize = 4;
const MAX_EDIT_DISTANCE: usize = 2;

/// Tolerant comparison of two genre terms.
///
/// Terms match when they are equal, one contains the other, they are listed as
/// spelling variants, or (both longer than four characters) their Levenshtein
/// distance is at most `min(2, longest / 4)`.
pub fn is_fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if query.is_empty() || target.is_empty() {
        return false;
    }

    if query == target || query.contains(&target) || target.contains(&query) {
        return true;
    }

    if synonyms::are_variants(&query, &target) {
        return true;
    }

    let query_len = query.chars().count();
    let target_len = target.chars().count();
    if query_len > MIN_EDIT_DISTANCE_LEN && target_len > MIN_EDIT_DISTANCE_LEN {
        let max_distance = MAX_EDIT_DISTANCE.min(query_len.max(target_len) / 4);
        return levenshtein(&query, &target) <= max_distance;
    }

    false
}
