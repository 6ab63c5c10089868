//! Tiered relevance scoring.
//!
//! Maps `(field text, query)` to a non-negative score where higher is a
//! better match and `0` means "does not match". Tiers, best first: exact
//! equality, prefix, substring elsewhere, then bounded fuzzy matching by
//! word-level edit distance. The composite per-book score is a weighted sum
//! across fields with the title dominating, so a title hit always outranks
//! an incidental description hit.

use crate::catalog::types::Book;
use crate::search::matchers::levenshtein;

/// Score given to every surviving book when no search text is active.
/// Keeps unfiltered items visible without distorting the sort.
pub const BASELINE_SCORE: u32 = 1;

const SCORE_EXACT: u32 = 100;
const SCORE_PREFIX: u32 = 80;
const SCORE_CONTAINS: u32 = 60;

/// Fuzzy tier, indexed by edit distance. Strictly decreasing; anything
/// beyond `MAX_FUZZY_DISTANCE` scores 0 so unrelated strings never match.
const FUZZY_STEP_SCORES: [u32; 3] = [40, 25, 10];
const MAX_FUZZY_DISTANCE: usize = 2;

const WEIGHT_TITLE: u32 = 6;
const WEIGHT_AUTHOR: u32 = 4;
const WEIGHT_CATEGORY: u32 = 4;
const WEIGHT_TAGS: u32 = 2;
const WEIGHT_DESCRIPTION: u32 = 1;

/// Score a single field against the query.
pub fn field_score(text: &str, query: &str) -> u32 {
    if query.is_empty() {
        return BASELINE_SCORE;
    }

    let text = text.to_ascii_lowercase();
    let query = query.to_ascii_lowercase();

    if text == query {
        return SCORE_EXACT;
    }
    if text.starts_with(&query) {
        return SCORE_PREFIX;
    }
    if text.contains(&query) {
        return SCORE_CONTAINS;
    }

    fuzzy_score(&text, &query)
}

/// Weighted composite score for a book. Only meaningful for a non-empty
/// query; the filter short-circuits to `BASELINE_SCORE` otherwise.
pub fn book_score(book: &Book, query: &str) -> u32 {
    let tags_text = book.tags.join(" ");

    WEIGHT_TITLE * field_score(&book.title, query)
        + WEIGHT_AUTHOR * field_score(&book.author, query)
        + WEIGHT_CATEGORY * field_score(&book.category, query)
        + WEIGHT_TAGS * field_score(&tags_text, query)
        + WEIGHT_DESCRIPTION * field_score(&book.description, query)
}

/// Fuzzy tier: best (minimum) edit distance of any whitespace-delimited
/// field word against the full query, mapped through the step table.
///
/// The acceptance bound is the hard cap clamped by half the query length
/// (minimum 3), so a two-character query is not fuzzy-matched against
/// arbitrary two-character words. Inputs arrive already lowercased.
fn fuzzy_score(text: &str, query: &str) -> u32 {
    let query_len = query.chars().count().max(3);
    let max_allowed = MAX_FUZZY_DISTANCE.min(query_len / 2);

    let mut best: Option<usize> = None;
    for word in text.split_whitespace() {
        let distance = levenshtein(word, query);
        best = Some(best.map_or(distance, |b| b.min(distance)));
    }

    match best {
        Some(distance) if distance <= max_allowed => FUZZY_STEP_SCORES[distance],
        _ => 0,
    }
}
