//! The keep/reject predicate applied to every book before ranking.
//!
//! Checks run in a fixed order and short-circuit on the first failure:
//! category (or bookmark membership), size bucket, pages bucket, and
//! finally the relevance score when search text is present. Rejection is
//! always a hard exclusion; there is no partial credit across checks.

use crate::catalog::types::Book;
use crate::search::scorer::{self, BASELINE_SCORE};
use crate::search::types::{CatalogQuery, CategorySelector};

/// Evaluate one book against the query. Returns the book's relevance score
/// when it should be kept, `None` when it is rejected.
pub fn evaluate(
    book: &Book,
    query: &CatalogQuery,
    is_bookmarked: &dyn Fn(&Book) -> bool,
) -> Option<u32> {
    match &query.category {
        CategorySelector::All => {}
        CategorySelector::Bookmarked => {
            if !is_bookmarked(book) {
                return None;
            }
        }
        CategorySelector::Name(name) => {
            if !book.category.eq_ignore_ascii_case(name) {
                return None;
            }
        }
    }

    if !query.size_filter.matches(book.size_mb) {
        return None;
    }
    if !query.pages_filter.matches(book.page_count) {
        return None;
    }

    let search = query.search_text.trim();
    if search.is_empty() {
        return Some(BASELINE_SCORE);
    }

    let score = scorer::book_score(book, search);
    if score == 0 {
        None
    } else {
        Some(score)
    }
}
