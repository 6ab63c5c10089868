//! The one-pass query executor.

use crate::catalog::types::Book;
use crate::search::filter;
use crate::search::sort;
use crate::search::types::{CatalogQuery, ScoredBook};

/// Run one query against the current book collection.
///
/// Pure and stateless: the collection and the bookmark-membership predicate
/// are injected per call, the query is a value object, and the same inputs
/// always produce the same ordered output. An empty collection yields an
/// empty result, never an error.
pub fn execute(
    books: &[Book],
    query: &CatalogQuery,
    is_bookmarked: &dyn Fn(&Book) -> bool,
) -> Vec<ScoredBook> {
    let mut results: Vec<ScoredBook> = books
        .iter()
        .filter_map(|book| {
            filter::evaluate(book, query, is_bookmarked).map(|score| ScoredBook {
                book: book.clone(),
                score,
            })
        })
        .collect();

    sort::sort_results(&mut results, query.sort_key);
    results
}
