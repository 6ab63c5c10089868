//! Result ordering.
//!
//! Every sort key produces a deterministic total order: text keys compare
//! case-insensitively with the title as a stable secondary key, relevance
//! sorts by descending score with the title breaking ties, and numeric keys
//! place books missing the derived field last regardless of direction.

use std::cmp::Ordering;

use crate::search::types::{ScoredBook, SortKey};

pub fn sort_results(items: &mut [ScoredBook], key: SortKey) {
    items.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &ScoredBook, b: &ScoredBook, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => b
            .score
            .cmp(&a.score)
            .then_with(|| title_order(a, b)),
        SortKey::Title => title_order(a, b),
        SortKey::Author => {
            cmp_ci(&a.book.author, &b.book.author).then_with(|| title_order(a, b))
        }
        SortKey::Category => {
            cmp_ci(&a.book.category, &b.book.category).then_with(|| title_order(a, b))
        }
        SortKey::SizeAsc => {
            size_order(a.book.size_mb, b.book.size_mb, false).then_with(|| title_order(a, b))
        }
        SortKey::SizeDesc => {
            size_order(a.book.size_mb, b.book.size_mb, true).then_with(|| title_order(a, b))
        }
        SortKey::PagesAsc => {
            pages_order(a.book.page_count, b.book.page_count, false)
                .then_with(|| title_order(a, b))
        }
        SortKey::PagesDesc => {
            pages_order(a.book.page_count, b.book.page_count, true)
                .then_with(|| title_order(a, b))
        }
    }
}

fn title_order(a: &ScoredBook, b: &ScoredBook) -> Ordering {
    cmp_ci(&a.book.title, &b.book.title)
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
}

/// `None` is always last, never zero and never "smallest under desc".
fn size_order(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn pages_order(a: Option<u32>, b: Option<u32>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
