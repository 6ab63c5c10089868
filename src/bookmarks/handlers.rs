use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};

use super::store::{BookmarkStore, ReadStatsStore};
use super::types::{BookmarksResponse, ReadResponse, ToggleResponse};
use crate::catalog::store::CatalogStore;

pub async fn handle_toggle_bookmark(
    Path(key): Path<String>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(bookmarks): Extension<Arc<BookmarkStore>>,
) -> Json<ToggleResponse> {
    match catalog.get(&key).await {
        Some(book) => {
            let bookmarked = bookmarks.toggle_book(&book);
            Json(ToggleResponse {
                key: book.id,
                bookmarked,
            })
        }
        None => {
            let bookmarked = bookmarks.toggle_key(&key);
            Json(ToggleResponse { key, bookmarked })
        }
    }
}

/// Bookmarked books in catalog order.
pub async fn handle_list_bookmarks(
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(bookmarks): Extension<Arc<BookmarkStore>>,
) -> Json<BookmarksResponse> {
    let snapshot = catalog.snapshot().await;
    let books: Vec<_> = snapshot
        .iter()
        .filter(|book| bookmarks.contains_book(book))
        .cloned()
        .collect();

    Json(BookmarksResponse {
        count: books.len(),
        books,
    })
}

pub async fn handle_record_read(
    Path(key): Path<String>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(read_stats): Extension<Arc<ReadStatsStore>>,
) -> Json<ReadResponse> {
    let canonical = match catalog.get(&key).await {
        Some(book) => book.id,
        None => key,
    };
    let stats = read_stats.record(&canonical);
    Json(ReadResponse {
        key: canonical,
        read_stats: stats,
    })
}
