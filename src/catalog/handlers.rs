use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::store::CatalogStore;
use super::types::{BookDetailResponse, CategoriesResponse};
use crate::bookmarks::store::{BookmarkStore, ReadStatsStore};
use crate::bookmarks::types::ReadStat;

pub async fn handle_get_book(
    Path(key): Path<String>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(bookmarks): Extension<Arc<BookmarkStore>>,
    Extension(read_stats): Extension<Arc<ReadStatsStore>>,
) -> (StatusCode, Json<BookDetailResponse>) {
    match catalog.get(&key).await {
        Some(book) => {
            let bookmarked = bookmarks.contains_book(&book);
            let stats = read_stats.get(&book.id);
            (
                StatusCode::OK,
                Json(BookDetailResponse {
                    book: Some(book),
                    bookmarked,
                    read_stats: stats,
                }),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(BookDetailResponse {
                book: None,
                bookmarked: false,
                read_stats: ReadStat::default(),
            }),
        ),
    }
}

/// The category row: the two special selectors first, then every distinct
/// category present in the collection.
pub async fn handle_list_categories(
    Extension(catalog): Extension<Arc<CatalogStore>>,
) -> Json<CategoriesResponse> {
    let mut categories = vec!["all".to_string(), "bookmarked".to_string()];
    categories.extend(catalog.categories().await);
    Json(CategoriesResponse { categories })
}
