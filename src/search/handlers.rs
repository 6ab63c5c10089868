use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::bookmarks::store::BookmarkStore;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::Book;
use crate::search::engine;
use crate::search::types::{
    CatalogQuery, CategorySelector, PagesRange, SearchResponse, SearchResultItem, SizeRange,
    SortKey,
};

/// Default page size of the result window, matching the catalog UI.
const DEFAULT_PAGE_SIZE: usize = 40;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub pages: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
    Extension(bookmarks): Extension<Arc<BookmarkStore>>,
) -> Json<SearchResponse> {
    let query = CatalogQuery {
        search_text: params.q.as_deref().unwrap_or("").trim().to_string(),
        category: CategorySelector::from_param(params.category.as_deref().unwrap_or("all")),
        size_filter: SizeRange::from_param(params.size.as_deref().unwrap_or("any")),
        pages_filter: PagesRange::from_param(params.pages.as_deref().unwrap_or("any")),
        sort_key: SortKey::from_param(params.sort.as_deref().unwrap_or("relevance")),
    };

    let books = catalog.snapshot().await;
    let is_bookmarked = |book: &Book| bookmarks.contains_book(book);
    let ranked = engine::execute(&books, &query, &is_bookmarked);

    let mut filters = HashMap::new();
    match &query.category {
        CategorySelector::All => {}
        CategorySelector::Bookmarked => {
            filters.insert("category".to_string(), "bookmarked".to_string());
        }
        CategorySelector::Name(name) => {
            filters.insert("category".to_string(), name.clone());
        }
    }
    if query.size_filter != SizeRange::Any {
        filters.insert("size".to_string(), query.size_filter.as_param().to_string());
    }
    if query.pages_filter != PagesRange::Any {
        filters.insert(
            "pages".to_string(),
            query.pages_filter.as_param().to_string(),
        );
    }
    if query.sort_key != SortKey::Relevance {
        filters.insert("sort".to_string(), query.sort_key.as_param().to_string());
    }

    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0);
    let total_count = ranked.len();

    let results: Vec<SearchResultItem> = ranked
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|scored| SearchResultItem {
            id: scored.book.id,
            title: scored.book.title,
            author: scored.book.author,
            category: scored.book.category,
            cover: scored.book.cover_path,
            score: scored.score,
        })
        .collect();

    Json(SearchResponse {
        query: query.search_text,
        filters,
        total_count,
        count: results.len(),
        results,
    })
}
