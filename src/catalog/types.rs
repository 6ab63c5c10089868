//! Catalog Data Types
//!
//! The canonical book entity, the raw feed row it is normalized from, and
//! the DTOs served by the catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::bookmarks::types::ReadStat;

/// One row of the upstream feed, as published: flat, loosely typed, every
/// field optional. This is the single place the recognized source keys are
/// spelled out; normalization never reaches for any other key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBookRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, alias = "pdfUrl")]
    pub pdfurl: String,
    #[serde(default)]
    pub pdf: String,
    #[serde(default, alias = "fileId")]
    pub fileid: String,
}

/// Canonical catalog entry. Immutable once constructed for a given load.
///
/// `size_mb` and `page_count` are derived from the tags at normalization
/// time and are `None` when no tag token carries the unit, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub details: String,
    pub tags: Vec<String>,
    pub cover_path: String,
    pub document_url: String,
    pub size_mb: Option<f64>,
    pub page_count: Option<u32>,
}

/// Detail view of one book, including the reader state the modal shows.
#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    pub book: Option<Book>,
    pub bookmarked: bool,
    pub read_stats: ReadStat,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
