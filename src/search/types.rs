//! Query value objects and search API DTOs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::types::Book;

/// Category selection for one query evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Bookmarked,
    Name(String),
}

impl CategorySelector {
    /// Parse a wire parameter. Empty or `all` selects everything; anything
    /// that is not a reserved word is treated as a category name.
    pub fn from_param(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else if trimmed.eq_ignore_ascii_case("bookmarked") {
            CategorySelector::Bookmarked
        } else {
            CategorySelector::Name(trimmed.to_string())
        }
    }
}

/// Named size bucket over `Book::size_mb`, in megabytes.
///
/// Both endpoints are inclusive, so adjacent buckets share their boundary
/// value. A book sized exactly 100 MB belongs to `1to100` and `100to200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRange {
    Any,
    Under1,
    From1To100,
    From100To200,
    Over200,
}

impl SizeRange {
    /// Parse a wire parameter; unknown values fall back to `Any`.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "under1" => SizeRange::Under1,
            "1to100" => SizeRange::From1To100,
            "100to200" => SizeRange::From100To200,
            "over200" => SizeRange::Over200,
            _ => SizeRange::Any,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SizeRange::Any => "any",
            SizeRange::Under1 => "under1",
            SizeRange::From1To100 => "1to100",
            SizeRange::From100To200 => "100to200",
            SizeRange::Over200 => "over200",
        }
    }

    /// Whether a derived size passes this bucket. A missing size is
    /// excluded by every bucket except `Any`; it is never treated as zero.
    pub fn matches(&self, size_mb: Option<f64>) -> bool {
        let (lo, hi) = match self {
            SizeRange::Any => return true,
            SizeRange::Under1 => (0.0, Some(1.0)),
            SizeRange::From1To100 => (1.0, Some(100.0)),
            SizeRange::From100To200 => (100.0, Some(200.0)),
            SizeRange::Over200 => (200.0, None),
        };
        match size_mb {
            None => false,
            Some(v) => v >= lo && hi.map_or(true, |h| v <= h),
        }
    }
}

/// Named page-count bucket over `Book::page_count`. Same inclusive
/// boundary semantics as [`SizeRange`], independent bucket set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagesRange {
    Any,
    Under100,
    From100To200,
    From200To500,
    Over500,
}

impl PagesRange {
    /// Parse a wire parameter; unknown values fall back to `Any`.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "under100" => PagesRange::Under100,
            "100to200" => PagesRange::From100To200,
            "200to500" => PagesRange::From200To500,
            "over500" => PagesRange::Over500,
            _ => PagesRange::Any,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            PagesRange::Any => "any",
            PagesRange::Under100 => "under100",
            PagesRange::From100To200 => "100to200",
            PagesRange::From200To500 => "200to500",
            PagesRange::Over500 => "over500",
        }
    }

    pub fn matches(&self, page_count: Option<u32>) -> bool {
        let (lo, hi) = match self {
            PagesRange::Any => return true,
            PagesRange::Under100 => (0, Some(100)),
            PagesRange::From100To200 => (100, Some(200)),
            PagesRange::From200To500 => (200, Some(500)),
            PagesRange::Over500 => (500, None),
        };
        match page_count {
            None => false,
            Some(v) => v >= lo && hi.map_or(true, |h| v <= h),
        }
    }
}

/// Requested result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Relevance,
    Title,
    Author,
    Category,
    SizeAsc,
    SizeDesc,
    PagesAsc,
    PagesDesc,
}

impl SortKey {
    /// Parse a wire parameter; unknown values fall back to `Relevance`.
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "title" => SortKey::Title,
            "author" => SortKey::Author,
            "category" => SortKey::Category,
            "sizeAsc" => SortKey::SizeAsc,
            "sizeDesc" => SortKey::SizeDesc,
            "pagesAsc" => SortKey::PagesAsc,
            "pagesDesc" => SortKey::PagesDesc,
            _ => SortKey::Relevance,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Category => "category",
            SortKey::SizeAsc => "sizeAsc",
            SortKey::SizeDesc => "sizeDesc",
            SortKey::PagesAsc => "pagesAsc",
            SortKey::PagesDesc => "pagesDesc",
        }
    }
}

/// All parameters of one query evaluation. Built fresh per request and
/// never mutated; the engine holds no state between calls.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub search_text: String,
    pub category: CategorySelector,
    pub size_filter: SizeRange,
    pub pages_filter: PagesRange,
    pub sort_key: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            search_text: String::new(),
            category: CategorySelector::All,
            size_filter: SizeRange::Any,
            pages_filter: PagesRange::Any,
            sort_key: SortKey::Relevance,
        }
    }
}

/// A book that survived filtering, carrying its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBook {
    pub book: Book,
    pub score: u32,
}

/// One row of a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub cover: String,
    pub score: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: HashMap<String, String>,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}
