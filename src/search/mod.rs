//! Catalog Query Engine Module
//!
//! The core component responsible for executing user queries against the in-memory catalog.
//!
//! ## Overview
//! This module implements the search/filter/sort/rank pipeline of the catalog service.
//! It bridges the HTTP API layer with the book collection owned by the `catalog` module
//! and the bookmark membership predicate owned by the `bookmarks` module.
//!
//! ## Responsibilities
//! - **Matching**: Case-insensitive substring and edit-distance primitives over field text.
//! - **Scoring**: Tiered relevance scoring per field, combined into a weighted per-book score.
//! - **Filtering**: Category, bookmark-membership, and numeric range predicates.
//! - **Ordering**: Total ordering of surviving results for every supported sort key.
//! - **API**: Exposing the pipeline via a RESTful HTTP endpoint.
//!
//! ## Submodules
//! - **`matchers`**: String matching primitives (substring, Levenshtein distance, highlight ranges).
//! - **`scorer`**: The tiered relevance scoring algorithm.
//! - **`filter`**: The keep/reject predicate applied before ranking.
//! - **`sort`**: Comparators for every sort key, including nulls-last numeric ordering.
//! - **`engine`**: The one-pass query executor composing the above.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Query value objects and Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod filter;
pub mod handlers;
pub mod matchers;
pub mod scorer;
pub mod sort;
pub mod types;
