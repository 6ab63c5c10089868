//! Book Catalog Query Engine Library
//!
//! This library crate defines the core modules that make up the catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`catalog`**: The canonical book model. Normalizes raw feed rows into `Book`
//!   entities (trimming, defaults, derived numeric fields, stable ids) and owns the
//!   in-memory collection, which is replaced wholesale on every load.
//! - **`search`**: The query engine. Contains the string matchers (substring,
//!   Levenshtein distance), the tiered relevance scorer, the filter predicate,
//!   the sort comparators, and the one-pass executor composing them.
//! - **`ingestion`**: The data intake pipeline. Fetches the remote JSON feed,
//!   normalizes it, and maintains the local cache file used for fast startup and
//!   offline operation.
//! - **`bookmarks`**: Per-reader state. The persisted bookmark set (injected into
//!   the engine as a membership predicate) and per-book read statistics.

pub mod bookmarks;
pub mod catalog;
pub mod ingestion;
pub mod search;
