//! Catalog Module
//!
//! Owns the canonical book entity and the in-memory collection the query
//! engine runs against.
//!
//! ## Core Concepts
//! - **Normalization**: Raw feed rows are converted once, at ingestion, into canonical
//!   `Book` values (trimmed fields, defaulted category, parsed tags, derived numerics).
//!   Malformed rows are dropped silently; they are never an error for the batch.
//! - **Identity**: Every book gets a stable synthetic id derived from its title and
//!   author, so bookmarks survive reloads and duplicate titles by different authors
//!   do not collide.
//! - **Replacement**: The collection is replaced wholesale on every successful load.
//!   It is never mutated in place while a query might be reading it.

pub mod handlers;
pub mod normalize;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
