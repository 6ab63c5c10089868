//! Ingestion Data Types
//!
//! Configuration and DTOs for the feed pipeline endpoints.

use std::path::PathBuf;

use serde::Serialize;

/// Where the feed lives and where its cache is written. Built once in
/// `main` and shared with the refresh handler.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub feed_url: String,
    pub cache_path: PathBuf,
}

/// Response returned by the refresh endpoint.
///
/// `status` mirrors what happened: `refreshed` after a successful fetch and
/// wholesale replacement, `fetch_failed` when the feed was unreachable or
/// unparseable (the previously loaded data stays in service).
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: String,
    pub count: usize,
}

/// Response format for the status check endpoint.
#[derive(Debug, Serialize)]
pub struct IngestStatusResponse {
    pub status: String,
    pub book_count: usize,
    pub cache_present: bool,
}
