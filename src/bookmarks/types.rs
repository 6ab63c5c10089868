//! Reader-state data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::types::Book;

/// Read statistics for one book: how often it was opened and when last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStat {
    pub count: u64,
    pub last_read: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub key: String,
    pub bookmarked: bool,
}

#[derive(Debug, Serialize)]
pub struct BookmarksResponse {
    pub count: usize,
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize)]
pub struct ReadResponse {
    pub key: String,
    pub read_stats: ReadStat,
}
