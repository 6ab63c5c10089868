//! Feed fetch and cache-file plumbing.

use std::path::Path;

use anyhow::Context as _;

use crate::catalog::normalize::normalize_record;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::{Book, RawBookRecord};

use super::types::IngestConfig;

/// Download the feed and normalize its rows. Rows missing a title or
/// author are dropped silently; everything else is an error for the fetch
/// as a whole (network, HTTP status, JSON shape).
pub async fn fetch_feed(url: &str) -> anyhow::Result<Vec<Book>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("fetch feed: {}", url))?;
    let rows: Vec<RawBookRecord> = response
        .error_for_status()
        .with_context(|| format!("feed returned error status: {}", url))?
        .json()
        .await
        .context("parse feed JSON")?;

    let total = rows.len();
    let books: Vec<Book> = rows.iter().filter_map(normalize_record).collect();
    if books.len() < total {
        tracing::warn!("Dropped {} malformed feed rows", total - books.len());
    }

    Ok(books)
}

/// Read the cache file. Any failure (missing, unreadable, malformed)
/// yields `None`; the caller proceeds without cached data.
pub fn read_cache(path: &Path) -> Option<Vec<Book>> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(books) => Some(books),
        Err(err) => {
            tracing::warn!("Ignoring malformed cache file {}: {}", path.display(), err);
            None
        }
    }
}

pub fn write_cache(path: &Path, books: &[Book]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create cache dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string(books).context("serialize cache")?;
    std::fs::write(path, json).with_context(|| format!("write cache: {}", path.display()))?;
    Ok(())
}

/// One full refresh: fetch, replace the collection wholesale, rewrite the
/// cache. A cache-write failure is logged but does not fail the refresh;
/// the fresh data is already in memory.
pub async fn refresh(catalog: &CatalogStore, config: &IngestConfig) -> anyhow::Result<usize> {
    let books = fetch_feed(&config.feed_url).await?;
    let count = books.len();

    if let Err(err) = write_cache(&config.cache_path, &books) {
        tracing::warn!("Failed to rewrite cache: {:?}", err);
    }
    catalog.replace(books).await;

    tracing::info!("Catalog refreshed: {} books", count);
    Ok(count)
}

/// Startup hydration: apply cached books right away so the service is
/// usable before (or without) a network answer.
pub async fn hydrate_from_cache(catalog: &CatalogStore, config: &IngestConfig) -> usize {
    match read_cache(&config.cache_path) {
        Some(books) => {
            let count = books.len();
            catalog.replace(books).await;
            tracing::info!("Hydrated {} books from cache", count);
            count
        }
        None => 0,
    }
}
