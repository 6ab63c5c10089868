//! Persistent bookmark and read-stat stores.
//!
//! The on-disk shapes match what older clients wrote to browser storage: the
//! bookmark file is a JSON string array of keys, the stats file a JSON
//! object keyed by book key. A missing or unreadable file loads as empty
//! state; persistence failures are logged and never fail a request.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Utc;
use dashmap::DashMap;

use super::types::ReadStat;
use crate::catalog::types::Book;

pub struct BookmarkStore {
    keys: DashMap<String, ()>,
    path: PathBuf,
}

impl BookmarkStore {
    pub fn load(path: PathBuf) -> Self {
        let keys = DashMap::new();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(stored) => {
                    for key in stored {
                        keys.insert(key, ());
                    }
                }
                Err(err) => {
                    tracing::warn!("Ignoring malformed bookmark file {}: {}", path.display(), err);
                }
            },
            Err(_) => {
                tracing::debug!("No bookmark file at {}, starting empty", path.display());
            }
        }
        BookmarkStore { keys, path }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Membership test injected into the query engine. Accepts the
    /// synthetic id or the legacy title key.
    pub fn contains_book(&self, book: &Book) -> bool {
        self.contains_key(&book.id) || self.contains_key(&book.title)
    }

    /// Toggle a known book. Clears any legacy title entry alongside the id
    /// entry, so a book bookmarked under its title toggles off cleanly;
    /// new bookmarks are stored under the id only. Returns the new state.
    pub fn toggle_book(&self, book: &Book) -> bool {
        let had_id = self.keys.remove(&book.id).is_some();
        let had_title = self.keys.remove(&book.title).is_some();

        let bookmarked = if had_id || had_title {
            false
        } else {
            self.keys.insert(book.id.clone(), ());
            true
        };
        self.save();
        bookmarked
    }

    /// Toggle a raw key that resolves to no known book. Kept so references
    /// to books that later drop out of the feed remain removable.
    pub fn toggle_key(&self, key: &str) -> bool {
        let bookmarked = if self.keys.remove(key).is_some() {
            false
        } else {
            self.keys.insert(key.to_string(), ());
            true
        };
        self.save();
        bookmarked
    }

    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    fn save(&self) {
        if let Err(err) = write_json_file(&self.path, &self.sorted_keys()) {
            tracing::error!("Failed to persist bookmarks to {}: {}", self.path.display(), err);
        }
    }
}

pub struct ReadStatsStore {
    stats: DashMap<String, ReadStat>,
    path: PathBuf,
}

impl ReadStatsStore {
    pub fn load(path: PathBuf) -> Self {
        let stats = DashMap::new();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, ReadStat>>(&raw) {
                Ok(stored) => {
                    for (key, stat) in stored {
                        stats.insert(key, stat);
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        "Ignoring malformed read-stats file {}: {}",
                        path.display(),
                        err
                    );
                }
            },
            Err(_) => {
                tracing::debug!("No read-stats file at {}, starting empty", path.display());
            }
        }
        ReadStatsStore { stats, path }
    }

    /// Record one read: bump the counter and stamp the time. Returns the
    /// updated stat.
    pub fn record(&self, key: &str) -> ReadStat {
        let updated = {
            let mut entry = self.stats.entry(key.to_string()).or_default();
            entry.count += 1;
            entry.last_read = Some(Utc::now());
            entry.clone()
        };
        self.save();
        updated
    }

    pub fn get(&self, key: &str) -> ReadStat {
        self.stats
            .get(key)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }

    fn save(&self) {
        let snapshot: BTreeMap<String, ReadStat> = self
            .stats
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        if let Err(err) = write_json_file(&self.path, &snapshot) {
            tracing::error!(
                "Failed to persist read stats to {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

fn write_json_file<T: serde::Serialize>(path: &PathBuf, value: &T) -> anyhow::Result<()> {
    use anyhow::Context as _;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create data dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string(value).context("serialize state")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
