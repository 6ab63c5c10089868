//! Reader State Tests
//!
//! Validates bookmark toggling, legacy-key compatibility, read-stat
//! accounting, and the JSON persistence both stores write through to.

#[cfg(test)]
mod tests {
    use crate::bookmarks::store::{BookmarkStore, ReadStatsStore};
    use crate::catalog::normalize::normalize_record;
    use crate::catalog::types::{Book, RawBookRecord};

    fn sample_book() -> Book {
        let row = RawBookRecord {
            title: "Gitanjali".to_string(),
            author: "Tagore".to_string(),
            ..RawBookRecord::default()
        };
        normalize_record(&row).unwrap()
    }

    // ============================================================
    // BOOKMARK TESTS
    // ============================================================

    #[test]
    fn test_toggle_book_on_then_off() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = BookmarkStore::load(dir.path().join("bookmarks.json"));
        let book = sample_book();

        assert!(!store.contains_book(&book));
        assert!(store.toggle_book(&book));
        assert!(store.contains_book(&book));
        assert!(!store.toggle_book(&book));
        assert!(!store.contains_book(&book));
    }

    #[test]
    fn test_membership_accepts_legacy_title_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = BookmarkStore::load(dir.path().join("bookmarks.json"));
        let book = sample_book();

        // an older client stored the bookmark under the raw title
        store.toggle_key("Gitanjali");
        assert!(store.contains_book(&book));
    }

    #[test]
    fn test_toggle_book_clears_legacy_title_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = BookmarkStore::load(dir.path().join("bookmarks.json"));
        let book = sample_book();

        store.toggle_key("Gitanjali");
        assert!(store.contains_book(&book));

        // toggling the known book off removes the legacy entry too
        assert!(!store.toggle_book(&book));
        assert!(!store.contains_book(&book));
        assert!(!store.contains_key("Gitanjali"));
    }

    #[test]
    fn test_bookmarks_persist_across_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bookmarks.json");
        let book = sample_book();

        {
            let store = BookmarkStore::load(path.clone());
            store.toggle_book(&book);
        }

        let reloaded = BookmarkStore::load(path);
        assert!(reloaded.contains_book(&book));
    }

    #[test]
    fn test_bookmark_file_is_a_plain_string_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bookmarks.json");
        let book = sample_book();

        let store = BookmarkStore::load(path.clone());
        store.toggle_book(&book);

        let raw = std::fs::read_to_string(&path).unwrap();
        let keys: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(keys, vec![book.id.clone()]);
    }

    #[test]
    fn test_malformed_bookmark_file_loads_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bookmarks.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let store = BookmarkStore::load(path);
        assert!(store.sorted_keys().is_empty());
    }

    // ============================================================
    // READ STATS TESTS
    // ============================================================

    #[test]
    fn test_record_read_increments_and_stamps() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ReadStatsStore::load(dir.path().join("read-stats.json"));

        let first = store.record("id-gitanjali");
        assert_eq!(first.count, 1);
        assert!(first.last_read.is_some());

        let second = store.record("id-gitanjali");
        assert_eq!(second.count, 2);
    }

    #[test]
    fn test_unread_book_has_default_stats() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ReadStatsStore::load(dir.path().join("read-stats.json"));

        let stat = store.get("never-opened");
        assert_eq!(stat.count, 0);
        assert!(stat.last_read.is_none());
    }

    #[test]
    fn test_read_stats_persist_across_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("read-stats.json");

        {
            let store = ReadStatsStore::load(path.clone());
            store.record("id-gita");
            store.record("id-gita");
        }

        let reloaded = ReadStatsStore::load(path);
        assert_eq!(reloaded.get("id-gita").count, 2);
    }

    #[test]
    fn test_malformed_stats_file_loads_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("read-stats.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = ReadStatsStore::load(path);
        assert_eq!(store.get("anything").count, 0);
    }
}
