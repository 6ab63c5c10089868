//! Catalog Module Tests
//!
//! Validates raw-row normalization, derived-field extraction, identity, and
//! the replaceable in-memory collection.
//!
//! ## Test Scopes
//! - **Normalization**: Trimming, required fields, category defaulting, tag parsing.
//! - **Derived numerics**: Unit-token extraction and its null semantics.
//! - **Identity**: Stability and collision behavior of the synthetic id.
//! - **Store**: Wholesale replacement, lookup, category listing.

#[cfg(test)]
mod tests {
    use crate::catalog::normalize::{book_id, normalize_record};
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::{Book, RawBookRecord};

    fn raw(title: &str, author: &str) -> RawBookRecord {
        RawBookRecord {
            title: title.to_string(),
            author: author.to_string(),
            ..RawBookRecord::default()
        }
    }

    fn normalized(title: &str, author: &str) -> Book {
        normalize_record(&raw(title, author)).expect("record should normalize")
    }

    // ============================================================
    // NORMALIZATION TESTS - required fields
    // ============================================================

    #[test]
    fn test_normalize_trims_all_string_fields() {
        let mut row = raw("  Gitanjali  ", "  Tagore ");
        row.description = "  poems  ".to_string();
        row.details = " first edition ".to_string();

        let book = normalize_record(&row).unwrap();
        assert_eq!(book.title, "Gitanjali");
        assert_eq!(book.author, "Tagore");
        assert_eq!(book.description, "poems");
        assert_eq!(book.details, "first edition");
    }

    #[test]
    fn test_normalize_drops_row_without_title() {
        assert!(normalize_record(&raw("", "Tagore")).is_none());
        assert!(normalize_record(&raw("   ", "Tagore")).is_none());
    }

    #[test]
    fn test_normalize_drops_row_without_author() {
        assert!(normalize_record(&raw("Gitanjali", "")).is_none());
    }

    // ============================================================
    // NORMALIZATION TESTS - category
    // ============================================================

    #[test]
    fn test_normalize_empty_category_defaults_to_other() {
        let book = normalized("Gitanjali", "Tagore");
        assert_eq!(book.category, "Other");
    }

    #[test]
    fn test_normalize_category_is_title_cased() {
        let mut row = raw("Gitanjali", "Tagore");
        row.category = "classic POETRY".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.category, "Classic Poetry");
    }

    // ============================================================
    // NORMALIZATION TESTS - tags
    // ============================================================

    #[test]
    fn test_normalize_tags_split_trim_and_keep_order() {
        let mut row = raw("Gitanjali", "Tagore");
        row.tags = " poetry , classic ,, 1 MB , 80 pages ".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.tags, vec!["poetry", "classic", "1 MB", "80 pages"]);
    }

    #[test]
    fn test_normalize_empty_tag_field_yields_no_tags() {
        let book = normalized("Gitanjali", "Tagore");
        assert!(book.tags.is_empty());
    }

    // ============================================================
    // NORMALIZATION TESTS - derived numerics
    // ============================================================

    #[test]
    fn test_size_extracted_from_mb_token_case_insensitive() {
        let mut row = raw("Gitanjali", "Tagore");
        row.tags = "poetry, 1.5 mb".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.size_mb, Some(1.5));
    }

    #[test]
    fn test_size_token_without_space_is_recognized() {
        let mut row = raw("Gita", "Vyasa");
        row.tags = "150MB".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.size_mb, Some(150.0));
    }

    #[test]
    fn test_pages_extracted_from_page_token() {
        let mut row = raw("Gita", "Vyasa");
        row.tags = "religion, 700 pages".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.page_count, Some(700));

        let mut row = raw("Pamphlet", "Anon");
        row.tags = "1 page".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.page_count, Some(1));
    }

    #[test]
    fn test_first_matching_token_wins_per_field() {
        let mut row = raw("Gita", "Vyasa");
        row.tags = "10 MB, 20 MB, 100 pages, 200 pages".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.size_mb, Some(10.0));
        assert_eq!(book.page_count, Some(100));
    }

    #[test]
    fn test_malformed_numeric_tokens_leave_fields_null() {
        let mut row = raw("Gita", "Vyasa");
        row.tags = "abc MB, many pages".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.size_mb, None);
        assert_eq!(book.page_count, None);
    }

    #[test]
    fn test_unit_suffix_inside_word_is_not_a_unit_token() {
        // "climb" ends in "mb" but is not a size token
        let mut row = raw("Everest", "Hillary");
        row.tags = "climb".to_string();
        let book = normalize_record(&row).unwrap();
        assert_eq!(book.size_mb, None);
    }

    #[test]
    fn test_missing_numerics_are_null_not_zero() {
        let book = normalized("Gitanjali", "Tagore");
        assert!(book.size_mb.is_none());
        assert!(book.page_count.is_none());
    }

    // ============================================================
    // NORMALIZATION TESTS - cover and document URL
    // ============================================================

    #[test]
    fn test_cover_defaults_to_placeholder() {
        let book = normalized("Gitanjali", "Tagore");
        assert_eq!(book.cover_path, "img/book.jpg");
    }

    #[test]
    fn test_cover_full_url_and_relative_path_pass_through() {
        let mut row = raw("Gitanjali", "Tagore");
        row.cover = "https://example.com/cover.jpg".to_string();
        assert_eq!(
            normalize_record(&row).unwrap().cover_path,
            "https://example.com/cover.jpg"
        );

        row.cover = "covers/gitanjali.png".to_string();
        assert_eq!(
            normalize_record(&row).unwrap().cover_path,
            "covers/gitanjali.png"
        );
    }

    #[test]
    fn test_document_url_precedence_pdfurl_then_pdf_then_fileid() {
        let mut row = raw("Gitanjali", "Tagore");
        row.pdfurl = "https://example.com/a.pdf".to_string();
        row.pdf = "https://example.com/b.pdf".to_string();
        row.fileid = "abc123".to_string();
        assert_eq!(
            normalize_record(&row).unwrap().document_url,
            "https://example.com/a.pdf"
        );

        row.pdfurl.clear();
        assert_eq!(
            normalize_record(&row).unwrap().document_url,
            "https://example.com/b.pdf"
        );

        row.pdf.clear();
        assert_eq!(
            normalize_record(&row).unwrap().document_url,
            "https://drive.google.com/file/d/abc123/view"
        );
    }

    #[test]
    fn test_document_url_empty_when_no_source_field_present() {
        let book = normalized("Gitanjali", "Tagore");
        assert_eq!(book.document_url, "");
    }

    // ============================================================
    // IDENTITY TESTS
    // ============================================================

    #[test]
    fn test_book_id_is_stable_across_case_and_calls() {
        assert_eq!(book_id("Gitanjali", "Tagore"), book_id("gitanjali", "TAGORE"));
        assert_eq!(book_id("Gitanjali", "Tagore"), book_id("Gitanjali", "Tagore"));
    }

    #[test]
    fn test_book_id_distinguishes_same_title_different_author() {
        assert_ne!(book_id("Collected Poems", "Tagore"), book_id("Collected Poems", "Yeats"));
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_store_replace_swaps_collection_wholesale() {
        let store = CatalogStore::new();
        assert!(store.is_empty().await);

        store.replace(vec![normalized("Gitanjali", "Tagore")]).await;
        assert_eq!(store.len().await, 1);

        store.replace(vec![normalized("Gita", "Vyasa")]).await;
        let books = store.snapshot().await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Gita");
    }

    #[tokio::test]
    async fn test_store_old_snapshot_survives_replacement() {
        let store = CatalogStore::new();
        store.replace(vec![normalized("Gitanjali", "Tagore")]).await;

        let before = store.snapshot().await;
        store.replace(Vec::new()).await;

        // the snapshot taken before the swap still reads consistently
        assert_eq!(before.len(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_get_by_id_and_by_legacy_title() {
        let store = CatalogStore::new();
        let book = normalized("Gitanjali", "Tagore");
        let id = book.id.clone();
        store.replace(vec![book]).await;

        assert!(store.get(&id).await.is_some());
        assert!(store.get("Gitanjali").await.is_some());
        assert!(store.get("Unknown Title").await.is_none());
    }

    #[tokio::test]
    async fn test_store_categories_deduplicate_case_insensitively() {
        let store = CatalogStore::new();
        let mut a = raw("First", "A");
        a.category = "Poetry".to_string();
        let mut b = raw("Second", "B");
        b.category = "poetry".to_string();
        let mut c = raw("Third", "C");
        c.category = "Religion".to_string();

        store
            .replace(
                [a, b, c]
                    .iter()
                    .filter_map(crate::catalog::normalize::normalize_record)
                    .collect(),
            )
            .await;

        let categories = store.categories().await;
        assert_eq!(categories, vec!["Poetry", "Religion"]);
    }
}
