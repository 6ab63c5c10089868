//! The in-memory book collection.
//!
//! A single replaceable snapshot behind an async read-write lock. Loads
//! (cache hydration, feed refresh) swap the whole vector; queries clone the
//! `Arc` and read a consistent snapshot without blocking writers.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::types::Book;

pub struct CatalogStore {
    books: RwLock<Arc<Vec<Book>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        CatalogStore {
            books: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Replace the collection wholesale. In-flight queries keep reading the
    /// snapshot they already hold.
    pub async fn replace(&self, books: Vec<Book>) {
        let mut guard = self.books.write().await;
        *guard = Arc::new(books);
    }

    pub async fn snapshot(&self) -> Arc<Vec<Book>> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// Look a book up by its synthetic id, falling back to an exact title
    /// match so legacy title-keyed references keep resolving.
    pub async fn get(&self, key: &str) -> Option<Book> {
        let books = self.snapshot().await;
        books
            .iter()
            .find(|book| book.id == key)
            .or_else(|| books.iter().find(|book| book.title == key))
            .cloned()
    }

    /// Distinct category names in display form, deduplicated
    /// case-insensitively and sorted for stable output.
    pub async fn categories(&self) -> Vec<String> {
        let books = self.snapshot().await;
        let mut seen: Vec<String> = Vec::new();
        for book in books.iter() {
            if !seen
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&book.category))
            {
                seen.push(book.category.clone());
            }
        }
        seen.sort_by(|a, b| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()));
        seen
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
