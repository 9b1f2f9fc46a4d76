//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{error::AppResult, models::book::Book};

pub use books::BookRegistry;

/// Process-wide handle on the book registry
///
/// Clones share the same registry. Each mutating call holds the write lock
/// across lookup, availability check and update.
#[derive(Clone, Default)]
pub struct Repository {
    books: Arc<RwLock<BookRegistry>>,
}

impl Repository {
    /// Create a new repository around the given registry
    pub fn new(registry: BookRegistry) -> Self {
        Self {
            books: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn books_list(&self) -> Vec<Book> {
        self.books.read().await.list().to_vec()
    }

    pub async fn books_get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books.read().await.find_by_id(id).cloned()
    }

    pub async fn books_create(&self, book: Book) -> Book {
        self.books.write().await.create(book)
    }

    pub async fn books_checkout(&self, id: &str) -> AppResult<Book> {
        self.books.write().await.checkout(id)
    }

    pub async fn books_return(&self, id: &str) -> AppResult<Book> {
        self.books.write().await.return_book(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn clones_share_state() {
        let repository = Repository::new(BookRegistry::seeded());
        let other = repository.clone();

        other.books_checkout("1").await.unwrap();

        assert_eq!(repository.books_get_by_id("1").await.unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn concurrent_checkouts_never_oversubscribe() {
        let repository = Repository::new(BookRegistry::seeded());

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.books_checkout("2").await })
            })
            .collect();

        let mut granted = 0;
        let mut refused = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => granted += 1,
                Err(AppError::Unavailable) => refused += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(granted, 5);
        assert_eq!(refused, 15);
        assert_eq!(repository.books_get_by_id("2").await.unwrap().quantity, 0);
    }
}
