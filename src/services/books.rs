//! Book lending service

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    pub async fn create(&self, book: Book) -> Book {
        let book = self.repository.books_create(book).await;
        tracing::info!(id = %book.id, title = %book.title, "Book created");
        book
    }

    /// Check out one copy of a book
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        match self.repository.books_checkout(id).await {
            Ok(book) => {
                tracing::info!(id, remaining = book.quantity, "Book checked out");
                Ok(book)
            }
            Err(AppError::Unavailable) => {
                tracing::warn!(id, "Checkout refused, no copies available");
                Err(AppError::Unavailable)
            }
            Err(e) => Err(e),
        }
    }

    /// Return one copy of a book
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books_return(id).await?;
        tracing::info!(id, quantity = book.quantity, "Book returned");
        Ok(book)
    }
}
