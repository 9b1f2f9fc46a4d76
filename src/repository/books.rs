//! In-memory book registry

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Ordered collection of books
///
/// Insertion order is preserved and ids are not required to be unique.
/// Every id-based operation resolves to the first record carrying that id,
/// so later duplicates are reachable only through [`BookRegistry::list`].
#[derive(Debug, Clone, Default)]
pub struct BookRegistry {
    books: Vec<Book>,
}

impl BookRegistry {
    /// Registry holding the startup records
    pub fn seeded() -> Self {
        Self::from(Book::seed())
    }

    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Index of the first book whose id equals `id` exactly
    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<&Book> {
        self.position(id)
            .map(|idx| &self.books[idx])
            .ok_or(AppError::NotFound)
    }

    /// Append a book as given, without any uniqueness or content checks
    pub fn create(&mut self, book: Book) -> Book {
        self.books.push(book.clone());
        book
    }

    /// Take one copy off the shelf
    pub fn checkout(&mut self, id: &str) -> AppResult<Book> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;
        let book = &mut self.books[idx];

        if book.quantity <= 0 {
            return Err(AppError::Unavailable);
        }

        book.quantity -= 1;
        Ok(book.clone())
    }

    /// Put one copy back on the shelf
    pub fn return_book(&mut self, id: &str) -> AppResult<Book> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;
        let book = &mut self.books[idx];
        book.quantity = book.quantity.saturating_add(1);
        Ok(book.clone())
    }
}

impl From<Vec<Book>> for BookRegistry {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}
