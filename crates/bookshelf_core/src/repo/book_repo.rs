//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the catalog collection and enforce ISBN uniqueness.
//! - Provide lookup, mutation and removal by ISBN.
//!
//! # Invariants
//! - At most one book per ISBN at any time.
//! - Failed operations leave the collection untouched.
//! - Read paths return owned copies, never references into storage.

use crate::model::book::{Book, BookValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Catalog error for book validation, uniqueness and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(BookValidationError),
    DuplicateIsbn(String),
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateIsbn(isbn) => write!(f, "book with isbn `{isbn}` already exists"),
            Self::NotFound(isbn) => write!(f, "book not found: {isbn}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateIsbn(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for catalog operations.
pub trait BookRepository {
    /// Appends a book unless its ISBN is already present.
    fn add_book(&mut self, book: Book) -> RepoResult<()>;
    /// Returns all books in insertion order.
    fn list_books(&self) -> Vec<Book>;
    /// Returns a copy of one book by ISBN.
    fn get_book(&self, isbn: &str) -> Option<Book>;
    /// Marks the matching book as read.
    fn mark_as_read(&mut self, isbn: &str) -> RepoResult<()>;
    /// Removes the matching book.
    fn remove_book(&mut self, isbn: &str) -> RepoResult<()>;
    /// Number of books currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed catalog with linear scans.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn add_book(&mut self, book: Book) -> RepoResult<()> {
        if self
            .books
            .iter()
            .any(|existing| existing.isbn() == book.isbn())
        {
            return Err(RepoError::DuplicateIsbn(book.isbn().to_string()));
        }

        self.books.push(book);
        Ok(())
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn get_book(&self, isbn: &str) -> Option<Book> {
        self.books.iter().find(|book| book.isbn() == isbn).cloned()
    }

    fn mark_as_read(&mut self, isbn: &str) -> RepoResult<()> {
        match self.books.iter_mut().find(|book| book.isbn() == isbn) {
            Some(book) => {
                book.mark_as_read();
                Ok(())
            }
            None => Err(RepoError::NotFound(isbn.to_string())),
        }
    }

    fn remove_book(&mut self, isbn: &str) -> RepoResult<()> {
        let initial_len = self.books.len();
        let remaining = self
            .books
            .iter()
            .filter(|book| book.isbn() != isbn)
            .cloned()
            .collect::<Vec<_>>();

        if remaining.len() == initial_len {
            return Err(RepoError::NotFound(isbn.to_string()));
        }

        self.books = remaining;
        Ok(())
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
