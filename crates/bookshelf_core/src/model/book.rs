//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record with validated descriptive fields.
//! - Own the read-status transition.
//!
//! # Invariants
//! - `title`, `author` and `isbn` are non-empty for the whole object lifetime.
//! - Identity is the ISBN: equality and hashing ignore every other field.
//! - `read` only moves from `false` to `true`; repeating the mark is a no-op.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Read status projection of `Book::is_read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    Unread,
    Read,
}

impl ReadStatus {
    /// Human-readable label used by display lines and UI envelopes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unread => "Unread",
            Self::Read => "Read",
        }
    }
}

impl From<bool> for ReadStatus {
    fn from(value: bool) -> Self {
        if value {
            Self::Read
        } else {
            Self::Unread
        }
    }
}

/// Construction-time validation errors for `Book`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    EmptyIsbn,
}

impl BookValidationError {
    /// Name of the offending field.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyAuthor => "author",
            Self::EmptyIsbn => "isbn",
        }
    }
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "book {} must not be empty", self.field())
    }
}

impl Error for BookValidationError {}

/// Catalog record keyed by ISBN.
///
/// Fields are private so the non-empty invariant established by `Book::new`
/// cannot be broken after construction.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "BookWire")]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    read: bool,
}

/// Unvalidated serde shape; converted through `Book::new`.
#[derive(Deserialize)]
struct BookWire {
    title: String,
    author: String,
    isbn: String,
    #[serde(default)]
    read: bool,
}

impl TryFrom<BookWire> for Book {
    type Error = BookValidationError;

    fn try_from(value: BookWire) -> Result<Self, Self::Error> {
        let mut book = Book::new(value.title, value.author, value.isbn)?;
        book.read = value.read;
        Ok(book)
    }
}

impl Book {
    /// Creates an unread book.
    ///
    /// # Errors
    /// - Returns the first empty field, checked as title, author, isbn.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        let author = author.into();
        let isbn = isbn.into();

        if title.is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if isbn.is_empty() {
            return Err(BookValidationError::EmptyIsbn);
        }

        Ok(Self {
            title,
            author,
            isbn,
            read: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }

    /// Marks this book as read. Idempotent.
    pub fn mark_as_read(&mut self) {
        self.read = true;
    }

    /// Compares against a value of any type.
    ///
    /// Returns `false` for anything that is not a `Book`; otherwise compares
    /// by ISBN like `==`.
    pub fn same_record(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Book>()
            .is_some_and(|book| book == self)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {} | Author: {} | ISBN: {} | Status: {}",
            self.title,
            self.author,
            self.isbn,
            self.status().label()
        )
    }
}

impl Debug for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book(title='{}', author='{}', isbn='{}', read={})",
            self.title, self.author, self.isbn, self.read
        )
    }
}
