//! Book use-case service.
//!
//! # Responsibility
//! - Provide stable catalog entry points for API and CLI callers.
//! - Build validated `Book` values from raw input fields.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository uniqueness/existence contracts.
//! - Search is read-only and preserves catalog order.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, RepoResult};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const SEED_BOOKS: &[(&str, &str, &str)] = &[
    ("A Revolução dos Bichos", "George Orwell", "978-8535905141"),
    ("1984", "George Orwell", "978-8535905142"),
    ("Admirável Mundo Novo", "Aldous Huxley", "978-8575225027"),
    ("O Senhor dos Anéis", "J.R.R. Tolkien", "978-8535905143"),
];

/// Read/unread counts over the current catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
}

/// Returns the reference starter set used to give callers initial data.
pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .filter_map(|(title, author, isbn)| Book::new(*title, *author, *isbn).ok())
        .collect()
}

/// Use-case service wrapper for catalog operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a service and loads the starter set.
    ///
    /// Seed entries whose ISBN is already present are skipped.
    pub fn with_seed(repo: R) -> Self {
        let mut service = Self::new(repo);
        let mut added = 0usize;
        for book in seed_books() {
            if service.repo.add_book(book).is_ok() {
                added += 1;
            }
        }
        info!(
            "event=catalog_seed module=service status=ok added={} total={}",
            added,
            service.repo.len()
        );
        service
    }

    /// Validates raw fields, stores the new book and returns its copy.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a field is empty.
    /// - `RepoError::DuplicateIsbn` when the ISBN is already catalogued.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> RepoResult<Book> {
        let book = match Book::new(title, author, isbn) {
            Ok(book) => book,
            Err(err) => {
                warn!(
                    "event=book_add module=service status=error error_code=validation field={}",
                    err.field()
                );
                return Err(err.into());
            }
        };
        self.add_existing(book.clone())?;
        Ok(book)
    }

    /// Stores an already constructed book.
    pub fn add_existing(&mut self, book: Book) -> RepoResult<()> {
        let isbn = book.isbn().to_string();
        match self.repo.add_book(book) {
            Ok(()) => {
                info!("event=book_add module=service status=ok isbn={isbn}");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=book_add module=service status=error error_code=duplicate_isbn isbn={isbn}"
                );
                Err(err)
            }
        }
    }

    /// Lists all books in insertion order.
    pub fn list_books(&self) -> Vec<Book> {
        self.repo.list_books()
    }

    /// Gets one book by ISBN.
    pub fn get_book(&self, isbn: &str) -> Option<Book> {
        self.repo.get_book(isbn)
    }

    /// Marks one book as read by ISBN.
    pub fn mark_as_read(&mut self, isbn: &str) -> RepoResult<()> {
        let result = self.repo.mark_as_read(isbn);
        match &result {
            Ok(()) => info!("event=book_mark_read module=service status=ok isbn={isbn}"),
            Err(_) => warn!(
                "event=book_mark_read module=service status=error error_code=not_found isbn={isbn}"
            ),
        }
        result
    }

    /// Removes one book by ISBN.
    pub fn remove_book(&mut self, isbn: &str) -> RepoResult<()> {
        let result = self.repo.remove_book(isbn);
        match &result {
            Ok(()) => info!("event=book_remove module=service status=ok isbn={isbn}"),
            Err(_) => warn!(
                "event=book_remove module=service status=error error_code=not_found isbn={isbn}"
            ),
        }
        result
    }

    /// Finds books whose title or author contains `query` (case-insensitive)
    /// or whose ISBN contains it verbatim.
    ///
    /// Runs of whitespace compare equal on both sides of the match.
    /// Blank queries return the full listing.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        let normalized = normalize_text(query);
        if normalized.is_empty() {
            return self.repo.list_books();
        }
        let needle = normalized.to_lowercase();

        self.repo
            .list_books()
            .into_iter()
            .filter(|book| {
                normalize_text(book.title()).to_lowercase().contains(&needle)
                    || normalize_text(book.author()).to_lowercase().contains(&needle)
                    || book.isbn().contains(normalized.as_str())
            })
            .collect()
    }

    /// Counts read and unread books.
    pub fn summary(&self) -> CatalogSummary {
        let books = self.repo.list_books();
        let read = books.iter().filter(|book| book.is_read()).count();
        CatalogSummary {
            total: books.len(),
            read,
            unread: books.len() - read,
        }
    }

    /// Number of catalogued books.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn normalize_text(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}
