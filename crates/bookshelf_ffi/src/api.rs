//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalog functions to Dart via FRB.
//! - Own the process-wide catalog instance behind one coarse lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Catalog errors are propagated with their class, never swallowed.
//! - Every call holds the catalog lock for its whole duration.

use bookshelf_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, Book, BookService, InMemoryBookRepository, RepoError,
};
use log::warn;
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

type Catalog = BookService<InMemoryBookRepository>;

static CATALOG: Lazy<Mutex<Catalog>> = Lazy::new(|| Mutex::new(build_catalog()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Error class surfaced to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    DuplicateIsbn,
    NotFound,
}

/// Error envelope for failed catalog calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// Human-readable message from the core error.
    pub message: String,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ApiError {}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        let kind = match &value {
            RepoError::Validation(_) => ApiErrorKind::Validation,
            RepoError::DuplicateIsbn(_) => ApiErrorKind::DuplicateIsbn,
            RepoError::NotFound(_) => ApiErrorKind::NotFound,
        };
        Self {
            kind,
            message: value.to_string(),
        }
    }
}

/// Book item returned by catalog APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItem {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub read: bool,
}

impl From<&Book> for BookItem {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            isbn: book.isbn().to_string(),
            read: book.is_read(),
        }
    }
}

/// Response for a successful add; echoes the stored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookResponse {
    pub success: bool,
    pub book: BookItem,
}

/// Response carrying a catalog listing in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBooksResponse {
    pub success: bool,
    pub books: Vec<BookItem>,
}

/// Confirmation response for mutations by ISBN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Read/unread counters over the shared catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummaryResponse {
    pub success: bool,
    pub total: u32,
    pub read: u32,
    pub unread: u32,
}

/// Adds one book to the shared catalog.
///
/// Fields are stored and echoed exactly as submitted.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Returns `ApiErrorKind::Validation` or `ApiErrorKind::DuplicateIsbn` on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn add_book(title: String, author: String, isbn: String) -> Result<AddBookResponse, ApiError> {
    let mut catalog = lock_catalog();
    let book = catalog.add_book(title, author, isbn)?;
    Ok(AddBookResponse {
        success: true,
        book: BookItem::from(&book),
    })
}

/// Lists every book in the shared catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn list_books() -> ListBooksResponse {
    let catalog = lock_catalog();
    to_list_response(&catalog.list_books())
}

/// Marks one book as read by ISBN.
///
/// # FFI contract
/// - Returns `ApiErrorKind::NotFound` when the ISBN is not catalogued.
#[flutter_rust_bridge::frb(sync)]
pub fn mark_book_as_read(isbn: String) -> Result<MessageResponse, ApiError> {
    lock_catalog().mark_as_read(&isbn)?;
    Ok(MessageResponse {
        success: true,
        message: format!("Book with ISBN {isbn} marked as read."),
    })
}

/// Removes one book by ISBN.
///
/// # FFI contract
/// - Returns `ApiErrorKind::NotFound` when the ISBN is not catalogued.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_book(isbn: String) -> Result<MessageResponse, ApiError> {
    lock_catalog().remove_book(&isbn)?;
    Ok(MessageResponse {
        success: true,
        message: format!("Book with ISBN {isbn} removed."),
    })
}

/// Searches title, author and ISBN. Blank queries list everything.
#[flutter_rust_bridge::frb(sync)]
pub fn search_books(query: String) -> ListBooksResponse {
    let catalog = lock_catalog();
    to_list_response(&catalog.search_books(query.as_str()))
}

/// Returns read/unread counters for the shared catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_summary() -> CatalogSummaryResponse {
    let summary = lock_catalog().summary();
    CatalogSummaryResponse {
        success: true,
        total: saturating_u32(summary.total),
        read: saturating_u32(summary.read),
        unread: saturating_u32(summary.unread),
    }
}

fn build_catalog() -> Catalog {
    let config = AppConfig::from_env().unwrap_or_else(|err| {
        warn!("event=catalog_init module=ffi status=error error_code=config_invalid error={err}");
        AppConfig::default()
    });
    if config.seed_catalog {
        BookService::with_seed(InMemoryBookRepository::new())
    } else {
        BookService::new(InMemoryBookRepository::new())
    }
}

fn lock_catalog() -> MutexGuard<'static, Catalog> {
    // A panic mid-call cannot leave the catalog half-written, so a poisoned
    // lock still guards consistent state.
    CATALOG
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_list_response(books: &[Book]) -> ListBooksResponse {
    ListBooksResponse {
        success: true,
        books: books.iter().map(BookItem::from).collect(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
