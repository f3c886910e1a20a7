//! Core domain logic for Bookshelf.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::book::{Book, BookValidationError, ReadStatus};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository, RepoError, RepoResult};
pub use service::book_service::{seed_books, BookService, CatalogSummary};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
