//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookshelf_core` linkage.
//! - Print the starter catalog with deterministic output.

use bookshelf_core::{AppConfig, BookService, InMemoryBookRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bookshelf config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logging is best effort here; the probe output goes to stdout regardless.
    if let Err(err) = bookshelf_core::init_logging_from_config(&config) {
        eprintln!("bookshelf logging disabled: {err}");
    }

    println!("bookshelf_core ping={}", bookshelf_core::ping());
    println!("bookshelf_core version={}", bookshelf_core::core_version());

    let catalog = if config.seed_catalog {
        BookService::with_seed(InMemoryBookRepository::new())
    } else {
        BookService::new(InMemoryBookRepository::new())
    };
    let summary = catalog.summary();
    println!(
        "catalog total={} read={} unread={}",
        summary.total, summary.read, summary.unread
    );
    for book in catalog.list_books() {
        println!("{book}");
    }

    log::info!(
        "event=cli_probe module=cli status=ok books={}",
        summary.total
    );
    ExitCode::SUCCESS
}
