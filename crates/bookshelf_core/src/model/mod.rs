//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the canonical record shape used by repository and service code.
//!
//! # Invariants
//! - Every record is identified by its ISBN.

pub mod book;
