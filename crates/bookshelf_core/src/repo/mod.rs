//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`DuplicateIsbn`, `NotFound`)
//!   and never partially apply a write.

pub mod book_repo;
