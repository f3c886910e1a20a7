//! UI bridge crate for Bookshelf.
//!
//! Thin use-case surface over `bookshelf_core`; see [`api`].

pub mod api;
