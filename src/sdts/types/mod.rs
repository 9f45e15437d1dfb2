//! Foundational data structures, error types, and the entry catalog.

pub mod catalog;
pub mod error;
pub mod models;
