//! Catalog store for trustbuilds
//!
//! This crate provides:
//! - The immutable in-memory catalog of parts and builds
//! - Loading from per-category JSON files
//! - Integrity audit and search queries

pub mod audit;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod search;

pub use audit::Issue;
pub use catalog::{Catalog, ValidationMode};
pub use error::{CatalogError, Result};
pub use search::{PartQuery, PartSort};

#[cfg(test)]
pub(crate) mod test_support;
