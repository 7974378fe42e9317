//! Recipe catalog client library
//!
//! This library provides read-only access to a TheMealDB-compatible recipe
//! catalog: category listing, name search, category filtering and lookup by
//! identifier, each normalized into the shared recipe domain types.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use services::*;
pub use traits::*;
