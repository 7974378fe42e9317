//! Shared types for the recipe explorer
//!
//! Contains the recipe domain model, the catalog wire records it is
//! normalized from, and logging setup used by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod types;
pub mod wire;

pub use errors::*;
pub use types::*;
