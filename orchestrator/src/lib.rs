//! Recipe explorer orchestration library
//!
//! This library combines free-text search with category filtering over a
//! remote recipe catalog, keeps the browsing session state, and renders it
//! for a terminal.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod presentation;
pub mod state;

// Re-export commonly used types
pub use config::ExplorerConfig;
pub use core::{QueryOutcome, RecentSearches, SessionSnapshot, SessionState};
pub use error::{OrchestratorError, OrchestratorResult};
pub use orchestrator::{SearchDisposition, SearchOrchestrator};
