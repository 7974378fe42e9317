//! Core business logic modules
//!
//! Session state and recent-search tracking are pure and synchronous; the
//! query workflow only touches the outside world through `CatalogClient`.

pub mod query;
pub mod recent;
pub mod state;

pub use query::{lookup_all, matches_term, run_query, search_within_category};
pub use recent::{RecentSearches, MAX_RECENT_SEARCHES};
pub use state::{QueryOutcome, QueryTicket, SessionSnapshot, SessionState};
