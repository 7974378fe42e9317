//! Terminal presentation layer
//!
//! Turns console input into `UserIntent`s and session snapshots into text.
//! Holds no state of its own.

pub mod console;
pub mod intent;
pub mod render;

pub use console::{handle_intent, run_console};
pub use intent::UserIntent;
