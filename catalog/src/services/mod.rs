//! Catalog service implementations

pub mod http_client;

#[cfg(test)]
pub mod tests;

pub use http_client::*;
