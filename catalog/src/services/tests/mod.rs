//! Tests for catalog services
//!
//! The HTTP client is exercised against a local wiremock server standing in
//! for the remote catalog.
