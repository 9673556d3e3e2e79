//! HTTP/JSON API server for hero records.
//!
//! Provides a minimal REST API over a single SQLite-backed table: create,
//! list, get-by-id, and delete. This crate contains the server framework,
//! API schema types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
