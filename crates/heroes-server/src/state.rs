//! Application state with the shared `HeroService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime. `rusqlite::Connection` is `!Sync`, so the service cannot
//! sit behind an `RwLock`; requests serialize on the mutex for their single
//! storage round-trip.
//!
//! The held guard is the per-request unit of work: acquired at the top of a
//! handler, released on every exit path (normal return, early `?` return)
//! when it drops. SQLite's own concurrency control governs the file itself.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::HeroService;

/// Shared application state for the HTTP server.
///
/// Constructed once in `main` and injected into handlers via axum's `State`
/// extractor; never a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// The shared hero service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<HeroService>>,
}

impl AppState {
    /// Creates a new `AppState` with a `HeroService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = HeroService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = HeroService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        })
    }
}
