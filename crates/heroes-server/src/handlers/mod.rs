//! HTTP handler modules for the heroes API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`HeroService`](crate::service::HeroService),
//! and return JSON responses. No business logic lives in handlers.

pub mod heroes;
pub mod root;
