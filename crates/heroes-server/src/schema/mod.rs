//! API schema types for request/response definitions.
//!
//! Each payload variant is an independent struct with serde derives and an
//! explicit conversion; no variant is derived from another by inheritance.

pub mod heroes;
