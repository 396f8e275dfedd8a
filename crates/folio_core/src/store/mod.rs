//! Project store: loading and read-only access.
//!
//! # Responsibility
//! - Isolate document transport from decoding and lookup.
//! - Own the one-shot load of the portfolio document.
//!
//! # Invariants
//! - The store is written once on load and never mutated afterwards.
//! - Load failures are returned as `LoadError`, never panics.

pub mod project_store;
pub mod source;
