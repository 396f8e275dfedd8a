//! Static site build entry points.
//!
//! # Responsibility
//! - Turn a source tree plus the data document into a deployable directory.
//!
//! # Invariants
//! - Every project id gets `projects/<id>/index.html`.
//! - `projects/index.html` is the not-found catch-all.

pub mod build;
pub mod layout;
