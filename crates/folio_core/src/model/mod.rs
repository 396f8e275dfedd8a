//! Typed portfolio data model.
//!
//! # Responsibility
//! - Define canonical records decoded from the portfolio data document.
//! - Replace markup-encoded data (comma-joined attributes) with typed fields.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Loaded records are read-only.
//!
//! # See also
//! - docs/architecture/data-document.md

pub mod project;
