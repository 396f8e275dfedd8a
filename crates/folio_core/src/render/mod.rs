//! Render pipeline: pure templating from typed projects to HTML.
//!
//! # Responsibility
//! - Produce card, detail and page-state fragments.
//! - Produce full documents for the static build.
//! - Keep badge URL formatting next to the templates that embed it.
//!
//! # Invariants
//! - Rendering performs no I/O and mutates no external state.
//! - Rendering is total; there is no render error type.

pub mod badges;
pub mod html;
pub mod page;
pub mod templates;
