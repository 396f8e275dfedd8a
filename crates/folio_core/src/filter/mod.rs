//! Project list filtering.
//!
//! # Responsibility
//! - Compute the visible subset of projects for a set of criteria.
//! - Keep filtering pure so view state stays with the controller.

pub mod engine;
