//! View layer: routing and the stateful controller over pure filter/render.
//!
//! # Responsibility
//! - Own all mutable view state (active criteria, visibility).
//! - Map request paths and load outcomes to display states.

pub mod controller;
pub mod route;
