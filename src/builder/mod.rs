//! Builder API for custom controllers.
//!
//! Presets cover the usual lights; this module provides a fluent builder
//! and a macro for any other fixed sequence while still guaranteeing at
//! least one valid state.

pub mod controller;
pub mod error;
pub mod macros;

pub use controller::ControllerBuilder;
pub use error::BuildError;
