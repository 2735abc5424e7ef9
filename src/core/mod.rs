//! Core controller types and logic.
//!
//! This module contains the cycling core:
//! - Signal states via `SignalState`
//! - The single cyclic `Controller` type and its presets
//! - Immutable cycle history tracking
//!
//! Advancing a controller is pure apart from the optional line written by
//! `Controller::cycle`.

mod controller;
mod history;
mod state;

pub use controller::{Controller, ControllerId, ControllerKind};
pub use history::{CycleHistory, StateTransition};
pub use state::{ColorLabel, SignalState, StateError, MAX_COLOR_LEN};
