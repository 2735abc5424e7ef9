//! Signalcycle: deterministic traffic-light controllers
//!
//! A controller walks a fixed, ordered list of colour/duration states and
//! wraps around forever. Durations are labels only; nothing waits on them.
//!
//! # Core Concepts
//!
//! - **SignalState**: a bounds-checked colour label with a duration
//! - **Controller**: one cycling type, configured by a preset or a builder
//! - **Manager**: owning, ordered collection of controllers
//! - **Simulation**: runs a number of cycles and records a history
//!
//! # Example
//!
//! ```rust
//! use signalcycle::core::{Controller, ControllerKind};
//! use signalcycle::manager::Manager;
//!
//! let mut manager = Manager::new();
//! manager.add_controller(Controller::new(ControllerKind::Urban));
//! manager.add_controller(Controller::new(ControllerKind::Pedestrian));
//!
//! let mut out = Vec::new();
//! for _ in 0..3 {
//!     manager.cycle_all(&mut out).unwrap();
//! }
//!
//! assert_eq!(manager.get_controller(0).unwrap().current_color(), "RED");
//! assert_eq!(manager.get_controller(1).unwrap().current_color(), "WALK");
//! ```

pub mod builder;
pub mod core;
pub mod manager;
pub mod simulation;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use crate::core::{Controller, ControllerKind, CycleHistory, SignalState, StateTransition};
pub use manager::{Manager, ManagerError};
pub use simulation::{Simulation, SimulationConfig, SimulationError};
