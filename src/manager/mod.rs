//! Owning collection of controllers.
//!
//! The manager keeps controllers in insertion order. Indices stay
//! contiguous: removing one shifts every later controller down by one.

use crate::core::{Controller, StateTransition};
use std::io::{self, Write};
use tracing::{debug, warn};

pub mod error;

pub use error::ManagerError;

/// Owns every controller added to it and drops them with itself.
///
/// # Example
///
/// ```rust
/// use signalcycle::core::{Controller, ControllerKind};
/// use signalcycle::manager::Manager;
///
/// let mut manager = Manager::new();
/// manager.add_controller(Controller::new(ControllerKind::Urban));
/// manager.add_controller(Controller::new(ControllerKind::Pedestrian));
///
/// let mut out = Vec::new();
/// manager.cycle_all(&mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Urban Light: GREEN (45s)\nPedestrian Light: WALK (15s)\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Manager {
    controllers: Vec<Controller>,
}

impl Manager {
    pub fn new() -> Self {
        Self {
            controllers: Vec::new(),
        }
    }

    /// Take ownership of a controller and append it.
    ///
    /// Returns the index it was stored at, always `controller_count() - 1`.
    pub fn add_controller(&mut self, controller: Controller) -> usize {
        debug!(
            controller = %controller.id(),
            label = controller.label(),
            index = self.controllers.len(),
            "controller added"
        );
        self.controllers.push(controller);
        self.controllers.len() - 1
    }

    /// Remove the controller at `index` and hand it back.
    ///
    /// Later controllers move down by one. An out-of-range index leaves
    /// the manager untouched and returns [`ManagerError::IndexOutOfRange`].
    pub fn remove_controller(&mut self, index: usize) -> Result<Controller, ManagerError> {
        let count = self.controllers.len();
        if index >= count {
            warn!(index, count, "remove ignored, index out of range");
            return Err(ManagerError::IndexOutOfRange { index, count });
        }

        let controller = self.controllers.remove(index);
        debug!(
            controller = %controller.id(),
            label = controller.label(),
            index,
            "controller removed"
        );
        Ok(controller)
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Controller at `index`, or `None` when out of range.
    pub fn get_controller(&self, index: usize) -> Option<&Controller> {
        self.controllers.get(index)
    }

    pub fn get_controller_mut(&mut self, index: usize) -> Option<&mut Controller> {
        self.controllers.get_mut(index)
    }

    /// Controllers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Controller> {
        self.controllers.iter()
    }

    /// Cycle every controller once, in insertion order, writing one line each.
    pub fn cycle_all<W: Write>(&mut self, out: &mut W) -> io::Result<Vec<StateTransition>> {
        let mut transitions = Vec::with_capacity(self.controllers.len());
        self.cycle_all_into(out, &mut transitions)?;
        Ok(transitions)
    }

    /// Like [`Manager::cycle_all`], but hands each transition to `sink` as
    /// soon as the controller has advanced.
    ///
    /// A controller counts as advanced even when its line cannot be
    /// written. On a write error the sink already holds that controller's
    /// transition and those of every controller before it; later
    /// controllers are left untouched.
    pub fn cycle_all_into<W, E>(&mut self, out: &mut W, sink: &mut E) -> io::Result<()>
    where
        W: Write,
        E: Extend<StateTransition>,
    {
        for controller in &mut self.controllers {
            sink.extend(Some(controller.advance()));
            writeln!(out, "{controller}")?;
        }
        Ok(())
    }
}
