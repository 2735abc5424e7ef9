//! Cycle history tracking.
//!
//! Every advance of a controller yields a [`StateTransition`]. A
//! [`CycleHistory`] keeps them in the order they happened, across all
//! controllers of a simulation.

use super::controller::ControllerId;
use super::state::SignalState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single controller advance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Controller that advanced
    pub controller: ControllerId,
    /// Display label of that controller
    pub label: String,
    /// The state being left
    pub from: SignalState,
    /// The state now active
    pub to: SignalState,
    /// The controller's own cycle number, starting at 1
    pub cycle: usize,
    /// When the advance happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, immutable log of transitions.
///
/// `record` returns a new history with the transition appended and leaves
/// the original untouched.
///
/// # Example
///
/// ```rust
/// use signalcycle::core::{Controller, ControllerKind, CycleHistory};
///
/// let mut light = Controller::new(ControllerKind::Urban);
/// let history = CycleHistory::new()
///     .record(light.advance())
///     .record(light.advance());
///
/// let colors: Vec<&str> = history.path(light.id()).iter().map(|s| s.color()).collect();
/// assert_eq!(colors, ["RED", "GREEN", "YELLOW"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CycleHistory {
    transitions: Vec<StateTransition>,
}

impl CycleHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions made by one controller, oldest first.
    pub fn for_controller(&self, id: ControllerId) -> Vec<&StateTransition> {
        self.transitions
            .iter()
            .filter(|t| t.controller == id)
            .collect()
    }

    /// States visited by one controller.
    ///
    /// Starts with the state it was in before its first recorded advance,
    /// followed by the target of every advance.
    pub fn path(&self, id: ControllerId) -> Vec<&SignalState> {
        let own = self.for_controller(id);
        let mut path = Vec::with_capacity(own.len() + 1);
        if let Some(first) = own.first() {
            path.push(&first.from);
        }
        path.extend(own.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and the last recorded transition.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

impl Extend<StateTransition> for CycleHistory {
    fn extend<I: IntoIterator<Item = StateTransition>>(&mut self, iter: I) {
        for transition in iter {
            self.push(transition);
        }
    }
}
