//! Cyclic traffic-light controllers.
//!
//! A controller walks a fixed, non-empty sequence of [`SignalState`]s and
//! wraps back to the first one after the last. Every variant shares the
//! same cycling logic and differs only in its label and its sequence.

use super::history::StateTransition;
use super::state::SignalState;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use uuid::Uuid;

/// Unique identity of a controller, assigned at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ControllerId(Uuid);

impl ControllerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Built-in controller presets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ControllerKind {
    /// RED (30s), GREEN (45s), YELLOW (5s).
    Urban,
    /// DONT_WALK (30s), WALK (15s).
    Pedestrian,
}

impl ControllerKind {
    /// Label printed in front of `Light:`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Pedestrian => "Pedestrian",
        }
    }

    /// The fixed sequence for this preset, initial state first.
    pub fn states(&self) -> Vec<SignalState> {
        let table: &[(&str, u32)] = match self {
            Self::Urban => &[("RED", 30), ("GREEN", 45), ("YELLOW", 5)],
            Self::Pedestrian => &[("DONT_WALK", 30), ("WALK", 15)],
        };

        table
            .iter()
            .map(|&(color, secs)| {
                SignalState::new(color, secs).expect("Preset states are always valid")
            })
            .collect()
    }
}

/// A traffic light cycling through its states forever.
///
/// The state sequence is fixed at construction and never empty, so the
/// current index is always valid.
///
/// # Example
///
/// ```rust
/// use signalcycle::core::{Controller, ControllerKind};
///
/// let mut light = Controller::new(ControllerKind::Urban);
/// assert_eq!(light.current_color(), "RED");
///
/// let mut out = Vec::new();
/// light.cycle(&mut out).unwrap();
///
/// assert_eq!(light.current_color(), "GREEN");
/// assert_eq!(String::from_utf8(out).unwrap(), "Urban Light: GREEN (45s)\n");
/// ```
#[derive(Debug)]
pub struct Controller {
    id: ControllerId,
    kind: Option<ControllerKind>,
    label: String,
    states: Box<[SignalState]>,
    current: usize,
    cycles: usize,
}

impl Controller {
    /// Create a controller from a preset.
    pub fn new(kind: ControllerKind) -> Self {
        Self::from_parts(Some(kind), kind.label().to_string(), kind.states())
    }

    /// Callers must supply a non-empty sequence; `ControllerBuilder` checks this.
    pub(crate) fn from_parts(
        kind: Option<ControllerKind>,
        label: String,
        states: Vec<SignalState>,
    ) -> Self {
        debug_assert!(!states.is_empty());
        Self {
            id: ControllerId::new(),
            kind,
            label,
            states: states.into_boxed_slice(),
            current: 0,
            cycles: 0,
        }
    }

    /// Move to the next state, wrapping after the last one.
    ///
    /// This is the pure half of [`Controller::cycle`]: it updates the
    /// position and returns the transition without writing anything.
    pub fn advance(&mut self) -> StateTransition {
        let from = self.current_state().clone();
        self.current = (self.current + 1) % self.states.len();
        self.cycles += 1;

        tracing::trace!(
            controller = %self.id,
            label = %self.label,
            index = self.current,
            "advanced"
        );

        StateTransition {
            controller: self.id,
            label: self.label.clone(),
            from,
            to: self.current_state().clone(),
            cycle: self.cycles,
            timestamp: Utc::now(),
        }
    }

    /// Advance and write one status line to `out`.
    ///
    /// The line has the form `<Label> Light: <COLOR> (<duration>s)`. The
    /// controller has advanced even if writing the line fails.
    pub fn cycle<W: Write>(&mut self, out: &mut W) -> io::Result<StateTransition> {
        let transition = self.advance();
        writeln!(out, "{self}")?;
        Ok(transition)
    }

    pub fn current_state(&self) -> &SignalState {
        &self.states[self.current]
    }

    pub fn current_color(&self) -> &str {
        self.current_state().color()
    }

    /// Duration of the current state in seconds.
    pub fn current_duration(&self) -> u32 {
        self.current_state().duration()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[SignalState] {
        &self.states
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// The preset this controller was made from, if any.
    pub fn kind(&self) -> Option<ControllerKind> {
        self.kind
    }

    /// Number of advances since construction.
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}

impl From<ControllerKind> for Controller {
    fn from(kind: ControllerKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Light: {}", self.label, self.current_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors_after(kind: ControllerKind, cycles: usize) -> Vec<(String, u32)> {
        let mut controller = Controller::new(kind);
        (0..cycles)
            .map(|_| {
                controller.advance();
                (
                    controller.current_color().to_string(),
                    controller.current_duration(),
                )
            })
            .collect()
    }

    #[test]
    fn urban_starts_red() {
        let controller = Controller::new(ControllerKind::Urban);
        assert_eq!(controller.current_color(), "RED");
        assert_eq!(controller.current_duration(), 30);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.state_count(), 3);
    }

    #[test]
    fn urban_cycles_green_yellow_red() {
        let expected = vec![
            ("GREEN".to_string(), 45),
            ("YELLOW".to_string(), 5),
            ("RED".to_string(), 30),
            ("GREEN".to_string(), 45),
        ];
        assert_eq!(colors_after(ControllerKind::Urban, 4), expected);
    }

    #[test]
    fn pedestrian_cycles_walk_dont_walk() {
        let expected = vec![
            ("WALK".to_string(), 15),
            ("DONT_WALK".to_string(), 30),
            ("WALK".to_string(), 15),
        ];
        assert_eq!(colors_after(ControllerKind::Pedestrian, 3), expected);
    }

    #[test]
    fn advance_reports_transition() {
        let mut controller = Controller::new(ControllerKind::Pedestrian);
        let transition = controller.advance();

        assert_eq!(transition.controller, controller.id());
        assert_eq!(transition.label, "Pedestrian");
        assert_eq!(transition.from.color(), "DONT_WALK");
        assert_eq!(transition.to.color(), "WALK");
        assert_eq!(transition.cycle, 1);
        assert_eq!(controller.cycles(), 1);
    }

    #[test]
    fn cycle_writes_one_line() {
        let mut controller = Controller::new(ControllerKind::Pedestrian);
        let mut out = Vec::new();

        controller.cycle(&mut out).unwrap();
        controller.cycle(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pedestrian Light: WALK (15s)\nPedestrian Light: DONT_WALK (30s)\n"
        );
    }

    #[test]
    fn display_shows_current_state() {
        let controller = Controller::new(ControllerKind::Urban);
        assert_eq!(controller.to_string(), "Urban Light: RED (30s)");
    }

    #[test]
    fn single_state_controller_stays_put() {
        let state = SignalState::new("BLINK", 1).unwrap();
        let mut controller = Controller::from_parts(None, "Beacon".to_string(), vec![state]);

        controller.advance();
        controller.advance();

        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_color(), "BLINK");
        assert_eq!(controller.kind(), None);
    }

    #[test]
    fn controllers_get_distinct_ids() {
        let a = Controller::new(ControllerKind::Urban);
        let b = Controller::new(ControllerKind::Urban);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn kind_serializes_correctly() {
        for kind in [ControllerKind::Urban, ControllerKind::Pedestrian] {
            let json = serde_json::to_string(&kind).unwrap();
            let deserialized: ControllerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, deserialized);
        }
        assert_eq!(
            serde_json::to_string(&ControllerKind::Pedestrian).unwrap(),
            "\"Pedestrian\""
        );
    }

    #[test]
    fn cycle_advances_even_when_write_fails() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut controller = Controller::new(ControllerKind::Urban);

        assert!(controller.cycle(&mut Closed).is_err());
        assert_eq!(controller.current_color(), "GREEN");
        assert_eq!(controller.cycles(), 1);
    }

    #[test]
    fn preset_kind_is_remembered() {
        let controller = Controller::from(ControllerKind::Pedestrian);
        assert_eq!(controller.kind(), Some(ControllerKind::Pedestrian));
        assert_eq!(controller.label(), "Pedestrian");
    }
}
