//! Builder for constructing custom controllers.

use crate::builder::error::BuildError;
use crate::core::{Controller, SignalState};

/// Builder for controllers with a fluent API.
///
/// States are validated in [`ControllerBuilder::build`], which also
/// refuses an empty sequence.
///
/// # Example
///
/// ```rust
/// use signalcycle::builder::ControllerBuilder;
///
/// let light = ControllerBuilder::new()
///     .label("Highway")
///     .state("RED", 60)
///     .state("GREEN", 90)
///     .build()
///     .unwrap();
///
/// assert_eq!(light.state_count(), 2);
/// assert_eq!(light.to_string(), "Highway Light: RED (60s)");
/// ```
#[derive(Debug, Default)]
pub struct ControllerBuilder {
    label: Option<String>,
    states: Vec<(String, u32)>,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            label: None,
            states: Vec::new(),
        }
    }

    /// Set the display label (required).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a state. The first state appended is the initial one.
    pub fn state(mut self, color: impl Into<String>, duration_secs: u32) -> Self {
        self.states.push((color.into(), duration_secs));
        self
    }

    /// Append several states at once.
    pub fn states<I, C>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (C, u32)>,
        C: Into<String>,
    {
        self.states
            .extend(states.into_iter().map(|(color, secs)| (color.into(), secs)));
        self
    }

    /// Build the controller.
    /// Returns an error if the label is missing, no state was added or a
    /// state is invalid.
    pub fn build(self) -> Result<Controller, BuildError> {
        let label = self
            .label
            .filter(|l| !l.trim().is_empty())
            .ok_or(BuildError::MissingLabel)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let states = self
            .states
            .into_iter()
            .map(|(color, secs)| SignalState::new(color, secs))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Controller::from_parts(None, label, states))
    }
}
