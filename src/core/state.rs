//! Signal states: a colour label paired with a duration.
//!
//! States are plain values. They are validated once when they are created
//! and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Longest colour label accepted, in characters.
pub const MAX_COLOR_LEN: usize = 9;

/// Errors raised while constructing a state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Colour label must not be empty")]
    EmptyColor,

    #[error("Colour label {label:?} is {len} characters long, limit is {max}")]
    ColorTooLong { label: String, len: usize, max: usize },
}

/// Bounds-checked colour label such as `RED` or `DONT_WALK`.
///
/// # Example
///
/// ```rust
/// use signalcycle::core::{ColorLabel, StateError};
///
/// let red = ColorLabel::new("RED").unwrap();
/// assert_eq!(red.as_str(), "RED");
///
/// assert!(matches!(
///     ColorLabel::new("ULTRAVIOLET"),
///     Err(StateError::ColorTooLong { .. })
/// ));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorLabel(String);

impl ColorLabel {
    /// Validate and wrap a colour label.
    pub fn new(label: impl Into<String>) -> Result<Self, StateError> {
        let label = label.into();
        let len = label.chars().count();

        if len == 0 {
            return Err(StateError::EmptyColor);
        }
        if len > MAX_COLOR_LEN {
            return Err(StateError::ColorTooLong {
                label,
                len,
                max: MAX_COLOR_LEN,
            });
        }

        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColorLabel {
    type Error = StateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorLabel> for String {
    fn from(label: ColorLabel) -> Self {
        label.0
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One position in a controller's sequence.
///
/// The duration is a label only. Nothing ever waits on it.
///
/// # Example
///
/// ```rust
/// use signalcycle::core::SignalState;
///
/// let walk = SignalState::new("WALK", 15).unwrap();
/// assert_eq!(walk.color(), "WALK");
/// assert_eq!(walk.duration(), 15);
/// assert_eq!(walk.to_string(), "WALK (15s)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignalState {
    color: ColorLabel,
    duration: u32,
}

impl SignalState {
    /// Create a state from a colour label and a duration in seconds.
    pub fn new(color: impl Into<String>, duration_secs: u32) -> Result<Self, StateError> {
        Ok(Self {
            color: ColorLabel::new(color)?,
            duration: duration_secs,
        })
    }

    pub fn color(&self) -> &str {
        self.color.as_str()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}s)", self.color, self.duration)
    }
}
