//! Build errors for controller builders.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Controller label not specified. Call .label(name) before .build()")]
    MissingLabel,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Invalid state: {0}")]
    InvalidState(#[from] StateError),
}
