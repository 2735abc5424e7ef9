//! Manager error types.

use thiserror::Error;

/// Errors that can occur when addressing controllers by index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    /// Index does not name a controller; nothing was changed
    #[error("No controller at index {index}, manager holds {count}")]
    IndexOutOfRange { index: usize, count: usize },
}
