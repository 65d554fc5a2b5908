//! Error types for galaxy construction and editing

use std::fmt;

use crate::galaxy::{LaneId, SystemId};

/// Errors that can occur while building parameters or editing a galaxy
///
/// Generation itself never fails; these are raised by the parameter builder
/// and by the `Galaxy` mutation methods.
#[derive(Debug, Clone, PartialEq)]
pub enum GalaxyError {
    /// Parameter validation failed
    InvalidParameters(String),
    /// Requested star system does not exist
    SystemNotFound(SystemId),
    /// Requested travel lane does not exist
    LaneNotFound(LaneId),
    /// A star system with this ID is already registered
    DuplicateSystem(SystemId),
    /// A travel lane with this ID is already registered
    DuplicateLane(LaneId),
    /// A travel lane would connect a system to itself
    SelfLoop(SystemId),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalaxyError::InvalidParameters(msg) => write!(f, "invalid parameters: {}", msg),
            GalaxyError::SystemNotFound(id) => write!(f, "star system not found: {}", id),
            GalaxyError::LaneNotFound(id) => write!(f, "travel lane not found: {}", id),
            GalaxyError::DuplicateSystem(id) => write!(f, "duplicate star system id: {}", id),
            GalaxyError::DuplicateLane(id) => write!(f, "duplicate travel lane id: {}", id),
            GalaxyError::SelfLoop(id) => {
                write!(f, "travel lane cannot connect system {} to itself", id)
            }
        }
    }
}

impl std::error::Error for GalaxyError {}

/// Result type alias for galaxy operations
pub type Result<T> = std::result::Result<T, GalaxyError>;
