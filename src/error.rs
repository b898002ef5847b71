//! Typed errors returned by the grid engine.
//!
//! Every structural edit is validated before the track lists are touched, so
//! an `Err` from any grid operation means nothing was changed.

use crate::models::{Axis, ComponentId};
use thiserror::Error;

/// Errors produced by grid operations and the track spec codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A track spec string could not be parsed.
    #[error("invalid track spec '{spec}': {reason}")]
    InvalidSpec {
        /// The offending input
        spec: String,
        /// What was wrong with it
        reason: String,
    },

    /// A logical index is outside `[0, count)`.
    #[error("{axis} index {index} is out of range (grid has {count} {axis}s)")]
    IndexOutOfRange {
        /// Axis the index refers to
        axis: Axis,
        /// Requested logical index
        index: usize,
        /// Number of content tracks on the axis
        count: usize,
    },

    /// Attempted to delete the only content track on an axis.
    #[error("cannot delete the last remaining {axis}")]
    LastTrackViolation {
        /// Axis that would have been left empty
        axis: Axis,
    },

    /// The content track to delete still holds the origin of a component.
    #[error("{axis} {index} still contains components")]
    TrackOccupied {
        /// Axis of the track
        axis: Axis,
        /// Logical index of the track
        index: usize,
    },

    /// A placement reaches past the end of the grid.
    #[error("placement of component '{component}' does not fit inside the grid")]
    PlacementOutOfBounds {
        /// Component being placed
        component: ComponentId,
    },

    /// A component with the same id is already in the grid.
    #[error("component '{component}' is already placed in the grid")]
    DuplicateComponent {
        /// Conflicting id
        component: ComponentId,
    },

    /// No component with this id is in the grid.
    #[error("component '{component}' is not in the grid")]
    UnknownComponent {
        /// Requested id
        component: ComponentId,
    },
}

impl GridError {
    /// Builds an [`GridError::InvalidSpec`] from the input and a reason.
    pub fn invalid_spec(spec: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::IndexOutOfRange {
            axis: Axis::Row,
            index: 4,
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "row index 4 is out of range (grid has 2 rows)"
        );

        let err = GridError::LastTrackViolation {
            axis: Axis::Column,
        };
        assert_eq!(err.to_string(), "cannot delete the last remaining column");

        let err = GridError::invalid_spec("x:y:z:w", "too many segments");
        assert_eq!(
            err.to_string(),
            "invalid track spec 'x:y:z:w': too many segments"
        );
    }
}
