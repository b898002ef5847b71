//! Measured pixel geometry of a grid.

use crate::models::track::Axis;
use serde::{Deserialize, Serialize};

/// Read-only snapshot produced by measuring a grid.
///
/// Each origin list holds one entry per logical row/column followed by the
/// trailing edge, so it is one longer than the logical track count. A new
/// snapshot is taken per query; it is never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    /// Top edge of every logical row, then the bottom edge of the last row
    pub row_origins: Vec<i32>,
    /// Left edge of every logical column, then the right edge of the last one
    pub column_origins: Vec<i32>,
}

impl LayoutInfo {
    /// Origins along an axis.
    #[must_use]
    pub fn origins(&self, axis: Axis) -> &[i32] {
        match axis {
            Axis::Row => &self.row_origins,
            Axis::Column => &self.column_origins,
        }
    }

    /// Total extent along an axis (trailing edge minus leading edge).
    #[must_use]
    pub fn extent(&self, axis: Axis) -> i32 {
        let origins = self.origins(axis);
        match (origins.first(), origins.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }
}
