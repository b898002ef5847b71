//! Cell regions in logical and underlying coordinates.

use crate::models::track::Axis;
use serde::{Deserialize, Serialize};

/// Cell region of a component in logical grid coordinates.
///
/// Zero-based and counting content tracks only: gap tracks are invisible
/// here. Logical index `k` corresponds to track position `2k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// First row (0-based)
    pub row: usize,
    /// First column (0-based)
    pub column: usize,
    /// Number of rows covered, at least 1
    pub row_span: usize,
    /// Number of columns covered, at least 1
    pub column_span: usize,
}

impl Placement {
    /// Single-cell placement.
    #[must_use]
    pub const fn at(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }

    /// Sets both spans.
    #[must_use]
    pub const fn with_span(mut self, row_span: usize, column_span: usize) -> Self {
        self.row_span = row_span;
        self.column_span = column_span;
        self
    }

    /// First logical index along an axis.
    #[must_use]
    pub const fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    /// Span along an axis.
    #[must_use]
    pub const fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_span,
            Axis::Column => self.column_span,
        }
    }
}

/// Cell region in the underlying one-based track list, gaps included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellConstraints {
    /// First column track (1-based)
    pub column: usize,
    /// First row track (1-based)
    pub row: usize,
    /// Number of column tracks covered
    pub column_span: usize,
    /// Number of row tracks covered
    pub row_span: usize,
}

impl CellConstraints {
    /// Creates constraints from one-based origin and spans.
    #[must_use]
    pub const fn new(column: usize, row: usize, column_span: usize, row_span: usize) -> Self {
        Self {
            column,
            row,
            column_span,
            row_span,
        }
    }

    /// First track along an axis.
    #[must_use]
    pub const fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    /// Span along an axis.
    #[must_use]
    pub const fn span(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_span,
            Axis::Column => self.column_span,
        }
    }

    /// Last track along an axis (inclusive).
    #[must_use]
    pub const fn end(&self, axis: Axis) -> usize {
        self.start(axis) + self.span(axis) - 1
    }

    /// Returns true if the region covers the given track position.
    #[must_use]
    pub const fn covers(&self, axis: Axis, position: usize) -> bool {
        self.start(axis) <= position && position <= self.end(axis)
    }

    pub(crate) fn start_mut(&mut self, axis: Axis) -> &mut usize {
        match axis {
            Axis::Row => &mut self.row,
            Axis::Column => &mut self.column,
        }
    }

    pub(crate) fn span_mut(&mut self, axis: Axis) -> &mut usize {
        match axis {
            Axis::Row => &mut self.row_span,
            Axis::Column => &mut self.column_span,
        }
    }
}
