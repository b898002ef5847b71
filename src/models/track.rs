//! Rows, columns and the axis they live on.

use crate::models::track_spec::TrackSpec;
use serde::{Deserialize, Serialize};

/// Grid axis: tracks along an axis are either all rows or all columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal tracks, stacked top to bottom
    Row,
    /// Vertical tracks, laid out left to right
    Column,
}

impl Axis {
    /// Both axes, rows first.
    pub const ALL: [Self; 2] = [Self::Row, Self::Column];

    /// Lowercase name used in messages and serialized documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a track in the content/gap alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Holds components
    Content,
    /// Pure spacing, managed automatically by the editor
    Gap,
}

impl TrackKind {
    /// Kind expected at a one-based track position when content and gaps
    /// strictly alternate (content on odd positions).
    #[must_use]
    pub const fn for_position(position: usize) -> Self {
        if position % 2 == 1 {
            Self::Content
        } else {
            Self::Gap
        }
    }
}

/// A single row or column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Content or gap
    pub kind: TrackKind,
    /// Size policy, alignment and growth weight
    pub spec: TrackSpec,
}

impl Track {
    /// Creates a content track.
    #[must_use]
    pub const fn content(spec: TrackSpec) -> Self {
        Self {
            kind: TrackKind::Content,
            spec,
        }
    }

    /// Creates a gap track.
    #[must_use]
    pub const fn gap(spec: TrackSpec) -> Self {
        Self {
            kind: TrackKind::Gap,
            spec,
        }
    }

    /// Returns true for content tracks.
    #[must_use]
    pub fn is_content(&self) -> bool {
        self.kind == TrackKind::Content
    }
}
