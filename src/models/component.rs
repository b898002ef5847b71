//! Components placed in the grid.

use crate::models::track::Axis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a component inside one grid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Wraps an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Issues a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrows the id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Dimension {
    /// Creates a dimension.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along an axis: height for rows, width for columns.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }
}

/// A widget on the form, as far as grid measurement is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Identifier, unique within the grid
    pub id: ComponentId,
    /// Smallest usable size
    pub minimum: Dimension,
    /// Natural size
    pub preferred: Dimension,
}

impl Component {
    /// Creates a component whose minimum and preferred sizes are both zero.
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            minimum: Dimension::default(),
            preferred: Dimension::default(),
        }
    }

    /// Sets the preferred size. The minimum is raised to it only if unset.
    #[must_use]
    pub fn with_preferred(mut self, width: i32, height: i32) -> Self {
        self.preferred = Dimension::new(width, height);
        if self.minimum == Dimension::default() {
            self.minimum = self.preferred;
        }
        self
    }

    /// Sets the minimum size.
    #[must_use]
    pub const fn with_minimum(mut self, width: i32, height: i32) -> Self {
        self.minimum = Dimension::new(width, height);
        self
    }
}
