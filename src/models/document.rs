//! Serialized form of a grid as stored inside a form document.

use crate::models::component::{ComponentId, Dimension};
use crate::models::track::{Axis, TrackKind};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current document schema version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Document metadata.
///
/// # Validation
///
/// - name must be non-empty, max 100 characters
/// - created must be <= modified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Form name
    pub name: String,
    /// Creation timestamp (ISO 8601)
    pub created: DateTime<Utc>,
    /// Last modification timestamp (ISO 8601)
    pub modified: DateTime<Utc>,
    /// Schema version (e.g., "1.0")
    pub version: String,
}

impl DocumentMetadata {
    /// Creates metadata stamped with the current time.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            name,
            created: now,
            modified: now,
            version: DOCUMENT_VERSION.to_string(),
        })
    }

    /// Updates the modification timestamp to now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Checks name and timestamps.
    pub fn validate(&self) -> Result<()> {
        Self::validate_name(&self.name)?;
        if self.modified < self.created {
            anyhow::bail!("Modified timestamp cannot be before created timestamp");
        }
        if self.version != DOCUMENT_VERSION {
            anyhow::bail!(
                "Unsupported document version '{}' (expected {})",
                self.version,
                DOCUMENT_VERSION
            );
        }
        Ok(())
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Form name cannot be empty");
        }

        if name.len() > 100 {
            anyhow::bail!(
                "Form name '{}' exceeds maximum length of 100 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }
}

/// One serialized track: axis, role and canonical spec string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Row or column list this track belongs to
    pub axis: Axis,
    /// Content or gap
    pub kind: TrackKind,
    /// Encoded track spec
    pub spec: String,
}

/// One serialized component with its logical placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component id
    pub id: ComponentId,
    /// First logical row
    pub row: usize,
    /// First logical column
    pub column: usize,
    /// Rows covered
    #[serde(default = "default_span")]
    pub row_span: usize,
    /// Columns covered
    #[serde(default = "default_span")]
    pub column_span: usize,
    /// Minimum size in pixels
    #[serde(default)]
    pub minimum: Dimension,
    /// Preferred size in pixels
    #[serde(default)]
    pub preferred: Dimension,
}

const fn default_span() -> usize {
    1
}

/// A grid as persisted: metadata, ordered track list and placements.
///
/// Tracks of both axes share one list; their relative order within an axis
/// is the track order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    /// File metadata
    pub metadata: DocumentMetadata,
    /// Ordered track list
    pub tracks: Vec<TrackEntry>,
    /// Placed components
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

impl GridDocument {
    /// Track entries belonging to one axis, in order.
    pub fn tracks_for(&self, axis: Axis) -> impl Iterator<Item = &TrackEntry> {
        self.tracks.iter().filter(move |entry| entry.axis == axis)
    }
}
