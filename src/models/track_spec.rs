//! Structured form of a row or column specification.
//!
//! A spec describes how big a track is ([`Size`]), how components are
//! aligned inside it ([`Alignment`]) and how much of any surplus container
//! space it takes ([`TrackSpec::resize_weight`]). The textual form is handled
//! by [`crate::parser::track_spec`].

use crate::models::track::Axis;
use serde::{Deserialize, Serialize};

/// Growth weight of a track that does not grow.
pub const NO_GROW: f64 = 0.0;

/// Growth weight written as plain `grow`.
pub const DEFAULT_GROW: f64 = 1.0;

/// Default alignment of components inside a track.
///
/// `Start`/`End` read as left/right on columns and top/bottom on rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left (columns) or top (rows)
    Start,
    /// Centered
    Center,
    /// Right (columns) or bottom (rows)
    End,
    /// Stretch to the track size
    Fill,
}

impl Alignment {
    /// Alignment used when a spec omits it.
    #[must_use]
    pub const fn default_for(axis: Axis) -> Self {
        match axis {
            Axis::Column => Self::Fill,
            Axis::Row => Self::Center,
        }
    }

    /// Canonical spelling on the given axis.
    #[must_use]
    pub const fn name(self, axis: Axis) -> &'static str {
        match (self, axis) {
            (Self::Start, Axis::Column) => "left",
            (Self::Start, Axis::Row) => "top",
            (Self::End, Axis::Column) => "right",
            (Self::End, Axis::Row) => "bottom",
            (Self::Center, _) => "center",
            (Self::Fill, _) => "fill",
        }
    }
}

/// Unit of a constant size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Device pixels
    Pixel,
    /// Typographic points (1/72 in)
    Point,
    /// Inches
    Inch,
    /// Millimeters
    Millimeter,
    /// Centimeters
    Centimeter,
    /// Dialog units, scaled from the dialog font. Horizontal on columns,
    /// vertical on rows.
    DialogUnit,
}

impl Unit {
    /// Canonical unit suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixel => "px",
            Self::Point => "pt",
            Self::Inch => "in",
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::DialogUnit => "dlu",
        }
    }
}

/// A fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantSize {
    /// Non-negative magnitude
    pub value: f64,
    /// Unit of `value`
    pub unit: Unit,
}

impl ConstantSize {
    /// Creates a constant size.
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

/// Size measured from the components placed in a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSize {
    /// Largest minimum size
    Minimum,
    /// Largest preferred size
    Preferred,
    /// Preferred size, the editor's default
    Default,
}

impl ComponentSize {
    /// Canonical spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Preferred => "preferred",
            Self::Default => "default",
        }
    }
}

/// Size policy of a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// Fixed length
    Constant(ConstantSize),
    /// Measured from components
    Component(ComponentSize),
    /// Component measure, but never smaller than the bound (`max(p;50dlu)`)
    AtLeast(ComponentSize, ConstantSize),
    /// Component measure, but never larger than the bound (`min(p;50dlu)`)
    AtMost(ComponentSize, ConstantSize),
}

/// Full specification of one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    /// Axis the spec belongs to; decides alignment names and dlu direction
    pub axis: Axis,
    /// Default alignment of components in the track
    pub alignment: Alignment,
    /// Size policy
    pub size: Size,
    /// Share of surplus space, `0.0` for fixed tracks
    pub resize_weight: f64,
}

impl TrackSpec {
    /// Creates a non-growing spec with the axis default alignment.
    #[must_use]
    pub const fn new(axis: Axis, size: Size) -> Self {
        Self {
            axis,
            alignment: Alignment::default_for(axis),
            size,
            resize_weight: NO_GROW,
        }
    }

    /// Sets the alignment.
    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the growth weight.
    #[must_use]
    pub const fn with_resize_weight(mut self, weight: f64) -> Self {
        self.resize_weight = weight;
        self
    }

    /// Returns true when the track takes part in surplus distribution.
    #[must_use]
    pub fn grows(&self) -> bool {
        self.resize_weight > NO_GROW
    }
}
