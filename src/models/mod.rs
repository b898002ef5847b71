//! Data models for grids, tracks, components and measured geometry.
//!
//! This module contains the plain data structures shared by the engine,
//! the services and the CLI. Models carry no grid logic of their own.

pub mod component;
pub mod document;
pub mod layout_info;
pub mod placement;
pub mod track;
pub mod track_spec;

// Re-export all model types
pub use component::{Component, ComponentId, Dimension};
pub use document::{ComponentEntry, DocumentMetadata, GridDocument, TrackEntry};
pub use layout_info::LayoutInfo;
pub use placement::{CellConstraints, Placement};
pub use track::{Axis, Track, TrackKind};
pub use track_spec::{Alignment, ComponentSize, ConstantSize, Size, TrackSpec, Unit};
