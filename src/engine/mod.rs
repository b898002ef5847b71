//! Underlying one-based track engine.
//!
//! The engine addresses every track, gap or content, by its one-based
//! position and stores component regions in those coordinates. The logical
//! grid in [`crate::grid`] is a view over it.

pub mod sizing;
pub mod track_layout;

pub use track_layout::TrackLayout;
