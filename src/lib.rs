//! FormGrid Library
//!
//! Grid geometry for a visual form-layout editor: rows and columns made of
//! content tracks and automatically managed gap tracks, components placed
//! in logical cell coordinates, structural edits that keep the alternation
//! consistent, pixel measurement and a JSON document format.
//!
//! ```
//! use formgrid::{Axis, Component, Grid, Placement};
//!
//! let mut grid = Grid::new(1, 2)?;
//! grid.add_component(Component::new("name").with_preferred(120, 20), Placement::at(0, 1))?;
//! grid.insert_tracks(Axis::Row, 0, false)?;
//! assert_eq!(grid.logical_row_count(), 2);
//! # Ok::<(), formgrid::GridError>(())
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{GridError, GridResult};
pub use grid::{Grid, MeasurableGrid};
pub use models::{Axis, Component, ComponentId, LayoutInfo, Placement, Track, TrackKind, TrackSpec};
