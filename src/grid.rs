//! The grid facade: track lists, components and their placements.
//!
//! [`Grid`] is the single writer of grid state. Structural edits go through
//! [`GridMutator`], placements are stored in logical coordinates and
//! re-derived from the engine after every edit, and read-only consumers get
//! a [`LayoutInfo`] snapshot from [`MeasurableGrid::measure`].

use crate::config::Config;
use crate::engine::{sizing, TrackLayout};
use crate::error::{GridError, GridResult};
use crate::models::{
    Axis, CellConstraints, Component, ComponentEntry, ComponentId, Dimension, DocumentMetadata,
    GridDocument, LayoutInfo, Placement, Track, TrackKind, TrackSpec,
};
use crate::parser::{decode_tracks, encode_tracks};
use crate::services::constraint_translator;
use crate::services::{coordinate_mapper, GridMutator};
use anyhow::Context;
use std::collections::BTreeMap;

/// Read-only measurement capability of a grid.
pub trait MeasurableGrid {
    /// Measures the grid and returns logical origins for both axes.
    fn measure(&self) -> LayoutInfo;

    /// Number of underlying tracks on an axis, gaps included.
    fn track_count(&self, axis: Axis) -> usize;

    /// Spec of the track at a one-based position.
    fn track_spec(&self, axis: Axis, position: usize) -> Option<&TrackSpec>;
}

/// A two-axis grid of content and gap tracks with placed components.
#[derive(Debug, Clone)]
pub struct Grid {
    layout: TrackLayout,
    components: BTreeMap<ComponentId, Component>,
    placements: BTreeMap<ComponentId, Placement>,
    config: Config,
    container: Option<Dimension>,
}

impl Grid {
    /// Creates a grid with `rows` x `columns` content tracks using the
    /// default configuration. Counts below one are raised to one.
    pub fn new(rows: usize, columns: usize) -> GridResult<Self> {
        Self::with_config(Config::default(), rows, columns)
    }

    /// Creates a grid whose tracks come from `config.tracks`.
    pub fn with_config(config: Config, rows: usize, columns: usize) -> GridResult<Self> {
        let row_tracks = alternating_tracks(&config, Axis::Row, rows)?;
        let column_tracks = alternating_tracks(&config, Axis::Column, columns)?;
        Ok(Self::from_parts(
            TrackLayout::new(row_tracks, column_tracks),
            config,
        ))
    }

    fn from_parts(layout: TrackLayout, config: Config) -> Self {
        Self {
            layout,
            components: BTreeMap::new(),
            placements: BTreeMap::new(),
            config,
            container: None,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a component at a logical placement.
    ///
    /// # Errors
    ///
    /// - [`GridError::DuplicateComponent`] if the id is already placed
    /// - [`GridError::PlacementOutOfBounds`] if the region leaves the grid
    pub fn add_component(&mut self, component: Component, placement: Placement) -> GridResult<()> {
        if self.components.contains_key(&component.id) {
            return Err(GridError::DuplicateComponent {
                component: component.id,
            });
        }

        let constraints = self.validate_placement(&component.id, &placement)?;
        tracing::debug!(component = %component.id, ?placement, "adding component");

        self.layout.set_constraints(component.id.clone(), constraints);
        self.placements.insert(component.id.clone(), placement);
        self.components.insert(component.id.clone(), component);
        Ok(())
    }

    /// Removes a component and its placement.
    pub fn remove_component(&mut self, id: &ComponentId) -> GridResult<Component> {
        let component = self
            .components
            .remove(id)
            .ok_or_else(|| GridError::UnknownComponent {
                component: id.clone(),
            })?;
        self.placements.remove(id);
        self.layout.remove_constraints(id);

        tracing::debug!(component = %id, "removed component");
        Ok(component)
    }

    /// Moves or resizes a placed component.
    pub fn set_placement(&mut self, id: &ComponentId, placement: Placement) -> GridResult<()> {
        if !self.components.contains_key(id) {
            return Err(GridError::UnknownComponent {
                component: id.clone(),
            });
        }

        let constraints = self.validate_placement(id, &placement)?;
        self.layout.set_constraints(id.clone(), constraints);
        self.placements.insert(id.clone(), placement);
        Ok(())
    }

    fn validate_placement(
        &self,
        id: &ComponentId,
        placement: &Placement,
    ) -> GridResult<CellConstraints> {
        let out_of_bounds = || GridError::PlacementOutOfBounds {
            component: id.clone(),
        };

        // spans count underlying tracks, so only the engine-side end is bounded
        if Axis::ALL.into_iter().any(|axis| placement.span(axis) == 0) {
            return Err(out_of_bounds());
        }

        let constraints = constraint_translator::to_constraints(&self.layout, placement)
            .ok_or_else(out_of_bounds)?;
        if Axis::ALL
            .into_iter()
            .any(|axis| constraints.end(axis) > self.layout.track_count(axis))
        {
            return Err(out_of_bounds());
        }
        Ok(constraints)
    }

    /// Inserts a content track next to logical index `index`.
    ///
    /// Returns the number of underlying tracks added.
    pub fn insert_tracks(&mut self, axis: Axis, index: usize, before: bool) -> GridResult<usize> {
        GridMutator::new(&mut self.layout, &mut self.placements, &self.config.tracks)
            .insert_tracks(axis, index, before)
    }

    /// Deletes the content track at logical index `index`.
    pub fn delete_track(&mut self, axis: Axis, index: usize) -> GridResult<()> {
        GridMutator::new(&mut self.layout, &mut self.placements, &self.config.tracks)
            .delete_track(axis, index)
    }

    /// Number of content tracks on an axis.
    #[must_use]
    pub fn logical_count(&self, axis: Axis) -> usize {
        self.layout.content_count(axis)
    }

    /// Number of content rows.
    #[must_use]
    pub fn logical_row_count(&self) -> usize {
        self.logical_count(Axis::Row)
    }

    /// Number of content columns.
    #[must_use]
    pub fn logical_column_count(&self) -> usize {
        self.logical_count(Axis::Column)
    }

    /// Logical index of the cell containing pixel `coord`, measured fresh.
    #[must_use]
    pub fn query(&self, axis: Axis, coord: i32) -> Option<usize> {
        coordinate_mapper::cell_at(self.measure().origins(axis), coord)
    }

    /// Returns true when no component covers logical track `index`.
    pub fn is_empty(&self, axis: Axis, index: usize) -> GridResult<bool> {
        let position = self
            .layout
            .content_position(axis, index)
            .ok_or_else(|| GridError::IndexOutOfRange {
                axis,
                index,
                count: self.logical_count(axis),
            })?;
        Ok(self.layout.is_track_empty(axis, position))
    }

    /// All underlying tracks of an axis.
    #[must_use]
    pub fn tracks(&self, axis: Axis) -> &[Track] {
        self.layout.tracks(axis)
    }

    /// Current placement of a component.
    #[must_use]
    pub fn placement(&self, id: &ComponentId) -> Option<Placement> {
        self.placements.get(id).copied()
    }

    /// A placed component.
    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    /// Every component with its placement, ordered by id.
    pub fn components(&self) -> impl Iterator<Item = (&Component, Placement)> {
        self.components
            .values()
            .filter_map(|component| Some((component, self.placement(&component.id)?)))
    }

    /// Sets the container size used to distribute surplus space, or clears
    /// it to measure at preferred size.
    pub fn set_container_size(&mut self, size: Option<Dimension>) {
        self.container = size;
    }

    /// Origin of every logical cell, without the trailing edge.
    #[must_use]
    pub fn cell_coords(&self, axis: Axis) -> Vec<i32> {
        coordinate_mapper::trim_trailing_origin(self.measure().origins(axis))
    }

    /// Pixel size of every logical cell.
    #[must_use]
    pub fn cell_sizes(&self, axis: Axis) -> Vec<i32> {
        coordinate_mapper::sizes_from_origins(self.measure().origins(axis))
    }

    /// Logical grid lines: cell origins plus the trailing edge.
    #[must_use]
    pub fn grid_lines(&self, axis: Axis) -> Vec<i32> {
        self.measure().origins(axis).to_vec()
    }

    /// Snapshot of the grid as a serializable document.
    #[must_use]
    pub fn to_document(&self, metadata: DocumentMetadata) -> GridDocument {
        let tracks = Axis::ALL
            .into_iter()
            .flat_map(|axis| encode_tracks(axis, self.layout.tracks(axis)))
            .collect();

        let components = self
            .components()
            .map(|(component, placement)| ComponentEntry {
                id: component.id.clone(),
                row: placement.row,
                column: placement.column,
                row_span: placement.row_span,
                column_span: placement.column_span,
                minimum: component.minimum,
                preferred: component.preferred,
            })
            .collect();

        GridDocument {
            metadata,
            tracks,
            components,
        }
    }

    /// Rebuilds a grid from a document.
    ///
    /// Both axes need at least one content track. Components are placed in
    /// document order and validated like [`Self::add_component`].
    pub fn from_document(document: &GridDocument, config: Config) -> anyhow::Result<Self> {
        let rows = decode_tracks(Axis::Row, &document.tracks).context("Invalid row track")?;
        let columns =
            decode_tracks(Axis::Column, &document.tracks).context("Invalid column track")?;

        for (axis, tracks) in [(Axis::Row, &rows), (Axis::Column, &columns)] {
            if !tracks.iter().any(Track::is_content) {
                anyhow::bail!("Document has no {axis} content tracks");
            }
        }

        let mut grid = Self::from_parts(TrackLayout::new(rows, columns), config);
        for entry in &document.components {
            let component = Component {
                id: entry.id.clone(),
                minimum: entry.minimum,
                preferred: entry.preferred,
            };
            let placement = Placement {
                row: entry.row,
                column: entry.column,
                row_span: entry.row_span,
                column_span: entry.column_span,
            };
            grid.add_component(component, placement)
                .with_context(|| format!("Failed to place component '{}'", entry.id))?;
        }

        Ok(grid)
    }
}

impl MeasurableGrid for Grid {
    fn measure(&self) -> LayoutInfo {
        let origins = |axis: Axis| {
            let available = self.container.map(|size| size.along(axis));
            let sizes = sizing::track_sizes(
                &self.layout,
                &self.components,
                &self.config.metrics,
                axis,
                available,
            );
            let track_origins = sizing::track_origins(&sizes);
            sizing::logical_origins(self.layout.tracks(axis), &track_origins)
        };

        LayoutInfo {
            row_origins: origins(Axis::Row),
            column_origins: origins(Axis::Column),
        }
    }

    fn track_count(&self, axis: Axis) -> usize {
        self.layout.track_count(axis)
    }

    fn track_spec(&self, axis: Axis, position: usize) -> Option<&TrackSpec> {
        self.layout.track(axis, position).map(|track| &track.spec)
    }
}

fn alternating_tracks(config: &Config, axis: Axis, count: usize) -> GridResult<Vec<Track>> {
    let content = config.tracks.content_track(axis)?;
    let gap = config.tracks.gap_track(axis)?;

    let mut tracks = vec![content.clone()];
    for _ in 1..count {
        tracks.push(gap.clone());
        tracks.push(content.clone());
    }
    Ok(tracks)
}
