//! Row and column insertion/deletion with automatic gap management.
//!
//! Content and gap tracks alternate on every axis: content tracks sit at odd
//! one-based positions, gaps at even ones, and each axis starts and ends with
//! content. Insertion always adds a gap/content pair so the alternation
//! holds. Deletion removes the content track and then the gap that would
//! otherwise be left dangling, unless the content on the gap's far side is
//! still occupied. Collapsing that gap would merge two rows that both carry
//! components, so the gap stays and the axis keeps an even track count until
//! the user cleans it up. Logical indices keep addressing content tracks in
//! that state; they are looked up rather than computed as `2k + 1`.
//!
//! Every edit is validated before the first track is touched and finishes by
//! re-deriving all placements from the engine.

use crate::config::TrackConfig;
use crate::engine::TrackLayout;
use crate::error::{GridError, GridResult};
use crate::models::{Axis, ComponentId, Placement, TrackKind};
use crate::services::constraint_translator;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Number of tracks added by one insertion (a gap and a content track).
pub const TRACKS_PER_INSERT: usize = 2;

/// Applies structural edits to a track layout and keeps placements in sync.
pub struct GridMutator<'a> {
    layout: &'a mut TrackLayout,
    placements: &'a mut BTreeMap<ComponentId, Placement>,
    tracks: &'a TrackConfig,
}

impl<'a> GridMutator<'a> {
    /// Creates a mutator over a layout and its placement table.
    pub fn new(
        layout: &'a mut TrackLayout,
        placements: &'a mut BTreeMap<ComponentId, Placement>,
        tracks: &'a TrackConfig,
    ) -> Self {
        Self {
            layout,
            placements,
            tracks,
        }
    }

    /// Inserts a new content track next to content track `index`.
    ///
    /// With `before` the new track takes logical index `index` and the old
    /// one moves to `index + 1`; otherwise the new track becomes
    /// `index + 1`. The pair is laid out as content, gap, content so the
    /// alternation holds either way.
    ///
    /// Returns the number of tracks inserted.
    pub fn insert_tracks(&mut self, axis: Axis, index: usize, before: bool) -> GridResult<usize> {
        let position = self.content_position(axis, index)?;
        let gap = self.tracks.gap_track(axis)?;
        let content = self.tracks.content_track(axis)?;

        if before {
            self.layout.insert_or_append(axis, position, gap);
            self.layout.insert_or_append(axis, position, content);
        } else {
            self.layout.insert_or_append(axis, position + 1, gap);
            self.layout.insert_or_append(axis, position + 2, content);
        }

        debug!(
            %axis,
            index,
            before,
            tracks = self.layout.track_count(axis),
            "inserted content track"
        );
        constraint_translator::resync(self.layout, self.placements);
        Ok(TRACKS_PER_INSERT)
    }

    /// Deletes content track `index` and, when possible, its orphaned gap.
    pub fn delete_track(&mut self, axis: Axis, index: usize) -> GridResult<()> {
        let position = self.content_position(axis, index)?;
        if self.layout.content_count(axis) == 1 {
            return Err(GridError::LastTrackViolation { axis });
        }
        if self.layout.origin_at(axis, position).is_some() {
            return Err(GridError::TrackOccupied { axis, index });
        }

        let was_last = position == self.layout.track_count(axis);
        self.layout.remove_track(axis, position);

        // Removing a content track always leaves a gap dangling: at the end
        // of the axis when the track was last, otherwise doubled against (or
        // leading before) the gap that preceded it. Positions are post-removal.
        let (gap, far_side) = if was_last {
            (position - 1, position.checked_sub(2))
        } else {
            (position, Some(position + 1))
        };
        self.remove_orphaned_gap(axis, gap, far_side);

        debug!(
            %axis,
            index,
            tracks = self.layout.track_count(axis),
            "deleted content track"
        );
        constraint_translator::resync(self.layout, self.placements);
        Ok(())
    }

    fn remove_orphaned_gap(&mut self, axis: Axis, gap: usize, far_side: Option<usize>) {
        if self.layout.kind_at(axis, gap) != Some(TrackKind::Gap) {
            return;
        }

        let far_side_empty = far_side
            .filter(|&position| self.layout.kind_at(axis, position) == Some(TrackKind::Content))
            .is_some_and(|position| self.layout.is_track_empty(axis, position));

        if far_side_empty && self.layout.origin_at(axis, gap).is_none() {
            self.layout.remove_track(axis, gap);
        } else {
            warn!(%axis, gap, "keeping dangling gap track next to occupied content");
        }
    }

    /// Validates a logical index and returns its one-based track position.
    fn content_position(&self, axis: Axis, index: usize) -> GridResult<usize> {
        self.layout
            .content_position(axis, index)
            .ok_or_else(|| GridError::IndexOutOfRange {
                axis,
                index,
                count: self.layout.content_count(axis),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellConstraints, Track};
    use crate::parser::track_spec;

    fn layout_with_rows(rows: usize) -> TrackLayout {
        let config = TrackConfig::default();
        let mut tracks = Vec::new();
        for row in 0..rows {
            if row > 0 {
                tracks.push(config.gap_track(Axis::Row).unwrap());
            }
            tracks.push(config.content_track(Axis::Row).unwrap());
        }
        TrackLayout::new(tracks, vec![config.content_track(Axis::Column).unwrap()])
    }

    fn kinds(layout: &TrackLayout, axis: Axis) -> Vec<TrackKind> {
        layout.tracks(axis).iter().map(|t| t.kind).collect()
    }

    fn place(
        layout: &mut TrackLayout,
        placements: &mut BTreeMap<ComponentId, Placement>,
        id: &str,
        placement: Placement,
    ) {
        layout.set_constraints(id.into(), constraint_translator::to_underlying(&placement));
        placements.insert(id.into(), placement);
    }

    #[test]
    fn test_insert_after_single_row() {
        let mut layout = layout_with_rows(1);
        let mut placements = BTreeMap::new();
        let config = TrackConfig::default();

        let inserted = GridMutator::new(&mut layout, &mut placements, &config)
            .insert_tracks(Axis::Row, 0, false)
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(
            kinds(&layout, Axis::Row),
            vec![TrackKind::Content, TrackKind::Gap, TrackKind::Content]
        );
        assert_eq!(
            layout.track(Axis::Row, 2).unwrap().spec,
            track_spec::decode(Axis::Row, "3dlu").unwrap()
        );
    }

    #[test]
    fn test_insert_before_shifts_placements() {
        let mut layout = layout_with_rows(2);
        let mut placements = BTreeMap::new();
        place(&mut layout, &mut placements, "first", Placement::at(0, 0));
        place(&mut layout, &mut placements, "second", Placement::at(1, 0));
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .insert_tracks(Axis::Row, 1, true)
            .unwrap();

        assert_eq!(layout.track_count(Axis::Row), 5);
        assert_eq!(placements[&"first".into()], Placement::at(0, 0));
        assert_eq!(placements[&"second".into()], Placement::at(2, 0));
        assert!(layout.is_track_empty(Axis::Row, 3));
    }

    #[test]
    fn test_insert_rejects_bad_index() {
        let mut layout = layout_with_rows(2);
        let mut placements = BTreeMap::new();
        let config = TrackConfig::default();
        let before = layout.clone();

        let result =
            GridMutator::new(&mut layout, &mut placements, &config).insert_tracks(Axis::Row, 2, true);

        assert_eq!(
            result,
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: 2,
                count: 2
            })
        );
        assert_eq!(layout, before);
    }

    #[test]
    fn test_insert_with_invalid_config_changes_nothing() {
        let mut layout = layout_with_rows(1);
        let mut placements = BTreeMap::new();
        let config = TrackConfig {
            content_spec: "d:grow".to_string(),
            gap_spec: "bogus".to_string(),
        };
        let before = layout.clone();

        let result =
            GridMutator::new(&mut layout, &mut placements, &config).insert_tracks(Axis::Row, 0, false);

        assert!(matches!(result, Err(GridError::InvalidSpec { .. })));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_delete_middle_row_removes_gap() {
        let mut layout = layout_with_rows(3);
        let mut placements = BTreeMap::new();
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .delete_track(Axis::Row, 1)
            .unwrap();

        assert_eq!(
            kinds(&layout, Axis::Row),
            vec![TrackKind::Content, TrackKind::Gap, TrackKind::Content]
        );
    }

    #[test]
    fn test_delete_keeps_gap_next_to_occupied_row() {
        let mut layout = layout_with_rows(3);
        let mut placements = BTreeMap::new();
        place(&mut layout, &mut placements, "bottom", Placement::at(2, 0));
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .delete_track(Axis::Row, 1)
            .unwrap();

        assert_eq!(
            kinds(&layout, Axis::Row),
            vec![
                TrackKind::Content,
                TrackKind::Gap,
                TrackKind::Gap,
                TrackKind::Content
            ]
        );
        assert_eq!(placements[&"bottom".into()], Placement::at(1, 0));
    }

    #[test]
    fn test_delete_last_row_uses_preceding_gap() {
        let mut layout = layout_with_rows(2);
        let mut placements = BTreeMap::new();
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .delete_track(Axis::Row, 1)
            .unwrap();

        assert_eq!(kinds(&layout, Axis::Row), vec![TrackKind::Content]);
    }

    #[test]
    fn test_delete_last_row_keeps_gap_when_first_row_occupied() {
        let mut layout = layout_with_rows(2);
        let mut placements = BTreeMap::new();
        place(&mut layout, &mut placements, "top", Placement::at(0, 0));
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .delete_track(Axis::Row, 1)
            .unwrap();

        assert_eq!(
            kinds(&layout, Axis::Row),
            vec![TrackKind::Content, TrackKind::Gap]
        );
    }

    #[test]
    fn test_delete_guards() {
        let config = TrackConfig::default();

        let mut layout = layout_with_rows(1);
        let mut placements = BTreeMap::new();
        assert_eq!(
            GridMutator::new(&mut layout, &mut placements, &config).delete_track(Axis::Row, 0),
            Err(GridError::LastTrackViolation { axis: Axis::Row })
        );

        let mut layout = layout_with_rows(2);
        place(&mut layout, &mut placements, "field", Placement::at(1, 0));
        let before = layout.clone();
        assert_eq!(
            GridMutator::new(&mut layout, &mut placements, &config).delete_track(Axis::Row, 1),
            Err(GridError::TrackOccupied {
                axis: Axis::Row,
                index: 1
            })
        );
        assert_eq!(layout, before);
    }

    #[test]
    fn test_delete_shrinks_spanning_placement() {
        let mut layout = layout_with_rows(3);
        let mut placements = BTreeMap::new();
        place(
            &mut layout,
            &mut placements,
            "tall",
            Placement::at(0, 0).with_span(3, 1),
        );
        let config = TrackConfig::default();

        GridMutator::new(&mut layout, &mut placements, &config)
            .delete_track(Axis::Row, 1)
            .unwrap();

        // the shrunk span no longer reaches the far row, so the gap goes too
        assert_eq!(layout.track_count(Axis::Row), 3);
        assert_eq!(
            layout.constraints(&"tall".into()),
            Some(CellConstraints::new(1, 1, 1, 2))
        );
        assert_eq!(placements[&"tall".into()], Placement::at(0, 0).with_span(2, 1));
    }

    #[test]
    fn test_transient_state_stays_editable() {
        let mut layout = layout_with_rows(3);
        let mut placements = BTreeMap::new();
        place(&mut layout, &mut placements, "bottom", Placement::at(2, 0));
        let config = TrackConfig::default();
        let mut mutator = GridMutator::new(&mut layout, &mut placements, &config);
        mutator.delete_track(Axis::Row, 1).unwrap();

        // logical row 1 now lives at position 4, not 2 * 1 + 1
        assert_eq!(mutator.insert_tracks(Axis::Row, 1, true), Ok(2));
        assert_eq!(
            mutator.delete_track(Axis::Row, 2),
            Err(GridError::TrackOccupied {
                axis: Axis::Row,
                index: 2
            })
        );

        assert_eq!(
            kinds(&layout, Axis::Row),
            vec![
                TrackKind::Content,
                TrackKind::Gap,
                TrackKind::Gap,
                TrackKind::Content,
                TrackKind::Gap,
                TrackKind::Content
            ]
        );
        assert_eq!(placements[&"bottom".into()], Placement::at(2, 0));
    }

    #[test]
    fn test_columns_are_independent() {
        let config = TrackConfig::default();
        let mut layout = TrackLayout::new(
            vec![config.content_track(Axis::Row).unwrap()],
            vec![
                config.content_track(Axis::Column).unwrap(),
                Track::gap(track_spec::decode(Axis::Column, "3dlu").unwrap()),
                config.content_track(Axis::Column).unwrap(),
            ],
        );
        let mut placements = BTreeMap::new();

        GridMutator::new(&mut layout, &mut placements, &config)
            .insert_tracks(Axis::Column, 1, false)
            .unwrap();

        assert_eq!(layout.track_count(Axis::Column), 5);
        assert_eq!(layout.track_count(Axis::Row), 1);
    }
}
