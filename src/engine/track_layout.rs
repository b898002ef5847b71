//! One-based track lists with a component constraint table.
//!
//! This is the layout engine the logical grid sits on. It knows nothing about
//! the content/gap alternation: it stores tracks, stores where each
//! component sits in track coordinates, and keeps those constraints
//! consistent when tracks are inserted or removed.

use crate::models::{Axis, CellConstraints, ComponentId, Track, TrackKind};
use std::collections::BTreeMap;

/// Track lists of both axes plus the constraint table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    rows: Vec<Track>,
    columns: Vec<Track>,
    constraints: BTreeMap<ComponentId, CellConstraints>,
}

impl TrackLayout {
    /// Creates a layout with the given tracks and no components.
    #[must_use]
    pub const fn new(rows: Vec<Track>, columns: Vec<Track>) -> Self {
        Self {
            rows,
            columns,
            constraints: BTreeMap::new(),
        }
    }

    /// All tracks of an axis in order.
    #[must_use]
    pub fn tracks(&self, axis: Axis) -> &[Track] {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    fn tracks_mut(&mut self, axis: Axis) -> &mut Vec<Track> {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    /// Number of tracks on an axis, gaps included.
    #[must_use]
    pub fn track_count(&self, axis: Axis) -> usize {
        self.tracks(axis).len()
    }

    /// Number of content tracks on an axis.
    #[must_use]
    pub fn content_count(&self, axis: Axis) -> usize {
        self.tracks(axis).iter().filter(|t| t.is_content()).count()
    }

    /// Track at a one-based position.
    #[must_use]
    pub fn track(&self, axis: Axis, position: usize) -> Option<&Track> {
        position
            .checked_sub(1)
            .and_then(|index| self.tracks(axis).get(index))
    }

    /// Kind of the track at a one-based position.
    #[must_use]
    pub fn kind_at(&self, axis: Axis, position: usize) -> Option<TrackKind> {
        self.track(axis, position).map(|track| track.kind)
    }

    /// One-based position of the content track with logical index
    /// `logical`.
    #[must_use]
    pub fn content_position(&self, axis: Axis, logical: usize) -> Option<usize> {
        self.tracks(axis)
            .iter()
            .enumerate()
            .filter(|(_, track)| track.is_content())
            .nth(logical)
            .map(|(index, _)| index + 1)
    }

    /// Number of content tracks before a one-based position, which is the
    /// logical index of the content track at that position.
    #[must_use]
    pub fn content_ordinal(&self, axis: Axis, position: usize) -> usize {
        self.tracks(axis)
            .iter()
            .take(position.saturating_sub(1))
            .filter(|track| track.is_content())
            .count()
    }

    /// Appends a track at the end of an axis.
    pub fn append_track(&mut self, axis: Axis, track: Track) {
        self.tracks_mut(axis).push(track);
    }

    /// Inserts a track at a one-based position, shifting later tracks up.
    ///
    /// Constraints starting at or after `position` move down by one track;
    /// constraints straddling it grow by one.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0 or greater than the track count.
    pub fn insert_track(&mut self, axis: Axis, position: usize, track: Track) {
        self.tracks_mut(axis).insert(position - 1, track);
        self.shift_constraints(axis, position, false);
    }

    /// Appends when `position` is one past the end, inserts otherwise.
    pub fn insert_or_append(&mut self, axis: Axis, position: usize, track: Track) {
        if position == self.track_count(axis) + 1 {
            self.append_track(axis, track);
        } else {
            self.insert_track(axis, position, track);
        }
    }

    /// Removes the track at a one-based position.
    ///
    /// Constraints after it move up by one track; constraints straddling it
    /// shrink by one. Callers must check [`Self::origin_at`] first: a
    /// component whose region starts in the removed track has nowhere to go.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0 or greater than the track count.
    pub fn remove_track(&mut self, axis: Axis, position: usize) -> Track {
        debug_assert!(
            self.origin_at(axis, position).is_none(),
            "removed {axis} track {position} still holds a component origin"
        );
        let track = self.tracks_mut(axis).remove(position - 1);
        self.shift_constraints(axis, position, true);
        track
    }

    fn shift_constraints(&mut self, axis: Axis, position: usize, remove: bool) {
        for constraints in self.constraints.values_mut() {
            let start = constraints.start(axis);
            let end = constraints.end(axis);
            if remove {
                if start > position {
                    *constraints.start_mut(axis) -= 1;
                } else if end >= position {
                    *constraints.span_mut(axis) -= 1;
                }
            } else if start >= position {
                *constraints.start_mut(axis) += 1;
            } else if end >= position {
                *constraints.span_mut(axis) += 1;
            }
        }
    }

    /// First component whose region starts in the given track, if any.
    #[must_use]
    pub fn origin_at(&self, axis: Axis, position: usize) -> Option<&ComponentId> {
        self.constraints
            .iter()
            .find(|(_, cc)| cc.start(axis) == position)
            .map(|(id, _)| id)
    }

    /// Returns true when no component region covers the given track.
    #[must_use]
    pub fn is_track_empty(&self, axis: Axis, position: usize) -> bool {
        !self
            .constraints
            .values()
            .any(|cc| cc.covers(axis, position))
    }

    /// Sets or replaces the constraints of a component.
    pub fn set_constraints(&mut self, id: ComponentId, constraints: CellConstraints) {
        self.constraints.insert(id, constraints);
    }

    /// Drops the constraints of a component.
    pub fn remove_constraints(&mut self, id: &ComponentId) -> Option<CellConstraints> {
        self.constraints.remove(id)
    }

    /// Current constraints of a component.
    #[must_use]
    pub fn constraints(&self, id: &ComponentId) -> Option<CellConstraints> {
        self.constraints.get(id).copied()
    }

    /// All constraints, ordered by component id.
    pub fn iter_constraints(&self) -> impl Iterator<Item = (&ComponentId, &CellConstraints)> {
        self.constraints.iter()
    }
}
