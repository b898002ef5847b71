//! Logical placements ↔ underlying track constraints.
//!
//! Logical coordinates are zero-based and count content tracks only. The
//! underlying engine is one-based and counts every track. While content and
//! gaps alternate, logical index `k` lives at track position `2k + 1`; the
//! layout-aware conversions look up the actual content track instead, so
//! they stay correct on an axis that still carries a retained gap. Spans
//! are carried over unchanged.

use crate::engine::TrackLayout;
use crate::models::{Axis, CellConstraints, ComponentId, Placement};
use std::collections::BTreeMap;

/// One-based track position of a logical index on an alternating axis.
#[must_use]
pub const fn track_position(logical: usize) -> usize {
    logical * 2 + 1
}

/// Logical index of a one-based track position on an alternating axis.
#[must_use]
pub const fn logical_index(position: usize) -> usize {
    (position - 1) / 2
}

/// Converts a logical placement to engine constraints, assuming both axes
/// alternate.
#[must_use]
pub const fn to_underlying(placement: &Placement) -> CellConstraints {
    CellConstraints::new(
        track_position(placement.column),
        track_position(placement.row),
        placement.column_span,
        placement.row_span,
    )
}

/// Converts engine constraints back to a logical placement, assuming both
/// axes alternate.
#[must_use]
pub const fn from_underlying(constraints: &CellConstraints) -> Placement {
    Placement {
        row: logical_index(constraints.row),
        column: logical_index(constraints.column),
        row_span: constraints.row_span,
        column_span: constraints.column_span,
    }
}

/// Converts a logical placement to engine constraints on `layout`.
///
/// Returns `None` when the start row or column does not exist.
#[must_use]
pub fn to_constraints(layout: &TrackLayout, placement: &Placement) -> Option<CellConstraints> {
    Some(CellConstraints::new(
        layout.content_position(Axis::Column, placement.column)?,
        layout.content_position(Axis::Row, placement.row)?,
        placement.column_span,
        placement.row_span,
    ))
}

/// Converts engine constraints on `layout` back to a logical placement.
#[must_use]
pub fn to_placement(layout: &TrackLayout, constraints: &CellConstraints) -> Placement {
    Placement {
        row: layout.content_ordinal(Axis::Row, constraints.row),
        column: layout.content_ordinal(Axis::Column, constraints.column),
        row_span: constraints.row_span,
        column_span: constraints.column_span,
    }
}

/// Re-derives every placement from the engine's constraint table.
///
/// Cached placements are never trusted after a structural edit: the engine
/// may have shifted or shrunk a region while adjusting its tracks.
pub fn resync(layout: &TrackLayout, placements: &mut BTreeMap<ComponentId, Placement>) {
    for (id, placement) in placements.iter_mut() {
        if let Some(constraints) = layout.constraints(id) {
            let synced = to_placement(layout, &constraints);
            if synced != *placement {
                tracing::trace!(component = %id, ?placement, ?synced, "placement moved");
                *placement = synced;
            }
        }
    }
}
