//! Serialized track lists.
//!
//! A grid is written as one ordered list of `(axis, kind, spec)` entries,
//! rows and columns interleaved freely; within an axis the entry order is
//! the track order.

use crate::error::GridResult;
use crate::models::{Axis, Track, TrackEntry};
use crate::parser::track_spec;

/// Encodes the tracks of one axis.
#[must_use]
pub fn encode_tracks(axis: Axis, tracks: &[Track]) -> Vec<TrackEntry> {
    tracks
        .iter()
        .map(|track| TrackEntry {
            axis,
            kind: track.kind,
            spec: track_spec::encode(&track.spec),
        })
        .collect()
}

/// Decodes every entry that belongs to `axis`, preserving order.
///
/// # Errors
///
/// Fails on the first entry whose spec does not parse.
pub fn decode_tracks<'a>(
    axis: Axis,
    entries: impl IntoIterator<Item = &'a TrackEntry>,
) -> GridResult<Vec<Track>> {
    entries
        .into_iter()
        .filter(|entry| entry.axis == axis)
        .map(|entry| -> GridResult<Track> {
            Ok(Track {
                kind: entry.kind,
                spec: track_spec::decode(axis, &entry.spec)?,
            })
        })
        .collect()
}
