//! Pixel sizes and origins of tracks.
//!
//! # Algorithm
//!
//! 1. Size every track from its spec: constants through the screen metrics,
//!    component sizes from the single-span components starting in the track,
//!    bounded sizes clamp the component measure against the bound.
//! 2. If a container extent is known and exceeds the total, hand the surplus
//!    to the growing tracks in proportion to their weights.
//! 3. Accumulate origins from 0; the last entry is the trailing edge.

use crate::config::MetricsConfig;
use crate::engine::track_layout::TrackLayout;
use crate::models::{Axis, Component, ComponentId, ComponentSize, Size, Track};
use std::collections::BTreeMap;

/// Computes the pixel size of every track on `axis`.
#[must_use]
pub fn track_sizes(
    layout: &TrackLayout,
    components: &BTreeMap<ComponentId, Component>,
    metrics: &MetricsConfig,
    axis: Axis,
    available: Option<i32>,
) -> Vec<i32> {
    let mut sizes: Vec<i32> = layout
        .tracks(axis)
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let measure = |which: ComponentSize| {
                component_measure(layout, components, axis, index + 1, which)
            };
            match &track.spec.size {
                Size::Constant(constant) => metrics.to_pixels(constant, axis),
                Size::Component(which) => measure(*which),
                Size::AtLeast(which, bound) => measure(*which).max(metrics.to_pixels(bound, axis)),
                Size::AtMost(which, bound) => measure(*which).min(metrics.to_pixels(bound, axis)),
            }
        })
        .collect();

    if let Some(available) = available {
        distribute_surplus(layout.tracks(axis), &mut sizes, available);
    }

    sizes
}

/// Largest component extent among single-span components starting in the
/// track at `position`, 0 for an empty track.
fn component_measure(
    layout: &TrackLayout,
    components: &BTreeMap<ComponentId, Component>,
    axis: Axis,
    position: usize,
    which: ComponentSize,
) -> i32 {
    layout
        .iter_constraints()
        .filter(|(_, cc)| cc.start(axis) == position && cc.span(axis) == 1)
        .filter_map(|(id, _)| components.get(id))
        .map(|component| match which {
            ComponentSize::Minimum => component.minimum.along(axis),
            ComponentSize::Preferred | ComponentSize::Default => component.preferred.along(axis),
        })
        .max()
        .unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation)]
fn distribute_surplus(tracks: &[Track], sizes: &mut [i32], available: i32) {
    let total: i32 = sizes.iter().sum();
    let surplus = available - total;
    if surplus <= 0 {
        return;
    }

    let growing: Vec<usize> = tracks
        .iter()
        .enumerate()
        .filter(|(_, track)| track.spec.grows())
        .map(|(index, _)| index)
        .collect();
    let Some((&last, rest)) = growing.split_last() else {
        return;
    };

    let total_weight: f64 = growing
        .iter()
        .map(|&index| tracks[index].spec.resize_weight)
        .sum();
    let mut handed_out = 0;
    for &index in rest {
        let share =
            (f64::from(surplus) * tracks[index].spec.resize_weight / total_weight).floor() as i32;
        sizes[index] += share;
        handed_out += share;
    }
    sizes[last] += surplus - handed_out;
}

/// Origins of consecutive tracks, starting at 0, plus the trailing edge.
#[must_use]
pub fn track_origins(sizes: &[i32]) -> Vec<i32> {
    let mut origins = Vec::with_capacity(sizes.len() + 1);
    let mut edge = 0;
    origins.push(edge);
    for size in sizes {
        edge += size;
        origins.push(edge);
    }
    origins
}

/// Reduces per-track origins to one origin per content track plus the
/// trailing edge. A gap belongs to the content track before it; gaps ahead
/// of the first content track belong to cell 0, which always starts at the
/// leading edge.
#[must_use]
pub fn logical_origins(tracks: &[Track], origins: &[i32]) -> Vec<i32> {
    let mut logical: Vec<i32> = tracks
        .iter()
        .zip(origins)
        .filter(|(track, _)| track.is_content())
        .map(|(_, &origin)| origin)
        .chain(origins.last().copied())
        .collect();
    if let (Some(first), Some(&leading)) = (logical.first_mut(), origins.first()) {
        *first = leading;
    }
    logical
}
