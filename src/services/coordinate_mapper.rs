//! Pixel ↔ track index conversion over measured origins.
//!
//! All functions are pure and work on the origin lists of a
//! [`LayoutInfo`](crate::models::LayoutInfo) snapshot: one origin per track
//! followed by the trailing edge, monotonically non-decreasing.

/// Index `i` with `origins[i] <= coord < origins[i + 1]`.
///
/// Returns `None` when `coord` lies outside `[origins[0], origins[last])`.
/// Zero-sized tracks never match.
#[must_use]
pub fn cell_at(origins: &[i32], coord: i32) -> Option<usize> {
    origins
        .windows(2)
        .position(|edge| coord >= edge[0] && coord < edge[1])
}

/// Size of every track: the difference of adjacent origins.
#[must_use]
pub fn sizes_from_origins(origins: &[i32]) -> Vec<i32> {
    origins.windows(2).map(|edge| edge[1] - edge[0]).collect()
}

/// Origins without the trailing edge, one per track.
#[must_use]
pub fn trim_trailing_origin(origins: &[i32]) -> Vec<i32> {
    origins
        .split_last()
        .map(|(_, rest)| rest.to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINS: [i32; 4] = [0, 20, 26, 50];

    #[test]
    fn test_cell_at_bounds() {
        assert_eq!(cell_at(&ORIGINS, 0), Some(0));
        assert_eq!(cell_at(&ORIGINS, 19), Some(0));
        assert_eq!(cell_at(&ORIGINS, 20), Some(1));
        assert_eq!(cell_at(&ORIGINS, 26), Some(2));
        assert_eq!(cell_at(&ORIGINS, 49), Some(2));
        assert_eq!(cell_at(&ORIGINS, 50), None);
        assert_eq!(cell_at(&ORIGINS, -1), None);
    }

    #[test]
    fn test_cell_at_skips_zero_sized_tracks() {
        assert_eq!(cell_at(&[0, 10, 10, 30], 10), Some(2));
    }

    #[test]
    fn test_cell_at_degenerate_input() {
        assert_eq!(cell_at(&[], 0), None);
        assert_eq!(cell_at(&[5], 5), None);
    }

    #[test]
    fn test_sizes_and_trim() {
        assert_eq!(sizes_from_origins(&ORIGINS), vec![20, 6, 24]);
        assert_eq!(trim_trailing_origin(&ORIGINS), vec![0, 20, 26]);
        assert!(sizes_from_origins(&[7]).is_empty());
        assert!(trim_trailing_origin(&[]).is_empty());
    }
}
