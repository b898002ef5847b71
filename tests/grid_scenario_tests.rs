//! Structural edit scenarios on the grid facade.

use formgrid::config::Config;
use formgrid::{Axis, Component, Grid, GridError, MeasurableGrid, Placement, TrackKind};
use proptest::prelude::*;

mod fixtures;
use fixtures::*;

fn kinds(grid: &Grid, axis: Axis) -> Vec<TrackKind> {
    grid.tracks(axis).iter().map(|track| track.kind).collect()
}

/// Content on odd positions, gaps on even ones, odd length.
fn strictly_alternates(grid: &Grid, axis: Axis) -> bool {
    let tracks = grid.tracks(axis);
    tracks.len() % 2 == 1
        && tracks
            .iter()
            .enumerate()
            .all(|(index, track)| track.kind == TrackKind::for_position(index + 1))
}

#[test]
fn test_insert_after_single_row() {
    let mut grid = test_grid_empty(1, 1);
    assert_eq!(grid.track_count(Axis::Row), 1);

    let inserted = grid.insert_tracks(Axis::Row, 0, false).unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(grid.track_count(Axis::Row), 3);
    assert_eq!(
        kinds(&grid, Axis::Row),
        vec![TrackKind::Content, TrackKind::Gap, TrackKind::Content]
    );
    assert_eq!(grid.logical_row_count(), 2);
    assert_eq!(grid.logical_column_count(), 1);
}

#[test]
fn test_delete_empty_middle_row_removes_gap() {
    let mut grid = test_grid_empty(3, 1);
    grid.add_component(Component::new("top").with_preferred(50, 20), Placement::at(0, 0))
        .unwrap();
    assert_eq!(grid.track_count(Axis::Row), 5);

    grid.delete_track(Axis::Row, 1).unwrap();

    assert_eq!(grid.track_count(Axis::Row), 3);
    assert!(strictly_alternates(&grid, Axis::Row));
    assert_eq!(grid.logical_row_count(), 2);
    assert_eq!(grid.placement(&"top".into()), Some(Placement::at(0, 0)));
}

#[test]
fn test_delete_row_keeps_gap_before_occupied_row() {
    let mut grid = test_grid_empty(3, 1);
    grid.add_component(Component::new("bottom").with_preferred(50, 20), Placement::at(2, 0))
        .unwrap();

    grid.delete_track(Axis::Row, 1).unwrap();

    // dangling gap is retained rather than merging into the occupied row
    assert_eq!(grid.track_count(Axis::Row), 4);
    assert_eq!(
        kinds(&grid, Axis::Row),
        vec![
            TrackKind::Content,
            TrackKind::Gap,
            TrackKind::Gap,
            TrackKind::Content
        ]
    );
    assert_eq!(grid.logical_row_count(), 2);
    assert_eq!(grid.placement(&"bottom".into()), Some(Placement::at(1, 0)));
}

#[test]
fn test_query_at_origin_boundaries() {
    let grid = test_grid_stacked(3);
    let origins = grid.measure().row_origins;
    // rows 20, 30, 40 tall with 6px gaps; a gap belongs to the row above it
    assert_eq!(origins, vec![0, 26, 62, 102]);

    assert_eq!(grid.query(Axis::Row, origins[2]), Some(2));
    assert_eq!(grid.query(Axis::Row, origins[2] - 1), Some(1));
    assert_eq!(grid.query(Axis::Row, 0), Some(0));
    assert_eq!(grid.query(Axis::Row, origins[3]), None);
    assert_eq!(grid.query(Axis::Row, 500), None);
    assert_eq!(grid.query(Axis::Row, -1), None);
}

#[test]
fn test_query_inside_leading_gap() {
    let mut grid = test_grid_empty(3, 1);
    grid.add_component(Component::new("second").with_preferred(50, 30), Placement::at(1, 0))
        .unwrap();
    grid.delete_track(Axis::Row, 0).unwrap();
    assert_eq!(
        kinds(&grid, Axis::Row),
        vec![
            TrackKind::Gap,
            TrackKind::Content,
            TrackKind::Gap,
            TrackKind::Content
        ]
    );

    // 6px leading gap folds into row 0, which then holds the 30px component
    assert_eq!(grid.measure().row_origins, vec![0, 42, 42]);
    assert_eq!(grid.query(Axis::Row, 0), Some(0));
    assert_eq!(grid.query(Axis::Row, 3), Some(0));
    assert_eq!(grid.query(Axis::Row, 41), Some(0));
    assert_eq!(grid.query(Axis::Row, 42), None);
}

#[test]
fn test_insert_before_shifts_later_placements() {
    for k in 0..4 {
        let mut grid = test_grid_stacked(4);
        grid.insert_tracks(Axis::Row, k, true).unwrap();

        for j in 0..4 {
            let expected = if j >= k { j + 1 } else { j };
            assert_eq!(
                grid.placement(&format!("row{j}").as_str().into()),
                Some(Placement::at(expected, 0)),
                "inserting before row {k} moved row{j} wrongly"
            );
        }
        assert!(grid.is_empty(Axis::Row, k).unwrap());
        assert!(strictly_alternates(&grid, Axis::Row));
    }
}

#[test]
fn test_insert_after_leaves_earlier_placements() {
    let mut grid = test_grid_stacked(3);
    grid.insert_tracks(Axis::Row, 1, false).unwrap();

    assert_eq!(grid.placement(&"row0".into()), Some(Placement::at(0, 0)));
    assert_eq!(grid.placement(&"row1".into()), Some(Placement::at(1, 0)));
    assert_eq!(grid.placement(&"row2".into()), Some(Placement::at(3, 0)));
    assert!(grid.is_empty(Axis::Row, 2).unwrap());
}

#[test]
fn test_guard_errors_leave_grid_unchanged() {
    let mut grid = test_grid_contact_form();
    let rows_before = grid.tracks(Axis::Row).to_vec();
    let columns_before = grid.tracks(Axis::Column).to_vec();
    let layout_before = grid.measure();

    assert_eq!(
        grid.insert_tracks(Axis::Row, 3, false),
        Err(GridError::IndexOutOfRange {
            axis: Axis::Row,
            index: 3,
            count: 3
        })
    );
    assert_eq!(
        grid.delete_track(Axis::Column, 7),
        Err(GridError::IndexOutOfRange {
            axis: Axis::Column,
            index: 7,
            count: 2
        })
    );
    assert_eq!(
        grid.delete_track(Axis::Row, 1),
        Err(GridError::TrackOccupied {
            axis: Axis::Row,
            index: 1
        })
    );

    assert_eq!(grid.tracks(Axis::Row), rows_before.as_slice());
    assert_eq!(grid.tracks(Axis::Column), columns_before.as_slice());
    assert_eq!(grid.measure(), layout_before);
}

#[test]
fn test_last_track_cannot_be_deleted() {
    let mut grid = test_grid_empty(1, 2);
    assert_eq!(
        grid.delete_track(Axis::Row, 0),
        Err(GridError::LastTrackViolation { axis: Axis::Row })
    );
    grid.delete_track(Axis::Column, 1).unwrap();
    assert_eq!(
        grid.delete_track(Axis::Column, 0),
        Err(GridError::LastTrackViolation {
            axis: Axis::Column
        })
    );
}

#[test]
fn test_document_roundtrip_after_edits() {
    let mut grid = test_grid_contact_form();
    grid.insert_tracks(Axis::Row, 0, true).unwrap();
    grid.insert_tracks(Axis::Column, 1, false).unwrap();
    grid.delete_track(Axis::Row, 0).unwrap();
    // a column inserted inside the notes area widens it past the logical count
    grid.insert_tracks(Axis::Column, 0, false).unwrap();
    assert_eq!(
        grid.placement(&"notes".into()),
        Some(Placement::at(2, 0).with_span(1, 4))
    );

    let (path, _temp_dir) = create_temp_grid_file(&grid);
    let restored = load_grid(&path);

    for axis in Axis::ALL {
        assert_eq!(restored.tracks(axis), grid.tracks(axis));
    }
    let placements: Vec<_> = grid.components().map(|(c, p)| (c.id.clone(), p)).collect();
    let restored_placements: Vec<_> = restored
        .components()
        .map(|(c, p)| (c.id.clone(), p))
        .collect();
    assert_eq!(placements, restored_placements);
    assert_eq!(restored.measure(), grid.measure());
}

#[test]
fn test_transient_state_roundtrips() {
    let mut grid = test_grid_empty(3, 1);
    grid.add_component(Component::new("bottom").with_preferred(50, 20), Placement::at(2, 0))
        .unwrap();
    grid.delete_track(Axis::Row, 1).unwrap();

    let document = grid.to_document(test_metadata("Transient"));
    let restored = Grid::from_document(&document, Config::default()).unwrap();
    assert_eq!(restored.track_count(Axis::Row), 4);
    assert_eq!(
        restored.placement(&"bottom".into()),
        Some(Placement::at(1, 0))
    );
}

#[derive(Debug, Clone)]
enum Edit {
    Insert {
        axis: Axis,
        index: usize,
        before: bool,
    },
    Delete {
        axis: Axis,
        index: usize,
    },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    let axis = prop_oneof![Just(Axis::Row), Just(Axis::Column)];
    prop_oneof![
        (axis.clone(), 0usize..6, any::<bool>())
            .prop_map(|(axis, index, before)| Edit::Insert { axis, index, before }),
        (axis, 0usize..6).prop_map(|(axis, index)| Edit::Delete { axis, index }),
    ]
}

fn apply(grid: &mut Grid, edit: &Edit) {
    // guard errors are expected for random indices and change nothing
    let _ = match *edit {
        Edit::Insert {
            axis,
            index,
            before,
        } => grid.insert_tracks(axis, index, before).map(|_| ()),
        Edit::Delete { axis, index } => grid.delete_track(axis, index),
    };
}

proptest! {
    #[test]
    fn empty_grid_always_alternates(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut grid = test_grid_empty(2, 2);
        for edit in &edits {
            apply(&mut grid, edit);
            for axis in Axis::ALL {
                prop_assert!(strictly_alternates(&grid, axis), "{axis} broke after {edit:?}");
            }
        }
    }

    #[test]
    fn content_tracks_never_touch(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut grid = test_grid_contact_form();
        for edit in &edits {
            apply(&mut grid, edit);
            for axis in Axis::ALL {
                let kinds = kinds(&grid, axis);
                prop_assert!(grid.logical_count(axis) >= 1);
                prop_assert!(
                    kinds
                        .windows(2)
                        .all(|pair| pair != [TrackKind::Content, TrackKind::Content]),
                    "adjacent {axis} content tracks after {edit:?}"
                );
            }

            let document = grid.to_document(test_metadata("Edited"));
            let restored = Grid::from_document(&document, Config::default());
            prop_assert!(restored.is_ok(), "reload failed after {edit:?}: {restored:?}");
            let restored = restored.unwrap();
            for axis in Axis::ALL {
                prop_assert_eq!(restored.tracks(axis), grid.tracks(axis));
            }
            let placements: Vec<_> = grid.components().map(|(c, p)| (c.id.clone(), p)).collect();
            let reloaded: Vec<_> = restored.components().map(|(c, p)| (c.id.clone(), p)).collect();
            prop_assert_eq!(placements, reloaded);
        }
    }
}
