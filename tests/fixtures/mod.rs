//! Shared test fixtures for grid and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::{TimeZone, Utc};
use formgrid::config::Config;
use formgrid::models::{DocumentMetadata, GridDocument};
use formgrid::services::DocumentService;
use formgrid::{Component, Grid, Placement};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Metadata with deterministic timestamps.
pub fn test_metadata(name: &str) -> DocumentMetadata {
    DocumentMetadata {
        name: name.to_string(),
        created: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        modified: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        version: "1.0".to_string(),
    }
}

/// Empty grid with `rows` x `columns` content tracks.
pub fn test_grid_empty(rows: usize, columns: usize) -> Grid {
    Grid::new(rows, columns).expect("default config is valid")
}

/// Grid with one component per content row, stacked in column 0.
///
/// Component `row{k}` sits in row `k` and is `20 + 10k` pixels tall.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn test_grid_stacked(rows: usize) -> Grid {
    let mut grid = test_grid_empty(rows, 1);
    for row in 0..rows {
        let height = 20 + 10 * row as i32;
        let component = Component::new(format!("row{row}")).with_preferred(100, height);
        grid.add_component(component, Placement::at(row, 0))
            .expect("placement fits");
    }
    grid
}

/// Contact form: labels in column 0, fields in column 1, a notes area
/// spanning both columns on the last row.
pub fn test_grid_contact_form() -> Grid {
    let mut grid = test_grid_empty(3, 2);
    let components = [
        ("name_label", 60, 16, Placement::at(0, 0)),
        ("name", 160, 22, Placement::at(0, 1)),
        ("email_label", 60, 16, Placement::at(1, 0)),
        ("email", 200, 22, Placement::at(1, 1)),
        ("notes", 260, 80, Placement::at(2, 0).with_span(1, 2)),
    ];
    for (id, width, height, placement) in components {
        grid.add_component(Component::new(id).with_preferred(width, height), placement)
            .expect("placement fits");
    }
    grid
}

/// Writes a grid document file and returns its path plus the owning temp dir.
pub fn create_temp_grid_file(grid: &Grid) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("form.grid.json");
    DocumentService::save(&grid.to_document(test_metadata("Test Form")), &path)
        .expect("Failed to write grid file");
    (path, temp_dir)
}

/// Reads a grid document back from disk.
pub fn load_document(path: &Path) -> GridDocument {
    DocumentService::load(path).expect("Failed to load grid file")
}

/// Rebuilds a grid from a document file with default configuration.
pub fn load_grid(path: &Path) -> Grid {
    Grid::from_document(&load_document(path), Config::default()).expect("valid grid document")
}
