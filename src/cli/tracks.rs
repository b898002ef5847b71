//! Row and column insertion/deletion commands.

use crate::cli::common::{load_config, AxisArg, CliResult, LoadedGrid};
use crate::grid::MeasurableGrid;
use crate::models::Axis;
use clap::Args;
use std::path::{Path, PathBuf};

/// Insert a row or column next to an existing one
#[derive(Debug, Clone, Args)]
pub struct InsertArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Axis to edit
    #[arg(short, long, value_enum)]
    pub axis: AxisArg,

    /// Logical index of the existing row/column (0-based)
    #[arg(short, long)]
    pub index: usize,

    /// Insert before the existing track instead of after it
    #[arg(long)]
    pub before: bool,
}

/// Delete a row or column
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Axis to edit
    #[arg(short, long, value_enum)]
    pub axis: AxisArg,

    /// Logical index of the row/column to delete (0-based)
    #[arg(short, long)]
    pub index: usize,
}

impl InsertArgs {
    /// Execute the insert command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut loaded = LoadedGrid::load(&self.file, &config)?;
        let axis = Axis::from(self.axis);

        let inserted = loaded.grid.insert_tracks(axis, self.index, self.before)?;
        let count = loaded.grid.logical_count(axis);
        loaded.save()?;

        println!("Inserted {inserted} {axis} tracks ({count} {axis}s)");
        Ok(())
    }
}

impl DeleteArgs {
    /// Execute the delete command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut loaded = LoadedGrid::load(&self.file, &config)?;
        let axis = Axis::from(self.axis);

        let tracks_before = loaded.grid.track_count(axis);
        loaded.grid.delete_track(axis, self.index)?;
        let count = loaded.grid.logical_count(axis);
        // only the content track went away
        let gap_kept = tracks_before - loaded.grid.track_count(axis) == 1;
        loaded.save()?;

        println!("Deleted {axis} {} ({count} {axis}s)", self.index);
        if gap_kept {
            println!("Note: kept a gap next to an occupied {axis}");
        }
        Ok(())
    }
}
