//! Pixel hit-testing command.

use crate::cli::common::{load_config, AxisArg, CliError, CliResult, LoadedGrid};
use crate::models::{Axis, Dimension};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Find the row or column under a pixel coordinate
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Axis to query
    #[arg(short, long, value_enum)]
    pub axis: AxisArg,

    /// Pixel coordinate along the axis
    #[arg(long, allow_hyphen_values = true)]
    pub coord: i32,

    /// Container width used for measurement
    #[arg(long, requires = "height")]
    pub width: Option<i32>,

    /// Container height used for measurement
    #[arg(long, requires = "width")]
    pub height: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct QueryOutput {
    axis: Axis,
    coord: i32,
    index: Option<usize>,
}

impl QueryArgs {
    /// Execute the query command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut grid = LoadedGrid::load(&self.file, &config)?.grid;
        if let (Some(width), Some(height)) = (self.width, self.height) {
            grid.set_container_size(Some(Dimension::new(width, height)));
        }

        let axis = Axis::from(self.axis);
        let output = QueryOutput {
            axis,
            coord: self.coord,
            index: grid.query(axis, self.coord),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            match output.index {
                Some(index) => println!("{index}"),
                None => println!("none"),
            }
        }
        Ok(())
    }
}
