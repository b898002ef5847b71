//! Grid inspection command.

use crate::cli::common::{load_config, CliError, CliResult, LoadedGrid};
use crate::grid::{Grid, MeasurableGrid};
use crate::models::{Axis, Dimension, TrackKind};
use crate::parser::encode;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Print tracks, components and measured grid lines
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

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
struct InspectOutput {
    name: String,
    width: i32,
    height: i32,
    rows: AxisOutput,
    columns: AxisOutput,
    components: Vec<ComponentOutput>,
}

#[derive(Debug, Serialize)]
struct AxisOutput {
    count: usize,
    tracks: Vec<TrackOutput>,
    grid_lines: Vec<i32>,
}

#[derive(Debug, Serialize)]
struct TrackOutput {
    position: usize,
    kind: TrackKind,
    spec: String,
    /// False when the track breaks the content/gap alternation
    regular: bool,
}

#[derive(Debug, Serialize)]
struct ComponentOutput {
    id: String,
    row: usize,
    column: usize,
    row_span: usize,
    column_span: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let LoadedGrid {
            mut grid, metadata, ..
        } = LoadedGrid::load(&self.file, &config)?;

        if let (Some(width), Some(height)) = (self.width, self.height) {
            grid.set_container_size(Some(Dimension::new(width, height)));
        }

        let layout = grid.measure();
        let output = InspectOutput {
            name: metadata.name,
            width: layout.extent(Axis::Column),
            height: layout.extent(Axis::Row),
            rows: axis_output(&grid, Axis::Row),
            columns: axis_output(&grid, Axis::Column),
            components: grid
                .components()
                .map(|(component, placement)| ComponentOutput {
                    id: component.id.to_string(),
                    row: placement.row,
                    column: placement.column,
                    row_span: placement.row_span,
                    column_span: placement.column_span,
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print_human_readable(&output);
        }
        Ok(())
    }
}

fn axis_output(grid: &Grid, axis: Axis) -> AxisOutput {
    let tracks = (1..=grid.track_count(axis))
        .filter_map(|position| {
            let track = grid.tracks(axis).get(position - 1)?;
            Some(TrackOutput {
                position,
                kind: track.kind,
                spec: encode(&track.spec),
                regular: track.kind == TrackKind::for_position(position),
            })
        })
        .collect();

    AxisOutput {
        count: grid.logical_count(axis),
        tracks,
        grid_lines: grid.grid_lines(axis),
    }
}

fn print_human_readable(output: &InspectOutput) {
    println!("Grid: {}", output.name);
    println!("Rows: {}  Columns: {}", output.rows.count, output.columns.count);
    println!("Size: {}x{} px", output.width, output.height);

    for (label, axis) in [("Row", &output.rows), ("Column", &output.columns)] {
        println!();
        println!("{label} tracks:");
        for track in &axis.tracks {
            let kind = match track.kind {
                TrackKind::Content => "content",
                TrackKind::Gap => "gap",
            };
            let marker = if track.regular { "" } else { "  (out of alternation)" };
            println!("  {:>3}  {:<7}  {}{}", track.position, kind, track.spec, marker);
        }
        let lines: Vec<String> = axis.grid_lines.iter().map(ToString::to_string).collect();
        println!("  grid lines: {}", lines.join(" "));
    }

    println!();
    if output.components.is_empty() {
        println!("Components: (none)");
    } else {
        println!("Components:");
        for c in &output.components {
            println!(
                "  {}  row {} col {}  span {}x{}",
                c.id, c.row, c.column, c.row_span, c.column_span
            );
        }
    }
}
