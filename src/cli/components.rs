//! Component placement commands.

use crate::cli::common::{load_config, CliError, CliResult, LoadedGrid};
use crate::models::{Component, ComponentId, Placement};
use clap::Args;
use std::path::{Path, PathBuf};

/// Place a new component or move an existing one
#[derive(Debug, Clone, Args)]
pub struct PlaceArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Component id (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// First logical row (0-based)
    #[arg(short, long)]
    pub row: usize,

    /// First logical column (0-based)
    #[arg(short, long)]
    pub column: usize,

    /// Rows covered
    #[arg(long, default_value_t = 1)]
    pub row_span: usize,

    /// Columns covered
    #[arg(long, default_value_t = 1)]
    pub column_span: usize,

    /// Preferred width in pixels (new components only)
    #[arg(long, default_value_t = 0)]
    pub width: i32,

    /// Preferred height in pixels (new components only)
    #[arg(long, default_value_t = 0)]
    pub height: i32,
}

/// Remove a component
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Grid document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Component id
    #[arg(long)]
    pub id: String,
}

impl PlaceArgs {
    /// Execute the place command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.width < 0 || self.height < 0 {
            return Err(CliError::validation("Component size cannot be negative"));
        }

        let config = load_config(config_path)?;
        let mut loaded = LoadedGrid::load(&self.file, &config)?;
        let placement =
            Placement::at(self.row, self.column).with_span(self.row_span, self.column_span);
        let id = self
            .id
            .as_deref()
            .map_or_else(ComponentId::generate, ComponentId::from);

        let moved = loaded.grid.component(&id).is_some();
        if moved {
            loaded.grid.set_placement(&id, placement)?;
        } else {
            let component = Component::new(id.clone()).with_preferred(self.width, self.height);
            loaded.grid.add_component(component, placement)?;
        }
        loaded.save()?;

        let verb = if moved { "Moved" } else { "Placed" };
        println!(
            "{verb} {id} at row {} column {} (span {}x{})",
            self.row, self.column, self.row_span, self.column_span
        );
        Ok(())
    }
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut loaded = LoadedGrid::load(&self.file, &config)?;

        let component = loaded.grid.remove_component(&ComponentId::from(self.id.as_str()))?;
        loaded.save()?;

        println!("Removed {}", component.id);
        Ok(())
    }
}
