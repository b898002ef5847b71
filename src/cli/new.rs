//! Grid document creation command.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::grid::Grid;
use crate::models::DocumentMetadata;
use crate::services::DocumentService;
use clap::Args;
use std::path::{Path, PathBuf};

/// Create a new grid document
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Number of content rows
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Number of content columns
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Form name stored in the document metadata
    #[arg(long, default_value = "Untitled")]
    pub name: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            )));
        }

        let config = load_config(config_path)?;
        let grid = Grid::with_config(config, self.rows.into(), self.columns.into())?;
        let metadata = DocumentMetadata::new(self.name.clone())
            .map_err(|e| CliError::validation(e.to_string()))?;

        DocumentService::save(&grid.to_document(metadata), &self.output)
            .map_err(|e| CliError::io(format!("Failed to save grid: {e:#}")))?;

        println!(
            "Created {} ({} rows x {} columns)",
            self.output.display(),
            grid.logical_row_count(),
            grid.logical_column_count()
        );
        Ok(())
    }
}
