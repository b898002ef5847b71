//! Shared plumbing for CLI commands: errors, exit codes and document I/O.

use crate::config::Config;
use crate::error::GridError;
use crate::grid::Grid;
use crate::models::{Axis, DocumentMetadata};
use crate::services::DocumentService;
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad spec, out-of-range index, occupied track)
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<GridError> for CliError {
    fn from(err: GridError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Axis selector on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// Rows
    Row,
    /// Columns
    Column,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Row => Self::Row,
            AxisArg::Column => Self::Column,
        }
    }
}

/// Loads the configuration from `--config` or the platform location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    result.map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// A grid loaded from disk together with the metadata it was saved with.
pub struct LoadedGrid {
    /// Reconstructed grid
    pub grid: Grid,
    /// Metadata to write back on save
    pub metadata: DocumentMetadata,
    /// File the grid came from
    pub path: PathBuf,
}

impl LoadedGrid {
    /// Loads and rebuilds a grid document.
    pub fn load(path: &Path, config: &Config) -> CliResult<Self> {
        let document = DocumentService::load(path)
            .map_err(|e| CliError::io(format!("Failed to load grid: {e:#}")))?;
        let grid = Grid::from_document(&document, config.clone())
            .map_err(|e| CliError::validation(format!("Invalid grid document: {e:#}")))?;

        Ok(Self {
            grid,
            metadata: document.metadata,
            path: path.to_path_buf(),
        })
    }

    /// Writes the grid back to the file it came from.
    pub fn save(mut self) -> CliResult<()> {
        self.metadata.touch();
        let document = self.grid.to_document(self.metadata);
        DocumentService::save(&document, &self.path)
            .map_err(|e| CliError::io(format!("Failed to save grid: {e:#}")))
    }
}
