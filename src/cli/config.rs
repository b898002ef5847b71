//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Screen resolution in dots per inch
    #[arg(long)]
    dpi: Option<f64>,

    /// Average dialog font character width in pixels
    #[arg(long)]
    char_width: Option<f64>,

    /// Dialog font character height in pixels
    #[arg(long)]
    char_height: Option<f64>,

    /// Spec of inserted content tracks
    #[arg(long, value_name = "SPEC")]
    content_spec: Option<String>,

    /// Spec of inserted gap tracks
    #[arg(long, value_name = "SPEC")]
    gap_spec: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }
        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.dpi.is_none()
            && self.char_width.is_none()
            && self.char_height.is_none()
            && self.content_spec.is_none()
            && self.gap_spec.is_none()
    }

    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --dpi, --char-width, --char-height, --content-spec, or --gap-spec",
            ));
        }

        let mut config = load_config(config_path)?;
        if let Some(dpi) = self.dpi {
            config.metrics.dpi = dpi;
        }
        if let Some(width) = self.char_width {
            config.metrics.dialog_char_width = width;
        }
        if let Some(height) = self.char_height {
            config.metrics.dialog_char_height = height;
        }
        if let Some(spec) = &self.content_spec {
            config.tracks.content_spec.clone_from(spec);
        }
        if let Some(spec) = &self.gap_spec {
            config.tracks.gap_spec.clone_from(spec);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let result = match config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        result.map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Metrics:");
    println!("  DPI:                {}", config.metrics.dpi);
    println!("  Dialog char width:  {}", config.metrics.dialog_char_width);
    println!("  Dialog char height: {}", config.metrics.dialog_char_height);
    println!();

    println!("Tracks:");
    println!("  Content spec: {}", config.tracks.content_spec);
    println!("  Gap spec:     {}", config.tracks.gap_spec);
    println!();
}
