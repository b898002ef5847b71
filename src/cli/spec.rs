//! Track spec normalization command.

use crate::cli::common::{AxisArg, CliResult};
use crate::parser::normalize;
use clap::Args;

/// Print the canonical form of a track spec
#[derive(Debug, Clone, Args)]
pub struct SpecArgs {
    /// Track spec, e.g. "d:grow" or "left:max(pref;50px)"
    #[arg(value_name = "SPEC")]
    pub spec: String,

    /// Axis the spec belongs to (alignment names differ per axis)
    #[arg(short, long, value_enum, default_value = "column")]
    pub axis: AxisArg,
}

impl SpecArgs {
    /// Execute the spec command
    pub fn execute(&self) -> CliResult<()> {
        println!("{}", normalize(self.axis.into(), &self.spec)?);
        Ok(())
    }
}
