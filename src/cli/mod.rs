//! CLI command handlers for FormGrid.
//!
//! Every grid command loads a document, applies one edit or query through
//! the [`Grid`](crate::grid::Grid) facade and writes the document back.

pub mod common;
pub mod components;
pub mod config;
pub mod inspect;
pub mod new;
pub mod query;
pub mod spec;
pub mod tracks;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use components::{PlaceArgs, RemoveArgs};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use new::NewArgs;
pub use query::QueryArgs;
pub use spec::SpecArgs;
pub use tracks::{DeleteArgs, InsertArgs};
