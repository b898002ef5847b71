//! Application-wide constants.
//!
//! This module defines constants used throughout the crate, including the
//! application name and the default track specs of a fresh grid.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "FormGrid";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "formgrid";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR: &str = "FormGrid";

/// Spec of the single row and column of a new grid, and of inserted content tracks.
pub const DEFAULT_CONTENT_SPEC: &str = "d:grow";

/// Spec of inserted gap tracks: the related-component gap.
pub const DEFAULT_GAP_SPEC: &str = "3dlu";
