//! Grid document file I/O.
//!
//! Documents are pretty-printed JSON. Saves go through a temp file and a
//! rename so an interrupted write never leaves a truncated document behind.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::GridDocument;

/// Service for loading and saving grid documents.
pub struct DocumentService;

impl DocumentService {
    /// Loads and validates a grid document.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use formgrid::services::DocumentService;
    ///
    /// let document = DocumentService::load(Path::new("login.grid.json"))?;
    /// println!("{} tracks", document.tracks.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<GridDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid document {}", path.display()))?;

        let document: GridDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse grid document {}", path.display()))?;

        document
            .metadata
            .validate()
            .with_context(|| format!("Invalid metadata in {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            tracks = document.tracks.len(),
            components = document.components.len(),
            "loaded grid document"
        );
        Ok(document)
    }

    /// Saves a grid document using an atomic write.
    pub fn save(document: &GridDocument, path: &Path) -> Result<()> {
        document.metadata.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(document).context("Failed to serialize grid document")?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp file to {}", path.display())
        })?;

        tracing::debug!(path = %path.display(), "saved grid document");
        Ok(())
    }
}
