//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::debug!("Read {} bytes from {}", content.len(), path.display());

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Total size of `paths` in bytes
    pub fn total_size<P: AsRef<Path>>(paths: &[P]) -> Result<u64> {
        paths
            .iter()
            .map(|path| Self::file_size(path.as_ref()))
            .sum()
    }
}
