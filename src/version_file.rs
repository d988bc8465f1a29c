//! Reading the release version from the repository VERSION file.

use anyhow::Result;
use std::path::Path;

use crate::runtime::Runtime;

/// What the VERSION file held when read.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionSource {
    /// No file at the expected path
    Missing,
    /// A file that holds only whitespace
    Empty,
    /// The trimmed version string
    Version(String),
}

/// Read the VERSION file, trimming surrounding whitespace.
///
/// A missing or whitespace-only file is not an error; callers decide
/// whether to skip. Only an unreadable file fails.
#[tracing::instrument(skip(runtime, path))]
pub fn read_version_file<R: Runtime>(runtime: &R, path: &Path) -> Result<VersionSource> {
    if !runtime.exists(path) {
        return Ok(VersionSource::Missing);
    }

    let raw = runtime.read_to_string(path)?;
    let version = raw.trim();
    if version.is_empty() {
        return Ok(VersionSource::Empty);
    }

    Ok(VersionSource::Version(version.to_string()))
}
