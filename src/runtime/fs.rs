//! File system operations (existence checks, read, write).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_impl(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).context("Failed to read file")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        // Test write
        runtime.write(&file_path, b"hello").unwrap();
        assert!(runtime.exists(&file_path));

        // Test read_to_string
        let content = runtime.read_to_string(&file_path).unwrap();
        assert_eq!(content, "hello");

        // Test overwrite replaces the whole file
        runtime.write(&file_path, b"shorter").unwrap();
        assert_eq!(runtime.read_to_string(&file_path).unwrap(), "shorter");
    }

    #[test]
    fn test_real_runtime_exists_for_missing_path() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        assert!(!runtime.exists(&dir.path().join("nope.json")));
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        // Test read non-existent file
        let result = runtime.read_to_string(&dir.path().join("missing.txt"));
        assert!(result.is_err());

        let result = runtime.read(&dir.path().join("missing.bin"));
        assert!(result.is_err());

        // Test write into non-existent directory
        let result = runtime.write(&dir.path().join("no/such/dir/file.txt"), b"x");
        assert!(result.is_err());
    }

    #[test]
    fn test_real_runtime_read_rejects_invalid_utf8() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.bin");

        std::fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(runtime.read_to_string(&file_path).is_err());
    }

    #[test]
    fn test_real_runtime_read_returns_raw_bytes() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.bin");

        // Bytes that are not valid UTF-8 still read back as written
        std::fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(runtime.read(&file_path).unwrap(), [0xff, 0xfe, 0x00]);
    }
}
