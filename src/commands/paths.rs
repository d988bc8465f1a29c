use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Relative path from the package directory to the repository VERSION file
pub const VERSION_FILE: &str = "../../VERSION";
/// Manifest file name inside the package directory
pub const MANIFEST_FILE: &str = "package.json";
/// Loader file name inside the package directory
pub const LOADER_FILE: &str = "index.js";

/// The files a packaging step operates on, resolved from the package directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PackagePaths {
    pub version_file: PathBuf,
    pub manifest: PathBuf,
    pub loader: PathBuf,
}

impl PackagePaths {
    /// Resolve all file locations from the package directory, defaulting to
    /// the current working directory when no override is given.
    #[tracing::instrument(skip(runtime, package_dir))]
    pub fn resolve<R: Runtime>(runtime: &R, package_dir: Option<PathBuf>) -> Result<Self> {
        let root = match package_dir {
            Some(path) => path,
            None => runtime.current_dir()?,
        };

        info!("Using package directory: {}", root.display());

        Ok(PackagePaths {
            version_file: root.join(VERSION_FILE),
            manifest: root.join(MANIFEST_FILE),
            loader: root.join(LOADER_FILE),
        })
    }
}
