use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::manifest::Manifest;
use crate::runtime::Runtime;
use crate::version_file::{VersionSource, read_version_file};

use super::paths::PackagePaths;

/// Why version patching was skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    MissingVersionFile,
    EmptyVersionFile,
}

/// What a version sync run did.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    /// Nothing to do; the run still counts as successful
    Skipped(SkipReason),
    /// The release version was picked up
    Patched {
        version: String,
        /// False when there is no package.json to update
        manifest_updated: bool,
    },
}

/// Sync the VERSION file into package.json.
///
/// Decides and performs the whole run without printing; the caller turns
/// the outcome into user-facing output.
#[tracing::instrument(skip(runtime, paths))]
pub fn sync_version<R: Runtime>(runtime: &R, paths: &PackagePaths) -> Result<PatchOutcome> {
    let version = match read_version_file(runtime, &paths.version_file)? {
        VersionSource::Missing => {
            return Ok(PatchOutcome::Skipped(SkipReason::MissingVersionFile));
        }
        VersionSource::Empty => {
            return Ok(PatchOutcome::Skipped(SkipReason::EmptyVersionFile));
        }
        VersionSource::Version(version) => version,
    };

    if !runtime.exists(&paths.manifest) {
        debug!("No package.json at {:?}, nothing to update", paths.manifest);
        return Ok(PatchOutcome::Patched {
            version,
            manifest_updated: false,
        });
    }

    let mut manifest = Manifest::load(runtime, &paths.manifest)?;
    manifest.set_version(&version);
    manifest.save(runtime, &paths.manifest)?;

    Ok(PatchOutcome::Patched {
        version,
        manifest_updated: true,
    })
}

/// Patch the release version from the VERSION file into the package manifest.
#[tracing::instrument(skip(runtime, package_dir))]
pub fn patch_versions<R: Runtime>(runtime: &R, package_dir: Option<PathBuf>) -> Result<()> {
    let paths = PackagePaths::resolve(runtime, package_dir)?;

    match sync_version(runtime, &paths)? {
        PatchOutcome::Skipped(SkipReason::MissingVersionFile) => {
            println!("VERSION file not found, skipping version patching");
        }
        PatchOutcome::Skipped(SkipReason::EmptyVersionFile) => {
            println!("VERSION file is empty, skipping version patching");
        }
        PatchOutcome::Patched {
            version,
            manifest_updated,
        } => {
            println!("Patching version to: {version}");
            if manifest_updated {
                println!("✓ Updated package.json version");
            }
            println!("Version patching complete");
        }
    }

    Ok(())
}
