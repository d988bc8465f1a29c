pub mod paths;

mod patch_versions;
mod strip_platforms;

pub use paths::PackagePaths;
pub use patch_versions::{PatchOutcome, SkipReason, patch_versions, sync_version};
pub use strip_platforms::{StripOutcome, inspect_loader, strip_platforms};
