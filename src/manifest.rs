use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::Path;

use crate::runtime::Runtime;

/// A package.json document loaded for in-place edits.
///
/// The document stays untyped so fields this tool never touches
/// round-trip unchanged, including key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    doc: Value,
}

impl Manifest {
    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        let doc: Value =
            serde_json::from_str(&content).context("Failed to parse package.json")?;
        if !doc.is_object() {
            bail!("package.json root is not a JSON object");
        }
        Ok(Manifest { doc })
    }

    /// The current `version` field, if present and a string.
    pub fn version(&self) -> Option<&str> {
        self.doc.get("version").and_then(Value::as_str)
    }

    /// Set the `version` field. An existing field keeps its position;
    /// a missing one is appended after the last field.
    pub fn set_version(&mut self, version: &str) {
        if let Some(fields) = self.doc.as_object_mut() {
            fields.insert("version".to_string(), Value::String(version.to_string()));
        }
    }

    /// Render as 2-space indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(&self.doc).context("Failed to serialize package.json")?;
        out.push('\n');
        Ok(out)
    }

    #[tracing::instrument(skip(self, runtime, path))]
    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        let contents = self.to_pretty_string()?;
        runtime.write(path, contents.as_bytes())
    }
}
