//! Project manifest (`package.json`) rewriting

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Version every freshly scaffolded project starts at
pub const INITIAL_VERSION: &str = "0.1.0";

/// Rewrite manifest text: set `name` and `version`, drop `description`.
///
/// Every other field is passed through untouched and keeps its position.
/// Output uses 2-space indentation with a trailing newline.
pub fn rewrite_manifest(content: &str, project_name: &str, version: &str) -> Result<String> {
    let mut manifest: Value =
        serde_json::from_str(content).context("Failed to parse project manifest")?;

    let fields = manifest.as_object_mut().ok_or_else(|| ScaffoldError::ManifestNotObject {
        path: MANIFEST_FILE.to_string(),
    })?;

    fields.insert("name".to_string(), Value::String(project_name.to_string()));
    fields.insert("version".to_string(), Value::String(version.to_string()));
    // retain keeps insertion order, unlike remove under preserve_order
    fields.retain(|key, _| key != "description");

    let mut out =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize project manifest")?;
    out.push('\n');
    Ok(out)
}

/// Load, rewrite, and persist the manifest in `project_dir`
pub async fn patch_manifest(project_dir: &Path, project_name: &str, version: &str) -> Result<()> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let patched = rewrite_manifest(&content, project_name, version)
        .with_context(|| format!("Failed to update {}", path.display()))?;

    fs::write(&path, patched)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), name = project_name, version, "patched manifest");
    Ok(())
}
