//! Manifest serialization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::ProjectNode;

/// Serialize `projects` as pretty JSON and atomically replace `output`.
///
/// The document goes to a `.tmp` sibling first and is renamed into place,
/// so a crash mid-write never leaves a truncated manifest for the site to
/// fetch. Missing parent directories are created; an existing manifest is
/// replaced unconditionally.
pub fn write_manifest(projects: &[ProjectNode], output: &Path) -> Result<()> {
    let Some(file_name) = output.file_name() else {
        bail!("manifest output '{}' has no file name", output.display());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create output directory {}", parent.display()))?;
    }

    let mut json = serde_json::to_string_pretty(projects)?;
    json.push('\n');

    let tmp = output.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));
    fs::write(&tmp, json).with_context(|| format!("cannot write {}", tmp.display()))?;
    fs::rename(&tmp, output)
        .with_context(|| format!("cannot replace {}", output.display()))?;

    Ok(())
}
