//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "02-CONCEPTION"         # asset tree to scan
//! output = "public/projects.json"  # manifest consumed by the front end
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build settings: where the assets live and where the manifest goes.
///
/// Both paths are interpreted relative to the project root (the config
/// file's directory) and normalized to absolute form at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory tree of design assets. Each direct child directory is a
    /// portfolio project; nested directories become subfolders.
    pub source: PathBuf,

    /// Manifest file written by `folio build`.
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets"),
            output: PathBuf::from("public/projects.json"),
        }
    }
}
