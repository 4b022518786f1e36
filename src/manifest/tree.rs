//! Manifest tree types.
//!
//! Field names and declaration order are the wire contract: the portfolio
//! front end deserializes these shapes directly from `projects.json`.

use serde::Serialize;

use super::Category;

/// One classified image file.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAsset {
    /// Base name as stored on disk.
    pub filename: String,
    /// Root-relative URL path, forward slashes, leading `/`.
    pub path: String,
    /// Category assigned at classification time.
    pub category: Category,
    /// Byte length at scan time.
    pub size: u64,
}

/// Node marker required by the front end on every tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Project,
}

/// One directory in the asset tree.
///
/// Top-level nodes are projects; nested nodes are subfolders of the same
/// shape. `images` and `subfolders` keep filesystem enumeration order.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub images: Vec<ImageAsset>,
    pub subfolders: Vec<ProjectNode>,
    /// Representative image for the node, when one looks like a logo.
    pub logo: Option<String>,
}

impl ProjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Project,
            images: Vec::new(),
            subfolders: Vec::new(),
            logo: None,
        }
    }

    /// Nodes with no images and no surviving subfolders are pruned from
    /// the manifest. Subfolders are pruned before their parent asks, so
    /// a non-empty subfolder always holds at least one image transitively.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.subfolders.is_empty()
    }

    /// Image count including all subfolders.
    pub fn image_count(&self) -> usize {
        self.images.len()
            + self
                .subfolders
                .iter()
                .map(Self::image_count)
                .sum::<usize>()
    }
}
