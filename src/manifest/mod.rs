//! Asset tree scanning and manifest generation.

mod category;
mod image;
mod scan;
mod tree;
mod write;

// Types
pub use category::{Category, classify, is_logo_hint};
pub use tree::{ImageAsset, NodeKind, ProjectNode};

// Scanning
pub use image::is_image;
pub use scan::{ScanStats, collect_projects, scan_directory};

// Output
pub use write::write_manifest;
