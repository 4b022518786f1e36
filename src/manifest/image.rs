//! Image file detection.

use std::path::Path;

/// File extensions accepted into the manifest (raster + vector).
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Whether a filename names an image by its extension, case-insensitive.
///
/// Everything else (working files, PDFs, fonts, hidden files without a
/// real extension) is skipped by the scanner without an error.
pub fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
