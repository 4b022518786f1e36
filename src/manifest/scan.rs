//! Asset tree scanning.
//!
//! Walks the source directory with plain `read_dir` recursion: children
//! are visited in filesystem enumeration order and never re-sorted, so an
//! unchanged tree always produces the same manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;

use crate::log;
use crate::utils::path::url_path;

use super::{Category, ImageAsset, ProjectNode, classify, is_image, is_logo_hint};

/// Counters accumulated across a whole scan.
#[derive(Debug, Default)]
pub struct ScanStats {
    /// Directories successfully read.
    pub directories: usize,
    /// Images added to the manifest.
    pub images: usize,
    /// Cumulative image byte size.
    pub bytes: u64,
    /// Directories that could not be read and were treated as empty.
    pub unreadable: usize,
    /// Image count per category.
    pub categories: FxHashMap<Category, usize>,
}

impl ScanStats {
    fn record(&mut self, asset: &ImageAsset) {
        self.images += 1;
        self.bytes += asset.size;
        *self.categories.entry(asset.category).or_default() += 1;
    }
}

/// Scan each direct child directory of `root` as a candidate project.
///
/// Plain files at the root are not project material and are ignored.
/// Candidates that end up empty after pruning are dropped silently. A
/// missing or unreadable root is a configuration error and fails the run.
pub fn collect_projects(root: &Path, stats: &mut ScanStats) -> Result<Vec<ProjectNode>> {
    if !root.is_dir() {
        bail!("source directory not found: {}", root.display());
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("cannot read source directory {}", root.display()))?;

    let mut projects = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        log!("scan"; "{name}");

        let project = scan_directory(&entry.path(), root, name, stats);
        if !project.is_empty() {
            projects.push(project);
        }
    }

    Ok(projects)
}

/// Recursively scan one directory into a [`ProjectNode`].
///
/// Pruning is bottom-up: a child directory is appended only after its own
/// scan proves it non-empty, so transitively empty chains never reach the
/// manifest. An unreadable directory logs one diagnostic and yields what
/// was collected before the failure; it never aborts the surrounding scan.
pub fn scan_directory(dir: &Path, root: &Path, name: String, stats: &mut ScanStats) -> ProjectNode {
    let mut node = ProjectNode::new(name);

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            stats.unreadable += 1;
            log!("error"; "cannot read {}: {err}", dir.display());
            return node;
        }
    };
    stats.directories += 1;

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            let child_name = entry.file_name().to_string_lossy().into_owned();
            let child = scan_directory(&path, root, child_name, stats);
            if !child.is_empty() {
                node.subfolders.push(child);
            }
        } else if file_type.is_file() {
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !is_image(&filename) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    log!("error"; "cannot stat {}: {err}", path.display());
                    continue;
                }
            };

            let url = url_path(&path, root);
            let category = classify(&filename);

            // Last logo-like file in enumeration order wins.
            if category == Category::Logo || is_logo_hint(&filename) {
                node.logo = Some(url.clone());
            }

            let asset = ImageAsset {
                filename,
                path: url,
                category,
                size,
            };
            stats.record(&asset);
            node.images.push(asset);
        }
        // Symlinks and other entry kinds are skipped.
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scan(root: &Path) -> (Vec<ProjectNode>, ScanStats) {
        let mut stats = ScanStats::default();
        let projects = collect_projects(root, &mut stats).unwrap();
        (projects, stats)
    }

    #[test]
    fn test_project_with_subfolder() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("ProjectA");
        let sub = project.join("Sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(project.join("AF-poster1.jpg"), vec![0u8; 2048]).unwrap();
        fs::write(sub.join("BAN-banner1.png"), vec![0u8; 4096]).unwrap();

        let (projects, stats) = scan(dir.path());

        assert_eq!(projects.len(), 1);
        let node = &projects[0];
        assert_eq!(node.name, "ProjectA");
        assert_eq!(node.images.len(), 1);

        let image = &node.images[0];
        assert_eq!(image.filename, "AF-poster1.jpg");
        assert_eq!(image.path, "/ProjectA/AF-poster1.jpg");
        assert_eq!(image.category, Category::Affiche);
        assert_eq!(image.size, 2048);

        assert_eq!(node.subfolders.len(), 1);
        let sub = &node.subfolders[0];
        assert_eq!(sub.name, "Sub");
        assert_eq!(sub.images[0].path, "/ProjectA/Sub/BAN-banner1.png");
        assert_eq!(sub.images[0].category, Category::Banniere);
        assert_eq!(sub.images[0].size, 4096);
        assert!(sub.subfolders.is_empty());
        assert_eq!(sub.logo, None);

        assert_eq!(node.image_count(), 2);
        assert_eq!(stats.images, 2);
        assert_eq!(stats.bytes, 2048 + 4096);
        assert_eq!(stats.categories[&Category::Affiche], 1);
        assert_eq!(stats.categories[&Category::Banniere], 1);
    }

    #[test]
    fn test_empty_project_dropped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ProjectB")).unwrap();

        let (projects, stats) = scan(dir.path());
        assert!(projects.is_empty());
        assert_eq!(stats.images, 0);
    }

    #[test]
    fn test_pruning_is_transitive() {
        let dir = TempDir::new().unwrap();
        // Only empty directories all the way down.
        fs::create_dir_all(dir.path().join("Hollow/Deep/Deeper")).unwrap();
        // A text file does not save a project from pruning.
        let notes = dir.path().join("NotesOnly");
        fs::create_dir_all(&notes).unwrap();
        fs::write(notes.join("notes.txt"), "brief").unwrap();

        let (projects, _) = scan(dir.path());
        assert!(projects.is_empty());
    }

    #[test]
    fn test_deep_image_keeps_chain_empty_sibling_pruned() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Project");
        fs::create_dir_all(project.join("Empty")).unwrap();
        fs::create_dir_all(project.join("Sub/Deep")).unwrap();
        fs::write(project.join("Sub/Deep/pic.png"), b"png").unwrap();

        let (projects, _) = scan(dir.path());

        assert_eq!(projects.len(), 1);
        let node = &projects[0];
        assert!(node.images.is_empty());
        // Empty/ was pruned, Sub/ survived through its Deep/ image.
        assert_eq!(node.subfolders.len(), 1);
        assert_eq!(node.subfolders[0].name, "Sub");
        assert_eq!(node.subfolders[0].subfolders[0].name, "Deep");
        assert_eq!(
            node.subfolders[0].subfolders[0].images[0].path,
            "/Project/Sub/Deep/pic.png"
        );
    }

    #[test]
    fn test_non_images_skipped() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Mixed");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("brief.pdf"), b"pdf").unwrap();
        fs::write(project.join("source.psd"), b"psd").unwrap();
        fs::write(project.join("FLY-menu.webp"), b"webp").unwrap();

        let (projects, stats) = scan(dir.path());

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].images.len(), 1);
        assert_eq!(projects[0].images[0].filename, "FLY-menu.webp");
        assert_eq!(stats.images, 1);
    }

    #[test]
    fn test_root_files_ignored() {
        let dir = TempDir::new().unwrap();
        // An image directly at the root is not inside any project.
        fs::write(dir.path().join("AF-loose.jpg"), b"jpg").unwrap();
        let project = dir.path().join("Real");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("CV-recto.png"), b"png").unwrap();

        let (projects, stats) = scan(dir.path());

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Real");
        assert_eq!(stats.images, 1);
    }

    #[test]
    fn test_logo_category_sets_logo() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Brand");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("LOGO-final.svg"), b"svg").unwrap();

        let (projects, _) = scan(dir.path());

        let node = &projects[0];
        assert_eq!(node.logo.as_deref(), Some("/Brand/LOGO-final.svg"));
        assert_eq!(node.images[0].category, Category::Logo);
    }

    #[test]
    fn test_logo_hint_sets_logo_without_logo_category() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Brand");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("client-logo-v2.png"), b"png").unwrap();

        let (projects, _) = scan(dir.path());

        let node = &projects[0];
        assert_eq!(node.logo.as_deref(), Some("/Brand/client-logo-v2.png"));
        assert_eq!(node.images[0].category, Category::Autre);
    }

    #[test]
    fn test_logo_last_wins() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Brand");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("logo-dark.png"), b"a").unwrap();
        fs::write(project.join("logo-light.png"), b"ab").unwrap();

        let (projects, _) = scan(dir.path());
        let node = &projects[0];

        // Enumeration order is filesystem-defined, so derive the expected
        // winner from the order images were actually appended in.
        let last_logo = node
            .images
            .iter()
            .rev()
            .find(|img| img.category == Category::Logo || is_logo_hint(&img.filename))
            .unwrap();
        assert_eq!(node.logo.as_deref(), Some(last_logo.path.as_str()));
    }

    #[test]
    fn test_logo_stays_in_images() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Brand");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("LOGO-mark.png"), b"png").unwrap();
        fs::write(project.join("AF-launch.jpg"), b"jpg").unwrap();

        let (projects, _) = scan(dir.path());
        let node = &projects[0];

        // The logo file is a regular gallery image as well.
        assert_eq!(node.images.len(), 2);
        assert!(node.images.iter().any(|img| img.filename == "LOGO-mark.png"));
    }

    #[test]
    fn test_paths_unique_across_manifest() {
        let dir = TempDir::new().unwrap();
        for (project, file) in [
            ("A", "LOGO-x.png"),
            ("B", "LOGO-x.png"), // same filename, different project
            ("B/Sub", "LOGO-x.png"),
        ] {
            let d = dir.path().join(project);
            fs::create_dir_all(&d).unwrap();
            fs::write(d.join(file), b"png").unwrap();
        }

        let (projects, stats) = scan(dir.path());

        let mut paths = Vec::new();
        fn gather<'a>(nodes: &'a [ProjectNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.extend(node.images.iter().map(|img| img.path.as_str()));
                gather(&node.subfolders, out);
            }
        }
        gather(&projects, &mut paths);

        assert_eq!(paths.len(), stats.images);
        let mut deduped = paths.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), paths.len());
    }

    #[test]
    fn test_rescan_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("Studio");
        fs::create_dir_all(project.join("Sub")).unwrap();
        fs::write(project.join("MAQ-site.png"), b"png").unwrap();
        fs::write(project.join("Sub/KAK-stand.jpg"), b"jpg").unwrap();

        let (first, _) = scan(dir.path());
        let (second, _) = scan(dir.path());

        assert_eq!(
            serde_json::to_string_pretty(&first).unwrap(),
            serde_json::to_string_pretty(&second).unwrap()
        );
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let mut stats = ScanStats::default();
        assert!(collect_projects(&dir.path().join("nope"), &mut stats).is_err());
    }

    #[test]
    fn test_unreadable_directory_yields_empty_node() {
        let mut stats = ScanStats::default();
        let node = scan_directory(
            &PathBuf::from("/nonexistent/folio-scan-test"),
            Path::new("/nonexistent"),
            "ghost".into(),
            &mut stats,
        );

        assert_eq!(node.name, "ghost");
        assert!(node.is_empty());
        assert!(node.logo.is_none());
        assert_eq!(stats.unreadable, 1);
        assert_eq!(stats.directories, 0);
    }
}
