//! Manifest build orchestration.
//!
//! Pipeline: check source root -> scan tree -> write manifest -> summary.

use std::time::Instant;

use anyhow::{Result, bail};

use crate::config::SiteConfig;
use crate::manifest::{ScanStats, collect_projects, write_manifest};
use crate::utils::{human_bytes, plural_count};
use crate::{debug, log};

/// Scan the configured asset tree and write the manifest.
///
/// A missing source root is a configuration error and aborts the run;
/// everything below it is recovered per-directory by the scanner.
pub fn build_manifest(config: &SiteConfig) -> Result<()> {
    let start = Instant::now();
    let source = &config.build.source;
    let output = &config.build.output;

    if !source.is_dir() {
        bail!(
            "source directory not found: {} (check [build] source in {})",
            source.display(),
            config.config_path.display()
        );
    }

    log!("scan"; "scanning {}", source.display());

    let mut stats = ScanStats::default();
    let projects = collect_projects(source, &mut stats)?;

    write_manifest(&projects, output)?;

    if stats.unreadable > 0 {
        log!(
            "warning";
            "skipped {} unreadable {}",
            stats.unreadable,
            if stats.unreadable == 1 { "directory" } else { "directories" }
        );
    }

    if crate::logger::is_verbose() {
        for project in &projects {
            debug!("build"; "{}: {}", project.name, plural_count(project.image_count(), "image"));
        }
        log_category_tally(&stats);
    }

    log!(
        "build";
        "{} -> {}",
        plural_count(projects.len(), "project"),
        config.root_relative(output).display()
    );
    log!(
        "build";
        "{} scanned, {} ({}) in {:.0?}",
        plural_count(stats.directories, "folder"),
        plural_count(stats.images, "image"),
        human_bytes(stats.bytes),
        start.elapsed()
    );

    Ok(())
}

/// Per-category image counts, most frequent first.
fn log_category_tally(stats: &ScanStats) {
    let mut tally: Vec<_> = stats.categories.iter().map(|(c, n)| (*c, *n)).collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.label().cmp(b.0.label())));
    for (category, count) in tally {
        debug!("build"; "{count:>5} {category}");
    }
}
