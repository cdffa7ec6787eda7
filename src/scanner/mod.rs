pub mod compose;
pub mod shape;

use crate::config::RunConfig;
use crate::types::ReportGroup;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const COMPOSE_SUFFIXES: [&str; 2] = [".yml", ".yaml"];

/// Suffix match on the raw file name, so names that are not valid UTF-8
/// are still candidates.
fn is_compose_candidate(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.as_encoded_bytes();
            COMPOSE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix.as_bytes()))
        })
        .unwrap_or(false)
}

/// The search root must exist and be a directory.
pub fn check_search_dir(root: &Path) -> Result<()> {
    let meta = fs::metadata(root)
        .with_context(|| format!("Cannot access search directory {}", root.display()))?;
    if !meta.is_dir() {
        anyhow::bail!("Search path is not a directory: {}", root.display());
    }
    Ok(())
}

/// Every `.yml`/`.yaml` file under `root`, recursively.
///
/// Entries are visited in file-name order so the report comes out the same
/// on every request. Only an unreadable root is an error; unreadable
/// subdirectories are skipped.
pub fn discover_compose_files(root: &Path) -> Result<Vec<PathBuf>> {
    check_search_dir(root)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read search directory {}", root.display())
                });
            }
            Err(e) => {
                o_debug!("  skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        if is_compose_candidate(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Run discovery and extraction over the search directory.
///
/// Files that cannot be read or parsed, and files without services, are
/// left out of the report.
pub fn build_report(config: &RunConfig) -> Result<Vec<ReportGroup>> {
    let root = config.search_dir();
    let files = discover_compose_files(root)?;

    let mut groups = Vec::new();
    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                o_warn!("{} {}: {}", "Skipping".yellow(), path.display(), e);
                continue;
            }
        };

        let services = match compose::parse_compose(&text, config.link_host()) {
            Ok(services) => services,
            Err(e) => {
                o_warn!("{} {}: {}", "Skipping invalid YAML".yellow(), path.display(), e);
                continue;
            }
        };

        if services.is_empty() {
            continue;
        }

        groups.push(ReportGroup {
            filename: relative_display(path, root),
            services,
        });
    }

    o_debug!("  scanned {} file(s), {} with services", files.len(), groups.len());
    Ok(groups)
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
