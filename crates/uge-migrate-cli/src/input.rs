//! Input discovery for the migrate command.

use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of hUGETracker songs, matched case-insensitively.
pub const UGE_EXTENSION: &str = "uge";

/// Whether `path` has a `.uge` extension in any letter case.
pub fn is_uge_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(UGE_EXTENSION))
        .unwrap_or(false)
}

/// Recursively find `.uge` files under `dir`, sorted by path.
pub fn find_uge_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Input directory does not exist: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if entry.file_type().is_file() && is_uge_path(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Explicit files first, in the order given, then anything found under
/// `input_dir`. Explicit files are taken as-is whatever their extension.
pub fn collect_inputs(files: &[String], input_dir: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();
    if let Some(dir) = input_dir {
        for found in find_uge_files(Path::new(dir))? {
            if !inputs.contains(&found) {
                inputs.push(found);
            }
        }
    }
    Ok(inputs)
}

/// File names that occur more than once among `paths`.
///
/// Outputs are written under their bare file name, so any duplicate would
/// overwrite another input's result.
pub fn duplicate_file_names(paths: &[PathBuf]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for path in paths {
        if let Some(name) = path.file_name() {
            *counts.entry(name.to_string_lossy().into_owned()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}
