use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

pub const MANIFEST_FILE: &str = "package.json";
/// Number of directories inspected, starting with the one given.
pub const MAX_LOOKUP_LEVELS: usize = 10;

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Nearest manifest within the lookup window. Best-effort: the walk stops
/// after a fixed number of levels, not at a repository root.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_LOOKUP_LEVELS)
        .map(|dir| dir.join(MANIFEST_FILE))
        .find(|candidate| candidate.is_file())
}

pub fn find_project_name(start: &Path) -> Option<String> {
    let manifest_path = find_manifest(start)?;
    let contents = match fs::read_to_string(&manifest_path) {
        Ok(contents) => contents,
        Err(err) => {
            debug!("failed to read {}: {err}", manifest_path.display());
            return None;
        }
    };
    match serde_json::from_str::<PackageManifest>(&contents) {
        Ok(manifest) => manifest.name.filter(|name| !name.trim().is_empty()),
        Err(err) => {
            debug!("invalid JSON in {}: {err}", manifest_path.display());
            None
        }
    }
}
