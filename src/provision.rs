use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use walkdir::WalkDir;

use crate::tools::run_git_clone;

pub const VCS_DIR: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
    /// File names (not paths) the substitution does not touch.
    pub exclude: Vec<String>,
}

impl Substitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            exclude: Vec::new(),
        }
    }

    pub fn excluding(mut self, file_name: impl Into<String>) -> Self {
        self.exclude.push(file_name.into());
        self
    }

    fn applies_to(&self, file_name: &str) -> bool {
        !self.pattern.is_empty() && !self.exclude.iter().any(|excluded| excluded == file_name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceStats {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub files_skipped: usize,
}

pub trait Provisioner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    fn relocate(&self, from: &Path, to: &Path) -> Result<()>;
    fn replace_text(&self, root: &Path, substitutions: &[Substitution]) -> Result<ReplaceStats>;
}

pub struct GitProvisioner {
    git_bin: PathBuf,
}

impl GitProvisioner {
    pub fn new(git_bin: PathBuf) -> Self {
        Self { git_bin }
    }
}

impl Provisioner for GitProvisioner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        run_git_clone(&self.git_bin, url, dest)
    }

    fn relocate(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)
            .with_context(|| format!("failed to move {} to {}", from.display(), to.display()))
    }

    fn replace_text(&self, root: &Path, substitutions: &[Substitution]) -> Result<ReplaceStats> {
        replace_in_tree(root, substitutions)
    }
}

/// Rewrites every UTF-8 file under `root`, leaving any `.git` directory alone.
pub fn replace_in_tree(root: &Path, substitutions: &[Substitution]) -> Result<ReplaceStats> {
    let mut stats = ReplaceStats::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != VCS_DIR);
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        stats.files_scanned += 1;
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let Ok(contents) = String::from_utf8(bytes) else {
            debug!("skipping non-UTF-8 file {}", path.display());
            stats.files_skipped += 1;
            continue;
        };

        let file_name = entry.file_name().to_string_lossy();
        let updated = apply_substitutions(&contents, &file_name, substitutions);
        if updated != contents {
            fs::write(path, updated)
                .with_context(|| format!("failed to write {}", path.display()))?;
            stats.files_rewritten += 1;
        }
    }

    Ok(stats)
}

// One left-to-right pass taking the longest pattern at each position, so
// inserted replacements are never matched again.
fn apply_substitutions(contents: &str, file_name: &str, substitutions: &[Substitution]) -> String {
    let active: Vec<&Substitution> = substitutions
        .iter()
        .filter(|substitution| substitution.applies_to(file_name))
        .collect();
    if active.is_empty() {
        return contents.to_string();
    }

    let mut output = String::with_capacity(contents.len());
    let mut rest = contents;
    while !rest.is_empty() {
        let longest = active
            .iter()
            .filter(|substitution| rest.starts_with(substitution.pattern.as_str()))
            .max_by_key(|substitution| substitution.pattern.len());

        match longest {
            Some(substitution) => {
                output.push_str(&substitution.replacement);
                rest = &rest[substitution.pattern.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    output.push(ch);
                }
                rest = chars.as_str();
            }
        }
    }
    output
}
