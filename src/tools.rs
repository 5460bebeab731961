use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use log::debug;

pub const GIT_BIN_ENV: &str = "KIT_SCAFFOLD_GIT_BIN";

pub fn resolve_git_bin(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env::var_os(GIT_BIN_ENV) {
        return Ok(PathBuf::from(path));
    }

    which::which("git").context("git not found on PATH")
}

pub fn template_url(host: &str, org: &str, template: &str) -> String {
    format!(
        "https://{}/{}/{}",
        host.trim_end_matches('/'),
        org.trim_matches('/'),
        template
    )
}

pub fn run_git_clone(bin: &Path, url: &str, dest: &Path) -> Result<()> {
    debug!("running {} clone {} {}", bin.display(), url, dest.display());

    let status = Command::new(bin)
        .arg("clone")
        .arg(url)
        .arg(dest)
        .status()
        .with_context(|| format!("failed to run git clone for {url}"))?;

    if !status.success() {
        bail!("git clone failed for {url} ({status})");
    }

    Ok(())
}
