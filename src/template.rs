use std::path::Path;

use anyhow::{Result, bail};
use log::{info, warn};
use tempfile::TempDir;

use crate::cli::InitArgs;
use crate::diagnostics::summarize_init;
use crate::fields::capitalize;
use crate::provision::{GitProvisioner, Provisioner, ReplaceStats, Substitution, VCS_DIR};
use crate::tools::{resolve_git_bin, template_url};

pub const CAPITALIZED_PLACEHOLDER: &str = "Starter";
pub const LOWERCASE_PLACEHOLDERS: [&str; 3] = ["starter_app", "starter-app", "starter"];
pub const README_FILE: &str = "README.md";
const VCS_STASH_PREFIX: &str = ".kit-scaffold-vcs-";

#[derive(Debug, Clone)]
pub struct InitSummary {
    pub url: String,
    pub destination: String,
    pub history_removed: bool,
    pub replace: ReplaceStats,
}

pub fn init(args: &InitArgs) -> Result<()> {
    if args.template.trim().is_empty() {
        bail!("template name must not be empty");
    }
    if args.destination.trim().is_empty() {
        bail!("destination must not be empty");
    }

    let git_bin = resolve_git_bin(args.git_bin.as_deref())?;
    let provisioner = GitProvisioner::new(git_bin);
    let url = template_url(&args.host, &args.org, &args.template);

    let summary = provision_template(&provisioner, &url, &args.destination)?;
    println!("{}", summarize_init(&summary));

    Ok(())
}

// Lowercase variants never touch `README.md`; the capitalized token does.
pub fn placeholder_substitutions(project_name: &str) -> Vec<Substitution> {
    let mut substitutions = vec![Substitution::new(
        CAPITALIZED_PLACEHOLDER,
        capitalize(project_name),
    )];
    let lowercase = project_name.to_lowercase();
    substitutions.extend(LOWERCASE_PLACEHOLDERS.iter().map(|placeholder| {
        Substitution::new(*placeholder, lowercase.as_str()).excluding(README_FILE)
    }));
    substitutions
}

pub fn provision_template(
    provisioner: &dyn Provisioner,
    url: &str,
    destination: &str,
) -> Result<InitSummary> {
    let dest = Path::new(destination);
    let project_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(destination);

    provisioner.clone_repo(url, dest)?;
    info!("cloned {url} into {destination}");

    // Holds the relocated history; removing it discards the history.
    let stash = stash_history(provisioner, dest);
    let history_removed = stash.is_some();

    let replace = provisioner.replace_text(dest, &placeholder_substitutions(project_name))?;
    info!(
        "rewrote {} of {} files in {destination}",
        replace.files_rewritten, replace.files_scanned
    );

    drop(stash);
    Ok(InitSummary {
        url: url.to_string(),
        destination: destination.to_string(),
        history_removed,
        replace,
    })
}

fn stash_history(provisioner: &dyn Provisioner, dest: &Path) -> Option<TempDir> {
    let vcs_dir = dest.join(VCS_DIR);
    let parent = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let stash = match tempfile::Builder::new()
        .prefix(VCS_STASH_PREFIX)
        .tempdir_in(parent)
    {
        Ok(stash) => stash,
        Err(err) => {
            warn!(
                "could not create a scratch directory for {}: {err}",
                vcs_dir.display()
            );
            return None;
        }
    };

    match provisioner.relocate(&vcs_dir, &stash.path().join("history")) {
        Ok(()) => Some(stash),
        Err(err) => {
            warn!("history kept in {}: {err:#}", vcs_dir.display());
            None
        }
    }
}
