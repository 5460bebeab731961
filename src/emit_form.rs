use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, ScopedJoinHandle};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

use crate::cli::FormArgs;
use crate::diagnostics::summarize_form;
use crate::ir::Form;
use crate::project::find_project_name;
use crate::render::render_form;

pub const VIEW_FILE: &str = "+page.svelte";
pub const SERVER_FILE: &str = "+page.server.ts";

#[derive(Debug, Clone)]
pub struct EmittedForm {
    pub view_path: PathBuf,
    pub server_path: PathBuf,
}

pub fn generate(args: &FormArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("form name must not be empty");
    }

    let cwd = env::current_dir().context("failed to resolve the current directory")?;
    let form = Form::parse(&args.name, &args.fields);
    let project_name = find_project_name(&cwd);
    let emitted = emit_form(&form, &cwd, project_name.as_deref())?;

    println!("{}", summarize_form(&cwd, &emitted));

    Ok(())
}

// Both writes always run to completion; a failure in one does not undo the other.
pub fn emit_form(form: &Form, root: &Path, project_name: Option<&str>) -> Result<EmittedForm> {
    let form_dir = root.join(&form.name);
    fs::create_dir_all(&form_dir)
        .with_context(|| format!("failed to create {}", form_dir.display()))?;

    let rendered = render_form(form, project_name);
    let view_path = form_dir.join(VIEW_FILE);
    let server_path = form_dir.join(SERVER_FILE);

    let (view_written, server_written) = thread::scope(|scope| {
        let view = scope.spawn(|| write_document(&view_path, &rendered.view));
        let server = scope.spawn(|| write_document(&server_path, &rendered.server));
        (join_writer(view), join_writer(server))
    });
    view_written?;
    server_written?;

    info!(
        "generated form {} with {} fields",
        form.name,
        form.fields.len()
    );

    Ok(EmittedForm {
        view_path,
        server_path,
    })
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    debug!("writing {} ({} bytes)", path.display(), contents.len());
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn join_writer(handle: ScopedJoinHandle<'_, Result<()>>) -> Result<()> {
    handle
        .join()
        .map_err(|_| anyhow!("document writer thread panicked"))?
}
