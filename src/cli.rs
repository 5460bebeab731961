use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kit-scaffold", version)]
#[command(about = "Scaffold SvelteKit projects and form boilerplate", long_about = None)]
pub struct Cli {
    /// Log progress and the external commands being run.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone a starter template into a new project directory.
    Init(InitArgs),
    /// Generate a form page and its server action.
    Form(FormArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Template repository name.
    pub template: String,
    /// Directory to create; its name replaces the template placeholders.
    pub destination: String,
    /// Host serving the template repositories.
    #[arg(long, env = "KIT_SCAFFOLD_HOST", default_value = "github.com")]
    pub host: String,
    /// Organization owning the template repositories.
    #[arg(long, env = "KIT_SCAFFOLD_ORG", default_value = "kit-scaffold")]
    pub org: String,
    /// Path to the git binary.
    #[arg(long)]
    pub git_bin: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Form name, used for identifiers and the output directory.
    pub name: String,
    /// Fields as `name:type`, in render order.
    #[arg(required = true, value_name = "FIELD:TYPE")]
    pub fields: Vec<String>,
}
