pub mod cli;
pub mod diagnostics;
pub mod emit_form;
pub mod fields;
pub mod ir;
pub mod project;
pub mod provision;
pub mod render;
pub mod template;
pub mod tools;

use anyhow::Result;
use cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init(args) => template::init(&args),
        Commands::Form(args) => emit_form::generate(&args),
    }
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
