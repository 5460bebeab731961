use clap::Parser;
use kit_scaffold::cli::Cli;
use kit_scaffold::{init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
