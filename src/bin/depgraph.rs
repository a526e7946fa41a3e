// src/bin/depgraph.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use depgraph_core::cli::{self, Cli};
use depgraph_core::exit::DepGraphExit;
use depgraph_core::logger;

fn main() -> DepGraphExit {
    run()
        .inspect_err(|e| eprintln!("{} {e:#}", "error:".red().bold()))
        .into()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    if cli.init {
        return cli::handle_init();
    }

    let config = cli::resolve_config(&cli)?;
    cli::handle_run(&config)?;
    Ok(())
}
