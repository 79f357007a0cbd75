//! nar-validate CLI - pre-build validation for native projects

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use nar_validate::util::GlobalContext;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("nar_validate=debug")
    } else {
        EnvFilter::new("nar_validate=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut ctx = GlobalContext::new()?.with_manifest_path(cli.manifest_path);
    ctx.set_verbose(cli.verbose);
    ctx.set_color(!cli.no_color && std::io::stderr().is_terminal());

    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, &ctx),
        Commands::Aol(args) => commands::aol::execute(args, &ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
