//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// nar-validate - check a native build configuration before compiling
#[derive(Parser)]
#[command(name = "nar-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to Nar.toml (searched upward from the current directory by default)
    #[arg(long, global = true, env = "NAR_MANIFEST_PATH")]
    pub manifest_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the project's native build configuration
    Validate(ValidateArgs),

    /// Show the platform identifier (architecture-os-linker)
    Aol(AolArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Print the validation report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AolArgs {
    /// Linker name to resolve the identifier for
    #[arg(long)]
    pub linker: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
