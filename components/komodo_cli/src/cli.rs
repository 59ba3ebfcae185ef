//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Komodo runtime host
#[derive(Debug, Parser)]
#[command(name = "komodo-run", version, about = "Run a bundled Komodo program")]
pub struct Cli {
    /// Name of the bundled program to run
    pub program: Option<String>,

    /// Arguments passed to the program's entry point
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// JSON runtime configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat unknown syscalls as no-ops
    #[arg(long)]
    pub legacy_syscalls: bool,

    /// List bundled programs and exit
    #[arg(short, long)]
    pub list: bool,
}
