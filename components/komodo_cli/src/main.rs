//! Komodo Runtime CLI
//!
//! Entry point for the runtime host. Parses CLI arguments and delegates to
//! the Runtime for execution.

use clap::Parser as ClapParser;
use komodo_cli::{logging, programs, Cli, CliError, Runtime};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if cli.list {
        for program in programs::PROGRAMS {
            println!("{}", programs::signature(*program));
        }
        return;
    }

    let Some(name) = cli.program.as_deref() else {
        // Default: show usage
        println!("Komodo Runtime v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  komodo-run <PROGRAM> [ARGS]...   Run a bundled program");
        println!("  komodo-run --list                List bundled programs");
        println!();
        println!("Run 'komodo-run --help' for more options.");
        return;
    };

    let result = Runtime::from_cli(&cli).and_then(|runtime| runtime.run(name, &cli.args));

    // Falling through without `Exit` leaves the exit status at 0.
    if let Err(e) = result {
        match e {
            CliError::Io(e) => eprintln!("Error: Could not read configuration: {}", e),
            CliError::Runtime(e) => eprintln!("Runtime Error: {}", e),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
