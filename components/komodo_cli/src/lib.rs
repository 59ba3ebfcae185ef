//! Komodo Runtime CLI Library
//!
//! Provides the Runtime struct, the bundled programs, and supporting modules
//! for the `komodo-run` host binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod programs;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runtime::Runtime;
