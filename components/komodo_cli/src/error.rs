//! Error types for the CLI

use core_types::DataType;
use interpreter::RuntimeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime failure inside the program
    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// No bundled program has this name
    #[error("Unknown program '{0}'")]
    UnknownProgram(String),

    /// A command-line argument does not parse as its parameter's kind
    #[error("Argument {index} ('{value}') is not a valid {expected}")]
    InvalidArgument {
        /// Zero-based argument position
        index: usize,
        /// Raw argument text
        value: String,
        /// Kind the parameter declares
        expected: DataType,
    },
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
