//! Runtime orchestration for program execution
//!
//! The Runtime struct coordinates the host side of a run:
//! - Configuration loading and CLI overrides
//! - Program lookup and argument parsing
//! - Interpreter construction and execution

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::programs;
use core_types::{DataType, Value};
use interpreter::{
    Host, Interpreter, Program, ProcessHost, RuntimeConfig, RuntimeError, UnknownSyscallPolicy,
};
use std::path::Path;

/// Host-side runner for bundled programs
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    /// Configuration every interpreter is built with
    config: RuntimeConfig,
}

impl Runtime {
    /// Create a runtime with the given interpreter configuration
    ///
    /// # Example
    /// ```
    /// use komodo_cli::Runtime;
    /// use interpreter::RuntimeConfig;
    ///
    /// let runtime = Runtime::new(RuntimeConfig::default());
    /// assert_eq!(runtime.config(), &RuntimeConfig::default());
    /// ```
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Build a runtime from parsed command-line arguments
    ///
    /// Loads `--config` when given, then applies `--legacy-syscalls`.
    ///
    /// # Errors
    /// Returns `CliError` if the configuration file cannot be read or parsed
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load_config(path)?,
            None => RuntimeConfig::default(),
        };
        if cli.legacy_syscalls {
            config.unknown_syscall = UnknownSyscallPolicy::Ignore;
        }
        Ok(Self::new(config))
    }

    /// Read a JSON runtime configuration file
    ///
    /// # Errors
    /// Returns `CliError::Io` for unreadable files and `CliError::Config`
    /// for malformed JSON or unknown fields
    pub fn load_config(path: &Path) -> CliResult<RuntimeConfig> {
        let source = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// The interpreter configuration
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Parse raw command-line arguments against a program's parameters
    ///
    /// # Errors
    /// Returns `ArityMismatch` on a count mismatch and `InvalidArgument` for
    /// text that does not parse as its parameter's kind
    pub fn parse_arguments(program: &dyn Program, raw: &[String]) -> CliResult<Vec<Value>> {
        let parameters = program.parameters();
        if parameters.len() != raw.len() {
            return Err(RuntimeError::ArityMismatch {
                program: program.name().to_string(),
                expected: parameters.len(),
                actual: raw.len(),
            }
            .into());
        }

        parameters
            .iter()
            .zip(raw)
            .enumerate()
            .map(|(index, (kind, text))| {
                parse_argument(*kind, text).ok_or_else(|| CliError::InvalidArgument {
                    index,
                    value: text.clone(),
                    expected: *kind,
                })
            })
            .collect()
    }

    /// Run a bundled program attached to the real process
    ///
    /// Does not return if the program calls `Exit`.
    ///
    /// # Errors
    /// Returns `CliError` if the program is unknown, its arguments are bad,
    /// or it fails at runtime
    pub fn run(&self, name: &str, raw_args: &[String]) -> CliResult<()> {
        self.run_with_host(name, raw_args, Box::new(ProcessHost::new()))
    }

    /// Run a bundled program against a caller-supplied host
    ///
    /// # Errors
    /// Same as [`Runtime::run`]
    pub fn run_with_host(&self, name: &str, raw_args: &[String], host: Box<dyn Host>) -> CliResult<()> {
        let program = programs::find(name).ok_or_else(|| CliError::UnknownProgram(name.to_string()))?;
        let args = Self::parse_arguments(program, raw_args)?;

        let mut interpreter = Interpreter::with_host(self.config.clone(), host);
        interpreter.execute(program, &args)?;
        Ok(())
    }
}

fn parse_argument(kind: DataType, text: &str) -> Option<Value> {
    match kind {
        DataType::I64 => text.parse::<i64>().ok().map(Value::I64),
        DataType::Bool => text.parse::<bool>().ok().map(Value::Bool),
    }
}
