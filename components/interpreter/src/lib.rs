//! Execution runtime for compiled Komodo programs
//!
//! This crate provides the surface compiled code links against:
//! - An evaluation stack of tagged [`Value`](core_types::Value)s with checked pops
//! - A string-keyed syscall table, with the built-in `Exit`
//! - The [`Program`] entry point contract
//! - A [`Host`] seam for output and process exit
//!
//! # Example
//!
//! ```
//! use interpreter::{CaptureHost, Interpreter, RuntimeConfig, RuntimeError};
//! use core_types::Value;
//!
//! let mut interp = Interpreter::with_host(RuntimeConfig::default(), Box::new(CaptureHost::new()));
//!
//! interp.push(Value::Bool(true));
//! let err = interp.syscall("Exit").unwrap_err();
//! assert!(matches!(err, RuntimeError::TypeMismatch(_)));
//!
//! let err = interp.syscall("DoesNotExist").unwrap_err();
//! assert_eq!(err, RuntimeError::UnknownSyscall("DoesNotExist".to_string()));
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events: `trace` for stack traffic, `debug` for syscall
//! dispatch and program entry, `warn` for ignored syscalls, `info` on exit.
//! Installing a subscriber is left to the embedding binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod host;
pub mod program;
pub mod syscall;
pub mod vm;

// Re-export main types at crate root
pub use config::{RuntimeConfig, UnknownSyscallPolicy};
pub use error::{RuntimeError, RuntimeResult};
pub use host::{CaptureHost, ExitRequest, Host, ProcessHost};
pub use program::Program;
pub use syscall::{SyscallFn, SyscallTable};
pub use vm::Interpreter;
