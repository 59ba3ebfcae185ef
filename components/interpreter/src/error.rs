//! Runtime error types
//!
//! Every failure here is a defect in the program that issued the operation,
//! not a transient condition, so nothing is retried.

use core_types::ValueDerefError;
use thiserror::Error;

/// Errors raised by the interpreter while a compiled program runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A value was read as a kind other than the one it holds
    #[error(transparent)]
    TypeMismatch(#[from] ValueDerefError),

    /// `pop` was called on an empty evaluation stack
    #[error("Stack underflow: pop from an empty evaluation stack")]
    StackUnderflow,

    /// No syscall is registered under this name
    #[error("Unknown syscall '{0}'")]
    UnknownSyscall(String),

    /// A program entry point was called with the wrong number of arguments
    #[error("Program '{program}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Name of the program
        program: String,
        /// Declared parameter count
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },
}

/// Result type for interpreter operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
