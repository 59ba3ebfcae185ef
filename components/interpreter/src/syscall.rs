//! Syscall dispatch table and built-in syscalls
//!
//! A syscall is a named host operation that compiled code invokes through
//! [`Interpreter::syscall`]. Handlers receive the interpreter itself so they
//! can pop their arguments and push results.

use std::collections::HashMap;
use std::fmt;

use crate::error::RuntimeResult;
use crate::vm::Interpreter;

/// Handler invoked for a syscall
pub type SyscallFn = fn(&mut Interpreter) -> RuntimeResult<()>;

/// Name of the built-in process exit syscall
pub const EXIT: &str = "Exit";

/// String-keyed table of syscall handlers
///
/// # Examples
///
/// ```
/// use interpreter::{syscall, SyscallTable};
///
/// let table = SyscallTable::builtin();
/// assert!(table.contains(syscall::EXIT));
/// assert!(!table.contains(""));
/// ```
#[derive(Clone, Default)]
pub struct SyscallTable {
    entries: HashMap<String, SyscallFn>,
}

impl SyscallTable {
    /// Create a table with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a table holding the built-in syscalls
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.register(EXIT, exit);
        table
    }

    /// Register `handler` under `name`, returning any handler it replaces
    pub fn register(&mut self, name: impl Into<String>, handler: SyscallFn) -> Option<SyscallFn> {
        self.entries.insert(name.into(), handler)
    }

    /// Look up the handler for `name`
    pub fn get(&self, name: &str) -> Option<SyscallFn> {
        self.entries.get(name).copied()
    }

    /// Whether `name` has a handler
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered syscalls
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SyscallTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// `Exit`: pops an `I64` exit status, reports elapsed time, terminates.
///
/// Only returns when the pop fails; the stack has already lost its top value
/// in the type mismatch case.
fn exit(interpreter: &mut Interpreter) -> RuntimeResult<()> {
    let code = interpreter.pop_as::<i64>()?;
    let seconds = interpreter.elapsed().as_nanos() as f64 / 1e9;

    tracing::info!(code, seconds, "program exit");
    interpreter
        .host_mut()
        .write_line(&format!("Finished in {} seconds", seconds));

    // The OS exit status is an int; wider codes keep their low 32 bits.
    interpreter.host_mut().exit(code as i32)
}
