//! The interpreter compiled programs run against
//!
//! Owns the evaluation stack and the syscall table. Compiled code keeps its
//! locals in native variables and only crosses into [`Value`] when it pushes
//! or pops.

use std::fmt;
use std::time::{Duration, Instant};

use core_types::{Primitive, Value};

use crate::config::{RuntimeConfig, UnknownSyscallPolicy};
use crate::error::{RuntimeError, RuntimeResult};
use crate::host::{Host, ProcessHost};
use crate::program::{self, Program};
use crate::syscall::{SyscallFn, SyscallTable};

/// Execution context for one compiled program
///
/// The interpreter is an explicit value passed by `&mut` to compiled code;
/// nothing about it is global, so independent instances never share a
/// stack.
///
/// # Example
///
/// ```
/// use interpreter::Interpreter;
/// use core_types::Value;
///
/// let mut interp = Interpreter::new();
/// interp.push(Value::I64(1));
/// interp.push(Value::Bool(true));
///
/// assert_eq!(interp.pop().unwrap(), Value::Bool(true));
/// assert_eq!(interp.pop_as::<i64>().unwrap(), 1);
/// assert!(interp.pop().is_err());
/// ```
pub struct Interpreter {
    /// Evaluation stack, top at the end
    stack: Vec<Value>,
    /// Taken at construction, read by `Exit`
    started: Instant,
    syscalls: SyscallTable,
    config: RuntimeConfig,
    host: Box<dyn Host>,
}

impl Interpreter {
    /// Create an interpreter with default settings attached to the process
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    /// Create an interpreter attached to the process
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self::with_host(config, Box::new(ProcessHost::new()))
    }

    /// Create an interpreter whose syscalls act on `host`
    pub fn with_host(config: RuntimeConfig, host: Box<dyn Host>) -> Self {
        Self {
            stack: Vec::with_capacity(config.initial_stack_capacity),
            started: Instant::now(),
            syscalls: SyscallTable::builtin(),
            config,
            host,
        }
    }

    /// Push a value onto the top of the stack
    pub fn push(&mut self, value: Value) {
        tracing::trace!(%value, depth = self.stack.len() + 1, "push");
        self.stack.push(value);
    }

    /// Remove and return the top of the stack
    ///
    /// # Errors
    ///
    /// `StackUnderflow` when the stack is empty.
    pub fn pop(&mut self) -> RuntimeResult<Value> {
        let value = self.stack.pop().ok_or(RuntimeError::StackUnderflow)?;
        tracing::trace!(%value, depth = self.stack.len(), "pop");
        Ok(value)
    }

    /// Pop the top of the stack and read it as `T`
    ///
    /// The value is consumed even when it has the wrong kind.
    ///
    /// # Errors
    ///
    /// `StackUnderflow` when the stack is empty, `TypeMismatch` when the top
    /// value is not a `T`.
    pub fn pop_as<T: Primitive>(&mut self) -> RuntimeResult<T> {
        Ok(self.pop()?.get::<T>()?)
    }

    /// The top of the stack, if any
    pub fn peek(&self) -> Option<&Value> {
        self.stack.last()
    }

    /// Current stack depth
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Stack contents from bottom to top
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Wall-clock time since this interpreter was constructed
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Invoke the syscall registered under `name`
    ///
    /// # Errors
    ///
    /// Whatever the handler returns. For a name with no handler,
    /// `UnknownSyscall` under [`UnknownSyscallPolicy::Reject`]; under
    /// [`UnknownSyscallPolicy::Ignore`] the call does nothing.
    pub fn syscall(&mut self, name: &str) -> RuntimeResult<()> {
        match self.syscalls.get(name) {
            Some(handler) => {
                tracing::debug!(name, depth = self.stack.len(), "syscall");
                handler(self)
            }
            None => match self.config.unknown_syscall {
                UnknownSyscallPolicy::Reject => {
                    Err(RuntimeError::UnknownSyscall(name.to_string()))
                }
                UnknownSyscallPolicy::Ignore => {
                    tracing::warn!(name, "ignoring unknown syscall");
                    Ok(())
                }
            },
        }
    }

    /// Register a syscall handler, returning any handler it replaces
    pub fn register_syscall(
        &mut self,
        name: impl Into<String>,
        handler: SyscallFn,
    ) -> Option<SyscallFn> {
        self.syscalls.register(name, handler)
    }

    /// The syscall table
    pub fn syscalls(&self) -> &SyscallTable {
        &self.syscalls
    }

    /// Active configuration
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Host that receives output and exit requests
    pub fn host_mut(&mut self) -> &mut dyn Host {
        self.host.as_mut()
    }

    /// Run a compiled program's entry point
    ///
    /// Checks `args` against the program's declared parameters before
    /// calling it. Returns normally when the program falls through without
    /// exiting.
    ///
    /// # Errors
    ///
    /// `ArityMismatch` or `TypeMismatch` for bad arguments, otherwise any
    /// error the program propagates.
    pub fn execute(&mut self, program: &dyn Program, args: &[Value]) -> RuntimeResult<()> {
        program::check_arguments(program, args)?;
        tracing::debug!(program = program.name(), args = args.len(), "entering program");
        program.main(self, args)?;
        tracing::debug!(
            program = program.name(),
            depth = self.stack.len(),
            "program returned"
        );
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("stack", &self.stack)
            .field("syscalls", &self.syscalls)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
