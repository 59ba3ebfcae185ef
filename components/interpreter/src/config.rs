//! Interpreter configuration

use serde::{Deserialize, Serialize};

/// What `syscall` does with a name that has no registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSyscallPolicy {
    /// Fail with `RuntimeError::UnknownSyscall`
    #[default]
    Reject,
    /// Treat the call as a no-op, matching older runtimes
    Ignore,
}

/// Runtime settings for an [`Interpreter`](crate::Interpreter)
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use interpreter::{RuntimeConfig, UnknownSyscallPolicy};
///
/// let config: RuntimeConfig = serde_json::from_str(r#"{ "unknown_syscall": "ignore" }"#).unwrap();
/// assert_eq!(config.unknown_syscall, UnknownSyscallPolicy::Ignore);
/// assert_eq!(config.initial_stack_capacity, RuntimeConfig::default().initial_stack_capacity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Handling of syscall names missing from the table
    pub unknown_syscall: UnknownSyscallPolicy,
    /// Slots reserved for the evaluation stack up front
    pub initial_stack_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            unknown_syscall: UnknownSyscallPolicy::Reject,
            initial_stack_capacity: 64,
        }
    }
}

impl RuntimeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown syscall policy
    pub fn with_unknown_syscall(mut self, policy: UnknownSyscallPolicy) -> Self {
        self.unknown_syscall = policy;
        self
    }

    /// Set the initial evaluation stack capacity
    pub fn with_initial_stack_capacity(mut self, capacity: usize) -> Self {
        self.initial_stack_capacity = capacity;
        self
    }
}
