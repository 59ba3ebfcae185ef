//! Errors raised by the value model.

use crate::DataType;
use thiserror::Error;

/// A value was dereferenced as a type other than the one it holds.
///
/// Reading the wrong payload is a programming error in the code that issued
/// the read, so this error carries both kinds for the diagnostic and for
/// callers that want to branch on them.
///
/// # Examples
///
/// ```
/// use core_types::{DataType, ValueDerefError};
///
/// let error = ValueDerefError::new(DataType::I64, DataType::Bool);
/// assert_eq!(error.expected, DataType::I64);
/// assert_eq!(
///     error.to_string(),
///     "Unable to dereference value to I64. It is a Bool."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unable to dereference value to {expected}. It is a {actual}.")]
pub struct ValueDerefError {
    /// The kind the caller asked for
    pub expected: DataType,
    /// The kind the value actually holds
    pub actual: DataType,
}

impl ValueDerefError {
    /// Create a new dereference error
    pub fn new(expected: DataType, actual: DataType) -> Self {
        Self { expected, actual }
    }
}
