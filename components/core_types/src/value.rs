//! Komodo value representation.
//!
//! This module provides the `Value` enum that compiled programs push onto and
//! pop off the interpreter's evaluation stack, together with the `DataType`
//! tag that names which payload a value holds.

use crate::ValueDerefError;
use std::fmt;

/// The closed set of primitive kinds a [`Value`] can hold.
///
/// Matches over this enum are written without wildcard arms, so adding a
/// kind is a compile error everywhere a new arm is required.
///
/// # Examples
///
/// ```
/// use core_types::DataType;
///
/// assert_eq!(DataType::I64.to_string(), "I64");
/// assert_eq!(DataType::Bool.to_string(), "Bool");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 64-bit signed integer
    I64,
    /// Boolean
    Bool,
}

impl DataType {
    /// Every kind, in declaration order
    pub const ALL: [DataType; 2] = [DataType::I64, DataType::Bool];

    /// Name of the kind as it appears in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            DataType::I64 => "I64",
            DataType::Bool => "Bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tagged runtime value.
///
/// The variant is the tag and the field is the payload, so a value can never
/// be observed with a tag that disagrees with its payload. Values are plain
/// data: they own nothing and are copied freely.
///
/// # Examples
///
/// ```
/// use core_types::{DataType, Value};
///
/// let n = Value::I64(7);
/// let flag = Value::from(true);
///
/// assert_eq!(n.data_type(), DataType::I64);
/// assert_eq!(flag.get::<bool>(), Ok(true));
/// assert!(flag.get::<i64>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// 64-bit signed integer payload
    I64(i64),
    /// Boolean payload
    Bool(bool),
}

impl Value {
    /// Returns the kind of payload this value holds.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::I64(_) => DataType::I64,
            Value::Bool(_) => DataType::Bool,
        }
    }

    /// Reads the payload as `T`.
    ///
    /// Succeeds only when the stored kind is `T::DATA_TYPE`. Any other kind
    /// yields a [`ValueDerefError`] naming both kinds; the payload is never
    /// reinterpreted.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{DataType, Value, ValueDerefError};
    ///
    /// assert_eq!(Value::I64(-3).get::<i64>(), Ok(-3));
    /// assert_eq!(
    ///     Value::I64(-3).get::<bool>(),
    ///     Err(ValueDerefError::new(DataType::Bool, DataType::I64))
    /// );
    /// ```
    pub fn get<T: Primitive>(&self) -> Result<T, ValueDerefError> {
        T::from_value(self).ok_or_else(|| ValueDerefError::new(T::DATA_TYPE, self.data_type()))
    }

    /// Reads the payload as an `i64`.
    pub fn as_i64(&self) -> Result<i64, ValueDerefError> {
        self.get()
    }

    /// Reads the payload as a `bool`.
    pub fn as_bool(&self) -> Result<bool, ValueDerefError> {
        self.get()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I64(n) => write!(f, "I64({})", n),
            Value::Bool(b) => write!(f, "Bool({})", b),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for bool {}
}

/// A native Rust type that corresponds to exactly one [`DataType`].
///
/// This trait is sealed; the set of primitives is closed along with
/// [`DataType`].
pub trait Primitive: sealed::Sealed + Copy + Into<Value> {
    /// The kind a [`Value`] must hold to be read as `Self`
    const DATA_TYPE: DataType;

    /// Extracts the payload when the tag matches, `None` otherwise.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Primitive for i64 {
    const DATA_TYPE: DataType = DataType::I64;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::I64(n) => Some(*n),
            Value::Bool(_) => None,
        }
    }
}

impl Primitive for bool {
    const DATA_TYPE: DataType = DataType::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::I64(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueDerefError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get()
    }
}

impl TryFrom<Value> for bool {
    type Error = ValueDerefError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.get()
    }
}
