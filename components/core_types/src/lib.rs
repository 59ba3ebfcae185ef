//! Core Komodo value types and error handling.
//!
//! This crate provides the foundational types for the Komodo runtime:
//! the tagged value representation shared by the interpreter and every
//! compiled program, and the error raised when a value is read as the
//! wrong type.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`DataType`] - The closed set of primitive kinds a value can hold
//! - [`Primitive`] - Native Rust types that map onto a [`DataType`]
//! - [`ValueDerefError`] - Raised when a value is read as the wrong type
//!
//! # Examples
//!
//! ```
//! use core_types::{DataType, Value};
//!
//! let exit_code = Value::from(42i64);
//! assert_eq!(exit_code.data_type(), DataType::I64);
//! assert_eq!(exit_code.as_i64(), Ok(42));
//!
//! let err = exit_code.as_bool().unwrap_err();
//! assert_eq!(err.to_string(), "Unable to dereference value to Bool. It is a I64.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::ValueDerefError;
pub use value::{DataType, Primitive, Value};
