//! Unit tests for ValueDerefError

use core_types::{DataType, Value, ValueDerefError};

#[cfg(test)]
mod deref_error_tests {
    use super::*;

    #[test]
    fn test_error_carries_expected_and_actual() {
        let err = Value::Bool(true).as_i64().unwrap_err();
        assert_eq!(err.expected, DataType::I64);
        assert_eq!(err.actual, DataType::Bool);
    }

    #[test]
    fn test_error_message_i64_from_bool() {
        let err = ValueDerefError::new(DataType::I64, DataType::Bool);
        assert_eq!(
            err.to_string(),
            "Unable to dereference value to I64. It is a Bool."
        );
    }

    #[test]
    fn test_error_message_bool_from_i64() {
        let err = Value::I64(3).as_bool().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to dereference value to Bool. It is a I64."
        );
    }

    #[test]
    fn test_error_is_copy_and_comparable() {
        let err = ValueDerefError::new(DataType::I64, DataType::Bool);
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, ValueDerefError::new(DataType::Bool, DataType::I64));
    }
}
