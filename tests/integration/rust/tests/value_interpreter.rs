//! Value ↔ Interpreter Integration Tests
//!
//! Verifies values keep their tags across the interpreter's stack and
//! through custom syscalls that mix both kinds.

use core_types::{DataType, Value, ValueDerefError};
use interpreter::{CaptureHost, Interpreter, RuntimeConfig, RuntimeError, RuntimeResult};

fn captured() -> Interpreter {
    Interpreter::with_host(RuntimeConfig::default(), Box::new(CaptureHost::new()))
}

/// Pops `b: I64`, `a: I64`, pushes `a < b`
fn less_than(interp: &mut Interpreter) -> RuntimeResult<()> {
    let b = interp.pop_as::<i64>()?;
    let a = interp.pop_as::<i64>()?;
    interp.push(Value::from(a < b));
    Ok(())
}

/// Pops `cond: Bool`, `else: I64`, `then: I64`, pushes the selected branch
fn select(interp: &mut Interpreter) -> RuntimeResult<()> {
    let cond = interp.pop_as::<bool>()?;
    let otherwise = interp.pop_as::<i64>()?;
    let then = interp.pop_as::<i64>()?;
    interp.push(Value::from(if cond { then } else { otherwise }));
    Ok(())
}

fn with_comparisons() -> Interpreter {
    let mut interp = captured();
    interp.register_syscall("LessThan", less_than);
    interp.register_syscall("Select", select);
    interp
}

#[test]
fn test_syscalls_compose_over_stack() {
    let mut interp = with_comparisons();

    interp.push(Value::I64(10));
    interp.push(Value::I64(20));
    interp.push(Value::I64(3));
    interp.push(Value::I64(4));
    interp.syscall("LessThan").unwrap();
    assert_eq!(interp.peek(), Some(&Value::Bool(true)));

    interp.syscall("Select").unwrap();
    assert_eq!(interp.stack(), &[Value::I64(10)]);
}

#[test]
fn test_wrong_kind_argument_to_syscall() {
    let mut interp = with_comparisons();

    interp.push(Value::I64(1));
    interp.push(Value::I64(2));
    interp.push(Value::I64(0));

    assert_eq!(
        interp.syscall("Select"),
        Err(RuntimeError::TypeMismatch(ValueDerefError::new(
            DataType::Bool,
            DataType::I64
        )))
    );
    // The mismatched value was consumed; the rest is untouched.
    assert_eq!(interp.stack(), &[Value::I64(1), Value::I64(2)]);
}

#[test]
fn test_syscall_underflow_midway() {
    let mut interp = with_comparisons();
    interp.push(Value::I64(1));

    assert_eq!(interp.syscall("LessThan"), Err(RuntimeError::StackUnderflow));
    assert!(interp.is_empty());
}

#[test]
fn test_builtin_exit_survives_custom_registration() {
    let interp = with_comparisons();
    assert_eq!(interp.syscalls().names(), vec!["Exit", "LessThan", "Select"]);
}
