//! Contract tests for interpreter API
//!
//! These tests pin the observable runtime contract: tag fidelity through the
//! stack, LIFO order, underflow safety, the `Exit` syscall, the unknown
//! syscall policy, and elapsed-time reporting.

use core_types::{DataType, Value, ValueDerefError};
use interpreter::{
    CaptureHost, ExitRequest, Interpreter, RuntimeConfig, RuntimeError, UnknownSyscallPolicy,
};
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

fn captured(config: RuntimeConfig) -> (Interpreter, Rc<RefCell<Vec<String>>>) {
    let host = CaptureHost::new();
    let output = host.output();
    (Interpreter::with_host(config, Box::new(host)), output)
}

/// Invoke `Exit` and return the requested exit status.
fn exit_code(interp: &mut Interpreter) -> i32 {
    let payload = panic::catch_unwind(AssertUnwindSafe(|| interp.syscall("Exit")))
        .expect_err("Exit returned instead of terminating");
    payload
        .downcast_ref::<ExitRequest>()
        .expect("unexpected panic payload")
        .code
}

/// Parse the seconds out of a `Finished in <seconds> seconds` line.
fn reported_seconds(line: &str) -> f64 {
    line.strip_prefix("Finished in ")
        .and_then(|rest| rest.strip_suffix(" seconds"))
        .expect("malformed exit report")
        .parse()
        .expect("seconds is not a number")
}

/// Contract: a value popped off the stack reads back only as the kind it was pushed as
#[test]
fn test_tag_fidelity_through_stack() {
    let (mut interp, _) = captured(RuntimeConfig::default());
    interp.push(Value::I64(-8));
    interp.push(Value::Bool(true));

    let top = interp.pop().unwrap();
    assert_eq!(top.as_bool(), Ok(true));
    assert_eq!(
        top.as_i64(),
        Err(ValueDerefError::new(DataType::I64, DataType::Bool))
    );

    let next = interp.pop().unwrap();
    assert_eq!(next.as_i64(), Ok(-8));
    assert_eq!(
        next.as_bool(),
        Err(ValueDerefError::new(DataType::Bool, DataType::I64))
    );
}

/// Contract: pops yield pushes in reverse order
#[test]
fn test_stack_lifo_order() {
    let (mut interp, _) = captured(RuntimeConfig::default());
    for n in 1..=5 {
        interp.push(Value::I64(n));
    }
    for n in (1..=5).rev() {
        assert_eq!(interp.pop(), Ok(Value::I64(n)));
    }
}

/// Contract: pop on a fresh interpreter fails with StackUnderflow
#[test]
fn test_underflow_safety() {
    let (mut interp, _) = captured(RuntimeConfig::default());
    assert_eq!(interp.pop(), Err(RuntimeError::StackUnderflow));
}

/// Contract: Exit with 42 on the stack exits 42 after one report line
#[test]
fn test_exit_contract() {
    let (mut interp, output) = captured(RuntimeConfig::default());
    interp.push(Value::I64(42));

    assert_eq!(exit_code(&mut interp), 42);

    let lines = output.borrow();
    assert_eq!(lines.len(), 1);
    assert!(reported_seconds(&lines[0]) >= 0.0);
}

/// Contract: Exit with a Bool on the stack is a type error and does not exit
#[test]
fn test_exit_type_check() {
    let (mut interp, output) = captured(RuntimeConfig::default());
    interp.push(Value::Bool(true));

    let result = panic::catch_unwind(AssertUnwindSafe(|| interp.syscall("Exit")))
        .expect("Exit terminated on a type error");

    assert_eq!(
        result,
        Err(RuntimeError::TypeMismatch(ValueDerefError::new(
            DataType::I64,
            DataType::Bool
        )))
    );
    assert!(output.borrow().is_empty());
}

/// Contract: Exit on an empty stack is an underflow
#[test]
fn test_exit_underflow() {
    let (mut interp, output) = captured(RuntimeConfig::default());
    assert_eq!(interp.syscall("Exit"), Err(RuntimeError::StackUnderflow));
    assert!(output.borrow().is_empty());
}

/// Contract: unknown syscalls fail under the default policy
#[test]
fn test_unknown_syscall_default_policy() {
    let (mut interp, _) = captured(RuntimeConfig::default());
    assert_eq!(
        interp.syscall("DoesNotExist"),
        Err(RuntimeError::UnknownSyscall("DoesNotExist".to_string()))
    );
}

/// Contract: unknown syscalls are no-ops under the legacy policy
#[test]
fn test_unknown_syscall_legacy_policy() {
    let config = RuntimeConfig::new().with_unknown_syscall(UnknownSyscallPolicy::Ignore);
    let (mut interp, output) = captured(config);
    interp.push(Value::I64(1));

    assert_eq!(interp.syscall("DoesNotExist"), Ok(()));
    assert_eq!(interp.stack(), &[Value::I64(1)]);
    assert!(output.borrow().is_empty());
}

/// Contract: reported elapsed time grows with delay before Exit
#[test]
fn test_elapsed_time_monotonic() {
    let (mut quick, quick_output) = captured(RuntimeConfig::default());
    quick.push(Value::I64(0));
    exit_code(&mut quick);

    let (mut slow, slow_output) = captured(RuntimeConfig::default());
    thread::sleep(Duration::from_millis(50));
    slow.push(Value::I64(0));
    exit_code(&mut slow);

    let quick_seconds = reported_seconds(&quick_output.borrow()[0]);
    let slow_seconds = reported_seconds(&slow_output.borrow()[0]);

    assert!(quick_seconds >= 0.0);
    assert!(slow_seconds >= 0.05);
    assert!(slow_seconds > quick_seconds);
}
