//! Programs bundled with the host
//!
//! Each program is written the way the compiler emits one: native locals,
//! one comment per bytecode instruction, and explicit conversion wherever a
//! value crosses onto or off the interpreter's stack.

use core_types::{DataType, Value};
use interpreter::{Interpreter, Program, RuntimeResult};
use std::thread;
use std::time::Duration;

/// Every bundled program, in listing order
pub static PROGRAMS: &[&(dyn Program + Sync)] = &[
    &Hello,
    &ExitWith,
    &AddExit,
    &BoolExit,
    &UnderflowExit,
    &UnknownSyscall,
    &SleepExit,
];

/// Look up a bundled program by name
pub fn find(name: &str) -> Option<&'static (dyn Program + Sync)> {
    PROGRAMS.iter().copied().find(|program| program.name() == name)
}

/// `name(I64, Bool)` style signature for listings
pub fn signature(program: &dyn Program) -> String {
    let parameters: Vec<&str> = program.parameters().iter().map(|kind| kind.name()).collect();
    format!("{}({})", program.name(), parameters.join(", "))
}

/// Adds into a local, greets, and falls through without exiting
pub struct Hello;

impl Program for Hello {
    fn name(&self) -> &str {
        "hello"
    }

    fn parameters(&self) -> &[DataType] {
        &[DataType::I64, DataType::I64]
    }

    fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()> {
        let _arg0: i64 = args[0].get()?;
        let arg1: i64 = args[1].get()?;
        let local0: i64 = 0;

        // ADD I64 local0 arg1 local2
        let local2 = local0.wrapping_add(arg1);
        tracing::debug!(local2, "hello computed");

        interpreter.host_mut().write_line("Hello, World!");
        Ok(())
    }
}

/// Exits with its argument
pub struct ExitWith;

impl Program for ExitWith {
    fn name(&self) -> &str {
        "exit"
    }

    fn parameters(&self) -> &[DataType] {
        &[DataType::I64]
    }

    fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()> {
        let arg0: i64 = args[0].get()?;

        // PUSH I64 arg0
        interpreter.push(Value::from(arg0));
        // SYSCALL Exit
        interpreter.syscall("Exit")?;
        Ok(())
    }
}

/// Exits with the sum of its arguments
pub struct AddExit;

impl Program for AddExit {
    fn name(&self) -> &str {
        "add_exit"
    }

    fn parameters(&self) -> &[DataType] {
        &[DataType::I64, DataType::I64]
    }

    fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()> {
        let arg0: i64 = args[0].get()?;
        let arg1: i64 = args[1].get()?;

        // ADD I64 arg0 arg1 local0
        let local0 = arg0.wrapping_add(arg1);
        // PUSH I64 local0
        interpreter.push(Value::from(local0));
        // SYSCALL Exit
        interpreter.syscall("Exit")?;
        Ok(())
    }
}

/// Calls `Exit` with a `Bool` on the stack
pub struct BoolExit;

impl Program for BoolExit {
    fn name(&self) -> &str {
        "bool_exit"
    }

    fn parameters(&self) -> &[DataType] {
        &[]
    }

    fn main(&self, interpreter: &mut Interpreter, _args: &[Value]) -> RuntimeResult<()> {
        // PUSH Bool true
        interpreter.push(Value::from(true));
        // SYSCALL Exit
        interpreter.syscall("Exit")?;
        Ok(())
    }
}

/// Calls `Exit` with nothing on the stack
pub struct UnderflowExit;

impl Program for UnderflowExit {
    fn name(&self) -> &str {
        "underflow_exit"
    }

    fn parameters(&self) -> &[DataType] {
        &[]
    }

    fn main(&self, interpreter: &mut Interpreter, _args: &[Value]) -> RuntimeResult<()> {
        // SYSCALL Exit
        interpreter.syscall("Exit")?;
        Ok(())
    }
}

/// Calls a syscall nobody registered, then falls through
pub struct UnknownSyscall;

impl Program for UnknownSyscall {
    fn name(&self) -> &str {
        "unknown_syscall"
    }

    fn parameters(&self) -> &[DataType] {
        &[]
    }

    fn main(&self, interpreter: &mut Interpreter, _args: &[Value]) -> RuntimeResult<()> {
        // SYSCALL DoesNotExist
        interpreter.syscall("DoesNotExist")?;
        Ok(())
    }
}

/// Sleeps for its argument in milliseconds, then exits 0
pub struct SleepExit;

impl Program for SleepExit {
    fn name(&self) -> &str {
        "sleep_exit"
    }

    fn parameters(&self) -> &[DataType] {
        &[DataType::I64]
    }

    fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()> {
        let arg0: i64 = args[0].get()?;

        // Negative delays sleep for zero.
        thread::sleep(Duration::from_millis(u64::try_from(arg0).unwrap_or(0)));
        // PUSH I64 0
        interpreter.push(Value::from(0i64));
        // SYSCALL Exit
        interpreter.syscall("Exit")?;
        Ok(())
    }
}
