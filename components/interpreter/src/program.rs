//! Entry point contract for compiled programs
//!
//! The compiler emits each program as a [`Program`] implementation whose
//! `main` is straight-line native code: native locals, native arithmetic,
//! and calls into the [`Interpreter`] for stack traffic and syscalls.

use core_types::{DataType, Value, ValueDerefError};

use crate::error::{RuntimeError, RuntimeResult};
use crate::vm::Interpreter;

/// A compiled program's entry point
///
/// # Example
///
/// ```
/// use core_types::{DataType, Value};
/// use interpreter::{CaptureHost, Interpreter, Program, RuntimeConfig, RuntimeResult};
///
/// struct Double;
///
/// impl Program for Double {
///     fn name(&self) -> &str {
///         "double"
///     }
///
///     fn parameters(&self) -> &[DataType] {
///         &[DataType::I64]
///     }
///
///     fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()> {
///         let arg0: i64 = args[0].get()?;
///         let local0 = arg0.wrapping_mul(2);
///         interpreter.push(Value::from(local0));
///         Ok(())
///     }
/// }
///
/// let mut interp = Interpreter::with_host(RuntimeConfig::default(), Box::new(CaptureHost::new()));
/// interp.execute(&Double, &[Value::I64(21)]).unwrap();
/// assert_eq!(interp.pop_as::<i64>().unwrap(), 42);
/// ```
pub trait Program {
    /// Name the program is known by
    fn name(&self) -> &str;

    /// Declared parameter kinds, in order
    fn parameters(&self) -> &[DataType];

    /// Run the program body
    ///
    /// Called through [`Interpreter::execute`], which has already checked
    /// `args` against [`parameters`](Program::parameters). Results leave the
    /// program only through syscalls or the exit status.
    fn main(&self, interpreter: &mut Interpreter, args: &[Value]) -> RuntimeResult<()>;
}

/// Check `args` against the parameters `program` declares
///
/// # Errors
///
/// `ArityMismatch` on a count mismatch, `TypeMismatch` for the first
/// argument whose kind differs from its parameter.
pub fn check_arguments(program: &dyn Program, args: &[Value]) -> RuntimeResult<()> {
    let parameters = program.parameters();
    if parameters.len() != args.len() {
        return Err(RuntimeError::ArityMismatch {
            program: program.name().to_string(),
            expected: parameters.len(),
            actual: args.len(),
        });
    }

    for (expected, arg) in parameters.iter().zip(args) {
        let actual = arg.data_type();
        if *expected != actual {
            return Err(ValueDerefError::new(*expected, actual).into());
        }
    }

    Ok(())
}
