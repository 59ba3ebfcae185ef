//! Host effects available to syscalls
//!
//! Syscalls never touch stdout or the process directly; they go through a
//! [`Host`], so the same interpreter can run inside the real process or
//! inside a test that captures output and intercepts exit.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Effects the runtime asks of its embedding process
pub trait Host {
    /// Write one line to the program's standard output
    fn write_line(&mut self, line: &str);

    /// Terminate with `code` as the exit status. Never returns.
    fn exit(&mut self, code: i32) -> !;
}

/// Host backed by the real process: stdout and `std::process::exit`
#[derive(Debug, Default)]
pub struct ProcessHost;

impl ProcessHost {
    /// Create a process host
    pub fn new() -> Self {
        Self
    }
}

impl Host for ProcessHost {
    fn write_line(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        // A closed stdout must not stop the program from reaching its exit.
        let _ = writeln!(stdout, "{}", line);
    }

    fn exit(&mut self, code: i32) -> ! {
        let _ = io::stdout().flush();
        std::process::exit(code)
    }
}

/// Panic payload raised by [`CaptureHost::exit`]
///
/// Catch it with `std::panic::catch_unwind` and downcast the payload to read
/// the requested exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequest {
    /// Requested exit status
    pub code: i32,
}

/// Host that records output lines and turns exit into an unwind
///
/// # Examples
///
/// ```
/// use interpreter::{CaptureHost, ExitRequest, Host};
/// use std::cell::RefCell;
/// use std::panic::{self, AssertUnwindSafe};
/// use std::rc::Rc;
///
/// let output = Rc::new(RefCell::new(Vec::new()));
/// let mut host = CaptureHost::new_with_output(output.clone());
///
/// host.write_line("hello");
/// let payload = panic::catch_unwind(AssertUnwindSafe(|| host.exit(3))).unwrap_err();
///
/// assert_eq!(*output.borrow(), vec!["hello".to_string()]);
/// assert_eq!(payload.downcast_ref::<ExitRequest>(), Some(&ExitRequest { code: 3 }));
/// ```
#[derive(Debug, Default)]
pub struct CaptureHost {
    output: Rc<RefCell<Vec<String>>>,
}

impl CaptureHost {
    /// Create a capture host with its own output buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capture host that appends to a shared buffer
    pub fn new_with_output(output: Rc<RefCell<Vec<String>>>) -> Self {
        Self { output }
    }

    /// Shared handle to the captured lines
    pub fn output(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.output)
    }
}

impl Host for CaptureHost {
    fn write_line(&mut self, line: &str) {
        self.output.borrow_mut().push(line.to_string());
    }

    fn exit(&mut self, code: i32) -> ! {
        std::panic::panic_any(ExitRequest { code })
    }
}
