//! Stdout logger for std platforms
//!
//! Printed output goes to stdout exactly as the program produced it: no
//! newline is added after a print, so programs print `n` themselves.
//! Complaints go to stderr, one per line.

#[cfg(feature = "std")]
use crate::compat::fmt;
#[cfg(feature = "std")]
use crate::interpreter::Interpreter;
#[cfg(feature = "std")]
use crate::output::Logger;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct StdoutLogger {
    // Also print the stack under each complaint
    pub show_stack: bool,
}

#[cfg(feature = "std")]
impl StdoutLogger {
    pub fn new() -> Self {
        StdoutLogger { show_stack: false }
    }
}

#[cfg(feature = "std")]
impl Logger for StdoutLogger {
    fn print_out(&mut self, value: &dyn fmt::Display) -> Result<(), ()> {
        let mut out = io::stdout().lock();
        write!(out, "{}", value).map_err(|_| ())?;
        out.flush().map_err(|_| ())?;
        Ok(())
    }

    fn print_err(&mut self, message: &str, interp: &Interpreter) -> Result<(), ()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", message).map_err(|_| ())?;
        if self.show_stack {
            writeln!(err, "stack: {}", interp.display_stack()).map_err(|_| ())?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::compat::{Box, Rc};
    use crate::namespace::Namespace;

    #[test]
    fn test_stdout_logger_writes() {
        let mut interp = Interpreter::new("", Rc::new(Namespace::new()), Box::new(StdoutLogger::new()));
        assert_eq!(interp.print_out(&"ok"), Ok(()));
        interp.complain(Some("test"), "shown on stderr");
        assert!(interp.has_errored());
    }
}
