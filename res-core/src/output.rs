//! Output sink for the Res interpreter
//!
//! The interpreter never writes anywhere by itself. Printed items and
//! complaints are handed to a [`Logger`] supplied by the host: a terminal,
//! a UART, or an in-memory buffer for tests.

use crate::compat::{Rc, String, ToString, Vec, fmt};
use crate::interpreter::Interpreter;
use core::cell::RefCell;

/// Destination for program output and diagnostics.
pub trait Logger {
    /// Receives each item (or pretty string) a program prints.
    /// Returns Err(()) if the destination could not be written.
    fn print_out(&mut self, value: &dyn fmt::Display) -> Result<(), ()>;

    /// Receives each complaint, already formatted as
    /// `[WHOOPS] scope(position): message`. The interpreter that complained
    /// is passed along so the host can show its stack or blocks.
    fn print_err(&mut self, message: &str, interp: &Interpreter) -> Result<(), ()>;
}

#[derive(Debug, Default)]
struct Buffers {
    out: Vec<String>,
    err: Vec<String>,
}

// RUST CONCEPT: Shared interior buffer
// The interpreter owns its logger as a Box<dyn Logger>, so a test keeps a
// clone of the BufferLogger and reads what was logged through that clone.
#[derive(Debug, Clone, Default)]
pub struct BufferLogger {
    buffers: Rc<RefCell<Buffers>>,
}

impl BufferLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far, one entry per print.
    pub fn output(&self) -> Vec<String> {
        self.buffers.borrow().out.clone()
    }

    /// Every complaint so far.
    pub fn errors(&self) -> Vec<String> {
        self.buffers.borrow().err.clone()
    }

    pub fn clear(&self) {
        let mut buffers = self.buffers.borrow_mut();
        buffers.out.clear();
        buffers.err.clear();
    }
}

impl Logger for BufferLogger {
    fn print_out(&mut self, value: &dyn fmt::Display) -> Result<(), ()> {
        self.buffers.borrow_mut().out.push(value.to_string());
        Ok(())
    }

    fn print_err(&mut self, message: &str, _interp: &Interpreter) -> Result<(), ()> {
        self.buffers.borrow_mut().err.push(message.to_string());
        Ok(())
    }
}
