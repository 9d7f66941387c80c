//! # Res Core
//!
//! Interpreter library for Res, a stack language read one character at a
//! time.
//!
//! Every character of a program is looked up in a mutable, tree-shaped
//! namespace. What it finds is pushed as data, run as an operator, or opened
//! as a read-mode that takes over how the following characters are read.
//! The library is `no_std` + `alloc` compatible.
//!
//! ## Features
//!
//! - **Stepwise**: `step` does one unit of work and `run` takes a step budget,
//!   so a host can interleave execution with its own event loop
//! - **Tail calls**: a block that ends by starting another block is replaced,
//!   so loops written as self-calls run in constant block depth
//! - **Reprogrammable syntax**: operators and read-modes can be defined in
//!   Res itself and stored anywhere in the namespace
//!
//! ## Example
//!
//! ```
//! use res_core::{BufferLogger, Interpreter, RunOutcome};
//!
//! let log = BufferLogger::new();
//! let mut interp = Interpreter::with_defaults("3 4 +\"sum\"P", Box::new(log.clone()));
//!
//! assert_eq!(interp.run(None), RunOutcome::Finished);
//! assert_eq!(interp.display_stack(), "[7]");
//! assert_eq!(log.output(), vec!["sum".to_string()]);
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod block;
pub mod builtins;
pub mod evaluator;
pub mod interpreter;
pub mod namespace;
pub mod output;
pub mod primitives;
pub mod readmode;
pub mod value;

#[cfg(feature = "std")]
pub mod stdout_output;

// Internal module
mod compat;

// Re-exports for convenience
pub use builtins::default_namespace;
pub use evaluator::RunOutcome;
pub use interpreter::{Interpreter, Want};
pub use namespace::{Namespace, TableId};
pub use output::{BufferLogger, Logger};
pub use readmode::{NativeMode, ReadMode};
pub use value::{Item, Operator, RuntimeError};

#[cfg(feature = "std")]
pub use stdout_output::StdoutLogger;
