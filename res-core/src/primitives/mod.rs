// Primitives module - native operators and read-modes, one file per family

// Arithmetic and characters
pub mod arithmetic;
pub mod chars;

// Lists and plain data
pub mod lists;
pub mod data;

// Operand stack and scopes
pub mod stack;
pub mod scope;

// Namespace mutation
pub mod names;

// Blocks, labels and read-mode control
pub mod control;

// Output (input is not supported)
pub mod io;

// Built-in read-modes for literals
pub mod literals;

use crate::compat::format;
use crate::interpreter::Interpreter;
use crate::namespace::Resolved;
use crate::value::{Item, NumberDisplay, RuntimeError};

#[cfg(target_os = "none")]
use num_traits::Float;

// RUST CONCEPT: Shared operand conversions
// Counts and depths must be whole and non-negative before they index a Vec.
pub fn count(n: f64) -> Result<usize, RuntimeError> {
    if n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
        Ok(n as usize)
    } else {
        Err(RuntimeError::NotAnInteger(n))
    }
}

pub fn integer(n: f64) -> Result<i64, RuntimeError> {
    if n.is_finite() && n.fract() == 0.0 {
        Ok(n as i64)
    } else {
        Err(RuntimeError::TypeError(format!(
            "expected an integer, got {}",
            NumberDisplay(n)
        )))
    }
}

/// Reads `path` as a string and walks it to the end through the working
/// namespace.
pub fn resolve(interp: &mut Interpreter, path: &Item) -> Result<Resolved, RuntimeError> {
    let path = path.expect_text()?;
    interp.namespace.resolve_full(&path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(count(3.0), Ok(3));
        assert_eq!(count(0.0), Ok(0));
        assert_eq!(count(-1.0), Err(RuntimeError::NotAnInteger(-1.0)));
        assert!(count(1.5).is_err());
        assert!(count(f64::NAN).is_err());
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer(-4.0), Ok(-4));
        assert!(integer(0.25).is_err());
        assert!(integer(f64::INFINITY).is_err());
    }
}
