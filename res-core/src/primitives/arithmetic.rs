// RUST CONCEPT: Binary math operators share one shape
// ( a b -- a∘b ) with both operands checked as numbers before either is popped

use crate::interpreter::{Interpreter, Want};
use crate::value::{Item, RuntimeError};

#[cfg(target_os = "none")]
use num_traits::Float;

fn binary(interp: &mut Interpreter, f: fn(f64, f64) -> f64) -> Result<(), RuntimeError> {
    let [a, b] = interp.operands([Want::Num, Want::Num])?;
    let result = f(a.expect_number()?, b.expect_number()?);
    interp.push(Item::Number(result));
    Ok(())
}

pub fn add_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    binary(interp, |a, b| a + b)
}

pub fn subtract_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    binary(interp, |a, b| a - b)
}

pub fn multiply_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    binary(interp, |a, b| a * b)
}

// IEEE division: dividing by zero gives an infinity (or NaN for 0/0)
pub fn divide_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    binary(interp, |a, b| a / b)
}

/// Real modulus: the result takes the sign of the divisor.
pub fn real_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

pub fn modulus_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    binary(interp, real_mod)
}

pub fn negate_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [n] = interp.operands([Want::Num])?;
    interp.push(Item::Number(-n.expect_number()?));
    Ok(())
}

// ( a b -- lesser greater ); equal or unordered pairs keep their order
pub fn minmax_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a, b] = interp.operands([Want::Num, Want::Num])?;
    if b.expect_number()? < a.expect_number()? {
        interp.push(b);
        interp.push(a);
    } else {
        interp.push(a);
        interp.push(b);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::test_support::{complaint, stack_after};

    #[test]
    fn test_basic_math() {
        assert_eq!(stack_after("3 4 +"), "[7]");
        assert_eq!(stack_after("3 4 -"), "[-1]");
        assert_eq!(stack_after("6 7 *"), "[42]");
        assert_eq!(stack_after("3 4 /"), "[0.75]");
        assert_eq!(stack_after("5~"), "[-5]");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(stack_after("1 0 /"), "[Infinity]");
        assert_eq!(stack_after("1~ 0 /"), "[-Infinity]");
        assert_eq!(stack_after("0 0 /"), "[NaN]");
    }

    #[test]
    fn test_real_modulus() {
        assert_eq!(real_mod(7.0, 3.0), 1.0);
        assert_eq!(real_mod(-7.0, 3.0), 2.0);
        assert_eq!(real_mod(7.0, -3.0), -2.0);
        assert_eq!(stack_after("7~ 3%"), "[2]");
    }

    #[test]
    fn test_minmax_orders_pair() {
        assert_eq!(stack_after("9 2^"), "[2 9]");
        assert_eq!(stack_after("2 9^"), "[2 9]");
        assert_eq!(stack_after("4 4^"), "[4 4]");
    }

    #[test]
    fn test_bad_operands_are_kept() {
        let (interp, err) = complaint("1z+");
        assert_eq!(err, "[WHOOPS] add(3): bad operands (expecting NUM, NUM; got NUM, LIST)");
        assert_eq!(interp.display_stack(), "[1 []]");
    }

    #[test]
    fn test_too_few_operands() {
        let (interp, err) = complaint("1~~+");
        assert_eq!(err, "[WHOOPS] add(4): expecting 2 operands, but the stack holds 1");
        assert_eq!(interp.display_stack(), "[1]");
    }
}
