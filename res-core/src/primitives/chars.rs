// Character code conversions
// ord ( c -- n ) and chr ( n -- c ), using Unicode scalar values

use crate::interpreter::{Interpreter, Want};
use crate::primitives::integer;
use crate::value::{Item, RuntimeError};

pub fn ord_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [c] = interp.operands([Want::Char])?;
    let code = u32::from(c.expect_char()?);
    interp.push(Item::Number(f64::from(code)));
    Ok(())
}

pub fn chr_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [n] = interp.operands([Want::Num])?;
    let n = n.expect_number()?;
    let c = u32::try_from(integer(n)?)
        .ok()
        .and_then(char::from_u32)
        .ok_or(RuntimeError::InvalidCharCode(n))?;
    interp.push(Item::Char(c));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::primitives::test_support::{complaint, stack_after};

    #[test]
    fn test_ord_and_chr() {
        assert_eq!(stack_after("'Ao"), "[65]");
        assert_eq!(stack_after("#d97 k"), "['a']");
        assert_eq!(stack_after("'zok"), "['z']");
    }

    #[test]
    fn test_chr_rejects_bad_codes() {
        let (_, err) = complaint("1~k");
        assert_eq!(err, "[WHOOPS] chr(3): -1 is not a valid character code");
        let (_, err) = complaint("#xd800 k");
        assert_eq!(err, "[WHOOPS] chr(8): 55296 is not a valid character code");
        let (_, err) = complaint("1 2/k");
        assert_eq!(err, "[WHOOPS] chr(5): type error: expected an integer, got 0.5");
    }
}
