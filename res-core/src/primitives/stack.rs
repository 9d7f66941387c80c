// Stack manipulation primitives
// Depths count down from the top of the stack, after the operands are popped

use crate::compat::format;
use crate::interpreter::{Interpreter, Want};
use crate::primitives::{count, integer};
use crate::value::RuntimeError;

// swap ( a b -- b a )
pub fn swap_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a, b] = interp.operands([Want::Any, Want::Any])?;
    interp.push(b);
    interp.push(a);
    Ok(())
}

// dup ( a -- a a )
pub fn dup_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a] = interp.operands([Want::Any])?;
    interp.push(a.clone());
    interp.push(a);
    Ok(())
}

// del ( a -- )
pub fn del_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.operands([Want::Any])?;
    Ok(())
}

// bury ( ... x n -- x ... ), places x beneath the top n items
pub fn bury_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [target, depth] = interp.operands([Want::Any, Want::Num])?;
    let n = count(depth.expect_number()?)?;
    let stack = interp.stack_mut();
    if stack.len() < n {
        return Err(RuntimeError::StackTooShallow(format!(
            "tried to bury {} deep, but the stack was only {} deep",
            n,
            stack.len()
        )));
    }
    let at = stack.len() - n;
    stack.insert(at, target);
    Ok(())
}

// dig ( x ... n -- ... x ), brings up the item beneath the top n items
pub fn dig_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [depth] = interp.operands([Want::Num])?;
    let n = count(depth.expect_number()?)?;
    let stack = interp.stack_mut();
    if stack.len() <= n {
        return Err(RuntimeError::StackTooShallow(format!(
            "tried to dig {} deep, but there was nothing past depth {}",
            n,
            stack.len() as i64 - 1
        )));
    }
    let at = stack.len() - (n + 1);
    let target = stack.remove(at);
    stack.push(target);
    Ok(())
}

// rotate ( ... n -- ... ), moves n items from the bottom to the top
// (negative n moves them from the top to the bottom)
pub fn rotate_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [n] = interp.operands([Want::Num])?;
    let n = integer(n.expect_number()?)?;
    let stack = interp.stack_mut();
    if stack.is_empty() {
        return Ok(());
    }
    let shift = n.rem_euclid(stack.len() as i64) as usize;
    stack.rotate_left(shift);
    Ok(())
}
