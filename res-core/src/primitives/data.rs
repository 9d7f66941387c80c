// Equality and type inspection, valid on items of any kind

use crate::interpreter::{Interpreter, Want};
use crate::value::{Item, RuntimeError};

// eq ( a b -- 1|0 ), structural
pub fn eq_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a, b] = interp.operands([Want::Any, Want::Any])?;
    let equal = if a == b { 1.0 } else { 0.0 };
    interp.push(Item::Number(equal));
    Ok(())
}

// type ( a -- code )
pub fn type_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a] = interp.operands([Want::Any])?;
    interp.push(Item::Number(f64::from(a.type_code())));
    Ok(())
}
