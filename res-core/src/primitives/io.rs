// Output primitives; input is accepted by name but not supported
// Printing goes through the host's logger, so nothing here touches stdout.

use crate::interpreter::{Interpreter, Want};
use crate::value::RuntimeError;

// print ( a -- ), structural display: a string shows as a list of chars
pub fn print_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [item] = interp.operands([Want::Any])?;
    interp.print_out(&item)
}

// pretty-print ( a -- ), strings print as text
pub fn pretty_print_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [item] = interp.operands([Want::Any])?;
    interp.print_out(&item.pretty())
}

pub fn get_line_impl(_interp: &mut Interpreter) -> Result<(), RuntimeError> {
    Err(RuntimeError::NotImplemented)
}

pub fn get_char_impl(_interp: &mut Interpreter) -> Result<(), RuntimeError> {
    Err(RuntimeError::NotImplemented)
}
