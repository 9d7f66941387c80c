// Control flow primitives
//
// Everything here works on the block stack. Blocks started by exec and its
// relatives go through smart_push, so a block that ends by starting another
// one is replaced instead of buried.

use crate::block::Block;
use crate::compat::{String, format};
use crate::interpreter::{Interpreter, Want};
use crate::value::{Item, RuntimeError, code_from_str};

// Whitespace and other characters that do nothing
pub fn nop_impl(_interp: &mut Interpreter) -> Result<(), RuntimeError> {
    Ok(())
}

// exec ( code -- )
pub fn exec_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [code] = interp.operands([Want::Text])?;
    let code = code_from_str(&code.expect_text()?);
    interp.blocks.smart_push(Block::new(code));
    Ok(())
}

// label-exec ( code label -- ), runs code in a block `return` can find
pub fn label_exec_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [code, label] = interp.operands([Want::Text, Want::Text])?;
    let code = code_from_str(&code.expect_text()?);
    let label = label.expect_text()?;
    interp.blocks.smart_push(Block::labeled(code, label));
    Ok(())
}

// push-me ( -- code ), the source of the block that read this operator
pub fn push_me_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let code = interp.blocks.current().map(|b| Item::from_code(b.code()));
    if let Some(code) = code {
        interp.push(code);
    }
    Ok(())
}

// cond ( n a b -- a|b ), a unless n is zero
pub fn cond_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [cond, if_true, if_false] = interp.operands([Want::Num, Want::Any, Want::Any])?;
    let chosen = if cond.expect_number()? == 0.0 {
        if_false
    } else {
        if_true
    };
    interp.push(chosen);
    Ok(())
}

// delay-exec ( code -- ), runs code once the current block finishes
pub fn delay_exec_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [code] = interp.operands([Want::Text])?;
    let code = code_from_str(&code.expect_text()?);
    let current = interp.blocks.pop();
    interp.blocks.push(Block::new(code));
    if let Some(current) = current {
        interp.blocks.smart_push(current);
    }
    Ok(())
}

// RUST CONCEPT: Unwinding to a block with an active read-mode
// Every block above the reading one is dropped, then its mode is closed.
fn unwind_to_reader(interp: &mut Interpreter) -> Option<usize> {
    let index = interp.blocks.find_below_top(|b| b.mode.is_some())?;
    interp.blocks.truncate_above(index);
    interp.close_active();
    Some(index)
}

// close-mode, a no-op when nothing is being read
pub fn close_mode_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    unwind_to_reader(interp);
    Ok(())
}

// close-back, like close-mode but the character that ended the literal is
// read again as code
pub fn close_back_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    if let Some(index) = unwind_to_reader(interp) {
        if let Some(reader) = interp.blocks.get_mut(index) {
            reader.rewind();
        }
    }
    Ok(())
}

fn find_label(interp: &Interpreter, label: &str) -> Result<usize, RuntimeError> {
    interp
        .blocks
        .find_below_top(|b| b.has_label(label))
        .ok_or_else(|| RuntimeError::LabelNotFound(String::from(label)))
}

// return ( label -- ), abandons every block up to and including the labeled one
pub fn return_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [label] = interp.operands([Want::Text])?;
    let index = find_label(interp, &label.expect_text()?)?;
    interp.blocks.truncate_above(index);
    interp.blocks.pop();
    Ok(())
}

// push-label ( label -- code ), the source of the labeled block
pub fn push_label_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [label] = interp.operands([Want::Text])?;
    let index = find_label(interp, &label.expect_text()?)?;
    let code = interp.blocks.get(index).map(|b| Item::from_code(b.code()));
    if let Some(code) = code {
        interp.push(code);
    }
    Ok(())
}

// wrap ( text -- {text} )
pub fn wrap_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [text] = interp.operands([Want::Text])?;
    let wrapped = format!("{{{}}}", text.expect_text()?);
    interp.push(Item::text(&wrapped));
    Ok(())
}
