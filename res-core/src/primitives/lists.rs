// List primitives
//
// Lists are built with bookends: `[` pushes a bookend and `]` gathers every
// item above the nearest one into a list. The `$` table holds the rest.

use crate::compat::Vec;
use crate::interpreter::{Interpreter, Want};
use crate::primitives::count;
use crate::value::{Item, RuntimeError};

#[cfg(target_os = "none")]
use num_traits::Float;

// list-make ( [ a b ... -- [a b ...] )
pub fn list_make_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.list_make();
    Ok(())
}

// list-concat ( [a] [b] -- [a b] )
pub fn concat_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [a, b] = interp.operands([Want::List, Want::List])?;
    let mut joined = a.into_list()?;
    joined.extend(b.into_list()?);
    interp.push(Item::List(joined));
    Ok(())
}

// Where a slice splits a list of `len` items: the index is truncated,
// negative indexes count from the end, and the result is clamped in range.
fn split_point(n: f64, len: usize) -> usize {
    if n.is_nan() {
        return 0;
    }
    let n = n.trunc();
    let len = len as f64;
    let point = if n < 0.0 { (len + n).max(0.0) } else { n.min(len) };
    point as usize
}

// list-slice ( list n -- before after )
pub fn slice_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list, n] = interp.operands([Want::List, Want::Num])?;
    let mut before = list.into_list()?;
    let after = before.split_off(split_point(n.expect_number()?, before.len()));
    interp.push(Item::List(before));
    interp.push(Item::List(after));
    Ok(())
}

// list-splat ( [a b ...] -- a b ... )
pub fn splat_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list] = interp.operands([Want::List])?;
    interp.stack_mut().extend(list.into_list()?);
    Ok(())
}

// list-open ( [a b ...] -- [ a b ... ), ready to be closed again with `]`
pub fn open_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list] = interp.operands([Want::List])?;
    interp.push(Item::Bookend);
    interp.stack_mut().extend(list.into_list()?);
    Ok(())
}

// list-at ( list i -- item ), negative indexes count from the end
pub fn at_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list, index] = interp.operands([Want::List, Want::Num])?;
    let mut items = list.into_list()?;
    let index = index.expect_number()?;
    let len = items.len() as f64;

    // Written so NaN is out of range too
    if !(index >= -len && index < len) {
        return Err(RuntimeError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    let i = index.trunc();
    let position = (if i < 0.0 { len + i } else { i }) as usize;
    interp.push(items.swap_remove(position));
    Ok(())
}

// list-grab ( a b ... n -- [a b ...] )
pub fn grab_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [n] = interp.operands([Want::Num])?;
    let n = count(n.expect_number()?)?;
    let items = interp.take(n)?;
    interp.push(Item::List(items));
    Ok(())
}

fn flatten_into(items: Vec<Item>, out: &mut Vec<Item>) {
    for item in items {
        match item {
            Item::List(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

// flatten ( [a [b [c]]] -- [a b c] )
pub fn flatten_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list] = interp.operands([Want::List])?;
    let mut flat = Vec::new();
    flatten_into(list.into_list()?, &mut flat);
    interp.push(Item::List(flat));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::test_support::{complaint, stack_after};

    #[test]
    fn test_make_and_nest() {
        assert_eq!(stack_after("[1 2 3]"), "[[1 2 3]]");
        assert_eq!(stack_after("[1[2]]"), "[[1 [2]]]");
        assert_eq!(stack_after("9[]"), "[9 []]");
    }

    #[test]
    fn test_concat() {
        assert_eq!(stack_after("[1 2][3]$+"), "[[1 2 3]]");
        assert_eq!(stack_after("\"ab\"\"cd\"$+"), "[['a' 'b' 'c' 'd']]");
    }

    #[test]
    fn test_split_point() {
        assert_eq!(split_point(2.0, 5), 2);
        assert_eq!(split_point(2.9, 5), 2);
        assert_eq!(split_point(-1.0, 5), 4);
        assert_eq!(split_point(-9.0, 5), 0);
        assert_eq!(split_point(9.0, 5), 5);
        assert_eq!(split_point(f64::NAN, 5), 0);
    }

    #[test]
    fn test_slice() {
        assert_eq!(stack_after("[1 2 3 4]2$/"), "[[1 2] [3 4]]");
        assert_eq!(stack_after("[1 2 3 4]1~$/"), "[[1 2 3] [4]]");
        assert_eq!(stack_after("[1 2]9$/"), "[[1 2] []]");
    }

    #[test]
    fn test_splat_and_open() {
        assert_eq!(stack_after("[1 2]$S"), "[1 2]");
        assert_eq!(stack_after("[1 2]$[3]"), "[[1 2 3]]");
    }

    #[test]
    fn test_at() {
        assert_eq!(stack_after("[7 8 9]0$@"), "[7]");
        assert_eq!(stack_after("[7 8 9]1~$@"), "[9]");
        assert_eq!(stack_after("[7 8 9]3~$@"), "[7]");
    }

    #[test]
    fn test_at_out_of_range() {
        let (_, err) = complaint("[7 8 9]3$@");
        assert_eq!(
            err,
            "[WHOOPS] list-at(10): list index out of range (expected -3 to 2, got 3)"
        );
        let (_, err) = complaint("z0$@");
        assert_eq!(
            err,
            "[WHOOPS] list-at(4): list index out of range (expected 0 to -1, got 0)"
        );
    }

    #[test]
    fn test_grab_then_splat_round_trips() {
        assert_eq!(stack_after("1 2 3 3$G"), "[[1 2 3]]");
        assert_eq!(stack_after("1 2 3 2$G"), "[1 [2 3]]");
        assert_eq!(stack_after("1 2 3 3$G$S"), "[1 2 3]");
        assert_eq!(stack_after("0$G"), "[[]]");
    }

    #[test]
    fn test_grab_needs_items() {
        let (_, err) = complaint("1 2 3$G");
        assert_eq!(
            err,
            "[WHOOPS] list-grab(7): expecting 3 operands, but the stack holds 2"
        );
        let (_, err) = complaint("1~$G");
        assert_eq!(
            err,
            "[WHOOPS] list-grab(4): expected a non-negative integer, got -1"
        );
    }

    #[test]
    fn test_flatten() {
        assert_eq!(stack_after("[1[2[3]]z]$F"), "[[1 2 3]]");
    }
}
