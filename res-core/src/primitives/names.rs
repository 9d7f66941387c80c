// Namespace mutation primitives
//
// Paths are strings walked from the root of the working namespace. Missing
// tables along a path are created; a path that runs into a non-namespace
// item before it ends is rejected.

use crate::interpreter::{Interpreter, Want};
use crate::primitives::resolve;
use crate::readmode::ReadMode;
use crate::value::{Operator, RuntimeError, code_from_str};

// store ( item path -- )
pub fn store_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [item, path] = interp.operands([Want::Any, Want::Text])?;
    let slot = resolve(interp, &path)?;
    interp.namespace.insert(slot.table, slot.name, item);
    Ok(())
}

// ns-del ( path -- )
pub fn ns_del_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [path] = interp.operands([Want::Text])?;
    let slot = resolve(interp, &path)?;
    interp.namespace.remove(slot.table, slot.name);
    Ok(())
}

// ns-copy ( src dst -- ), tables are copied deeply
pub fn ns_copy_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [src, dst] = interp.operands([Want::Text, Want::Text])?;
    let src = resolve(interp, &src)?;
    let dst = resolve(interp, &dst)?;
    let copy = interp.namespace.copy_item(&src.item);
    interp.namespace.insert(dst.table, dst.name, copy);
    Ok(())
}

// oper-make ( code path -- )
pub fn oper_make_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [code, path] = interp.operands([Want::Text, Want::Text])?;
    let code = code_from_str(&code.expect_text()?);
    let slot = resolve(interp, &path)?;
    interp.namespace.insert(slot.table, slot.name, Operator::derived(code));
    Ok(())
}

// readmode-make ( read open close path -- )
pub fn readmode_make_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [read, open, close, path] =
        interp.operands([Want::Text, Want::Text, Want::Text, Want::Text])?;
    let read = code_from_str(&read.expect_text()?);
    let open = code_from_str(&open.expect_text()?);
    let close = code_from_str(&close.expect_text()?);
    let slot = resolve(interp, &path)?;
    interp
        .namespace
        .insert(slot.table, slot.name, ReadMode::derived(read, open, close));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::primitives::test_support::{complaint, stack_after};

    #[test]
    fn test_store_and_read_back() {
        assert_eq!(stack_after("5\"AB\"S AB"), "[5]");
        assert_eq!(stack_after("z'VS V"), "[[]]");
        // Storing over a builtin shadows it
        assert_eq!(stack_after("7'aS a"), "[7]");
    }

    #[test]
    fn test_store_into_blocked_path() {
        let (interp, err) = complaint("5\"ab\"S");
        assert_eq!(
            err,
            "[WHOOPS] store(6): path ab was not valid (NUM was in the way at a)"
        );
        assert!(interp.stack().is_empty());
    }

    #[test]
    fn test_store_needs_string_path() {
        let (_, err) = complaint("5[1]S");
        assert_eq!(err, "[WHOOPS] store(5): item was not a valid string:\n[1]");
        let (_, err) = complaint("5zS");
        assert_eq!(err, "[WHOOPS] store(3): path was empty");
    }

    #[test]
    fn test_delete() {
        let (_, err) = complaint("'1&x1");
        assert_eq!(err, "[WHOOPS] (5): undefined reference 1");
    }

    #[test]
    fn test_copy_table() {
        // Copy the list table, then remove the original concat
        assert_eq!(stack_after("'$'L&:\"$+\"&x[1][2]L+"), "[[1 2]]");
    }

    #[test]
    fn test_oper_make() {
        assert_eq!(stack_after("\"::**\"'C&O 2C"), "[8]");
        // A derived operator may call itself through the namespace
        assert_eq!(stack_after("\"1+:5={}{Q}?E\"'Q&O 0Q"), "[5]");
    }

    #[test]
    fn test_readmode_make() {
        // Read characters as their codes until a '.' closes the literal
        let program = concat!(
            "\":'.={x&C}{o}?E\"", // read: drop the dot and close, or keep the code
            "\"[\"",               // open
            "\"]\"",               // close
            "'U&R",
            "UAB.",
        );
        assert_eq!(stack_after(program), "[[65 66]]");
    }
}
