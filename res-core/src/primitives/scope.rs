// Stack-of-stacks primitives
// `(` starts a fresh operand stack from a list and `)` folds it back up

use crate::interpreter::{Interpreter, Want};
use crate::value::RuntimeError;

// stack-push ( [a b ...] -- ) with a b ... as the new stack
pub fn stack_push_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    let [list] = interp.operands([Want::List])?;
    interp.push_scope(list.into_list()?);
    Ok(())
}

// stack-pop, leaving the finished stack as a list on the one below
pub fn stack_pop_impl(interp: &mut Interpreter) -> Result<(), RuntimeError> {
    interp.pop_scope()
}

#[cfg(test)]
mod tests {
    use crate::primitives::test_support::{complaint, stack_after};

    #[test]
    fn test_scopes_isolate_operands() {
        assert_eq!(stack_after("9z(1 2+)"), "[9 [3]]");
        assert_eq!(stack_after("[4 5]( \\ )"), "[[5 4]]");
        // Nested scopes fold up in order
        assert_eq!(stack_after("z(1z(2))"), "[[1 [2]]]");
    }

    #[test]
    fn test_inner_scope_cannot_see_outer() {
        let (interp, err) = complaint("1z(x");
        assert_eq!(err, "[WHOOPS] del(4): expecting 1 operands, but the stack holds 0");
        assert_eq!(interp.scope_depth(), 1);
    }

    #[test]
    fn test_base_scope_stays() {
        let (_, err) = complaint("1)");
        assert_eq!(
            err,
            "[WHOOPS] stack-pop(2): tried to pop the base stack off the stack-stack"
        );
    }
}
