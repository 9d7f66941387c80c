// This module implements the character-at-a-time step loop for Res
//
// RES EXECUTION MODEL (detailed):
// 1. If the top block has a read-mode, its next raw character goes to the
//    mode's read handler and nothing is looked up.
// 2. Otherwise characters are walked through the namespace from the root
//    until they reach something that is not a namespace:
//    - bookends, numbers, chars and lists are copied onto the stack (data)
//    - operators run (native) or start a block of their code (derived)
//    - read-modes open on the current block
// 3. A block that runs out between references is popped. Running out in the
//    middle of a reference, or reaching an undefined key, halts the engine.
//
// One call to `step` does exactly one of these things, so a host can run a
// program in slices and pick it up later without losing anything.

use crate::block::Block;
use crate::compat::String;
use crate::interpreter::Interpreter;
use crate::value::{Item, Operator, RuntimeError};

/// How a call to [`Interpreter::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The block stack emptied: the program is complete.
    Finished,
    /// The engine halted on a complaint.
    Errored,
    /// The step budget ran out; call `run` again to resume.
    Suspended,
}

// What walking the namespace turned up
enum Fetched {
    Item(Item),
    BlockEnd,
    Fault(RuntimeError),
}

impl Interpreter {
    /// Advances the engine by one unit of work. Returns true once the engine
    /// is halted (by an error or because the block stack is empty).
    pub fn step(&mut self) -> bool {
        if self.is_halted() {
            return true;
        }

        let mode = self.blocks.current().and_then(|b| b.mode.clone());
        match mode {
            Some(mode) => {
                let c = self.blocks.next_char();
                tracing::trace!(mode = mode.name(), ?c, "read");
                mode.read(self, c);
            }
            None => match self.next_item() {
                Fetched::Item(item) => self.dispatch(item),
                Fetched::BlockEnd => {
                    self.blocks.pop();
                }
                Fetched::Fault(err) => self.complain(None, err),
            },
        }

        self.is_halted()
    }

    /// Steps until the engine halts, or until `max_steps` steps have run.
    /// State is never reset, so a suspended run continues where it left off.
    pub fn run(&mut self, max_steps: Option<usize>) -> RunOutcome {
        let mut steps = 0;
        loop {
            if max_steps.is_some_and(|max| steps >= max) {
                break;
            }
            if self.step() {
                break;
            }
            steps += 1;
        }
        self.outcome()
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.has_errored() {
            RunOutcome::Errored
        } else if self.blocks.is_empty() {
            RunOutcome::Finished
        } else {
            RunOutcome::Suspended
        }
    }

    // RUST CONCEPT: The block keeps its own cursor, so the walk reads
    // characters straight from it instead of resolving a finished path
    fn next_item(&mut self) -> Fetched {
        let mut table = self.namespace.root();
        let mut refer = String::new();
        loop {
            let Some(c) = self.blocks.next_char() else {
                return if refer.is_empty() {
                    Fetched::BlockEnd
                } else {
                    Fetched::Fault(RuntimeError::UnfinishedReference(refer))
                };
            };
            refer.push(c);
            match self.namespace.get(table, c) {
                None => return Fetched::Fault(RuntimeError::UndefinedReference(refer)),
                Some(Item::Namespace(inner)) => table = *inner,
                Some(item) => return Fetched::Item(item.clone()),
            }
        }
    }

    fn dispatch(&mut self, item: Item) {
        tracing::trace!(kind = item.type_name(), "dispatch");
        match item {
            Item::Bookend | Item::Number(_) | Item::Char(_) | Item::List(_) => self.push(item),
            Item::Operator(op) => self.invoke(&op),
            Item::ReadMode(mode) => mode.open(self),
            Item::Null | Item::Namespace(_) => {
                self.complain(None, RuntimeError::UnexpectedItem(item.type_name()))
            }
        }
    }

    /// Runs an operator as if it had been read from the current block.
    pub fn invoke(&mut self, op: &Operator) {
        match op {
            Operator::Native { name, run } => {
                if let Err(err) = run(self) {
                    self.complain(Some(*name), err);
                }
            }
            Operator::Derived { code } => {
                self.blocks.smart_push(Block::new(code.clone()));
            }
        }
    }
}
