use crate::block::{Block, BlockStack};
use crate::compat::{Box, Rc, String, Vec, fmt, format};
use crate::namespace::Namespace;
use crate::output::Logger;
use crate::value::{Code, Item, ListDisplay, RuntimeError, code_from_str};

// RUST CONCEPT: Operand kinds accepted by the operand checker
// `Text` matches a char or a list (the items that may hold a string); whether
// a list really is a string is checked once it has been popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Want {
    Num,
    Char,
    List,
    Text,
    Any,
}

impl Want {
    fn accepts(self, item: &Item) -> bool {
        match self {
            Want::Num => matches!(item, Item::Number(_)),
            Want::Char => matches!(item, Item::Char(_)),
            Want::List => matches!(item, Item::List(_)),
            Want::Text => matches!(item, Item::Char(_) | Item::List(_)),
            Want::Any => true,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Want::Num => "NUM",
            Want::Char => "CHAR",
            Want::List => "LIST",
            Want::Text => "string",
            Want::Any => "any",
        }
    }
}

pub struct Interpreter {
    origin_text: Code,
    origin: Rc<Namespace>,
    pub namespace: Namespace,
    pub blocks: BlockStack,
    // The operand stack in use; enclosing scopes are saved in `outer`
    stack: Vec<Item>,
    outer: Vec<Vec<Item>>,
    errored: bool,

    // Taken out while a logger call runs so the logger can inspect us
    logger: Option<Box<dyn Logger>>,
}

impl Interpreter {
    /// Creates an engine ready to run `text`. The template namespace is
    /// shared, never modified; every reset starts from a fresh copy of it.
    pub fn new(text: &str, template: Rc<Namespace>, logger: Box<dyn Logger>) -> Self {
        let origin_text = code_from_str(text);
        let mut blocks = BlockStack::new();
        blocks.push(Block::new(origin_text.clone()));
        Interpreter {
            origin_text,
            namespace: (*template).clone(),
            origin: template,
            blocks,
            stack: Vec::new(),
            outer: Vec::new(),
            errored: false,
            logger: Some(logger),
        }
    }

    /// An engine over the built-in library.
    pub fn with_defaults(text: &str, logger: Box<dyn Logger>) -> Self {
        Self::new(text, Rc::new(crate::builtins::default_namespace()), logger)
    }

    /// Restarts from the original program and namespace, optionally
    /// replacing either first.
    pub fn reset(&mut self, text: Option<&str>, template: Option<Rc<Namespace>>) {
        if let Some(text) = text {
            self.origin_text = code_from_str(text);
        }
        if let Some(template) = template {
            self.origin = template;
        }
        self.blocks = BlockStack::new();
        self.blocks.push(Block::new(self.origin_text.clone()));
        self.namespace = (*self.origin).clone();
        self.stack.clear();
        self.outer.clear();
        self.errored = false;
        tracing::debug!(len = self.origin_text.len(), "reset");
    }

    /// Runs new text on top of the current stacks and namespace.
    pub fn continue_with(&mut self, text: &str) {
        self.blocks = BlockStack::new();
        self.blocks.push(Block::new(code_from_str(text)));
        self.errored = false;
        tracing::debug!(len = text.chars().count(), "continue");
    }

    /// Reports a fatal condition and stops the engine. The message is
    /// prefixed with `scope` and the current block's position.
    pub fn complain(&mut self, scope: Option<&str>, message: impl fmt::Display) {
        let posn = self.blocks.current().map_or(0, Block::position);
        let line = format!("[WHOOPS] {}({}): {}", scope.unwrap_or(""), posn, message);
        tracing::warn!(position = posn, "{}", line);
        if let Some(mut logger) = self.logger.take() {
            if logger.print_err(&line, self).is_err() {
                tracing::error!("complaint could not be logged");
            }
            self.logger = Some(logger);
        }
        self.errored = true;
    }

    pub fn halt(&mut self) {
        tracing::debug!("halt requested");
        self.complain(None, RuntimeError::Halted);
    }

    pub fn has_errored(&self) -> bool {
        self.errored
    }

    pub fn is_halted(&self) -> bool {
        self.errored || self.blocks.is_empty()
    }

    /// Hands printed output to the logger.
    pub fn print_out(&mut self, value: &dyn fmt::Display) -> Result<(), RuntimeError> {
        match self.logger.as_mut() {
            Some(logger) => logger.print_out(value).map_err(|_| RuntimeError::OutputFailed),
            None => Ok(()),
        }
    }

    // ===== Operand stack =====

    /// The operand stack currently in use, bottom first.
    pub fn stack(&self) -> &[Item] {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Vec<Item> {
        &mut self.stack
    }

    pub fn push(&mut self, item: Item) {
        self.stack.push(item);
    }

    pub fn pop(&mut self) -> Option<Item> {
        self.stack.pop()
    }

    /// Number of saved scopes beneath the current one.
    pub fn scope_depth(&self) -> usize {
        self.outer.len()
    }

    /// Makes `items` the current stack, saving the old one beneath it.
    pub fn push_scope(&mut self, items: Vec<Item>) {
        let saved = core::mem::replace(&mut self.stack, items);
        self.outer.push(saved);
    }

    /// Ends the current scope, pushing its contents as a list onto the
    /// enclosing one. The base scope can't be popped.
    pub fn pop_scope(&mut self) -> Result<(), RuntimeError> {
        let enclosing = self.outer.pop().ok_or(RuntimeError::BaseScope)?;
        let finished = core::mem::replace(&mut self.stack, enclosing);
        self.stack.push(Item::List(finished));
        Ok(())
    }

    /// Pops everything down to the nearest bookend (or the whole stack if
    /// there is none) and pushes it back as one list.
    pub fn list_make(&mut self) {
        let start = self
            .stack
            .iter()
            .rposition(Item::is_bookend)
            .map_or(0, |i| i + 1);
        let contents = self.stack.split_off(start);
        if start > 0 {
            self.stack.pop();
        }
        self.stack.push(Item::List(contents));
    }

    /// Takes the top `n` items, in stack order.
    pub fn take(&mut self, n: usize) -> Result<Vec<Item>, RuntimeError> {
        let len = self.stack.len();
        if len < n {
            return Err(RuntimeError::NotEnoughOperands {
                expected: n,
                found: len,
            });
        }
        Ok(self.stack.split_off(len - n))
    }

    // RUST CONCEPT: Validate first, then pop
    // The kinds of the top N items are checked in place, so a failed check
    // leaves the stack exactly as it was. Const generics give callers a
    // fixed-size array they can destructure.
    pub fn operands<const N: usize>(&mut self, wants: [Want; N]) -> Result<[Item; N], RuntimeError> {
        let len = self.stack.len();
        if len < N {
            return Err(RuntimeError::NotEnoughOperands {
                expected: N,
                found: len,
            });
        }

        let window = &self.stack[len - N..];
        if !wants.iter().zip(window).all(|(want, item)| want.accepts(item)) {
            let expected: Vec<&str> = wants.iter().map(|w| w.name()).collect();
            let got: Vec<&str> = window.iter().map(Item::type_name).collect();
            return Err(RuntimeError::BadOperands {
                expected: expected.join(", "),
                got: got.join(", "),
            });
        }

        self.stack
            .split_off(len - N)
            .try_into()
            .map_err(|_| RuntimeError::NotEnoughOperands {
                expected: N,
                found: len,
            })
    }

    /// The current stack shown as a list, e.g. `[1 'a' []]`.
    pub fn display_stack(&self) -> String {
        format!("{}", ListDisplay(&self.stack))
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("stack", &self.stack)
            .field("scopes", &self.outer.len())
            .field("blocks", &self.blocks.len())
            .field("errored", &self.errored)
            .finish()
    }
}
