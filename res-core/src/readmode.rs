//! Read-modes change how a block's characters are interpreted.
//!
//! While a block has an active read-mode, the evaluator stops resolving its
//! characters through the namespace and feeds them, one at a time, to the
//! mode's `read` handler instead. A mode has three phases:
//!
//! - **open** marks the current block as reading, then runs the open code
//!   (usually pushing a bookend);
//! - **read** receives each raw character (or `None` once the block's text
//!   has run out);
//! - **close** clears the mark on the current block, then runs the close code
//!   (usually collecting the stack back down to the bookend into a list).
//!
//! Modes written in Res run each phase as a new block; the built-in modes
//! are native functions.

use crate::block::{Block, ReadState};
use crate::compat::{Rc, fmt};
use crate::interpreter::Interpreter;
use crate::value::{Code, Item};

/// A read-mode implemented in Rust.
pub struct NativeMode {
    pub name: &'static str,
    pub open: fn(&mut Interpreter),
    pub read: fn(&mut Interpreter, Option<char>),
    pub close: fn(&mut Interpreter),
}

pub enum ReadMode {
    Native(NativeMode),
    Derived { read: Code, open: Code, close: Code },
}

impl ReadMode {
    pub fn native(mode: NativeMode) -> Item {
        Item::ReadMode(Rc::new(ReadMode::Native(mode)))
    }

    pub fn derived(read: Code, open: Code, close: Code) -> Item {
        Item::ReadMode(Rc::new(ReadMode::Derived { read, open, close }))
    }

    pub fn name(&self) -> &str {
        match self {
            ReadMode::Native(mode) => mode.name,
            ReadMode::Derived { .. } => "readmode",
        }
    }

    pub fn open(self: &Rc<Self>, interp: &mut Interpreter) {
        if let Some(top) = interp.blocks.current_mut() {
            top.mode = Some(Rc::clone(self));
            top.scratch = ReadState::default();
        }
        match &**self {
            ReadMode::Native(mode) => (mode.open)(interp),
            ReadMode::Derived { open, .. } => interp.blocks.push(Block::new(open.clone())),
        }
    }

    pub fn read(self: &Rc<Self>, interp: &mut Interpreter, c: Option<char>) {
        match &**self {
            ReadMode::Native(mode) => (mode.read)(interp, c),
            ReadMode::Derived { read, .. } => match c {
                Some(c) => {
                    interp.push(Item::Char(c));
                    interp.blocks.push(Block::new(read.clone()));
                }
                // Nothing left to feed the read code, so the literal ends here
                None => self.close(interp),
            },
        }
    }

    pub fn close(self: &Rc<Self>, interp: &mut Interpreter) {
        if let Some(top) = interp.blocks.current_mut() {
            top.mode = None;
        }
        match &**self {
            ReadMode::Native(mode) => (mode.close)(interp),
            ReadMode::Derived { close, .. } => interp.blocks.push(Block::new(close.clone())),
        }
    }
}

impl fmt::Debug for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadMode::Native(mode) => write!(f, "NativeMode({})", mode.name),
            ReadMode::Derived { .. } => write!(f, "DerivedMode"),
        }
    }
}

impl Interpreter {
    /// Closes the read-mode of the current block, if it has one.
    pub fn close_active(&mut self) {
        let mode = self.blocks.current().and_then(|b| b.mode.clone());
        if let Some(mode) = mode {
            mode.close(self);
        }
    }

    /// Read-mode scratch state of the current block.
    pub fn scratch(&mut self) -> Option<&mut ReadState> {
        self.blocks.current_mut().map(|b| &mut b.scratch)
    }
}
