// Blocks and the block stack
//
// A block is a cursor over some program text. The block stack holds every
// block currently being executed, innermost on top.

use crate::compat::{Rc, String, Vec};
use crate::readmode::ReadMode;
use crate::value::Code;

/// Scratch space for the built-in read-modes (string nesting depth, numeric
/// accumulator). It belongs to the block whose read-mode is active, so two
/// literals being read in different blocks never share state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadState {
    pub depth: usize,
    pub accum: f64,
}

#[derive(Debug, Clone)]
pub struct Block {
    code: Code,
    posn: usize,
    pub mode: Option<Rc<ReadMode>>,
    pub label: Option<String>,
    pub scratch: ReadState,
}

impl Block {
    pub fn new(code: Code) -> Self {
        Block {
            code,
            posn: 0,
            mode: None,
            label: None,
            scratch: ReadState::default(),
        }
    }

    pub fn labeled(code: Code, label: String) -> Self {
        let mut block = Block::new(code);
        block.label = Some(label);
        block
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn position(&self) -> usize {
        self.posn
    }

    // RUST CONCEPT: The cursor always advances, even past the end
    // A read-mode that hits the end of its text and then rewinds lands back
    // exactly on the end, instead of on the last real character.
    pub fn next(&mut self) -> Option<char> {
        let c = self.code.get(self.posn).copied();
        self.posn += 1;
        c
    }

    pub fn peek(&self) -> Option<char> {
        self.code.get(self.posn).copied()
    }

    pub fn done(&self) -> bool {
        self.posn >= self.code.len()
    }

    /// Steps the cursor back one character so it is read again.
    pub fn rewind(&mut self) {
        self.posn = self.posn.saturating_sub(1);
    }

    /// Label comparison where "no label" behaves like the empty label.
    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref().unwrap_or("") == label
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockStack {
    blocks: Vec<Block>,
}

impl BlockStack {
    pub fn new() -> Self {
        BlockStack { blocks: Vec::new() }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    pub fn current(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Pushes a block, first popping the current one if it has nothing left
    /// to run. The new block inherits the popped block's label unless it has
    /// its own. Returns the popped block, if any.
    ///
    /// When the last thing a block does is start another block, the stack
    /// does not grow: this is what keeps tail calls and loops flat.
    pub fn smart_push(&mut self, mut block: Block) -> Option<Block> {
        let finished = match self.blocks.last() {
            Some(top) if top.done() => self.blocks.pop(),
            _ => None,
        };
        if let Some(old) = &finished {
            if block.label.is_none() {
                block.label = old.label.clone();
            }
        }
        self.blocks.push(block);
        finished
    }

    /// Reads the next character of the current block.
    pub fn next_char(&mut self) -> Option<char> {
        self.blocks.last_mut().and_then(Block::next)
    }

    /// Searches downward from just below the top block for the first block
    /// matching `pred`. The top block is never considered, since it is the
    /// one asking.
    pub fn find_below_top<F>(&self, pred: F) -> Option<usize>
    where
        F: Fn(&Block) -> bool,
    {
        let below_top = self.blocks.len().checked_sub(1)?;
        (0..below_top).rev().find(|&i| pred(&self.blocks[i]))
    }

    /// Removes every block above `index`, leaving that block on top.
    /// Returns the removed blocks, bottom first.
    pub fn truncate_above(&mut self, index: usize) -> Vec<Block> {
        self.blocks.split_off((index + 1).min(self.blocks.len()))
    }
}
