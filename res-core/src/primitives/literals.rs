// Built-in read-modes: the literal syntaxes of the default library
//
// These run natively. Each keeps its state (brace depth, number so far) in
// the scratch space of the block it is reading, and all of them treat the
// end of the block's text as the end of the literal.

use crate::interpreter::Interpreter;
use crate::readmode::{NativeMode, ReadMode};
use crate::value::Item;

fn nop(_interp: &mut Interpreter) {}

fn push_bookend(interp: &mut Interpreter) {
    interp.push(Item::Bookend);
}

fn collect(interp: &mut Interpreter) {
    interp.list_make();
}

// ===== char: 'x =====

fn read_char(interp: &mut Interpreter, c: Option<char>) {
    if let Some(c) = c {
        interp.push(Item::Char(c));
    }
    interp.close_active();
}

pub fn char_mode() -> Item {
    ReadMode::native(NativeMode {
        name: "char",
        open: nop,
        read: read_char,
        close: nop,
    })
}

// ===== string: "text" (no escapes) =====

fn read_string(interp: &mut Interpreter, c: Option<char>) {
    match c {
        Some('"') | None => interp.close_active(),
        Some(c) => interp.push(Item::Char(c)),
    }
}

pub fn string_mode() -> Item {
    ReadMode::native(NativeMode {
        name: "string",
        open: push_bookend,
        read: read_string,
        close: collect,
    })
}

// ===== code block: {text}, braces nest =====

fn open_code_block(interp: &mut Interpreter) {
    if let Some(scratch) = interp.scratch() {
        scratch.depth = 1;
    }
    interp.push(Item::Bookend);
}

fn read_code_block(interp: &mut Interpreter, c: Option<char>) {
    let Some(c) = c else {
        interp.close_active();
        return;
    };
    let depth = match interp.scratch() {
        Some(scratch) => {
            match c {
                '{' => scratch.depth += 1,
                '}' => scratch.depth = scratch.depth.saturating_sub(1),
                _ => {}
            }
            scratch.depth
        }
        None => 0,
    };
    if depth > 0 {
        interp.push(Item::Char(c));
    } else {
        interp.close_active();
    }
}

pub fn code_block_mode() -> Item {
    ReadMode::native(NativeMode {
        name: "code-block",
        open: open_code_block,
        read: read_code_block,
        close: collect,
    })
}

// ===== comment: skips to the next ';' =====

fn read_comment(interp: &mut Interpreter, c: Option<char>) {
    if matches!(c, Some(';') | None) {
        interp.close_active();
    }
}

pub fn comment_mode() -> Item {
    ReadMode::native(NativeMode {
        name: "comment",
        open: nop,
        read: read_comment,
        close: nop,
    })
}

// ===== numbers: #d123, #xff, ... =====
//
// Digits are 0-9 then lowercase a-z. The first non-digit ends the number and
// is read again as ordinary code.

fn digit(c: char, base: u32) -> Option<u32> {
    if c.is_ascii_uppercase() {
        None
    } else {
        c.to_digit(base)
    }
}

// RUST CONCEPT: One reader per base through const generics
// A const parameter turns each base into its own plain function, which is
// what NativeMode's fn pointers need.
fn read_digits<const BASE: u32>(interp: &mut Interpreter, c: Option<char>) {
    match c.and_then(|c| digit(c, BASE)) {
        Some(d) => {
            if let Some(scratch) = interp.scratch() {
                scratch.accum = scratch.accum * f64::from(BASE) + f64::from(d);
            }
        }
        None => interp.close_active(),
    }
}

fn close_number(interp: &mut Interpreter) {
    let (value, block) = match interp.blocks.current_mut() {
        Some(block) => (block.scratch.accum, block),
        None => return,
    };
    block.rewind();
    interp.push(Item::Number(value));
}

fn number_mode<const BASE: u32>(name: &'static str) -> Item {
    ReadMode::native(NativeMode {
        name,
        open: nop,
        read: read_digits::<BASE>,
        close: close_number,
    })
}

pub fn base2_mode() -> Item {
    number_mode::<2>("base2")
}

pub fn base8_mode() -> Item {
    number_mode::<8>("base8")
}

pub fn base10_mode() -> Item {
    number_mode::<10>("base10")
}

pub fn base16_mode() -> Item {
    number_mode::<16>("base16")
}

pub fn base36_mode() -> Item {
    number_mode::<36>("base36")
}
