use crate::compat::{Rc, String, ToString, Vec, fmt};
use crate::namespace::TableId;
use crate::readmode::ReadMode;

// RUST CONCEPT: Program text is stored as a shared slice of chars
// Blocks index it one character at a time, so random access must be O(1),
// and operators hand the same text to every block they spawn without copying.
pub type Code = Rc<[char]>;

pub fn code_from_str(text: &str) -> Code {
    text.chars().collect::<Vec<char>>().into()
}

// Native operators are plain function pointers over the interpreter
pub type NativeFn = fn(&mut crate::interpreter::Interpreter) -> Result<(), RuntimeError>;

/// The content of an operator item.
///
/// Either a native function or a fragment of Res code that runs in a fresh
/// block each time the operator is called.
pub enum Operator {
    Native { name: &'static str, run: NativeFn },
    Derived { code: Code },
}

impl Operator {
    pub fn native(name: &'static str, run: NativeFn) -> Item {
        Item::Operator(Rc::new(Operator::Native { name, run }))
    }

    pub fn derived(code: Code) -> Item {
        Item::Operator(Rc::new(Operator::Derived { code }))
    }

    pub fn name(&self) -> &str {
        match self {
            Operator::Native { name, .. } => name,
            Operator::Derived { .. } => "operator",
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Native { name, .. } => write!(f, "Native({})", name),
            Operator::Derived { code } => {
                write!(f, "Derived(\"{}\")", code.iter().collect::<String>())
            }
        }
    }
}

// RUST CONCEPT: One enum for every datum and every namespace entry
// Only Bookend, Number, Char and List ever live on an operand stack; the other
// kinds exist in namespaces. Operators and read-modes sit behind Rc so one
// definition can be aliased from many namespace slots.
#[derive(Clone, Debug)]
pub enum Item {
    Null,
    Bookend,
    Number(f64),
    Char(char),
    List(Vec<Item>),
    Operator(Rc<Operator>),
    ReadMode(Rc<ReadMode>),
    Namespace(TableId),
}

impl Item {
    /// Builds a list of characters from a Rust string.
    pub fn text(s: &str) -> Item {
        Item::List(s.chars().map(Item::Char).collect())
    }

    pub fn from_code(code: &[char]) -> Item {
        Item::List(code.iter().copied().map(Item::Char).collect())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Null => "NULL",
            Item::Bookend => "BOOKEND",
            Item::Number(_) => "NUM",
            Item::Char(_) => "CHAR",
            Item::List(_) => "LIST",
            Item::Operator(_) => "OPERATOR",
            Item::ReadMode(_) => "READMODE",
            Item::Namespace(_) => "NAMESPACE",
        }
    }

    // Kind codes as reported by the `type` operator (both sentinels are "misc")
    pub fn type_code(&self) -> u8 {
        match self {
            Item::Null | Item::Bookend => 0,
            Item::Number(_) => 1,
            Item::Char(_) => 2,
            Item::List(_) => 3,
            Item::Operator(_) => 4,
            Item::ReadMode(_) => 5,
            Item::Namespace(_) => 6,
        }
    }

    pub fn is_bookend(&self) -> bool {
        matches!(self, Item::Bookend)
    }

    /// Tries to read this item as a string: a single char, or a list made
    /// only of chars. Anything else is not a string.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Item::Char(c) => Some(c.to_string()),
            Item::List(items) => items
                .iter()
                .map(|item| match item {
                    Item::Char(c) => Some(*c),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Like `to_text`, but reports a descriptive error.
    pub fn expect_text(&self) -> Result<String, RuntimeError> {
        self.to_text()
            .ok_or_else(|| RuntimeError::InvalidString(self.to_string()))
    }

    pub fn expect_number(&self) -> Result<f64, RuntimeError> {
        match self {
            Item::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError(format_expected("NUM", other))),
        }
    }

    pub fn expect_char(&self) -> Result<char, RuntimeError> {
        match self {
            Item::Char(c) => Ok(*c),
            other => Err(RuntimeError::TypeError(format_expected("CHAR", other))),
        }
    }

    pub fn into_list(self) -> Result<Vec<Item>, RuntimeError> {
        match self {
            Item::List(items) => Ok(items),
            other => Err(RuntimeError::TypeError(format_expected("LIST", &other))),
        }
    }

    /// The "pretty" rendering used by pretty-print: chars and numbers print
    /// literally, and a top-level list concatenates its elements, so a list
    /// of chars prints as the string it holds.
    pub fn pretty(&self) -> String {
        fn element(item: &Item) -> String {
            match item {
                Item::Char(c) => c.to_string(),
                Item::Number(n) => NumberDisplay(*n).to_string(),
                other => other.to_string(),
            }
        }
        match self {
            Item::List(items) => items.iter().map(element).collect(),
            other => element(other),
        }
    }
}

fn format_expected(expected: &str, got: &Item) -> String {
    let mut msg = String::from("expected ");
    msg.push_str(expected);
    msg.push_str(", got ");
    msg.push_str(got.type_name());
    msg
}

// Structural equality: kinds must match, lists compare element-wise, and
// shared definitions compare by identity.
impl PartialEq for Item {
    fn eq(&self, other: &Item) -> bool {
        match (self, other) {
            (Item::Null, Item::Null) | (Item::Bookend, Item::Bookend) => true,
            (Item::Number(a), Item::Number(b)) => a == b,
            (Item::Char(a), Item::Char(b)) => a == b,
            (Item::List(a), Item::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (Item::Operator(a), Item::Operator(b)) => Rc::ptr_eq(a, b),
            (Item::ReadMode(a), Item::ReadMode(b)) => Rc::ptr_eq(a, b),
            (Item::Namespace(a), Item::Namespace(b)) => a == b,
            _ => false,
        }
    }
}

// Whole numbers print without a trailing ".0", infinities are spelled out and
// negative zero prints as plain 0.
pub struct NumberDisplay(pub f64);

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            write!(f, "NaN")
        } else if n.is_infinite() {
            write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
        } else if n == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", n)
        }
    }
}

// RUST CONCEPT: Display is the structural, diagnostic rendering
// Lists show their elements separated by spaces, chars are quoted, and the
// namespace-only kinds just show their type name.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Number(n) => write!(f, "{}", NumberDisplay(*n)),
            Item::Char(c) => write!(f, "'{}'", c),
            Item::List(items) => write!(f, "{}", ListDisplay(items)),
            other => write!(f, "({})", other.type_name()),
        }
    }
}

/// Displays a slice of items the way a list item displays.
pub struct ListDisplay<'a>(pub &'a [Item]);

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for item in iter {
                write!(f, " {}", item)?;
            }
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    NotEnoughOperands { expected: usize, found: usize },
    BadOperands { expected: String, got: String },
    TypeError(String),
    InvalidString(String),
    EmptyPath,
    PathBlocked { path: String, blocker: &'static str, at: String },
    IndexOutOfRange { index: f64, len: usize },
    NotAnInteger(f64),
    StackTooShallow(String),
    BaseScope,
    LabelNotFound(String),
    InvalidCharCode(f64),
    UndefinedReference(String),
    UnfinishedReference(String),
    UnexpectedItem(&'static str),
    NotImplemented,
    OutputFailed,
    Halted,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::NotEnoughOperands { expected, found } => write!(
                f,
                "expecting {} operands, but the stack holds {}",
                expected, found
            ),
            RuntimeError::BadOperands { expected, got } => {
                write!(f, "bad operands (expecting {}; got {})", expected, got)
            }
            RuntimeError::TypeError(msg) => write!(f, "type error: {}", msg),
            RuntimeError::InvalidString(shown) => {
                write!(f, "item was not a valid string:\n{}", shown)
            }
            RuntimeError::EmptyPath => write!(f, "path was empty"),
            RuntimeError::PathBlocked { path, blocker, at } => write!(
                f,
                "path {} was not valid ({} was in the way at {})",
                path, blocker, at
            ),
            RuntimeError::IndexOutOfRange { index, len } => write!(
                f,
                "list index out of range (expected {} to {}, got {})",
                -(*len as i64),
                *len as i64 - 1,
                NumberDisplay(*index)
            ),
            RuntimeError::NotAnInteger(n) => {
                write!(f, "expected a non-negative integer, got {}", NumberDisplay(*n))
            }
            RuntimeError::StackTooShallow(msg) => write!(f, "{}", msg),
            RuntimeError::BaseScope => {
                write!(f, "tried to pop the base stack off the stack-stack")
            }
            RuntimeError::LabelNotFound(label) => {
                write!(f, "no block labeled {} to return out of", label)
            }
            RuntimeError::InvalidCharCode(n) => {
                write!(f, "{} is not a valid character code", NumberDisplay(*n))
            }
            RuntimeError::UndefinedReference(refer) => write!(f, "undefined reference {}", refer),
            RuntimeError::UnfinishedReference(refer) => {
                write!(f, "block ended with unfinished reference {}", refer)
            }
            RuntimeError::UnexpectedItem(kind) => write!(
                f,
                "wasn't expecting an item of type {} or it's not supported",
                kind
            ),
            RuntimeError::NotImplemented => write!(f, "not implemented"),
            RuntimeError::OutputFailed => write!(f, "output could not be written"),
            RuntimeError::Halted => write!(f, "halted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuntimeError {}
