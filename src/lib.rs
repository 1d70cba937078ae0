//! A compiler and matcher for a very small regular expression language.
//!
//! A pattern is a sequence of tokens. Each token is a literal ASCII
//! character, the wildcard `.` (any single character), or one of those
//! followed by a postfix `*` (zero or more) or `+` (one or more). There is no
//! grouping, alternation, anchoring, character classes or escaping.
//!
//! Compiling a pattern produces an [`Automaton`]: a graph of [`State`]s
//! living in a single arena, where repetition is expressed by cycles between
//! a quantifier state and the state it wraps. Matching walks that graph one
//! input character at a time, always taking the first viable candidate, and
//! never backtracks. A match is always against the *whole* input.
//!
//! ```
//! let fsm = regex_fsm::build("a+b.")?;
//! assert!(regex_fsm::accepts(&fsm, "aabz"));
//! assert!(!regex_fsm::accepts(&fsm, "bz"));
//! # Ok::<(), regex_fsm::UnsupportedTokenError>(())
//! ```
//!
//! An automaton is immutable once built, so one automaton can be shared by
//! any number of threads matching concurrently.
//!
//! # Crate features
//!
//! * **logging** - Emits compilation and matching events through the `log`
//!   crate. Pair it with a logger such as `env_logger` to see them.

#![deny(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod automaton;
pub mod compiler;
pub mod matcher;

pub use automaton::{Automaton, State, StateId};
pub use compiler::Compiler;
pub use matcher::Matcher;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// The result of compiling a pattern into an automaton.
pub type CompileResult<T> = Result<T, UnsupportedTokenError>;

/// Returned when a pattern contains a character the grammar has no state
/// for. Only non-ASCII characters are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedTokenError {
    token: char,
    offset: usize,
}

impl UnsupportedTokenError {
    pub(crate) fn new(token: char, offset: usize) -> Self {
        UnsupportedTokenError { token, offset }
    }

    /// The offending character.
    pub fn token(&self) -> char {
        self.token
    }

    /// Byte offset of the offending character in the pattern.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for UnsupportedTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported token {:?} at offset {}", self.token, self.offset)
    }
}

impl std::error::Error for UnsupportedTokenError {}

/// Compile `pattern` into an automaton.
///
/// This is shorthand for `Compiler::new().compile(pattern)`.
pub fn build(pattern: &str) -> CompileResult<Automaton> {
    Compiler::new().compile(pattern)
}

/// Returns true if `automaton` accepts the whole of `input`.
///
/// This never fails: anything that does not match is simply rejected.
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    Matcher::new(automaton).accepts(input)
}
