//! Error types for lexing and parsing flag syntax definitions.
//!
//! Both error kinds carry the byte offset of the offending input so callers
//! can point at the exact character in the definition.

use std::fmt;

use thiserror::Error;

use crate::token::Token;

/// The character found where the lexer expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A concrete character.
    Char(char),
    /// The input ended.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "'{c}'"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// An unexpected character at a given byte position.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::{Found, tokenize};
///
/// let err = tokenize("-a <id").unwrap_err();
/// assert_eq!(err.pos, 6);
/// assert_eq!(err.found, Found::EndOfInput);
/// assert_eq!(err.to_string(), "expected '>', got end of input at position 6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {found} at position {pos}")]
pub struct LexError {
    /// Byte offset of the offending character.
    pub pos: usize,
    /// Description of the acceptable characters at this point.
    pub expected: &'static str,
    /// What was actually there.
    pub found: Found,
}

/// Ordering and placement rules the parser enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarRule {
    /// The statement did not start with a flag.
    ExpectedFlag,
    /// A second bare flag appeared after the leading one.
    UnexpectedFlag,
    /// A flag parameter came after a positional, list, or optional parameter.
    FlagParamAfterParam,
    /// A positional parameter or list came after an optional parameter.
    PositionalAfterOptional,
    /// An optional parameter came after a positional parameter list.
    OptionalAfterList,
    /// A positional parameter came after a positional parameter list.
    PositionalAfterList,
    /// A second positional parameter list appeared.
    DuplicateList,
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ExpectedFlag => "expected flag",
            Self::UnexpectedFlag => "unexpected flag; only one flag may begin a statement",
            Self::FlagParamAfterParam => {
                "flag parameter cannot follow a positional or optional parameter"
            }
            Self::PositionalAfterOptional => {
                "positional parameter cannot follow an optional parameter"
            }
            Self::OptionalAfterList => {
                "optional parameter cannot follow a positional parameter list"
            }
            Self::PositionalAfterList => {
                "positional parameter cannot follow a positional parameter list"
            }
            Self::DuplicateList => "duplicate positional parameter list",
        };
        f.write_str(text)
    }
}

/// A token that violates the statement grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rule} at position {pos}")]
pub struct GrammarError {
    /// Byte offset of the offending token.
    pub pos: usize,
    /// The rule that was violated.
    pub rule: GrammarRule,
    /// The offending token.
    pub token: Token,
}

impl GrammarError {
    pub(crate) fn new(rule: GrammarRule, token: Token) -> Self {
        Self {
            pos: token.pos,
            rule,
            token,
        }
    }
}

/// Any error returned by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Character-level failure from the lexer.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Token-level ordering failure from the parser.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl SyntaxError {
    /// Byte offset of the offending input.
    pub fn pos(&self) -> usize {
        match self {
            Self::Lex(err) => err.pos,
            Self::Grammar(err) => err.pos,
        }
    }
}

/// Convenience alias for results with [`SyntaxError`].
pub type Result<T> = std::result::Result<T, SyntaxError>;
