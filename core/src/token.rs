//! Token definitions produced by the [`Lexer`](crate::Lexer).

use std::fmt;

use serde::Serialize;

/// Classification of a lexed token.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::TokenKind;
///
/// assert_eq!(TokenKind::PositionalParamList.to_string(), "positional parameter list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A flag such as `-sp`.
    Flag,
    /// A positional parameter such as `<id>`.
    PositionalParam,
    /// A variadic positional parameter such as `<id>...`.
    PositionalParamList,
    /// An optional descriptive parameter such as `[description]`.
    OptionalParam,
    /// A nested flag parameter such as `[-t title]` or `[-t]`.
    FlagParam,
    /// End of the input.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Flag => "flag",
            Self::PositionalParam => "positional parameter",
            Self::PositionalParamList => "positional parameter list",
            Self::OptionalParam => "optional parameter",
            Self::FlagParam => "flag parameter",
            Self::EndOfInput => "end of input",
        };
        f.write_str(text)
    }
}

/// A single lexed token.
///
/// `pos` is the byte offset of the token's first character in the input,
/// which for bracketed tokens is the opening bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Literal text; empty for [`TokenKind::EndOfInput`].
    pub literal: String,
    /// Byte offset of the first character.
    pub pos: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, literal: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            pos,
        }
    }

    /// Returns `true` for the end-of-input sentinel.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
