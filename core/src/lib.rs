//! Lexer, parser, and syntax tree for compact flag syntax definitions.
//!
//! A definition describes one command-line flag and its parameters:
//!
//! ```text
//! -x [-t title] [-d description] <id>...
//! ```
//!
//! - [`FlagNode`] — the leading flag (`-x`).
//! - [`FlagParamNode`] — a nested flag, optionally taking a value
//!   (`[-t title]`, `[-v]`).
//! - [`PositionalParamNode`] — a required value (`<id>`).
//! - [`PositionalParamListNode`] — a variadic value (`<id>...`).
//! - [`OptionalParamNode`] — a descriptive optional value (`[description]`).
//!
//! [`parse`] turns a definition into a [`StatementNode`], enforcing the
//! ordering rules between parameter kinds and stopping at the first error.
//! [`tokenize`] and [`Lexer`] expose the token stream on its own.
//!
//! # Example
//!
//! ```
//! use flag_syntax_core::parse;
//!
//! let statement = parse("-x [-t title] [-d description] <id>...").unwrap();
//! assert_eq!(statement.flag.name, "x");
//!
//! let names: Vec<_> = statement
//!     .params
//!     .flag_params
//!     .iter()
//!     .map(|p| (p.flag.name.as_str(), p.name.as_str()))
//!     .collect();
//! assert_eq!(names, vec![("t", "title"), ("d", "description")]);
//!
//! assert!(parse("<id>").is_err());
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod token;

pub use ast::{
    FlagNode, FlagParamNode, OptionalParamNode, Param, ParameterSet, PositionalParamListNode,
    PositionalParamNode, StatementNode,
};
pub use error::{Found, GrammarError, GrammarRule, LexError, Result, SyntaxError};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use token::{Token, TokenKind};
