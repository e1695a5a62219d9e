//! Recursive-descent parser for flag syntax definitions.
//!
//! The parser pulls one token at a time from a [`Lexer`], requires the first
//! token to be a flag, and accumulates the remaining tokens into a
//! [`ParameterSet`]. Ordering between parameter kinds is checked against
//! what has already been accumulated; there is no lookahead and no recovery.
//!
//! Accepted orderings:
//!
//! - flag parameters come before every other parameter kind,
//! - positional parameters and the positional list never follow an optional
//!   parameter,
//! - positional parameters never follow the positional list,
//! - optional parameters never follow the positional list,
//! - at most one positional list appears.

use tracing::debug;

use crate::ast::{
    FlagNode, FlagParamNode, OptionalParamNode, Param, ParameterSet, PositionalParamListNode,
    PositionalParamNode, StatementNode,
};
use crate::error::{GrammarError, GrammarRule, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parses a single flag syntax definition into a [`StatementNode`].
///
/// # Errors
///
/// Returns [`SyntaxError::Lex`](crate::SyntaxError::Lex) for malformed
/// characters and [`SyntaxError::Grammar`](crate::SyntaxError::Grammar) for
/// misplaced tokens. Parsing stops at the first error.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::{GrammarRule, SyntaxError, parse};
///
/// let statement = parse("-x [-t title] [-d description] <id>...").unwrap();
/// assert_eq!(statement.flag.literal, "-x");
/// assert_eq!(statement.params.flag_params.len(), 2);
/// assert_eq!(statement.params.positional_param_list.unwrap().name, "id");
///
/// let err = parse("-a [description] <id>").unwrap_err();
/// assert!(matches!(
///     err,
///     SyntaxError::Grammar(ref e) if e.rule == GrammarRule::PositionalAfterOptional
/// ));
/// assert_eq!(err.pos(), 17);
/// ```
pub fn parse(input: &str) -> Result<StatementNode> {
    Parser::new(input).parse()
}

/// Parser state for one definition.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Consumes the parser and builds the statement.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(mut self) -> Result<StatementNode> {
        let flag = self.parse_flag()?;
        let params = self.parse_params()?;
        debug!(flag = %flag.literal, params = params.len(), "parsed statement");
        Ok(StatementNode { flag, params })
    }

    fn parse_flag(&mut self) -> Result<FlagNode> {
        let token = self.lexer.next_token()?;
        if token.kind != TokenKind::Flag {
            return Err(GrammarError::new(GrammarRule::ExpectedFlag, token).into());
        }
        Ok(FlagNode::new(&token.literal))
    }

    fn parse_params(&mut self) -> Result<ParameterSet> {
        let mut params = ParameterSet::default();

        loop {
            let token = self.lexer.next_token()?;
            let param = match token.kind {
                TokenKind::EndOfInput => return Ok(params),
                TokenKind::Flag => {
                    return Err(GrammarError::new(GrammarRule::UnexpectedFlag, token).into());
                }
                TokenKind::FlagParam => Param::FlagParam(FlagParamNode::new(&token.literal)),
                TokenKind::PositionalParam => {
                    Param::Positional(PositionalParamNode::new(&token.literal))
                }
                TokenKind::PositionalParamList => {
                    Param::PositionalList(PositionalParamListNode::new(&token.literal))
                }
                TokenKind::OptionalParam => {
                    Param::Optional(OptionalParamNode::new(&token.literal))
                }
            };

            check_order(&params, &param, &token)?;
            debug!(literal = %token.literal, pos = token.pos, "accepted {}", token.kind);
            params.insert(param);
        }
    }
}

/// Checks that `param` may follow everything already in `params`.
fn check_order(params: &ParameterSet, param: &Param, token: &Token) -> Result<()> {
    let violated = match param {
        Param::FlagParam(_) => {
            let seen_other = !params.positional_params.is_empty()
                || params.positional_param_list.is_some()
                || !params.optional_params.is_empty();
            seen_other.then_some(GrammarRule::FlagParamAfterParam)
        }
        Param::Positional(_) => {
            if !params.optional_params.is_empty() {
                Some(GrammarRule::PositionalAfterOptional)
            } else if params.positional_param_list.is_some() {
                Some(GrammarRule::PositionalAfterList)
            } else {
                None
            }
        }
        Param::PositionalList(_) => {
            if !params.optional_params.is_empty() {
                Some(GrammarRule::PositionalAfterOptional)
            } else if params.positional_param_list.is_some() {
                Some(GrammarRule::DuplicateList)
            } else {
                None
            }
        }
        Param::Optional(_) => params
            .positional_param_list
            .is_some()
            .then_some(GrammarRule::OptionalAfterList),
    };

    match violated {
        Some(rule) => Err(GrammarError::new(rule, token.clone()).into()),
        None => Ok(()),
    }
}
