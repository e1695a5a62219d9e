//! Character-level tokenizer for flag syntax definitions.
//!
//! The lexer is an explicit cursor over the input bytes. Each call to
//! [`Lexer::next_token`] skips spaces, classifies the token starting at the
//! cursor, and advances past it. Only ASCII is accepted inside tokens, so the
//! cursor always rests on a character boundary.

use tracing::trace;

use crate::error::{Found, LexError};
use crate::token::{Token, TokenKind};

const EXPECTED_TOKEN_START: &str = "'-', '[', or '<'";
const EXPECTED_ALPHANUMERIC: &str = "[0-9a-zA-Z]";
const EXPECTED_ALPHABETIC: &str = "[a-zA-Z]";
const EXPECTED_RIGHT_ANGLE: &str = "'>'";
const EXPECTED_DOT: &str = "'.'";
const EXPECTED_RIGHT_BRACKET: &str = "']'";

/// Pull-based tokenizer over a single definition.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("-sp <id>");
/// let flag = lexer.next_token().unwrap();
/// assert_eq!(flag.kind, TokenKind::Flag);
/// assert_eq!(flag.literal, "-sp");
///
/// let param = lexer.next_token().unwrap();
/// assert_eq!(param.kind, TokenKind::PositionalParam);
/// assert_eq!(param.pos, 4);
///
/// assert!(lexer.next_token().unwrap().is_end());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset of the cursor.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Lexes the next token.
    ///
    /// Once the input is exhausted every call returns
    /// [`TokenKind::EndOfInput`] at the input length.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] at the first byte that cannot continue the
    /// current token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_spaces();

        let start = self.pos;
        let token = match self.peek() {
            Some(b'-') => self.lex_flag(start)?,
            Some(b'<') => self.lex_positional(start)?,
            Some(b'[') => self.lex_bracketed(start)?,
            None => Token::new(TokenKind::EndOfInput, "", start),
            Some(_) => return Err(self.error(EXPECTED_TOKEN_START)),
        };

        trace!(kind = ?token.kind, literal = %token.literal, pos = token.pos, "lexed token");
        Ok(token)
    }

    fn lex_flag(&mut self, start: usize) -> Result<Token, LexError> {
        self.bump();
        let chars = self.read_flag_chars()?;
        Ok(Token::new(TokenKind::Flag, format!("-{chars}"), start))
    }

    fn lex_positional(&mut self, start: usize) -> Result<Token, LexError> {
        self.bump();
        let name = self.read_name()?;
        self.expect(b'>', EXPECTED_RIGHT_ANGLE)?;

        if self.peek() != Some(b'.') {
            return Ok(Token::new(
                TokenKind::PositionalParam,
                format!("<{name}>"),
                start,
            ));
        }

        for _ in 0..3 {
            self.expect(b'.', EXPECTED_DOT)?;
        }
        Ok(Token::new(
            TokenKind::PositionalParamList,
            format!("<{name}>..."),
            start,
        ))
    }

    fn lex_bracketed(&mut self, start: usize) -> Result<Token, LexError> {
        self.bump();
        self.skip_spaces();

        if self.peek() == Some(b'-') {
            self.bump();
            let flag = self.read_flag_chars()?;
            self.skip_spaces();

            let literal = if self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
                let name = self.read_name()?;
                self.skip_spaces();
                format!("[-{flag} {name}]")
            } else {
                format!("[-{flag}]")
            };
            self.expect(b']', EXPECTED_RIGHT_BRACKET)?;
            return Ok(Token::new(TokenKind::FlagParam, literal, start));
        }

        let name = self.read_name()?;
        self.skip_spaces();
        self.expect(b']', EXPECTED_RIGHT_BRACKET)?;
        Ok(Token::new(
            TokenKind::OptionalParam,
            format!("[{name}]"),
            start,
        ))
    }

    /// One or more alphanumeric characters.
    fn read_flag_chars(&mut self) -> Result<&'a str, LexError> {
        self.read_while(|b| b.is_ascii_alphanumeric(), EXPECTED_ALPHANUMERIC)
    }

    /// One or more alphabetic characters.
    fn read_name(&mut self) -> Result<&'a str, LexError> {
        self.read_while(|b| b.is_ascii_alphabetic(), EXPECTED_ALPHABETIC)
    }

    fn read_while(
        &mut self,
        accept: impl Fn(u8) -> bool,
        expected: &'static str,
    ) -> Result<&'a str, LexError> {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.bump();
        }
        if self.pos == start {
            return Err(self.error(expected));
        }
        let input = self.input;
        Ok(&input[start..self.pos])
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), LexError> {
        if self.peek() != Some(byte) {
            return Err(self.error(expected));
        }
        self.bump();
        Ok(())
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.bump();
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    fn error(&self, expected: &'static str) -> LexError {
        let found = self.input[self.pos..]
            .chars()
            .next()
            .map_or(Found::EndOfInput, Found::Char);
        LexError {
            pos: self.pos,
            expected,
            found,
        }
    }
}

/// Lexes `input` to completion.
///
/// The returned tokens always end with a single [`TokenKind::EndOfInput`].
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
///
/// # Examples
///
/// ```
/// use flag_syntax_core::{TokenKind, tokenize};
///
/// let tokens = tokenize("-d <id>...").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Flag, TokenKind::PositionalParamList, TokenKind::EndOfInput]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, String, usize)> {
        tokenize(input)
            .unwrap_or_else(|err| panic!("failed to lex '{input}': {err}"))
            .into_iter()
            .map(|t| (t.kind, t.literal, t.pos))
            .collect()
    }

    fn tok(kind: TokenKind, literal: &str, pos: usize) -> (TokenKind, String, usize) {
        (kind, literal.to_string(), pos)
    }

    #[test]
    fn test_single_flag() {
        assert_eq!(
            lex("-l"),
            vec![
                tok(TokenKind::Flag, "-l", 0),
                tok(TokenKind::EndOfInput, "", 2),
            ]
        );
    }

    #[test]
    fn test_flag_with_positional() {
        assert_eq!(
            lex("-sp <id>"),
            vec![
                tok(TokenKind::Flag, "-sp", 0),
                tok(TokenKind::PositionalParam, "<id>", 4),
                tok(TokenKind::EndOfInput, "", 8),
            ]
        );
    }

    #[test]
    fn test_bare_flag_params() {
        assert_eq!(
            lex("-x [-y] [-z]"),
            vec![
                tok(TokenKind::Flag, "-x", 0),
                tok(TokenKind::FlagParam, "[-y]", 3),
                tok(TokenKind::FlagParam, "[-z]", 8),
                tok(TokenKind::EndOfInput, "", 12),
            ]
        );
    }

    #[test]
    fn test_positional_and_optional() {
        assert_eq!(
            lex("-a <title> [description]"),
            vec![
                tok(TokenKind::Flag, "-a", 0),
                tok(TokenKind::PositionalParam, "<title>", 3),
                tok(TokenKind::OptionalParam, "[description]", 11),
                tok(TokenKind::EndOfInput, "", 24),
            ]
        );
    }

    #[test]
    fn test_named_flag_params() {
        assert_eq!(
            lex("-u [-t title] [-d description]"),
            vec![
                tok(TokenKind::Flag, "-u", 0),
                tok(TokenKind::FlagParam, "[-t title]", 3),
                tok(TokenKind::FlagParam, "[-d description]", 14),
                tok(TokenKind::EndOfInput, "", 30),
            ]
        );
    }

    #[test]
    fn test_positional_list() {
        assert_eq!(
            lex("-d <id>..."),
            vec![
                tok(TokenKind::Flag, "-d", 0),
                tok(TokenKind::PositionalParamList, "<id>...", 3),
                tok(TokenKind::EndOfInput, "", 10),
            ]
        );
    }

    #[test]
    fn test_numeric_flag() {
        assert_eq!(lex("-0")[0], tok(TokenKind::Flag, "-0", 0));
        assert_eq!(lex("-a1b2")[0], tok(TokenKind::Flag, "-a1b2", 0));
    }

    #[test]
    fn test_spaces_inside_brackets_are_normalized() {
        assert_eq!(
            lex("-u [ -t   title ] [ description ]"),
            vec![
                tok(TokenKind::Flag, "-u", 0),
                tok(TokenKind::FlagParam, "[-t title]", 3),
                tok(TokenKind::OptionalParam, "[description]", 18),
                tok(TokenKind::EndOfInput, "", 33),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_spaces() {
        assert_eq!(
            lex("  -l  "),
            vec![
                tok(TokenKind::Flag, "-l", 2),
                tok(TokenKind::EndOfInput, "", 6),
            ]
        );
    }

    #[test]
    fn test_tokens_need_no_separator() {
        assert_eq!(
            lex("-a<id>[x]"),
            vec![
                tok(TokenKind::Flag, "-a", 0),
                tok(TokenKind::PositionalParam, "<id>", 2),
                tok(TokenKind::OptionalParam, "[x]", 6),
                tok(TokenKind::EndOfInput, "", 9),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lex(""), vec![tok(TokenKind::EndOfInput, "", 0)]);
    }

    #[test]
    fn test_cursor_follows_tokens() {
        let mut lexer = Lexer::new("-sp  <id>  ");
        assert_eq!(lexer.pos(), 0);
        lexer.next_token().unwrap();
        assert_eq!(lexer.pos(), 3);
        lexer.next_token().unwrap();
        assert_eq!(lexer.pos(), 9);
        assert!(lexer.next_token().unwrap().is_end());
        assert_eq!(lexer.pos(), 11);
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        let err = tokenize("-a\0").unwrap_err();
        assert_eq!(err.pos, 2);
        assert_eq!(err.expected, EXPECTED_TOKEN_START);
        assert_eq!(err.found, Found::Char('\0'));
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut lexer = Lexer::new("-a");
        lexer.next_token().unwrap();
        let first = lexer.next_token().unwrap();
        let second = lexer.next_token().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.pos, 2);
    }

    #[test]
    fn test_lexing_is_deterministic() {
        let input = "-x [-t title] [-d description] <id>...";
        assert_eq!(tokenize(input), tokenize(input));
    }

    #[test]
    fn test_error_unexpected_start() {
        let err = tokenize("-a id").unwrap_err();
        assert_eq!(err.pos, 3);
        assert_eq!(err.expected, EXPECTED_TOKEN_START);
        assert_eq!(err.found, Found::Char('i'));
    }

    #[test]
    fn test_error_tab_is_not_whitespace() {
        let err = tokenize("-a\t<id>").unwrap_err();
        assert_eq!(err.pos, 2);
        assert_eq!(err.found, Found::Char('\t'));
    }

    #[test]
    fn test_error_bare_dash() {
        let err = tokenize("- ").unwrap_err();
        assert_eq!(err.pos, 1);
        assert_eq!(err.expected, EXPECTED_ALPHANUMERIC);
        assert_eq!(err.found, Found::Char(' '));
    }

    #[test]
    fn test_error_missing_right_angle() {
        let err = tokenize("-a <id").unwrap_err();
        assert_eq!(err.pos, 6);
        assert_eq!(err.expected, EXPECTED_RIGHT_ANGLE);
        assert_eq!(err.found, Found::EndOfInput);
    }

    #[test]
    fn test_error_space_inside_angle_brackets() {
        let err = tokenize("-a < id>").unwrap_err();
        assert_eq!(err.pos, 4);
        assert_eq!(err.expected, EXPECTED_ALPHABETIC);
    }

    #[test]
    fn test_error_digit_in_param_name() {
        let err = tokenize("-a <id2>").unwrap_err();
        assert_eq!(err.pos, 6);
        assert_eq!(err.expected, EXPECTED_RIGHT_ANGLE);
        assert_eq!(err.found, Found::Char('2'));
    }

    #[test]
    fn test_error_short_ellipsis() {
        let err = tokenize("-a <id>..").unwrap_err();
        assert_eq!(err.pos, 9);
        assert_eq!(err.expected, EXPECTED_DOT);
        assert_eq!(err.found, Found::EndOfInput);

        let err = tokenize("-a <id>.x").unwrap_err();
        assert_eq!(err.pos, 8);
        assert_eq!(err.found, Found::Char('x'));
    }

    #[test]
    fn test_error_missing_right_bracket() {
        let err = tokenize("-a [-t title").unwrap_err();
        assert_eq!(err.pos, 12);
        assert_eq!(err.expected, EXPECTED_RIGHT_BRACKET);

        let err = tokenize("-a [description").unwrap_err();
        assert_eq!(err.pos, 15);
        assert_eq!(err.expected, EXPECTED_RIGHT_BRACKET);
    }

    #[test]
    fn test_error_flag_param_without_flag_chars() {
        let err = tokenize("-a [-]").unwrap_err();
        assert_eq!(err.pos, 5);
        assert_eq!(err.expected, EXPECTED_ALPHANUMERIC);
        assert_eq!(err.found, Found::Char(']'));
    }

    #[test]
    fn test_error_empty_optional() {
        let err = tokenize("-a []").unwrap_err();
        assert_eq!(err.pos, 4);
        assert_eq!(err.expected, EXPECTED_ALPHABETIC);
    }

    #[test]
    fn test_error_reports_multibyte_char() {
        let err = tokenize("-a <é>").unwrap_err();
        assert_eq!(err.pos, 4);
        assert_eq!(err.found, Found::Char('é'));
    }
}
