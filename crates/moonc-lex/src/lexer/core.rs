//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for the Moon language.
///
/// The lexer transforms source text into a stream of tokens: reserved
/// words, identifiers, numeric and string literals, comments, operators
/// and punctuation. It never fails: malformed input surfaces as
/// `unclosed_*` or `unidentified` tokens and scanning continues.
///
/// One lexer value is created per scan and owns its cursor exclusively;
/// there is no shared scanning state.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned at the start of the given source.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Returns the next token from the source.
    ///
    /// Dispatches on the current character. Every branch advances the
    /// cursor by at least one character before returning, which is what
    /// guarantees the scan terminates on any input. Whitespace is returned
    /// as a token (one per character) so that every byte of the input is
    /// attributed to exactly one consumption span; the stream assembler
    /// filters those tokens out.
    ///
    /// # Returns
    /// The next token, or `Token::Eof` once no character exists at the
    /// current offset.
    pub fn next_token(&mut self) -> Token {
        let Some(c) = self.cursor.current() else {
            return Token::Eof;
        };

        match c {
            '\'' | '"' => self.read_short_string(),
            '(' => {
                self.cursor.advance();
                Token::LeftParen
            },
            ')' => {
                self.cursor.advance();
                Token::RightParen
            },
            ']' => {
                self.cursor.advance();
                Token::RightBracket
            },
            '{' => {
                self.cursor.advance();
                Token::LeftCurly
            },
            '}' => {
                self.cursor.advance();
                Token::RightCurly
            },
            ';' => {
                self.cursor.advance();
                Token::Semicolon
            },
            ',' => {
                self.cursor.advance();
                Token::Comma
            },
            '+' => {
                self.cursor.advance();
                Token::Add
            },
            '*' => {
                self.cursor.advance();
                Token::Mul
            },
            '/' => {
                self.cursor.advance();
                Token::Div
            },
            '%' => {
                self.cursor.advance();
                Token::Mod
            },
            '^' => {
                self.cursor.advance();
                Token::Pow
            },
            '#' => {
                self.cursor.advance();
                Token::Len
            },
            '~' => self.match_pair("~=", Token::NotEq, Token::Unidentified),
            '>' => self.match_pair(">=", Token::GreaterEq, Token::Greater),
            '<' => self.match_pair("<=", Token::LessEq, Token::Less),
            '=' => self.match_pair("==", Token::Eq, Token::Assign),
            ':' => self.match_pair("::", Token::DoubleColon, Token::Colon),
            '-' => self.lex_minus(),
            '.' => self.lex_dot(),
            '[' => self.lex_left_bracket(),
            c if is_digit(c) => self.read_number(),
            c if is_ident_start(c) => self.read_identifier(),
            c if c.is_ascii_whitespace() => {
                self.cursor.advance();
                Token::Whitespace
            },
            _ => {
                self.cursor.advance();
                Token::Unidentified
            },
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true if the lexer has consumed the whole input.
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }
}

/// Iterates over the raw token stream, whitespace tokens included,
/// stopping before `Token::Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token == Token::Eof {
            None
        } else {
            Some(token)
        }
    }
}
