//! Operator and punctuation resolution.
//!
//! Two-character operators resolve longest-match-first: the 2-character
//! form is attempted at the current offset, and on a miss exactly one
//! character is consumed for the fallback kind. Three characters are
//! context-sensitive and need a lookahead decision: `-` (comments or
//! subtraction), `.` (fractional literal or field separator), `[` (long
//! string or bracket).

use crate::chars::is_digit;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Attempts the 2-character operator `pair` at the current offset.
    ///
    /// On a match, consumes both characters and returns `matched`;
    /// otherwise consumes exactly one character and returns `fallback`.
    pub(crate) fn match_pair(&mut self, pair: &str, matched: Token, fallback: Token) -> Token {
        if self.cursor.starts_with(pair) {
            self.cursor.advance_n(2);
            matched
        } else {
            self.cursor.advance();
            fallback
        }
    }

    /// Resolves `-`.
    ///
    /// `--[[` starts a long comment and `--` a short one; in both cases
    /// the full introducer is consumed here so the comment payload holds
    /// no delimiter characters. Any other `-` is the subtraction
    /// operator — a minus is never folded into a following numeric
    /// literal; sign handling belongs to the parser.
    pub(crate) fn lex_minus(&mut self) -> Token {
        if self.cursor.starts_with("--[[") {
            self.cursor.advance_n(4);
            self.read_long_comment()
        } else if self.cursor.starts_with("--") {
            self.cursor.advance_n(2);
            self.read_short_comment()
        } else {
            self.cursor.advance();
            Token::Sub
        }
    }

    /// Resolves `.`.
    ///
    /// A digit after the dot starts a fractional numeric literal read
    /// from the dot itself; otherwise the dot is the attribute/field
    /// separator.
    pub(crate) fn lex_dot(&mut self) -> Token {
        if self.cursor.peek(1).is_some_and(is_digit) {
            self.read_number()
        } else {
            self.cursor.advance();
            Token::Attr
        }
    }

    /// Resolves `[`.
    ///
    /// `[[` opens a long string; the opening pair is consumed here and
    /// the reader only sees the body. A lone `[` is a literal bracket.
    pub(crate) fn lex_left_bracket(&mut self) -> Token {
        if self.cursor.starts_with("[[") {
            self.cursor.advance_n(2);
            self.read_long_string()
        } else {
            self.cursor.advance();
            Token::LeftBracket
        }
    }
}
