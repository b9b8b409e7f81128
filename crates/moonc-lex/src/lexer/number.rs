//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use crate::chars::{is_digit, is_hex_digit};
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a number literal.
    ///
    /// Accepts an optional `0x`/`0X` prefix (hex mode), then a run of:
    /// digits; at most one decimal point; at most one `e`/`E` exponent
    /// marker optionally followed by a sign; and, in hex mode only, hex
    /// digits. A minus sign is accepted only immediately after the
    /// exponent marker, so `10-5` never folds into a single literal.
    ///
    /// In hex mode `e`/`E` count as hex digits, not exponent markers:
    /// `0x1e5` is one integer literal.
    ///
    /// The payload is the exact source text, unparsed; converting it is
    /// the consumer's job.
    ///
    /// # Returns
    ///
    /// `Token::Float` if a decimal point or exponent was seen, else
    /// `Token::Int`.
    pub(crate) fn read_number(&mut self) -> Token {
        let start = self.cursor.position();
        let mut is_hex = false;
        let mut seen_dot = false;
        let mut seen_exp = false;

        if self.cursor.starts_with("0x") || self.cursor.starts_with("0X") {
            is_hex = true;
            self.cursor.advance_n(2);
        }

        while let Some(c) = self.cursor.current() {
            if is_digit(c) {
                self.cursor.advance();
            } else if c == '.' && !seen_dot && !seen_exp {
                seen_dot = true;
                self.cursor.advance();
            } else if is_hex && is_hex_digit(c) {
                self.cursor.advance();
            } else if (c == 'e' || c == 'E') && !seen_exp {
                seen_exp = true;
                self.cursor.advance();
                if matches!(self.cursor.current(), Some('+') | Some('-')) {
                    self.cursor.advance();
                }
            } else {
                break;
            }
        }

        let text = self.cursor.slice_from(start).to_string();
        if seen_dot || seen_exp {
            Token::Float(text)
        } else {
            Token::Int(text)
        }
    }
}
