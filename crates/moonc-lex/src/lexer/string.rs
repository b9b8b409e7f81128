//! String literal lexing.
//!
//! This module handles short (quote-delimited) and long (`[[...]]`)
//! string literals. Neither form interprets escape sequences: payloads
//! carry the source text between the delimiters verbatim.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a short string literal.
    ///
    /// The delimiter is the opening quote character (`'` or `"`), matched
    /// by its own next occurrence. A backslash and the character after it
    /// are copied through without interpretation, so an escaped quote does
    /// not close the literal. A bare newline does not terminate the scan;
    /// it accumulates into the payload.
    ///
    /// # Returns
    ///
    /// `Token::StringLiteral` when the matching quote is found,
    /// `Token::UnclosedStringLiteral` when the input ends first. The
    /// payload excludes the delimiters.
    pub(crate) fn read_short_string(&mut self) -> Token {
        let quote = self.cursor.current();
        self.cursor.advance();

        let start = self.cursor.position();
        loop {
            match self.cursor.current() {
                None => {
                    return Token::UnclosedStringLiteral(self.cursor.slice_from(start).to_string());
                },
                Some(c) if Some(c) == quote => {
                    let text = self.cursor.slice_from(start).to_string();
                    self.cursor.advance();
                    return Token::StringLiteral(text);
                },
                Some('\\') => {
                    // The backslash and the escaped character both land in
                    // the payload.
                    self.cursor.advance();
                    self.cursor.advance();
                },
                Some(_) => self.cursor.advance(),
            }
        }
    }

    /// Reads a long string literal.
    ///
    /// The opening `[[` has already been consumed by the resolver. The
    /// body runs verbatim, across lines, until `]]` or end of input; a
    /// found closer is consumed and discarded.
    ///
    /// # Returns
    ///
    /// `Token::StringLiteral` when `]]` is found,
    /// `Token::UnclosedStringLiteral` otherwise. The payload is the text
    /// strictly between the delimiters.
    pub(crate) fn read_long_string(&mut self) -> Token {
        let start = self.cursor.position();
        loop {
            if self.cursor.starts_with("]]") {
                let text = self.cursor.slice_from(start).to_string();
                self.cursor.advance_n(2);
                return Token::StringLiteral(text);
            }
            if self.cursor.at_end() {
                return Token::UnclosedStringLiteral(self.cursor.slice_from(start).to_string());
            }
            self.cursor.advance();
        }
    }
}
