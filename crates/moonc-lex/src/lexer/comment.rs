//! Comment lexing.
//!
//! Comments are tokens here, not skipped text: a downstream consumer may
//! want them (documentation tooling, formatters), and the parser is free
//! to discard them.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads a short comment.
    ///
    /// The triggering `--` has already been consumed by the resolver.
    /// Consumes through (but not including) the next newline or end of
    /// input.
    pub(crate) fn read_short_comment(&mut self) -> Token {
        let start = self.cursor.position();
        while let Some(c) = self.cursor.current() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
        Token::ShortComment(self.cursor.slice_from(start).to_string())
    }

    /// Reads a long comment.
    ///
    /// The opening `--[[` has already been consumed by the resolver.
    /// Consumes until `]]` (consumed and discarded) or end of input. The
    /// payload contains only bytes actually consumed from the input,
    /// never a synthesized closer.
    ///
    /// # Returns
    ///
    /// `Token::LongComment` when `]]` was found,
    /// `Token::UnclosedLongComment` when the input ended first.
    pub(crate) fn read_long_comment(&mut self) -> Token {
        let start = self.cursor.position();
        loop {
            if self.cursor.starts_with("]]") {
                let text = self.cursor.slice_from(start).to_string();
                self.cursor.advance_n(2);
                return Token::LongComment(text);
            }
            if self.cursor.at_end() {
                return Token::UnclosedLongComment(self.cursor.slice_from(start).to_string());
            }
            self.cursor.advance();
        }
    }
}
