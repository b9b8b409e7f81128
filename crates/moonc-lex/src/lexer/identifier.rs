//! Identifier and reserved-word lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads an identifier or reserved word.
    ///
    /// Consumes the identifier-continue run starting at the current
    /// character, then resolves the text against the fixed reserved-word
    /// set. Only generic identifiers keep their text as a payload;
    /// reserved-word tokens carry none.
    pub(crate) fn read_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while self.cursor.current().is_some_and(is_ident_continue) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ident(source: &str) -> Token {
        Lexer::new(source).read_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), Token::Ident("foo".to_string()));
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        assert_eq!(
            lex_ident("foo_bar_123"),
            Token::Ident("foo_bar_123".to_string())
        );
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(lex_ident("_x"), Token::Ident("_x".to_string()));
    }

    #[test]
    fn test_reserved_words() {
        assert_eq!(lex_ident("local"), Token::Local);
        assert_eq!(lex_ident("function"), Token::Function);
        assert_eq!(lex_ident("elseif"), Token::Elseif);
        assert_eq!(lex_ident("nil"), Token::Nil);
        assert_eq!(lex_ident("repeat"), Token::Repeat);
    }

    #[test]
    fn test_keyword_prefix_is_still_ident() {
        assert_eq!(lex_ident("ending"), Token::Ident("ending".to_string()));
        assert_eq!(lex_ident("iffy"), Token::Ident("iffy".to_string()));
        assert_eq!(lex_ident("local_"), Token::Ident("local_".to_string()));
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(lex_ident("While"), Token::Ident("While".to_string()));
        assert_eq!(lex_ident("NIL"), Token::Ident("NIL".to_string()));
    }

    #[test]
    fn test_run_stops_at_non_ident_char() {
        let mut lexer = Lexer::new("abc.def");
        assert_eq!(lexer.read_identifier(), Token::Ident("abc".to_string()));
        assert_eq!(lexer.position(), 3);
    }
}
