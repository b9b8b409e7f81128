//! Edge case tests for moonc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::Ident("x".to_string()));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("local {} = 1", name));
        assert!(t.contains(&Token::Ident(name)));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("function local if");
        assert_eq!(t[0], Token::Function);
        assert_eq!(t[2], Token::Local);
        assert_eq!(t[4], Token::If);
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xFF");
        assert_eq!(t[0], Token::Int("0x0".to_string()));
        assert_eq!(t[2], Token::Int("0xFF".to_string()));
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0], Token::StringLiteral(String::new()));
    }

    #[test]
    fn test_edge_empty_long_string() {
        let t = lex_all("[[]]");
        assert_eq!(t[0], Token::StringLiteral(String::new()));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / % ^ # == ~= < > <= >= =");
        assert!(t.contains(&Token::Add));
        assert!(t.contains(&Token::Pow));
        assert!(t.contains(&Token::Len));
        assert!(t.contains(&Token::Eq));
        assert!(t.contains(&Token::NotEq));
        assert!(t.contains(&Token::Assign));
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = lex_all("( ) { } [ ] , ; : :: .");
        assert!(t.contains(&Token::LeftParen));
        assert!(t.contains(&Token::RightCurly));
        assert!(t.contains(&Token::DoubleColon));
        assert!(t.contains(&Token::Attr));
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| **x == Token::LeftParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("End end");
        assert_eq!(t[0], Token::Ident("End".to_string()));
        assert_eq!(t[2], Token::End);
    }

    #[test]
    fn test_edge_bools() {
        let t = lex_all("true false");
        assert_eq!(t[0], Token::True);
        assert_eq!(t[2], Token::False);
    }

    #[test]
    fn test_edge_scientific() {
        let t = lex_all("1e10 1.5e-3");
        assert_eq!(t[0], Token::Float("1e10".to_string()));
        assert_eq!(t[2], Token::Float("1.5e-3".to_string()));
    }

    #[test]
    fn test_edge_huge_int() {
        let t = lex_all("18446744073709551615");
        assert_eq!(t[0], Token::Int("18446744073709551615".to_string()));
    }

    #[test]
    fn test_edge_all_keywords() {
        let t = lex_all(
            "and break do else elseif end false for function goto if in \
             local nil not or repeat return then true until while",
        );
        let kinds: Vec<TokenKind> = t.iter().map(Token::kind).collect();
        let reserved: Vec<TokenKind> = kinds
            .into_iter()
            .filter(|k| *k != TokenKind::Whitespace)
            .collect();
        assert_eq!(reserved.len(), 22);
        assert!(t.contains(&Token::And));
        assert!(t.contains(&Token::Goto));
        assert!(t.contains(&Token::While));
    }

    #[test]
    fn test_edge_adjacent_tokens_no_space() {
        let t = tokenize("a=b");
        assert_eq!(
            t,
            vec![
                Token::Ident("a".to_string()),
                Token::Assign,
                Token::Ident("b".to_string()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_comment_then_code() {
        let t = tokenize("-- note\nreturn");
        assert_eq!(t[0], Token::ShortComment(" note".to_string()));
        assert_eq!(t[1], Token::Return);
    }

    #[test]
    fn test_edge_nested_long_brackets_not_supported() {
        // The first `]]` always closes; there is no bracket level counting.
        let t = tokenize("[[a[[b]]c]]");
        assert_eq!(t[0], Token::StringLiteral("a[[b".to_string()));
    }

    #[test]
    fn test_edge_crlf_short_comment() {
        let t = tokenize("--x\r\ny");
        assert_eq!(t[0], Token::ShortComment("x\r".to_string()));
        assert_eq!(t[1], Token::Ident("y".to_string()));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let t = tokenize("\"unterminated");
        assert_eq!(
            t[0],
            Token::UnclosedStringLiteral("unterminated".to_string())
        );
    }

    #[test]
    fn test_err_unterminated_long_comment() {
        let t = tokenize("--[[ open");
        assert_eq!(t[0], Token::UnclosedLongComment(" open".to_string()));
        assert_eq!(t[1], Token::Eof);
    }

    #[test]
    fn test_err_bare_hex_prefix() {
        let t = tokenize("0x");
        assert_eq!(t[0], Token::Int("0x".to_string()));
    }

    #[test]
    fn test_err_invalid_chars() {
        let t = tokenize("@$?");
        assert_eq!(
            t,
            vec![
                Token::Unidentified,
                Token::Unidentified,
                Token::Unidentified,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_err_invalid_char_mid_statement() {
        // An unidentified character never aborts the scan.
        let t = tokenize("local @ x");
        assert_eq!(t[0], Token::Local);
        assert_eq!(t[1], Token::Unidentified);
        assert_eq!(t[2], Token::Ident("x".to_string()));
    }

    #[test]
    fn test_err_lone_backslash_in_string() {
        // A trailing backslash consumes the closing quote.
        let t = tokenize("\"a\\\"");
        assert_eq!(t[0], Token::UnclosedStringLiteral("a\\\"".to_string()));
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_terminates_on_arbitrary_input() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let tokens = tokenize(&input);
            // Every scan ends, and ends with exactly one terminal marker.
            assert_eq!(tokens.last(), Some(&Token::Eof));
            assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1);
        });
    }

    #[test]
    fn test_property_no_whitespace_tokens() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \\t\\n]{0,200}")| {
            let tokens = tokenize(&input);
            assert!(tokens.iter().all(|t| t.kind() != TokenKind::Whitespace));
        });
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(&input);
            // Exactly one token: a reserved word or an identifier.
            assert_eq!(tokens.len(), 1);
            match &tokens[0] {
                Token::Ident(text) => assert_eq!(text, &input),
                other => assert!(other.payload().is_none()),
            }
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,20}")| {
            let tokens = lex_all(&input);
            assert_eq!(tokens, vec![Token::Int(input)]);
        });
    }

    #[test]
    fn test_property_arbitrary_hex_number_strings() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9a-fA-F]{1,16}")| {
            let input = format!("0x{}", digits);
            let tokens = lex_all(&input);
            // Hex digits never introduce a fractional or exponent part.
            assert_eq!(tokens, vec![Token::Int(input)]);
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"\\\\\\n]{0,100}")| {
            let source = format!("\"{}\"", body);
            let tokens = lex_all(&source);
            assert_eq!(tokens, vec![Token::StringLiteral(body)]);
        });
    }

    #[test]
    fn test_property_consumption_spans_tile_input() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let mut lexer = Lexer::new(&input);
            let mut prev = lexer.position();
            loop {
                let token = lexer.next_token();
                let pos = lexer.position();
                if token == Token::Eof {
                    assert_eq!(pos, input.len());
                    break;
                }
                // Every non-terminal token consumes at least one byte.
                assert!(pos > prev);
                prev = pos;
            }
        });
    }
}
