//! moonc-lex - Lexical Analyzer for the Moon Language
//!
//! This crate provides a complete lexer (tokenizer) for Moon, a Lua-like
//! scripting language. It transforms source text into an ordered sequence
//! of tokens that can be consumed by a parser.
//!
//! # Overview
//!
//! Tokenization is one linear, synchronous pass over an in-memory buffer.
//! The scan is total: it never fails and never stalls. Malformed input is
//! reported through token kinds (`unclosed_string_literal`,
//! `unclosed_long_comment`, `unidentified`) rather than errors, and every
//! dispatch step advances the cursor by at least one character, so the
//! scan terminates on any input.
//!
//! # Example Usage
//!
//! ```
//! use moonc_lex::{tokenize, Token};
//!
//! let tokens = tokenize("local x = 10");
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Local,
//!         Token::Ident("x".to_string()),
//!         Token::Assign,
//!         Token::Int("10".to_string()),
//!         Token::Eof,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token-kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - ASCII character classifiers
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! The 22 Lua reserved words: `and`, `break`, `do`, `else`, `elseif`,
//! `end`, `false`, `for`, `function`, `goto`, `if`, `in`, `local`, `nil`,
//! `not`, `or`, `repeat`, `return`, `then`, `true`, `until`, `while`.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, ASCII only.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF`
//! - **Float**: `3.14`, `.5`, `1e10`, `2.5e-3`
//! - **Short string**: `"hello"`, `'it\'s'` (escapes passed through
//!   verbatim)
//! - **Long string**: `[[multi
//!   line]]`
//!
//! Literal payloads keep the exact source text; conversion is the
//! consumer's job.
//!
//! ## Comments
//!
//! - **Short**: `-- to end of line`
//! - **Long**: `--[[ to the matching ]]`... pair
//!
//! ## Operators and punctuation
//!
//! - **Relational/assignment**: `=`, `==`, `~=`, `<`, `<=`, `>`, `>=`
//! - **Arithmetic/length**: `+`, `-`, `*`, `/`, `%`, `^`, `#`
//! - **Brackets**: `()`, `[]`, `{}`
//! - **Separators**: `:`, `::`, `,`, `;`, `.`
//!
//! ## Special
//!
//! - **end_of_file**: terminal token, exactly one per scan
//! - **unidentified**: single character no rule matched

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
mod edge_cases;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, token_kind_name, Token, TokenKind};

/// Tokenizes the given source text.
///
/// This is the main entry point. It drives [`Lexer::next_token`] until
/// end of input, filters out the internal whitespace tokens (the cursor
/// still consumed them), and appends the terminal [`Token::Eof`].
///
/// Total over any input, including empty text; ownership of every token
/// and its payload passes to the caller.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        match token {
            Token::Eof => {
                tokens.push(token);
                return tokens;
            },
            Token::Whitespace => {},
            _ => tokens.push(token),
        }
    }
}
