//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused
//! components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and reserved-word lexing
//! - `number` - Number literal lexing
//! - `string` - Short and long string literal lexing
//! - `comment` - Short and long comment lexing
//! - `operator` - Operator and punctuation resolution

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
