//! moonc-drv - Scanner Driver
//!
//! Driver utama yang membaca file sumber, menjalankan scanner, dan
//! mencetak setiap token ke stdout.
//!
//! Each token is rendered on its own line as `<type: NAME>` for
//! payload-free tokens and `<type: NAME | value: PAYLOAD>` for literal
//! tokens. Closed string literal values are wrapped in double quotes so
//! an empty string is visible in the output.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use moonc_lex::{tokenize, Token, TokenKind};

/// Configuration untuk driver
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub kinds_only: bool,
    pub verbose: bool,
}

/// Main error type for the moonc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error when reading the input file fails.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Render a single token as a display line.
pub fn render_token(token: &Token) -> String {
    let name = token.kind().name();
    match token.payload() {
        Some(value) if matches!(token.kind(), TokenKind::StringLiteral) => {
            format!("<type: {} | value: \"{}\">", name, value)
        }
        Some(value) => format!("<type: {} | value: {}>", name, value),
        None => format!("<type: {}>", name),
    }
}

/// Render a token stream, one line per token.
///
/// The trailing end-of-input marker is part of the stream contract, not
/// part of the program text, so it is left out of the listing.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if *token == Token::Eof {
            break;
        }
        out.push_str(&render_token(token));
        out.push('\n');
    }
    out
}

/// Render a token stream showing kinds only, payloads left out.
pub fn render_kinds(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if *token == Token::Eof {
            break;
        }
        out.push_str(&format!("<type: {}>", token.kind().name()));
        out.push('\n');
    }
    out
}

/// Read the configured input file, scan it, and print the token listing.
pub fn run(config: &Config) -> Result<()> {
    let source = fs::read_to_string(&config.input_file).map_err(|source| {
        DriverError::ReadInput {
            path: config.input_file.clone(),
            source,
        }
    })?;

    let tokens = tokenize(&source);
    let listing = if config.kinds_only {
        render_kinds(&tokens)
    } else {
        render_tokens(&tokens)
    };
    print!("{}", listing);

    if config.verbose {
        // tokenize always appends the terminal marker, so len >= 1.
        eprintln!(
            "scanned {} bytes into {} tokens",
            source.len(),
            tokens.len() - 1
        );
    }

    Ok(())
}
