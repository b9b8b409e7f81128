//! Character classifiers for the Moon lexer.
//!
//! All classification is ASCII-only and locale-independent: non-ASCII
//! characters are never identifier or digit characters.

/// Checks if a character can start an identifier.
///
/// Valid start characters are ASCII letters and `_`.
///
/// # Example
///
/// ```
/// use moonc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// Valid continuation characters are the start characters plus ASCII
/// digits.
///
/// # Example
///
/// ```
/// use moonc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('+'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Checks if a character is an ASCII decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is an ASCII hexadecimal digit.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_start('-'));
        assert!(!is_ident_start(' '));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('a'));
        assert!(is_ident_continue('_'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('.'));
        assert!(!is_ident_continue('\n'));
    }

    #[test]
    fn test_ascii_only() {
        assert!(!is_ident_start('α'));
        assert!(!is_ident_continue('é'));
        assert!(!is_digit('٣')); // Arabic-Indic digit three
        assert!(!is_hex_digit('Ａ')); // fullwidth A
    }

    #[test]
    fn test_digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(is_hex_digit('a'));
        assert!(is_hex_digit('F'));
        assert!(!is_hex_digit('g'));
    }
}
