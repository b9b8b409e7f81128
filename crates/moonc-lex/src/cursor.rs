//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while a scan walks through source text. The cursor only ever moves
//! forward; readers query it with `current`, `peek` and `starts_with` and
//! consume characters with `advance`.

/// A cursor for traversing source text character by character.
///
/// The cursor owns a view of the input and a byte offset into it. The
/// offset is monotonically non-decreasing: no operation moves it backward.
/// UTF-8 is handled correctly, though only ASCII characters ever classify
/// as identifier or digit characters.
///
/// # Example
///
/// ```
/// use moonc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("local x");
/// assert_eq!(cursor.current(), Some('l'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('o'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    input: &'a str,

    /// Current byte position in the source.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of the given text.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the character at the cursor position, or `None` at end of
    /// input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        if self.pos >= self.input.len() {
            return None;
        }

        // Fast path for ASCII (most common case)
        let b = self.input.as_bytes()[self.pos];
        if b < 128 {
            return Some(b as char);
        }

        self.input[self.pos..].chars().next()
    }

    /// Returns the character `offset` characters ahead of the current
    /// position (0 = current), or `None` if the input ends first.
    ///
    /// # Example
    ///
    /// ```
    /// use moonc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// Returns true if at least `n` bytes remain at the current position.
    #[inline]
    pub fn remaining_at_least(&self, n: usize) -> bool {
        self.pos + n <= self.input.len()
    }

    /// Returns true if no character exists at the current offset.
    ///
    /// This is the sole loop-termination test for a scan.
    #[inline]
    pub fn at_end(&self) -> bool {
        !self.remaining_at_least(1)
    }

    /// Returns true if the input at the current offset begins with the
    /// given prefix. Always false when the input is shorter than the
    /// prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix)
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos >= self.input.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.input.as_bytes()[self.pos];
        if b < 128 {
            self.pos += 1;
            return;
        }

        if let Some(c) = self.input[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Advances the cursor by the given number of characters, stopping at
    /// end of input.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the slice of the source from the given start position to
    /// the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use moonc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while true");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("local x = 10");
        assert_eq!(cursor.current(), Some('l'));
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.at_end());
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('c'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current(), Some('α'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('β'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('γ'));
        cursor.advance();
        assert!(cursor.at_end());
    }

    #[test]
    fn test_peek() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(0), Some('a'));
        assert_eq!(cursor.peek(1), Some('b'));
        assert_eq!(cursor.peek(2), Some('c'));
        assert_eq!(cursor.peek(3), None);
        assert_eq!(cursor.peek(100), None);
    }

    #[test]
    fn test_at_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.at_end());
        cursor.advance();
        assert!(cursor.at_end());
        cursor.advance();
        assert!(cursor.at_end());
    }

    #[test]
    fn test_remaining_at_least() {
        let mut cursor = Cursor::new("ab");
        assert!(cursor.remaining_at_least(0));
        assert!(cursor.remaining_at_least(2));
        assert!(!cursor.remaining_at_least(3));
        cursor.advance();
        assert!(cursor.remaining_at_least(1));
        assert!(!cursor.remaining_at_least(2));
    }

    #[test]
    fn test_starts_with() {
        let mut cursor = Cursor::new("--[[x");
        assert!(cursor.starts_with("--"));
        assert!(cursor.starts_with("--[["));
        assert!(!cursor.starts_with("--[[xy"));
        cursor.advance_n(2);
        assert!(cursor.starts_with("[["));
    }

    #[test]
    fn test_advance_n_past_end() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance_n(3);
        assert_eq!(cursor.current(), Some('d'));
        cursor.advance_n(10);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("local x");
        let start = cursor.position();
        cursor.advance_n(5);
        assert_eq!(cursor.slice_from(start), "local");

        let start2 = cursor.position();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(start2), " x");
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new("");
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_position_monotonic() {
        let mut cursor = Cursor::new("a+b");
        let mut last = cursor.position();
        while !cursor.at_end() {
            cursor.advance();
            assert!(cursor.position() > last);
            last = cursor.position();
        }
    }
}
