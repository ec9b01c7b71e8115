//! Character sources for the scanner.
//!
//! The scanner only ever needs three things from its input: whether
//! characters remain, the next character, and a way to give back the
//! character it just read. [`CharSource`] captures that contract and
//! [`Cursor`] implements it over an in-memory string.

/// A stream of characters with exactly one level of rewind.
pub trait CharSource {
    /// Returns true while unread characters remain.
    fn has_next_char(&self) -> bool;

    /// Returns the next character and advances past it, or `None` at the
    /// end of input.
    fn read_next_char(&mut self) -> Option<char>;

    /// Undoes the most recent [`read_next_char`](Self::read_next_char).
    ///
    /// Only one character can be given back. Calling this twice without a
    /// read in between leaves the source where the first call put it.
    fn set_cursor_to_previous_position(&mut self);
}

/// A cursor over source text.
///
/// The cursor keeps the current byte position plus the position before the
/// last read, which is all a one-character rewind needs. It handles UTF-8
/// correctly; ASCII input takes a fast path.
///
/// # Example
///
/// ```
/// use lexc_lex::cursor::{CharSource, Cursor};
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.read_next_char(), Some('a'));
/// cursor.set_cursor_to_previous_position();
/// assert_eq!(cursor.read_next_char(), Some('a'));
/// assert_eq!(cursor.read_next_char(), Some('b'));
/// assert!(!cursor.has_next_char());
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Byte position before the last read, if it can still be rewound.
    previous: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            previous: None,
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}

impl CharSource for Cursor<'_> {
    fn has_next_char(&self) -> bool {
        !self.is_at_end()
    }

    #[inline]
    fn read_next_char(&mut self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII (most common)
        let c = if b < 128 {
            b as char
        } else {
            self.source[self.position..].chars().next()?
        };

        self.previous = Some(self.position);
        self.position += c.len_utf8();
        Some(c)
    }

    fn set_cursor_to_previous_position(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.position = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 42;");
        assert_eq!(cursor.position(), 0);
        assert!(cursor.has_next_char());
    }

    #[test]
    fn test_read_all() {
        let mut cursor = Cursor::new("abc");
        let mut seen = String::new();
        while cursor.has_next_char() {
            seen.push(cursor.read_next_char().unwrap());
        }
        assert_eq!(seen, "abc");
        assert_eq!(cursor.read_next_char(), None);
    }

    #[test]
    fn test_read_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.read_next_char(), Some('α'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_next_char(), Some('β'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_rewind_one() {
        let mut cursor = Cursor::new("<=");
        assert_eq!(cursor.read_next_char(), Some('<'));
        assert_eq!(cursor.read_next_char(), Some('='));
        cursor.set_cursor_to_previous_position();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_next_char(), Some('='));
    }

    #[test]
    fn test_rewind_utf8() {
        let mut cursor = Cursor::new("aé");
        cursor.read_next_char();
        assert_eq!(cursor.read_next_char(), Some('é'));
        cursor.set_cursor_to_previous_position();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_next_char(), Some('é'));
    }

    #[test]
    fn test_double_rewind_is_single_step() {
        let mut cursor = Cursor::new("abc");
        cursor.read_next_char();
        cursor.read_next_char();
        cursor.set_cursor_to_previous_position();
        cursor.set_cursor_to_previous_position();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_rewind_before_any_read() {
        let mut cursor = Cursor::new("abc");
        cursor.set_cursor_to_previous_position();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert!(!cursor.has_next_char());
        assert_eq!(cursor.read_next_char(), None);
    }
}
