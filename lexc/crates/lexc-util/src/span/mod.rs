//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a [`Position`] names a single character, a [`Span`] covers a range.
//!
//! # Examples
//!
//! ```
//! use lexc_util::span::{Position, Span};
//!
//! let mut pos = Position::START;
//! pos.advance('a');
//! assert_eq!((pos.line, pos.column), (1, 2));
//!
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(span.len(), 3);
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

/// A character position in the source.
///
/// `line` and `column` are 1-based. `offset` is the byte offset from the
/// start of the source. A newline belongs to the line it terminates; the
/// character after it is at column 1 of the next line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset in source
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of a source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Moves past `c`.
    ///
    /// A newline increments the line and resets the column to 1; any other
    /// character increments the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::span::Position;
    ///
    /// let mut pos = Position::START;
    /// pos.advance('x');
    /// pos.advance('\n');
    /// assert_eq!((pos.line, pos.column, pos.offset), (2, 1, 2));
    /// ```
    #[inline]
    pub fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of its first character
///
/// # Examples
///
/// ```
/// use lexc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.to_string(), "1:5");
///
/// let point = Span::point(3, 7);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point with no byte extent
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Create a span from the character at `start` up to (not including)
    /// the byte offset of `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexc_util::span::{Position, Span};
    ///
    /// let start = Position { offset: 4, line: 1, column: 5 };
    /// let end = Position { offset: 7, line: 1, column: 8 };
    /// assert_eq!(Span::between(start, end), Span::new(4, 7, 1, 5));
    /// ```
    #[inline]
    pub fn between(start: Position, end: Position) -> Self {
        Self {
            start: start.offset,
            end: end.offset,
            line: start.line,
            column: start.column,
        }
    }

    /// Span covering exactly the character `c` read at `pos`.
    #[inline]
    pub fn char_at(pos: Position, c: char) -> Self {
        Self {
            start: pos.offset,
            end: pos.offset + c.len_utf8(),
            line: pos.line,
            column: pos.column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
