//! `#` line comments.

use super::state::State;
use crate::cursor::CharSource;
use crate::Scanner;

impl<S: CharSource> Scanner<S> {
    /// Discards comment text up to and including the newline.
    pub(super) fn scan_comment(&mut self, c: char) {
        if c == '\n' {
            self.state = State::Start;
        }
    }
}
