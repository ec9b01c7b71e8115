//! Operators with an optional trailing `=`.
//!
//! Handles: `<` `<=`, `>` `>=`, `=` `==`, `!` `!=`

use crate::cursor::CharSource;
use crate::Scanner;

impl<S: CharSource> Scanner<S> {
    /// Handles the character after `<`, `>`, `=` or `!`.
    pub(super) fn scan_operator(&mut self, c: char) {
        let Some((with_eq, alone)) = self.state.operator_pair() else {
            return;
        };

        if c == '=' {
            self.emit_fixed(with_eq);
        } else {
            self.unread();
            self.emit_fixed(alone);
        }
    }

    /// Emits the one-character operator when input ends after it.
    pub(super) fn finish_operator(&mut self) {
        if let Some((_, alone)) = self.state.operator_pair() {
            self.emit_fixed(alone);
        }
    }
}
