//! Identifier scanning.

use tracing::trace;

use crate::classify::is_identifier_continue;
use crate::cursor::CharSource;
use crate::token::TokenKind;
use crate::Scanner;

impl<S: CharSource> Scanner<S> {
    /// Handles a character while reading an identifier.
    pub(super) fn scan_identifier(&mut self, c: char) {
        if is_identifier_continue(c) {
            self.lexeme.push(c);
        } else {
            self.unread();
            self.finish_identifier();
        }
    }

    /// Emits the pending identifier and records it in the symbol table if
    /// this is its first occurrence.
    pub(super) fn finish_identifier(&mut self) {
        let token = self.emit_pending(TokenKind::Identifier).clone();
        if self.symbols.insert_if_absent(&token) {
            trace!(lexeme = token.lexeme(), "new symbol");
        }
    }
}
