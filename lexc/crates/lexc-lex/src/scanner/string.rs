//! String constants.

use lexc_util::{DiagnosticCode, Span};

use crate::cursor::CharSource;
use crate::token::TokenKind;
use crate::Scanner;

impl<S: CharSource> Scanner<S> {
    /// Handles a character inside a string literal.
    ///
    /// Every character up to the closing quote is taken literally,
    /// newlines included. The quotes are not part of the lexeme.
    pub(super) fn scan_string(&mut self, c: char) {
        if c == '"' {
            self.emit_pending(TokenKind::StringConstant);
        } else {
            self.lexeme.push(c);
        }
    }

    /// Reports a string literal still open at end of input.
    pub(super) fn finish_string(&mut self) {
        let span = Span::between(self.token_start, self.position());
        self.report(
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            span,
            "unterminated string literal".to_owned(),
            Some("add a closing '\"'"),
        );
    }
}
