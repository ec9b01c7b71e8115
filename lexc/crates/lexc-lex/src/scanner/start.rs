//! Dispatch from the initial state.

use lexc_util::{DiagnosticCode, Position, Span};

use super::core::describe;
use super::state::State;
use crate::classify::{is_letter, is_number, is_whitespace};
use crate::cursor::CharSource;
use crate::token::TokenKind;
use crate::Scanner;

/// Returns true if `c` is skipped or begins a token in `Start`.
pub(super) fn is_accepted_in_start(c: char) -> bool {
    is_whitespace(c)
        || is_number(c)
        || is_letter(c)
        || matches!(c, '"' | '#')
        || TokenKind::from_single_char(c).is_some()
        || State::for_operator_start(c).is_some()
}

impl<S: CharSource> Scanner<S> {
    /// Handles a character read between tokens.
    ///
    /// Whitespace is skipped, single-character tokens are emitted at once,
    /// and everything else either opens a multi-character token or is
    /// reported as unexpected.
    pub(super) fn scan_start(&mut self, c: char, at: Position) {
        if is_whitespace(c) {
            return;
        }
        self.token_start = at;

        if let Some(kind) = TokenKind::from_single_char(c) {
            self.emit_fixed(kind);
            return;
        }

        if let Some(state) = State::for_operator_start(c) {
            self.state = state;
            return;
        }

        match c {
            '"' => self.state = State::InString,
            '#' => self.state = State::InComment,
            c if is_number(c) => {
                self.lexeme.push(c);
                self.state = State::InInteger;
            }
            c if is_letter(c) => {
                self.lexeme.push(c);
                self.state = State::InIdentifier;
            }
            c => self.report(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                Span::char_at(at, c),
                format!("unexpected '{}'", describe(c)),
                None,
            ),
        }
    }
}
