//! Integer and double constants.
//!
//! Literals are kept as their source text; turning them into values is
//! left to a later phase.

use lexc_util::{DiagnosticCode, Position, Span};

use super::core::describe;
use super::start::is_accepted_in_start;
use super::state::State;
use crate::classify::is_number;
use crate::cursor::CharSource;
use crate::token::TokenKind;
use crate::Scanner;

const FRACTION_HELP: &str = "a digit is required after the decimal point";

impl<S: CharSource> Scanner<S> {
    /// Handles a character while reading integer digits.
    pub(super) fn scan_integer(&mut self, c: char) {
        if is_number(c) {
            self.lexeme.push(c);
        } else if c == '.' {
            self.lexeme.push(c);
            self.state = State::FractionStart;
        } else {
            self.unread();
            self.finish_number(TokenKind::IntegerConstant);
        }
    }

    /// Handles the character right after a decimal point.
    ///
    /// A non-digit abandons the literal: the partial lexeme is dropped and
    /// the scanner returns to `Start`. The character is pushed back only if
    /// `Start` can use it; otherwise it is consumed here, so it is reported
    /// once.
    pub(super) fn scan_fraction_start(&mut self, c: char, at: Position) {
        if is_number(c) {
            self.lexeme.push(c);
            self.state = State::InFraction;
            return;
        }

        self.report(
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            Span::char_at(at, c),
            format!("unexpected '{}'", describe(c)),
            Some(FRACTION_HELP),
        );
        self.reset();
        if is_accepted_in_start(c) {
            self.unread();
        }
    }

    /// Handles a character while reading fraction digits.
    pub(super) fn scan_fraction(&mut self, c: char) {
        if is_number(c) {
            self.lexeme.push(c);
        } else {
            self.unread();
            self.finish_number(TokenKind::DoubleConstant);
        }
    }

    /// Emits the pending numeric lexeme as `kind`.
    pub(super) fn finish_number(&mut self, kind: TokenKind) {
        self.emit_pending(kind);
    }

    /// Reports input ending right after a decimal point.
    pub(super) fn finish_fraction_start(&mut self) {
        let at = self.position();
        self.report(
            DiagnosticCode::E_LEXER_INVALID_NUMBER,
            Span::new(at.offset, at.offset, at.line, at.column),
            "unexpected end of input".to_owned(),
            Some(FRACTION_HELP),
        );
    }
}
