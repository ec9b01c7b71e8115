//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, its driving loop, and the
//! helpers every state handler shares: consuming a character, pushing one
//! back, emitting tokens and reporting diagnostics.

use lexc_util::{Diagnostic, DiagnosticCode, Handler, Position, Span};
use tracing::{debug, debug_span, trace};

use super::state::State;
use crate::cursor::{CharSource, Cursor};
use crate::symbol_table::SymbolTable;
use crate::token::{Token, TokenKind};

/// Scanner for lexc source text.
///
/// The scanner drives a finite automaton over a [`CharSource`], one
/// character at a time, with one character of lookahead. It owns every
/// output of the scan: the token sequence, the symbol table and the
/// diagnostics.
///
/// # Example
///
/// ```
/// use lexc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x <= 10");
/// scanner.run();
///
/// let kinds: Vec<_> = scanner.tokens().iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::LessOrEqual, TokenKind::IntegerConstant]
/// );
/// assert!(scanner.symbol_table().contains("x"));
/// assert!(!scanner.has_errors());
/// ```
pub struct Scanner<S> {
    /// Character source being scanned.
    source: S,

    /// Active automaton state.
    pub(super) state: State,

    /// Pending lexeme.
    pub(super) lexeme: String,

    /// Position of the next character to be read.
    position: Position,

    /// Position of the most recently read character.
    previous: Position,

    /// Position of the first character of the token being built.
    pub(super) token_start: Position,

    /// Emitted tokens, in source order.
    tokens: Vec<Token>,

    /// First token of every distinct identifier.
    pub(super) symbols: SymbolTable,

    /// Collected diagnostics.
    handler: Handler,
}

impl<'a> Scanner<Cursor<'a>> {
    /// Creates a scanner over in-memory source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_source(Cursor::new(source))
    }
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner over any character source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            state: State::Start,
            lexeme: String::new(),
            position: Position::START,
            previous: Position::START,
            token_start: Position::START,
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            handler: Handler::new(),
        }
    }

    /// Scans the whole source.
    ///
    /// Consumes characters until the source is exhausted, then flushes
    /// whatever token is still pending. Bad input never stops the scan; it
    /// is recorded as a diagnostic.
    pub fn run(&mut self) {
        let _span = debug_span!("scan").entered();
        debug!("scan started");

        while self.source.has_next_char() {
            let Some(c) = self.source.read_next_char() else {
                break;
            };
            let at = self.consume(c);
            self.step(c, at);
        }
        self.finish();

        debug!(
            tokens = self.tokens.len(),
            symbols = self.symbols.len(),
            diagnostics = self.handler.error_count(),
            "scan finished"
        );
    }

    /// Feeds one character, read at `at`, to the active state.
    fn step(&mut self, c: char, at: Position) {
        match self.state {
            State::Start => self.scan_start(c, at),
            State::InIdentifier => self.scan_identifier(c),
            State::LtSeen | State::GtSeen | State::EqSeen | State::BangSeen => {
                self.scan_operator(c)
            }
            State::InInteger => self.scan_integer(c),
            State::FractionStart => self.scan_fraction_start(c, at),
            State::InFraction => self.scan_fraction(c),
            State::InString => self.scan_string(c),
            State::InComment => self.scan_comment(c),
        }
    }

    /// Flushes the automaton at end of input, as if a character matching
    /// no transition had been read.
    fn finish(&mut self) {
        match self.state {
            State::Start | State::InComment => {}
            State::InIdentifier => self.finish_identifier(),
            State::LtSeen | State::GtSeen | State::EqSeen | State::BangSeen => {
                self.finish_operator()
            }
            State::InInteger => self.finish_number(TokenKind::IntegerConstant),
            State::FractionStart => self.finish_fraction_start(),
            State::InFraction => self.finish_number(TokenKind::DoubleConstant),
            State::InString => self.finish_string(),
        }
        self.lexeme.clear();
        self.state = State::Start;
    }

    /// Updates line and column for a character just read from the source
    /// and returns the position it was read at.
    fn consume(&mut self, c: char) -> Position {
        let at = self.position;
        self.previous = at;
        self.position.advance(c);
        at
    }

    /// Gives the last character back to the source so the next token
    /// starts with it.
    pub(super) fn unread(&mut self) {
        self.source.set_cursor_to_previous_position();
        self.position = self.previous;
        trace!(line = self.position.line, column = self.position.column, "pushback");
    }

    /// Position of the next character to be read.
    #[inline]
    pub(super) fn position(&self) -> Position {
        self.position
    }

    /// Returns to `Start`, clearing the pending lexeme.
    #[inline]
    pub(super) fn reset(&mut self) {
        self.lexeme.clear();
        self.state = State::Start;
    }

    /// Emits a token spanning from the token start to the current
    /// position and returns to `Start`.
    pub(super) fn emit(&mut self, kind: TokenKind, lexeme: String) -> &Token {
        let span = Span::between(self.token_start, self.position);
        trace!(kind = kind.name(), lexeme = %lexeme, %span, "token");
        self.tokens.push(Token::new(kind, lexeme, span));
        self.reset();
        &self.tokens[self.tokens.len() - 1]
    }

    /// Emits a punctuation or operator token with its fixed spelling.
    pub(super) fn emit_fixed(&mut self, kind: TokenKind) {
        let lexeme = kind.fixed_lexeme().unwrap_or_default().to_owned();
        self.emit(kind, lexeme);
    }

    /// Emits a token whose lexeme is the pending buffer.
    pub(super) fn emit_pending(&mut self, kind: TokenKind) -> &Token {
        let lexeme = std::mem::take(&mut self.lexeme);
        self.emit(kind, lexeme)
    }

    /// Records a diagnostic with `code` at `span`.
    ///
    /// `help` is attached when given. The scan always continues.
    pub(super) fn report(
        &mut self,
        code: DiagnosticCode,
        span: Span,
        message: String,
        help: Option<&str>,
    ) {
        let mut builder = self.handler.build_error(span, message).code(code);
        if let Some(help) = help {
            builder = builder.help(help);
        }
        let diagnostic = builder.build();
        debug!(code = %code, "{}", diagnostic);
        self.handler.emit_diagnostic(diagnostic);
    }
}

/// Describes a character inside a diagnostic message, escaping the
/// invisible ones.
pub(super) fn describe(c: char) -> String {
    match c {
        '\n' => "\\n".to_owned(),
        '\t' => "\\t".to_owned(),
        '\r' => "\\r".to_owned(),
        c => c.to_string(),
    }
}

impl<S> Scanner<S> {
    /// Tokens emitted so far, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The symbol table built so far.
    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.handler.diagnostics()
    }

    /// Diagnostics rendered as `[line:column] message`.
    pub fn error_messages(&self) -> Vec<String> {
        self.handler.messages()
    }

    /// Returns true if any diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// The active automaton state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Line of the next character to be read (1-based).
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Column of the next character to be read (1-based).
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Consumes the scanner, handing its outputs to the next phase.
    pub fn into_output(self) -> ScanOutput {
        ScanOutput {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics: self.handler.into_diagnostics(),
        }
    }
}

/// Everything a completed scan produces.
#[derive(Clone, Debug, Default)]
pub struct ScanOutput {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// First token of every distinct identifier.
    pub symbols: SymbolTable,
    /// Diagnostics in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// Returns true if any diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics rendered as `[line:column] message`.
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Scans `source` to completion.
///
/// # Example
///
/// ```
/// let output = lexc_lex::scan("a = \"hi\" # greet\n");
/// assert_eq!(output.tokens.len(), 3);
/// assert_eq!(output.tokens[2].lexeme(), "hi");
/// assert_eq!(output.symbols.len(), 1);
/// ```
pub fn scan(source: &str) -> ScanOutput {
    let mut scanner = Scanner::new(source);
    scanner.run();
    scanner.into_output()
}
