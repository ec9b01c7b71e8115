//! Printing scan results.
//!
//! Text output puts tokens and symbols on stdout, one per line, and
//! diagnostics on stderr. JSON output is a single document on stdout.

use std::io::Write;

use lexc_lex::{ScanOutput, Token};
use lexc_util::{Diagnostic, SourceFile};
use serde::Serialize;

use crate::config::Emit;
use crate::error::Result;

/// Writes the selected outputs as text.
///
/// Tokens print as `KIND lexeme [line:column]` and symbols as
/// `lexeme -> KIND [line:column]`. Diagnostics print as
/// `[line:column] message`, or with the offending source line quoted when
/// `show_snippets` is set.
pub fn write_text(
    out: &mut impl Write,
    err: &mut impl Write,
    file: &SourceFile,
    scan: &ScanOutput,
    emit: Emit,
    show_snippets: bool,
) -> Result<()> {
    if emit.tokens() {
        for token in &scan.tokens {
            writeln!(out, "{}", token)?;
        }
    }

    if emit.symbols() {
        for (name, token) in &scan.symbols {
            writeln!(out, "{} -> {} [{}]", name, token.kind(), token.span())?;
        }
    }

    if emit.diagnostics() && scan.has_errors() {
        for diagnostic in &scan.diagnostics {
            if show_snippets {
                writeln!(err, "{}", diagnostic.render(file))?;
            } else {
                writeln!(err, "{}", diagnostic)?;
            }
        }
        let count = scan.diagnostics.len();
        writeln!(
            err,
            "error: {} lexical error{} in {}",
            count,
            if count == 1 { "" } else { "s" },
            file.name()
        )?;
    }

    Ok(())
}

/// Writes the selected outputs as one pretty-printed JSON object.
///
/// Sections not selected by `emit` are left out of the object.
pub fn write_json(out: &mut impl Write, scan: &ScanOutput, emit: Emit) -> Result<()> {
    let report = JsonReport {
        tokens: emit
            .tokens()
            .then(|| scan.tokens.iter().map(JsonToken::from).collect()),
        symbols: emit.symbols().then(|| {
            scan.symbols
                .iter()
                .map(|(name, token)| JsonSymbol {
                    name,
                    kind: token.kind().name(),
                    line: token.span().line,
                    column: token.span().column,
                })
                .collect()
        }),
        diagnostics: emit
            .diagnostics()
            .then(|| scan.diagnostics.iter().map(JsonDiagnostic::from).collect()),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<JsonToken<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbols: Option<Vec<JsonSymbol<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<Vec<JsonDiagnostic<'a>>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

impl<'a> From<&'a Token> for JsonToken<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            line: span.line,
            column: span.column,
            start: span.start,
            end: span.end,
        }
    }
}

#[derive(Serialize)]
struct JsonSymbol<'a> {
    name: &'a str,
    kind: &'static str,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    help: &'a [String],
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            code: diagnostic.code.map(|code| code.as_str()),
            message: &diagnostic.message,
            line: diagnostic.span.line,
            column: diagnostic.span.column,
            help: &diagnostic.helps,
        }
    }
}
