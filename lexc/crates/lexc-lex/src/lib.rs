//! lexc-lex - Lexical Analyzer
//!
//! This crate turns source text into an ordered sequence of classified
//! tokens. Along the way it records the first occurrence of every
//! identifier in a symbol table and collects positioned diagnostics for
//! malformed input. It is the first phase of compilation; its outputs are
//! handed to the parser once the scan completes.
//!
//! # Example Usage
//!
//! ```
//! use lexc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("total = total + 1.5; # running sum\n");
//! scanner.run();
//!
//! assert_eq!(scanner.tokens().len(), 6);
//! assert_eq!(scanner.tokens()[4].kind(), TokenKind::DoubleConstant);
//! assert_eq!(scanner.symbol_table().len(), 1);
//! assert!(scanner.error_messages().is_empty());
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - the [`CharSource`] contract and the string [`Cursor`]
//! - [`classify`] - ASCII letter/digit predicates
//! - [`token`] - [`TokenKind`] and [`Token`]
//! - [`symbol_table`] - first-occurrence identifier table
//! - [`scanner`] - the automaton
//!
//! # Token Categories
//!
//! - **Delimiters**: `[` `]` `.` `(` `)` `,` `;` `:`
//! - **Arithmetic**: `/` `*` `-` `+`
//! - **Comparison**: `<` `<=` `>` `>=` `==` `!=`
//! - **Assignment / logic**: `=` `!`
//! - **Identifiers**: `[a-zA-Z][a-zA-Z0-9_]*`
//! - **Literals**: integers `42`, doubles `3.14`, strings `"text"`
//!
//! `#` starts a comment that runs to the end of the line. Spaces, tabs and
//! newlines separate tokens.
//!
//! # Diagnostics
//!
//! Bad input never stops a scan. Each problem becomes a diagnostic
//! rendered as `[line:column] message`:
//!
//! ```
//! let output = lexc_lex::scan("x = 3.;\ny = $");
//! assert_eq!(
//!     output.error_messages(),
//!     vec!["[1:7] unexpected ';'", "[2:5] unexpected '$'"]
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod symbol_table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{CharSource, Cursor};
pub use scanner::{scan, ScanOutput, Scanner, State};
pub use symbol_table::SymbolTable;
pub use token::{Token, TokenKind};
