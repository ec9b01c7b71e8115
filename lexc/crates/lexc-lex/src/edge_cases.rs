//! Edge case tests for lexc-lex
