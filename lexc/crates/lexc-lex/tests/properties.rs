//! Property-based tests for the scanner, using proptest for arbitrary inputs.

use lexc_lex::{scan, TokenKind};
use lexc_util::DiagnosticCode;
use proptest::prelude::*;

/// One token's worth of source text.
fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_]{0,12}",
        "[0-9]{1,9}",
        "[0-9]{1,5}\\.[0-9]{1,5}",
        "\"[a-zA-Z0-9 #.;<>=!]{0,12}\"",
        prop::sample::select(vec![
            "[", "]", ".", "(", ")", ",", ";", ":", "/", "*", "-", "+", "<", "<=", ">", ">=",
            "=", "==", "!=", "!",
        ])
        .prop_map(str::to_owned),
    ]
}

#[test]
fn test_property_identifiers() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9_]{0,100}")| {
        let output = scan(&input);
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(output.tokens[0].lexeme(), input.as_str());
        assert_eq!(output.symbols.len(), 1);
        assert!(output.diagnostics.is_empty());
    });
}

#[test]
fn test_property_integers() {
    proptest!(|(input in "[0-9]{1,40}")| {
        let output = scan(&input);
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].kind(), TokenKind::IntegerConstant);
        assert_eq!(output.tokens[0].lexeme(), input.as_str());
    });
}

#[test]
fn test_property_doubles() {
    proptest!(|(input in "[0-9]{1,20}\\.[0-9]{1,20}")| {
        let output = scan(&input);
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].kind(), TokenKind::DoubleConstant);
        assert_eq!(output.tokens[0].lexeme(), input.as_str());
    });
}

#[test]
fn test_property_string_literals() {
    proptest!(|(body in "[^\"]{0,100}")| {
        let source = format!("\"{}\"", body);
        let output = scan(&source);
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.tokens[0].kind(), TokenKind::StringConstant);
        assert_eq!(output.tokens[0].lexeme(), body.as_str());
        assert_eq!(output.tokens[0].span().len(), source.len());
    });
}

#[test]
fn test_property_unterminated_strings() {
    proptest!(|(body in "[^\"]{0,100}")| {
        let output = scan(&format!("\"{}", body));
        assert!(output.tokens.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(output.error_messages(), vec!["[1:1] unterminated string literal"]);
    });
}

#[test]
fn test_property_whitespace_only() {
    proptest!(|(input in "[ \t\n]{0,100}")| {
        let output = scan(&input);
        assert!(output.tokens.is_empty());
        assert!(output.symbols.is_empty());
        assert!(output.diagnostics.is_empty());
    });
}

#[test]
fn test_property_carriage_returns_each_reported() {
    proptest!(|(count in 1usize..20)| {
        let output = scan(&"\r".repeat(count));
        assert!(output.tokens.is_empty());
        assert_eq!(output.diagnostics.len(), count);
        assert!(output
            .error_messages()
            .iter()
            .all(|m| m.ends_with("unexpected '\\r'")));
    });
}

#[test]
fn test_property_space_joined_atoms() {
    proptest!(|(atoms in prop::collection::vec(atom(), 0..40))| {
        let source = atoms.join(" ");
        let output = scan(&source);

        assert!(output.diagnostics.is_empty(), "{:?}", output.error_messages());
        assert_eq!(output.tokens.len(), atoms.len());
        for (token, atom) in output.tokens.iter().zip(&atoms) {
            let span = token.span();
            assert_eq!(&source[span.start..span.end], atom.as_str());
        }
    });
}

#[test]
fn test_property_symbols_are_distinct_identifiers() {
    proptest!(|(atoms in prop::collection::vec(atom(), 0..40))| {
        let output = scan(&atoms.join("\n"));

        let mut distinct: Vec<&str> = Vec::new();
        for token in &output.tokens {
            if token.kind() == TokenKind::Identifier && !distinct.contains(&token.lexeme()) {
                distinct.push(token.lexeme());
            }
        }
        let names: Vec<&str> = output.symbols.iter().map(|(name, _)| name).collect();
        assert_eq!(names, distinct);

        for (name, first) in output.symbols.iter() {
            let earliest = output
                .tokens
                .iter()
                .find(|t| t.lexeme() == name && t.kind() == TokenKind::Identifier);
            assert_eq!(earliest, Some(first));
        }
    });
}

#[test]
fn test_property_arbitrary_input_never_panics() {
    proptest!(|(input in any::<String>())| {
        let output = scan(&input);

        // Spans are in source order, never overlap, and stay on char
        // boundaries.
        let mut end = 0;
        for token in &output.tokens {
            let span = token.span();
            assert!(span.start >= end);
            assert!(span.start < span.end);
            assert!(input.get(span.start..span.end).is_some());
            end = span.end;
        }
        for diagnostic in &output.diagnostics {
            assert!(diagnostic.span.line >= 1);
            assert!(diagnostic.span.column >= 1);
        }
    });
}
