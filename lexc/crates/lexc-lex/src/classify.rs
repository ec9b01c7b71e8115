//! Character classification.
//!
//! The automaton's transitions are defined in terms of these predicates
//! plus literal character equality. Classification is ASCII only: any
//! other character is neither a letter nor a digit.

/// Returns true for ASCII letters (`a-z`, `A-Z`).
///
/// # Example
///
/// ```
/// use lexc_lex::classify::is_letter;
///
/// assert!(is_letter('q'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('é'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true for ASCII digits (`0-9`).
#[inline]
pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for characters that may continue an identifier.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || is_number(c) || c == '_'
}

/// Returns true for characters skipped between tokens: space, tab and
/// newline. Anything else in `Start`, carriage return included, is
/// unexpected.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}
