//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was built from and
//! the span where that lexeme starts in the source.

use std::fmt;

use lexc_util::Span;

/// The closed set of token kinds the scanner emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Delimiters
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `.`
    Dot,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    // Arithmetic
    /// `/`
    Divide,
    /// `*`
    Multiply,
    /// `-`
    Subtract,
    /// `+`
    Add,

    // Comparison and assignment
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `!`
    LogicalNot,

    // Lexeme-carrying kinds
    /// Identifier: a letter followed by letters, digits or `_`
    Identifier,
    /// Integer literal, kept as source text
    IntegerConstant,
    /// Floating-point literal, kept as source text
    DoubleConstant,
    /// String literal contents, without the surrounding quotes
    StringConstant,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 24] = [
        TokenKind::BracketOpen,
        TokenKind::BracketClose,
        TokenKind::Dot,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Divide,
        TokenKind::Multiply,
        TokenKind::Subtract,
        TokenKind::Add,
        TokenKind::LessThan,
        TokenKind::LessOrEqual,
        TokenKind::GreaterThan,
        TokenKind::GreaterOrEqual,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::LogicalNot,
        TokenKind::Identifier,
        TokenKind::IntegerConstant,
        TokenKind::DoubleConstant,
        TokenKind::StringConstant,
    ];

    /// Returns the kind for a character that always forms a token on its
    /// own, or `None` if `c` is not one of `[ ] . ( ) , ; : / * - +`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_single_char(';'), Some(TokenKind::Semicolon));
    /// assert_eq!(TokenKind::from_single_char('<'), None);
    /// ```
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '[' => TokenKind::BracketOpen,
            ']' => TokenKind::BracketClose,
            '.' => TokenKind::Dot,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '/' => TokenKind::Divide,
            '*' => TokenKind::Multiply,
            '-' => TokenKind::Subtract,
            '+' => TokenKind::Add,
            _ => return None,
        };
        Some(kind)
    }

    /// The stable upper-case name used when printing tokens.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::BracketOpen => "OPEN_BRACKET",
            TokenKind::BracketClose => "CLOSE_BRACKET",
            TokenKind::Dot => "DOT",
            TokenKind::ParenOpen => "OPEN_PAREN",
            TokenKind::ParenClose => "CLOSE_PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Divide => "OP_DIV",
            TokenKind::Multiply => "OP_MULT",
            TokenKind::Subtract => "OP_SUB",
            TokenKind::Add => "OP_SUM",
            TokenKind::LessThan => "OP_LT",
            TokenKind::LessOrEqual => "OP_LE",
            TokenKind::GreaterThan => "OP_GT",
            TokenKind::GreaterOrEqual => "OP_GE",
            TokenKind::Assign => "OP_ASG",
            TokenKind::Equal => "OP_EQ",
            TokenKind::NotEqual => "OP_NE",
            TokenKind::LogicalNot => "OP_NGT",
            TokenKind::Identifier => "ID",
            TokenKind::IntegerConstant => "CONST_INT",
            TokenKind::DoubleConstant => "CONST_DBL",
            TokenKind::StringConstant => "CONST_STR",
        }
    }

    /// The fixed spelling of punctuation and operator kinds.
    ///
    /// Returns `None` for the lexeme-carrying kinds.
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::BracketOpen => "[",
            TokenKind::BracketClose => "]",
            TokenKind::Dot => ".",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Divide => "/",
            TokenKind::Multiply => "*",
            TokenKind::Subtract => "-",
            TokenKind::Add => "+",
            TokenKind::LessThan => "<",
            TokenKind::LessOrEqual => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::LogicalNot => "!",
            TokenKind::Identifier
            | TokenKind::IntegerConstant
            | TokenKind::DoubleConstant
            | TokenKind::StringConstant => return None,
        };
        Some(text)
    }

    /// Returns true for integer, double and string constants.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerConstant | TokenKind::DoubleConstant | TokenKind::StringConstant
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit.
///
/// Tokens are immutable once built. Two tokens are equal only if their
/// kind, lexeme and span all match, so two occurrences of the same
/// identifier are distinct tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. String constants exclude their quotes.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Where the token starts, and the byte range it covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.kind, self.lexeme, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_kinds() {
        for c in "[].(),;:/*-+".chars() {
            let kind = TokenKind::from_single_char(c).unwrap();
            assert_eq!(kind.fixed_lexeme(), Some(c.to_string().as_str()));
        }
        for c in "<>=!\"#a1_ $".chars() {
            assert_eq!(TokenKind::from_single_char(c), None);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn test_fixed_lexeme_only_for_operators() {
        for kind in TokenKind::ALL {
            let carries_lexeme = kind == TokenKind::Identifier || kind.is_literal();
            assert_eq!(kind.fixed_lexeme().is_none(), carries_lexeme, "{kind:?}");
        }
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Identifier, "foo", Span::new(0, 3, 1, 1));
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), "foo");
        assert_eq!(token.span().column, 1);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::LessOrEqual, "<=", Span::new(4, 6, 2, 3));
        assert_eq!(token.to_string(), "OP_LE <= [2:3]");
    }

    #[test]
    fn test_same_lexeme_different_span_not_equal() {
        let first = Token::new(TokenKind::Identifier, "x", Span::new(0, 1, 1, 1));
        let second = Token::new(TokenKind::Identifier, "x", Span::new(2, 3, 1, 3));
        assert_ne!(first, second);
    }
}
