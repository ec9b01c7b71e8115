//! Automaton states.

use crate::token::TokenKind;

/// The scanner's current mode of interpreting input.
///
/// Exactly one state is active at a time. The pending lexeme buffer is
/// empty whenever the state is [`State::Start`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens.
    #[default]
    Start,
    /// Reading an identifier.
    InIdentifier,
    /// Read `<`; `=` would make `<=`.
    LtSeen,
    /// Read `>`; `=` would make `>=`.
    GtSeen,
    /// Read `=`; `=` would make `==`.
    EqSeen,
    /// Read `!`; `=` would make `!=`.
    BangSeen,
    /// Reading the digits of an integer.
    InInteger,
    /// Read digits and a decimal point; a digit must follow.
    FractionStart,
    /// Reading the digits after a decimal point.
    InFraction,
    /// Inside a string literal, after the opening quote.
    InString,
    /// Inside a `#` comment.
    InComment,
}

impl State {
    /// Returns true for the initial state.
    #[inline]
    pub fn is_initial(self) -> bool {
        self == State::Start
    }

    /// For the four `?=` operator states, the kinds emitted when the next
    /// character is `=` and when it is anything else.
    pub(super) fn operator_pair(self) -> Option<(TokenKind, TokenKind)> {
        match self {
            State::LtSeen => Some((TokenKind::LessOrEqual, TokenKind::LessThan)),
            State::GtSeen => Some((TokenKind::GreaterOrEqual, TokenKind::GreaterThan)),
            State::EqSeen => Some((TokenKind::Equal, TokenKind::Assign)),
            State::BangSeen => Some((TokenKind::NotEqual, TokenKind::LogicalNot)),
            _ => None,
        }
    }

    /// The operator state entered from `Start` on `c`, if any.
    pub(super) fn for_operator_start(c: char) -> Option<State> {
        match c {
            '<' => Some(State::LtSeen),
            '>' => Some(State::GtSeen),
            '=' => Some(State::EqSeen),
            '!' => Some(State::BangSeen),
            _ => None,
        }
    }
}
