use super::scanner::Token;
use crate::Value;

/// The keyword a literal-start token commits the parser to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteral {
    Null,
    True,
    False,
}

impl ExpectedLiteral {
    /// Which literal starts with `token`, if any.
    pub(crate) fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Null => Some(Self::Null),
            Token::True => Some(Self::True),
            Token::False => Some(Self::False),
            _ => None,
        }
    }

    pub(crate) fn text(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
        }
    }

    pub(crate) fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Bool(true),
            Self::False => Value::Bool(false),
        }
    }
}
