use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An operator of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`, numeric addition or text concatenation.
    Plus,
    /// `-`, numeric subtraction.
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Operator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

/// One element of the work list an expression is reduced on.
///
/// Variable references are already resolved, so the list only ever holds
/// values and operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Value(Value),
    Op(Operator),
}

impl Item {
    /// Converts a token into a work list item, resolving nothing.
    ///
    /// Returns `None` for variable references, which need the store.
    #[must_use]
    pub fn from_token(token: Token) -> Option<Self> {
        let item = match token {
            Token::Number(n) => Self::Value(Value::Number(n)),
            Token::Text(s) => Self::Value(Value::Text(s)),
            Token::Plus => Self::Op(Operator::Plus),
            Token::Minus => Self::Op(Operator::Minus),
            Token::Star => Self::Op(Operator::Star),
            Token::Slash => Self::Op(Operator::Slash),
            Token::LParen => Self::Op(Operator::LParen),
            Token::RParen => Self::Op(Operator::RParen),
            Token::VarRef(_) | Token::UnterminatedText | Token::Ignored => return None,
        };
        Some(item)
    }

    #[must_use]
    pub fn is_op(&self, op: Operator) -> bool {
        matches!(self, Self::Op(o) if *o == op)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(Value::Text(s)) => write!(f, "\"{s}\""),
            Self::Value(v) => write!(f, "{v}"),
            Self::Op(op) => write!(f, "{}", op.symbol()),
        }
    }
}
