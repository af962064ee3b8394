use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can stop a running program.
///
/// Every variant carries the 1-based line of the statement that failed, even
/// when the failure happened inside a nested block or deep inside a
/// parenthesized sub-expression.
pub enum RuntimeError {
    /// The expression could not be tokenized.
    Lex(LexError),
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    UnbalancedParens {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator received an operand of the wrong type.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Operators and operands do not alternate, or the expression is empty.
    MalformedExpression {
        /// Details describing what is missing.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The count of a `반복` statement is not a non-negative integer.
    InvalidCount {
        /// The text found where the count should be.
        count: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A condition contains none of the comparison operators.
    MissingComparator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The line matches no statement form.
    UnrecognizedStatement {
        /// The offending statement, comment stripped.
        statement: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl RuntimeError {
    /// Returns the 1-based source line the error belongs to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::UndefinedVariable { line, .. }
            | Self::UnbalancedParens { line }
            | Self::TypeMismatch { line, .. }
            | Self::MalformedExpression { line, .. }
            | Self::InvalidCount { line, .. }
            | Self::MissingComparator { line }
            | Self::UnrecognizedStatement { line, .. } => *line,
        }
    }
}

impl From<LexError> for RuntimeError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::UndefinedVariable { name, .. } => {
                write!(f, "'{name}' 이라는 변수는 아직 없어요")
            },
            Self::UnbalancedParens { .. } => write!(f, "괄호 '(' 와 ')' 의 짝이 맞지 않아요"),
            Self::TypeMismatch { details, .. } => write!(f, "{details}"),
            Self::MalformedExpression { details, .. } => write!(f, "식이 올바르지 않아요: {details}"),
            Self::InvalidCount { count, .. } => {
                write!(f, "반복 횟수는 숫자여야 해요 ('{count}')")
            },
            Self::MissingComparator { .. } => write!(f, "조건식에는 비교 연산자가 필요해요"),
            Self::UnrecognizedStatement { .. } => write!(f, "이 문장은 이해할 수 없어요"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
