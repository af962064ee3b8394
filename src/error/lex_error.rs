#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A text literal was opened with `"` but never closed.
    UnterminatedText {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Returns the 1-based source line the error belongs to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedText { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, .. } => {
                write!(f, "'{character}' 은(는) 사용할 수 없는 문자예요")
            },
            Self::UnterminatedText { .. } => write!(f, "문자열이 끝나지 않았어요 (\")"),
        }
    }
}

impl std::error::Error for LexError {}
