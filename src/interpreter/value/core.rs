use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{format_number, parse_numeric_input},
};

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and are the only thing the
/// variable store holds. A variable may hold a number now and a text later;
/// there are no type declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Division follows
    /// IEEE 754, so infinities and NaN are ordinary numbers here.
    Number(f64),
    /// A text value.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Builds a value from one line of external input.
    ///
    /// Text that is fully numeric (after trimming surrounding whitespace)
    /// becomes a `Number`; everything else, including empty input, is kept
    /// verbatim as `Text`.
    ///
    /// # Example
    /// ```
    /// use ks::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_input(" 42 "), Value::Number(42.0));
    /// assert_eq!(Value::from_input("-1.5"), Value::Number(-1.5));
    /// assert_eq!(Value::from_input("철수"), Value::Text("철수".to_string()));
    /// assert_eq!(Value::from_input(""), Value::Text(String::new()));
    /// ```
    #[must_use]
    pub fn from_input(text: &str) -> Self {
        parse_numeric_input(text).map_or_else(|| Self::Text(text.to_string()), Self::Number)
    }

    /// Returns the numeric content, or a `TypeMismatch` naming the operator
    /// that needed a number.
    ///
    /// # Parameters
    /// - `operator`: The operator symbol, used in the error message.
    /// - `line`: Source code line number for error reporting.
    pub fn as_number(&self, operator: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(_) => Err(RuntimeError::TypeMismatch {
                details: format!("연산자 '{operator}' 앞뒤에는 숫자가 있어야 해요"),
                line,
            }),
        }
    }

    /// Returns a short, localized name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "숫자",
            Self::Text(_) => "문자열",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
