use std::cmp::Ordering;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, expression::evaluate_expression},
        lexer::tokenize,
        store::Store,
        value::core::Value,
    },
    util::text::{find_outside_text, is_fully_parenthesized, split_top_level},
};

/// The OR keyword, with the spaces that must surround it.
pub const OR_KEYWORD: &str = " 또는 ";
/// The AND keyword, with the spaces that must surround it.
pub const AND_KEYWORD: &str = " 그리고 ";

/// A comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
    Greater,
    Less,
}

impl Comparator {
    /// All comparators in search order. Two-character operators come first
    /// so that `>=` is never read as `>` followed by a stray `=`.
    pub const PRIORITY: [Self; 6] = [Self::GreaterEqual,
                                     Self::LessEqual,
                                     Self::Equal,
                                     Self::NotEqual,
                                     Self::Greater,
                                     Self::Less];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }

    /// Applies the comparator to two evaluated operands.
    ///
    /// Numbers compare numerically (any comparison with NaN is false except
    /// `!=`), texts compare lexically. A number and a text are never equal
    /// and cannot be ordered.
    ///
    /// # Example
    /// ```
    /// use ks::interpreter::{evaluator::condition::Comparator, value::core::Value};
    ///
    /// let five = Value::Number(5.0);
    ///
    /// assert!(Comparator::GreaterEqual.apply(&five, &five, 1).unwrap());
    /// assert!(Comparator::Less.apply(&Value::from("가"), &Value::from("나"), 1).unwrap());
    /// assert!(Comparator::NotEqual.apply(&five, &Value::from("5"), 1).unwrap());
    /// assert!(Comparator::Greater.apply(&five, &Value::from("5"), 1).is_err());
    /// ```
    pub fn apply(self, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => {
                return match self {
                    Self::Equal => Ok(false),
                    Self::NotEqual => Ok(true),
                    _ => Err(RuntimeError::TypeMismatch {
                        details: format!("{}와(과) {}은(는) 크기를 비교할 수 없어요",
                                         left.type_name(),
                                         right.type_name()),
                        line,
                    }),
                };
            },
        };

        Ok(match self {
            Self::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Self::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Self::Equal => ordering == Some(Ordering::Equal),
            Self::NotEqual => ordering != Some(Ordering::Equal),
            Self::Greater => ordering == Some(Ordering::Greater),
            Self::Less => ordering == Some(Ordering::Less),
        })
    }
}

/// Evaluates the condition of a `만약` statement.
///
/// Checks run in a fixed order:
/// 1. a parenthesis pair spanning the whole condition is stripped;
/// 2. `또는` parts, true at the first true part;
/// 3. `그리고` parts, false at the first false part;
/// 4. a single comparison.
///
/// Parts after the deciding one are never evaluated, so errors they would
/// raise never surface.
///
/// # Errors
/// `MissingComparator` if a leaf condition contains no comparison operator,
/// plus any error from evaluating the compared expressions.
///
/// # Example
/// ```
/// use ks::interpreter::{evaluator::condition::evaluate_condition, store::Store};
///
/// let store = Store::new();
///
/// assert!(evaluate_condition("5 >= 5", &store, 1).unwrap());
/// // The right side names an undefined variable but is never evaluated.
/// assert!(!evaluate_condition("1 > 2 그리고 없음 > 0", &store, 1).unwrap());
/// assert!(evaluate_condition("(1 > 2 또는 2 > 1)", &store, 1).unwrap());
/// assert!(evaluate_condition("1 + 1", &store, 1).is_err());
/// ```
pub fn evaluate_condition(expr: &str, store: &Store, line: usize) -> EvalResult<bool> {
    let expr = expr.trim();

    if is_fully_parenthesized(expr) {
        return evaluate_condition(&expr[1..expr.len() - 1], store, line);
    }

    let parts = split_top_level(expr, OR_KEYWORD);
    if parts.len() > 1 {
        for part in parts {
            if evaluate_condition(part, store, line)? {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    let parts = split_top_level(expr, AND_KEYWORD);
    if parts.len() > 1 {
        for part in parts {
            if !evaluate_condition(part, store, line)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }

    for comparator in Comparator::PRIORITY {
        let symbol = comparator.symbol();
        if let Some(index) = find_outside_text(expr, symbol) {
            let left = evaluate_expression(&expr[..index], store, line)?;
            let right = evaluate_expression(&expr[index + symbol.len()..], store, line)?;
            let result = comparator.apply(&left, &right, line)?;
            trace!(line, condition = expr, result, "comparison");
            return Ok(result);
        }
    }

    // An unclosed text literal hides any comparator after it.
    tokenize(expr, line)?;
    Err(RuntimeError::MissingComparator { line })
}
