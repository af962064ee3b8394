use tracing::trace;

use crate::{
    error::{LexError, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Item, Operator},
        lexer::{Token, tokenize},
        store::Store,
        value::core::Value,
    },
};

/// Tokenizes and evaluates one expression.
///
/// This is the entry point used by every statement that carries an
/// expression: print, assignment and both sides of a comparison.
///
/// # Example
/// ```
/// use ks::interpreter::{
///     evaluator::expression::evaluate_expression, store::Store, value::core::Value,
/// };
///
/// let store = Store::new();
///
/// assert_eq!(evaluate_expression("2 + 3 * 4", &store, 1).unwrap(), Value::Number(14.0));
/// assert_eq!(evaluate_expression("(2 + 3) * 4", &store, 1).unwrap(), Value::Number(20.0));
/// assert_eq!(evaluate_expression("\"n=\" + 3", &store, 1).unwrap(), Value::from("n=3"));
/// ```
pub fn evaluate_expression(expr: &str, store: &Store, line: usize) -> EvalResult<Value> {
    let tokens = tokenize(expr, line)?;
    evaluate(tokens, store, line)
}

/// Evaluates a token sequence to a single value.
///
/// The passes run in a fixed order: variable resolution, parenthesis
/// collapse, `*`/`/` left to right, then `+`/`-` left to right. Running them
/// as separate passes is what gives `*` and `/` their higher precedence and
/// makes every operator left associative.
///
/// # Errors
/// - `UndefinedVariable` for a name the store does not hold.
/// - `UnbalancedParens` for a `(` or `)` without its partner.
/// - `TypeMismatch` for a text operand to `*`, `/` or `-`.
/// - `MalformedExpression` when operands and operators do not alternate.
pub fn evaluate(tokens: Vec<Token>, store: &Store, line: usize) -> EvalResult<Value> {
    let items = resolve(tokens, store, line)?;
    reduce(items, line)
}

/// Replaces every variable reference with its current value.
fn resolve(tokens: Vec<Token>, store: &Store, line: usize) -> EvalResult<Vec<Item>> {
    let mut items = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::VarRef(name) => items.push(Item::Value(store.lookup(&name, line)?.clone())),
            Token::UnterminatedText => return Err(LexError::UnterminatedText { line }.into()),
            other => items.extend(Item::from_token(other)),
        }
    }

    Ok(items)
}

/// Reduces a resolved work list to one value.
fn reduce(mut items: Vec<Item>, line: usize) -> EvalResult<Value> {
    collapse_parens(&mut items, line)?;
    apply_multiplicative(&mut items, line)?;
    apply_additive(items, line)
}

/// Repeatedly evaluates the innermost group closed by the first `)` and
/// splices its value in place of the whole group.
fn collapse_parens(items: &mut Vec<Item>, line: usize) -> EvalResult<()> {
    while items.iter().any(|item| item.is_op(Operator::LParen)) {
        let close = items.iter()
                         .position(|item| item.is_op(Operator::RParen))
                         .ok_or(RuntimeError::UnbalancedParens { line })?;
        let open = items[..close].iter()
                                 .rposition(|item| item.is_op(Operator::LParen))
                                 .ok_or(RuntimeError::UnbalancedParens { line })?;

        let inner: Vec<Item> = items.drain(open..=close).skip(1).take(close - open - 1).collect();
        let value = reduce(inner, line)?;
        items.insert(open, Item::Value(value));
    }

    if items.iter().any(|item| item.is_op(Operator::RParen)) {
        return Err(RuntimeError::UnbalancedParens { line });
    }

    Ok(())
}

/// Applies `*` and `/` in one left-to-right scan.
///
/// Each operator is replaced together with its two neighbours by the
/// result, and the scan resumes at the same position.
fn apply_multiplicative(items: &mut Vec<Item>, line: usize) -> EvalResult<()> {
    let mut index = 0;

    while index < items.len() {
        let op = match items[index] {
            Item::Op(op @ (Operator::Star | Operator::Slash)) => op,
            _ => {
                index += 1;
                continue;
            },
        };

        if index == 0 || index + 1 >= items.len() {
            return Err(missing_operand(op, line));
        }

        let (Item::Value(left), Item::Value(right)) = (&items[index - 1], &items[index + 1]) else {
            return Err(missing_operand(op, line));
        };

        let a = left.as_number(op.symbol(), line)?;
        let b = right.as_number(op.symbol(), line)?;
        let result = if op == Operator::Star { a * b } else { a / b };
        trace!(line, a, b, op = op.symbol(), result, "multiplicative");

        items.splice(index - 1..=index + 1, [Item::Value(Value::Number(result))]);
    }

    Ok(())
}

/// Folds the remaining `operand (op operand)*` sequence left to right.
fn apply_additive(items: Vec<Item>, line: usize) -> EvalResult<Value> {
    let mut items = items.into_iter();

    let mut result = match items.next() {
        Some(Item::Value(value)) => value,
        Some(Item::Op(op)) => return Err(missing_operand(op, line)),
        None => {
            return Err(RuntimeError::MalformedExpression { details: "값이 없어요".to_string(),
                                                           line })
        },
    };

    while let Some(item) = items.next() {
        let op = match item {
            Item::Op(op @ (Operator::Plus | Operator::Minus)) => op,
            other => {
                return Err(RuntimeError::MalformedExpression {
                    details: format!("'{other}' 앞에 연산자가 필요해요"),
                    line,
                })
            },
        };

        let Some(Item::Value(operand)) = items.next() else {
            return Err(missing_operand(op, line));
        };

        result = match op {
            Operator::Plus => add(result, operand),
            _ => subtract(&result, &operand, line)?,
        };
    }

    Ok(result)
}

/// `+`: numeric addition, or concatenation as soon as either side is text.
fn add(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
        (Value::Text(mut a), right) => {
            a.push_str(&right.to_string());
            Value::Text(a)
        },
        (left, Value::Text(b)) => Value::Text(format!("{left}{b}")),
    }
}

/// `-`: numeric subtraction only. Text operands are a type mismatch.
fn subtract(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(left.as_number("-", line)? - right.as_number("-", line)?))
}

fn missing_operand(op: Operator, line: usize) -> RuntimeError {
    RuntimeError::MalformedExpression { details: format!("연산자 '{}' 앞뒤에 값이 필요해요",
                                                         op.symbol()),
                                        line }
}
