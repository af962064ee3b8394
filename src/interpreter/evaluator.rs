/// Shared evaluation types.
///
/// Contains the evaluator result type and the operand/operator work list the
/// expression passes operate on.
pub mod core;

/// Expression evaluation.
///
/// Resolves variables, collapses parenthesized groups and applies the
/// multiplicative then additive operators.
pub mod expression;

/// Condition evaluation.
///
/// Boolean composition with `또는` and `그리고` on top of the six comparison
/// operators.
pub mod condition;
