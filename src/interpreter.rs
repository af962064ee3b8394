/// The lexer module tokenizes expressions.
///
/// The lexer reads one expression substring and produces a flat stream of
/// tokens: numbers, text literals, variable references and operators. It is
/// run again every time a statement executes.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Reports unterminated text literals and unknown characters.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a number or a text. This module provides the
/// conversions between them that the language allows: rendering numbers for
/// output and coercing external input into numbers.
pub mod value;
/// The variable store.
///
/// The single global mapping from variable name to value that every
/// statement, at any block depth, reads and writes.
pub mod store;
/// The evaluator module computes expression values and condition results.
///
/// # Responsibilities
/// - Resolves variables, parentheses and operator precedence in expressions.
/// - Evaluates conditions with short-circuit `또는`/`그리고` composition.
/// - Reports type mismatches, undefined variables and unbalanced groups.
pub mod evaluator;
/// The executor module runs programs line by line.
///
/// # Responsibilities
/// - Dispatches each line to its statement kind.
/// - Captures `{`/`}` blocks and runs them on an explicit stack of execution
///   contexts.
/// - Aborts the run at the first error and reports it.
pub mod executor;
/// The host interface: output sink, input source and error-line notifier.
pub mod host;
/// Diagnostics shown to the user when a run fails.
pub mod diagnostics;
