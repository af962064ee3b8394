/// Tokenizer errors.
///
/// Defines the errors raised while splitting an expression into tokens:
/// characters the language does not know and text literals that never close.
pub mod lex_error;
/// Runtime errors.
///
/// Contains every error that can stop a running program: undefined
/// variables, unbalanced parentheses, type mismatches, bad loop counts,
/// conditions without a comparator and lines that are not statements.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
