//! # ks
//!
//! ks is an interpreter for KS, a small line-oriented scripting language with
//! Korean keywords. A program assigns variables, computes with numbers and
//! text, branches with `만약`/`아니면`, repeats blocks with `반복`, prints with
//! `출력` and reads input with `입력`.
//!
//! ```text
//! 이름 = 입력("이름이 뭐예요?")
//! 반복 2 {
//!   출력("안녕, " + 이름)
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{executor::core::Interpreter, host::Host};

/// Classifies source lines into statements.
///
/// This module declares the `Statement` enum and the keyword constants of the
/// language. A line is classified every time it executes; the result
/// borrows from the line and is dropped right after.
///
/// # Responsibilities
/// - Strips comments and surrounding whitespace.
/// - Recognizes print, input, if, repeat and assignment lines in priority
///   order.
/// - Extracts the expression, condition, count or prompt of a statement.
pub mod ast;
/// Provides the error types for tokenizing and running programs.
///
/// Every error carries the 1-based line of the statement that raised it and
/// renders a localized message for the diagnostic shown to the user.
pub mod error;
/// Orchestrates the execution of KS programs.
///
/// This module ties together the lexer, the evaluators, the variable store,
/// the statement executor, the host interface and diagnostics.
pub mod interpreter;
/// Numeric and text helpers shared by the evaluator and the executor.
pub mod util;

/// Runs a program against `host`.
///
/// Output, input requests and the diagnostic of a failed run all go through
/// the host. If execution succeeds, it returns `Ok(())`; otherwise, it
/// returns the error that aborted the run, after the diagnostic has been
/// reported.
///
/// # Errors
/// Returns the first runtime error raised by the program.
///
/// # Examples
/// ```
/// use ks::{get_result, interpreter::host::BufferHost};
///
/// let mut host = BufferHost::new();
/// let res = get_result("x = 2 + 2\n출력(x)", &mut host);
/// assert!(res.is_ok());
/// assert_eq!(host.output(), "4\n");
///
/// // Example with an intentional error (unknown variable).
/// let mut host = BufferHost::new();
/// let res = get_result("y = x + 1", &mut host);
/// assert!(res.is_err());
/// assert_eq!(host.lines()[0], "❌ 1번째 줄에서 오류가 있어요");
/// ```
pub fn get_result<H: Host>(source: &str, host: &mut H) -> Result<(), Box<dyn std::error::Error>> {
    Interpreter::new(host).run(source)?;
    Ok(())
}
