/// Numeric text helpers.
///
/// Rendering of numbers the way KS programs print them, coercion of external
/// input into numbers, and parsing of loop counts.
pub mod num;
/// Source text helpers.
///
/// Comment stripping, identifier checks and parenthesis-aware searching used
/// by the condition evaluator and the statement executor.
pub mod text;
