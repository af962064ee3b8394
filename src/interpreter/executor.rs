/// The interpreter and its execution context stack.
///
/// Owns the program lines, the variable store and the host, and runs blocks
/// by pushing and popping execution contexts.
pub mod core;

/// Block capture by brace-depth scanning.
pub mod block;

/// Statement dispatch: print, input, if/else, repeat and assignment.
pub mod statement;
