use std::ops::Range;

use crate::interpreter::{executor::core::Interpreter, host::Host};

/// The lines of a block found by [`capture_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedBlock {
    /// The body, excluding the opening and closing delimiter lines.
    pub body: Range<usize>,
    /// The index of the line that closed the block. The caller resumes on the
    /// line after it.
    pub end:  usize,
}

/// Finds the block opened on line `start` by brace-depth scanning.
///
/// Depth is counted per line, not per character: a line containing `{`
/// adds one, a line containing `}` subtracts one, and a line with both does
/// both. The scan stops at the first line where depth is back to zero, or at
/// `limit` when the block never closes. Every line after `start` up to that
/// point is the body.
///
/// # Parameters
/// - `lines`: The program lines.
/// - `start`: Index of the line holding the opening delimiter.
/// - `limit`: Index one past the last line the scan may look at, i.e. the
///   end of the enclosing block.
///
/// # Example
/// ```
/// use ks::interpreter::executor::block::capture_block;
///
/// let lines: Vec<String> = ["반복 2 {", "  만약 x > 1 {", "    x = 0", "  }", "}", "출력(x)"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// let block = capture_block(&lines, 0, lines.len());
///
/// assert_eq!(block.body, 1..4);
/// assert_eq!(block.end, 4);
/// ```
#[must_use]
pub fn capture_block(lines: &[String], start: usize, limit: usize) -> CapturedBlock {
    let mut depth: i64 = 0;
    let mut index = start;

    while let Some(line) = lines.get(index).filter(|_| index < limit) {
        if line.contains('{') {
            depth += 1;
        }
        if line.contains('}') {
            depth -= 1;
        }
        if depth <= 0 {
            break;
        }
        index += 1;
    }

    CapturedBlock { body: (start + 1).min(index)..index,
                    end:  index, }
}

impl<H: Host> Interpreter<H> {
    /// Captures the block opened on program line `start`, scanning no
    /// further than the end of the innermost execution context.
    pub(crate) fn capture_block(&self, start: usize) -> CapturedBlock {
        capture_block(&self.lines, start, self.scan_limit())
    }
}
