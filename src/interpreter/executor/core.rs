use std::ops::Range;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        diagnostics::{self, Diagnostic},
        evaluator::core::EvalResult,
        host::Host,
        store::Store,
    },
};

/// A block body being executed: a range of program lines plus a cursor.
///
/// Every block is a contiguous run of lines of the one program, so a context
/// only records the range. The cursor is relative to the start of the range
/// and never exceeds its length.
///
/// # Example
/// ```
/// use ks::interpreter::executor::core::ExecutionContext;
///
/// let mut context = ExecutionContext::new(3..6);
/// assert_eq!(context.len(), 3);
/// assert_eq!(context.current_line(), Some(3));
///
/// context.jump_to(5);
/// assert_eq!(context.cursor(), 2);
///
/// context.jump_to(10);
/// assert_eq!(context.cursor(), 3);
/// assert_eq!(context.current_line(), None);
///
/// assert!(ExecutionContext::new(4..4).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    lines:  Range<usize>,
    cursor: usize,
}

impl ExecutionContext {
    /// Creates a context positioned on the first line of `lines`.
    #[must_use]
    pub const fn new(lines: Range<usize>) -> Self {
        Self { lines, cursor: 0 }
    }

    /// The number of lines in the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cursor, relative to the first line of the body.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The program index one past the last line of the body.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.lines.end
    }

    /// The program index of the line under the cursor, or `None` once the
    /// cursor has reached the end of the body.
    #[must_use]
    pub fn current_line(&self) -> Option<usize> {
        let index = self.lines.start + self.cursor;
        (index < self.lines.end).then_some(index)
    }

    /// Moves the cursor to the program index `next`, clamped to the end of
    /// the body.
    pub fn jump_to(&mut self, next: usize) {
        let next = next.clamp(self.lines.start, self.lines.end);
        self.cursor = next - self.lines.start;
    }
}

/// Runs KS programs.
///
/// One interpreter holds the lines of the program being run, the global
/// variable store, the stack of active execution contexts and the host it
/// talks to. Entering a block pushes a context, finishing it pops the
/// context, and the caller's cursor continues where it left off.
///
/// # Example
/// ```
/// use ks::interpreter::{executor::core::Interpreter, host::BufferHost, value::core::Value};
///
/// let mut interpreter = Interpreter::new(BufferHost::new());
/// interpreter.run("x = 0\n반복 3 {\n  x = x + 1\n}\n출력(\"x=\" + x)").unwrap();
///
/// assert_eq!(interpreter.variables().get("x"), Some(&Value::Number(3.0)));
/// assert_eq!(interpreter.host().output(), "x=3\n");
/// assert_eq!(interpreter.depth(), 0);
/// ```
#[derive(Debug)]
pub struct Interpreter<H: Host> {
    pub(crate) lines: Vec<String>,
    pub(crate) store: Store,
    pub(crate) stack: Vec<ExecutionContext>,
    pub(crate) host:  H,
}

impl<H: Host> Interpreter<H> {
    /// Creates an interpreter that talks to `host`.
    pub fn new(host: H) -> Self {
        Self { lines: Vec::new(),
               store: Store::new(),
               stack: Vec::new(),
               host }
    }

    /// Runs a whole program.
    ///
    /// The variable store starts empty. Lines run top to bottom; a failure
    /// anywhere, however deeply nested, aborts the whole run, is reported to
    /// the host as a two-line diagnostic and is returned. The store keeps the
    /// values it had when the failing statement ran.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn run(&mut self, source: &str) -> EvalResult<()> {
        self.lines = source.lines().map(str::to_string).collect();
        self.store = Store::new();
        self.stack.clear();
        debug!(lines = self.lines.len(), "run started");

        let result = self.run_block(0..self.lines.len());

        match &result {
            Ok(()) => debug!(variables = self.store.len(), "run finished"),
            Err(error) => {
                self.stack.clear();
                diagnostics::report(&mut self.host, error);
            },
        }

        result
    }

    /// Runs `source` and returns the diagnostic shown for a failure.
    ///
    /// # Errors
    /// The [`Diagnostic`] reported to the host.
    pub fn run_with_diagnostic(&mut self, source: &str) -> Result<(), Diagnostic> {
        self.run(source).map_err(|e| Diagnostic::from(&e))
    }

    /// Executes the program lines in `body` inside a fresh execution
    /// context, to completion.
    pub(crate) fn run_block(&mut self, body: Range<usize>) -> EvalResult<()> {
        self.stack.push(ExecutionContext::new(body));
        trace!(depth = self.stack.len(), "enter block");

        while let Some(index) = self.stack.last().and_then(ExecutionContext::current_line) {
            let next = self.execute_line(index)?;
            if let Some(context) = self.stack.last_mut() {
                context.jump_to(next);
            }
        }

        trace!(depth = self.stack.len(), "leave block");
        self.stack.pop();
        Ok(())
    }

    /// The program index one past the last line of the innermost context.
    /// Block capture never scans beyond it.
    pub(crate) fn scan_limit(&self) -> usize {
        self.stack.last().map_or(self.lines.len(), ExecutionContext::end)
    }

    /// Returns `RuntimeError::UnrecognizedStatement` for `text` on the line
    /// with program index `index`.
    pub(crate) fn unrecognized(text: &str, index: usize) -> RuntimeError {
        RuntimeError::UnrecognizedStatement { statement: text.to_string(),
                                              line:      index + 1, }
    }

    /// The variable store of the current or last run.
    #[must_use]
    pub const fn variables(&self) -> &Store {
        &self.store
    }

    /// The number of active execution contexts. Zero outside a run.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the interpreter and hands back its host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
