use tracing::debug;

use crate::{error::RuntimeError, interpreter::host::Host};

/// A line-anchored error message shown to the user.
///
/// At most one diagnostic exists per run; producing it ends the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The 1-based source line of the failing statement.
    pub line:    usize,
    /// The localized description of the failure.
    pub message: String,
}

impl Diagnostic {
    /// The banner line naming the failing source line.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("❌ {}번째 줄에서 오류가 있어요", self.line)
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(error: &RuntimeError) -> Self {
        Self { line:    error.line(),
               message: error.to_string(), }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.banner())?;
        write!(f, "   {}", self.message)
    }
}

/// Reports a failed run to the host.
///
/// Marks the offending line for highlighting, then appends the banner and
/// the message as two output lines.
///
/// # Example
/// ```
/// use ks::{
///     error::RuntimeError,
///     interpreter::{diagnostics::report, host::BufferHost},
/// };
///
/// let mut host = BufferHost::new();
/// report(&mut host, &RuntimeError::MissingComparator { line: 3 });
///
/// assert_eq!(host.error_line(), Some(2));
/// assert_eq!(host.lines(), ["❌ 3번째 줄에서 오류가 있어요", "   조건식에는 비교 연산자가 필요해요"]);
/// ```
pub fn report<H: Host + ?Sized>(host: &mut H, error: &RuntimeError) -> Diagnostic {
    let diagnostic = Diagnostic::from(error);
    debug!(line = diagnostic.line, error = ?error, "run aborted");

    host.mark_error_line(diagnostic.line.saturating_sub(1));
    host.append(&format!("{diagnostic}\n"));
    diagnostic
}
