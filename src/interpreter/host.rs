use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use tracing::warn;

/// The environment a program runs in.
///
/// The interpreter never touches a terminal, file or window directly. It
/// writes output, asks for input and reports the line of a failure through
/// this trait, so the same engine serves a console, an editor or a test.
pub trait Host {
    /// Appends text to the output sink. Printed values and diagnostics arrive
    /// here in call order, each already terminated by a newline.
    fn append(&mut self, text: &str);

    /// Blocks until one line of external input is available.
    ///
    /// `prompt` is empty when the program gave none. The returned text must
    /// not include the line terminator.
    fn request_line(&mut self, prompt: &str) -> String;

    /// Tells a presentation layer which source line (0-based) caused the
    /// active diagnostic. Purely advisory.
    fn mark_error_line(&mut self, _index: usize) {}
}

impl<H: Host + ?Sized> Host for &mut H {
    fn append(&mut self, text: &str) {
        (**self).append(text);
    }

    fn request_line(&mut self, prompt: &str) -> String {
        (**self).request_line(prompt)
    }

    fn mark_error_line(&mut self, index: usize) {
        (**self).mark_error_line(index);
    }
}

/// A console host: output to stdout, input from stdin.
///
/// Prompts are written to stdout before reading. End of input and read
/// failures yield an empty line.
#[derive(Debug, Default)]
pub struct StdHost;

impl StdHost {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Host for StdHost {
    fn append(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            warn!(error = %e, "failed to write program output");
        }
    }

    fn request_line(&mut self, prompt: &str) -> String {
        if !prompt.is_empty() {
            self.append(&format!("{prompt} "));
        }

        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => warn!("input requested after end of stdin"),
            Ok(_) => {},
            Err(e) => warn!(error = %e, "failed to read input"),
        }

        buf.trim_end_matches(['\n', '\r']).to_string()
    }
}

/// An in-memory host.
///
/// Output is collected into a string, input is served from a queue of
/// scripted lines (an empty line once the queue runs dry), and prompts and
/// the highlighted error line are recorded for inspection.
///
/// # Example
/// ```
/// use ks::interpreter::host::{BufferHost, Host};
///
/// let mut host = BufferHost::with_inputs(["42"]);
///
/// assert_eq!(host.request_line("몇 살?"), "42");
/// assert_eq!(host.request_line(""), "");
/// host.append("안녕\n");
///
/// assert_eq!(host.output(), "안녕\n");
/// assert_eq!(host.prompts(), ["몇 살?", ""]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferHost {
    output:     String,
    inputs:     VecDeque<String>,
    prompts:    Vec<String>,
    error_line: Option<usize>,
}

impl BufferHost {
    /// Creates a host with no scripted input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host that answers input requests with `inputs`, in order.
    pub fn with_inputs<I, S>(inputs: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { inputs: inputs.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    /// Everything appended so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }

    /// Every prompt passed to [`Host::request_line`], in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// The 0-based line marked by the last diagnostic, if any.
    #[must_use]
    pub const fn error_line(&self) -> Option<usize> {
        self.error_line
    }
}

impl Host for BufferHost {
    fn append(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn request_line(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().unwrap_or_default()
    }

    fn mark_error_line(&mut self, index: usize) {
        self.error_line = Some(index);
    }
}
