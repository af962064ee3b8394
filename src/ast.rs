use crate::{interpreter::lexer::is_identifier, util::text::strip_comment};

/// The print keyword, including its opening parenthesis.
pub const PRINT_KEYWORD: &str = "출력(";
/// Marks an input statement: `이름 = 입력("프롬프트")`.
pub const INPUT_MARKER: &str = "= 입력";
/// The if keyword, including the separating space.
pub const IF_KEYWORD: &str = "만약 ";
/// The else keyword, expected at the start of the line after a then block.
pub const ELSE_KEYWORD: &str = "아니면";
/// The repeat keyword, including the separating space.
pub const REPEAT_KEYWORD: &str = "반복 ";

/// One classified source line.
///
/// Lines are classified again every time they execute; nothing about a
/// program is kept between runs or between loop iterations. Fields borrow
/// from the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// A blank or comment-only line.
    Empty,
    /// `출력(expr)`
    Print {
        /// The expression between the parentheses.
        expr: &'a str,
    },
    /// `name = 입력("prompt")`
    Input {
        /// The variable receiving the input.
        name:   &'a str,
        /// The prompt shown to the user, quotes removed. Empty if absent.
        prompt: String,
    },
    /// `만약 condition {`
    If {
        /// The condition, without the opening brace.
        condition: String,
    },
    /// `반복 count {`
    Repeat {
        /// The count text, not yet validated.
        count: &'a str,
    },
    /// `name = expr`
    Assignment {
        /// The variable being assigned.
        name: &'a str,
        /// The right-hand expression.
        expr: &'a str,
    },
    /// A line that matches no statement form.
    Unrecognized {
        /// The line, comment stripped.
        text: &'a str,
    },
}

/// Classifies one source line.
///
/// The line is trimmed and its `#` comment stripped first. Forms are tried
/// in priority order: empty, print, input, if, repeat, and assignment last,
/// since every input line also contains `=`.
///
/// # Example
/// ```
/// use ks::ast::{Statement, parse_statement};
///
/// assert_eq!(parse_statement("  출력(x + 1)  # 결과"), Statement::Print { expr: "x + 1" });
/// assert_eq!(parse_statement("이름 = 입력(\"이름은?\")"),
///            Statement::Input { name: "이름", prompt: "이름은?".to_string() });
/// assert_eq!(parse_statement("반복 3 {"), Statement::Repeat { count: "3" });
/// assert_eq!(parse_statement("x = 1 + 2"), Statement::Assignment { name: "x", expr: "1 + 2" });
/// assert_eq!(parse_statement("}"), Statement::Unrecognized { text: "}" });
/// ```
#[must_use]
pub fn parse_statement(line: &str) -> Statement<'_> {
    let text = strip_comment(line);

    if text.is_empty() {
        return Statement::Empty;
    }

    if text.starts_with(PRINT_KEYWORD) && text.ends_with(')') {
        let expr = text.find('(')
                       .zip(text.rfind(')'))
                       .map_or("", |(open, close)| &text[open + 1..close]);
        return Statement::Print { expr };
    }

    if text.contains(INPUT_MARKER) {
        return parse_input(text);
    }

    if let Some(rest) = text.strip_prefix(IF_KEYWORD) {
        return Statement::If { condition: rest.replacen('{', "", 1).trim().to_string() };
    }

    if let Some(rest) = text.strip_prefix(REPEAT_KEYWORD) {
        let count = rest.split('{').next().unwrap_or_default().trim();
        return Statement::Repeat { count };
    }

    if let Some((name, expr)) = text.split_once('=') {
        let name = name.trim();
        if is_identifier(name) {
            return Statement::Assignment { name, expr: expr.trim() };
        }
    }

    Statement::Unrecognized { text }
}

/// Returns `true` if `line` continues an if statement with an else block.
#[must_use]
pub fn starts_else(line: &str) -> bool {
    line.trim_start().starts_with(ELSE_KEYWORD)
}

fn parse_input(text: &str) -> Statement<'_> {
    let Some((name, rest)) = text.split_once('=') else {
        return Statement::Unrecognized { text };
    };
    let name = name.trim();
    if !is_identifier(name) {
        return Statement::Unrecognized { text };
    }

    let prompt = match (rest.find('('), rest.rfind(')')) {
        (Some(open), Some(close)) if close > open => rest[open + 1..close].replace('"', ""),
        _ => String::new(),
    };

    Statement::Input { name, prompt }
}
