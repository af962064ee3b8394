/// Removes a trailing `#` comment and surrounding whitespace from a line.
///
/// ## Example
/// ```
/// use ks::util::text::strip_comment;
///
/// assert_eq!(strip_comment("  x = 1  # 초기값"), "x = 1");
/// assert_eq!(strip_comment("# 주석만"), "");
/// ```
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |index| &line[..index]).trim()
}

/// Walks `expr` and yields the byte offset of every position that lies
/// outside text literals, together with the parenthesis depth there.
fn top_level_positions(expr: &str) -> impl Iterator<Item = (usize, i32)> + '_ {
    let mut depth = 0;
    let mut in_text = false;

    expr.char_indices().filter_map(move |(index, c)| {
                           let position = (!in_text).then_some((index, depth));
                           match c {
                               '"' => in_text = !in_text,
                               '(' if !in_text => depth += 1,
                               ')' if !in_text => depth -= 1,
                               _ => {},
                           }
                           position
                       })
}

/// Splits `expr` on every occurrence of `keyword` that sits outside
/// parentheses and text literals. Parts are trimmed.
///
/// ## Example
/// ```
/// use ks::util::text::split_top_level;
///
/// assert_eq!(split_top_level("a > 1 또는 (b > 2 또는 c > 3)", " 또는 "),
///            vec!["a > 1", "(b > 2 또는 c > 3)"]);
/// assert_eq!(split_top_level("a > 1", " 또는 "), vec!["a > 1"]);
/// ```
#[must_use]
pub fn split_top_level<'a>(expr: &'a str, keyword: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (index, depth) in top_level_positions(expr) {
        if index < start || depth != 0 || !expr[index..].starts_with(keyword) {
            continue;
        }
        parts.push(expr[start..index].trim());
        start = index + keyword.len();
    }

    parts.push(expr[start..].trim());
    parts
}

/// Returns the byte offset of the first `pattern` outside text literals.
///
/// ## Example
/// ```
/// use ks::util::text::find_outside_text;
///
/// assert_eq!(find_outside_text("\">\" > x", ">"), Some(4));
/// assert_eq!(find_outside_text("\">=\"", ">="), None);
/// ```
#[must_use]
pub fn find_outside_text(expr: &str, pattern: &str) -> Option<usize> {
    top_level_positions(expr).map(|(index, _)| index)
                             .find(|&index| expr[index..].starts_with(pattern))
}

/// Returns `true` if one parenthesis pair spans the whole expression, as in
/// `(a > 1 그리고 b > 2)` but not `(a > 1) 그리고 (b > 2)`.
///
/// ## Example
/// ```
/// use ks::util::text::is_fully_parenthesized;
///
/// assert!(is_fully_parenthesized("(x > 1)"));
/// assert!(is_fully_parenthesized("((x > 1))"));
/// assert!(!is_fully_parenthesized("(x > 1) 또는 (y > 1)"));
/// assert!(!is_fully_parenthesized("x > 1"));
/// ```
#[must_use]
pub fn is_fully_parenthesized(expr: &str) -> bool {
    if !expr.starts_with('(') || !expr.ends_with(')') {
        return false;
    }

    // Depth is sampled before the character at `index` is applied, so the
    // closing paren of a spanning group still reads depth 1.
    top_level_positions(expr).all(|(index, depth)| index == 0 || depth > 0)
}
