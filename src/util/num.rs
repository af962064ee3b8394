/// Renders a number the way KS programs print it.
///
/// Integral values print without a fractional part, negative zero prints as
/// `0`, and the IEEE 754 special values print as `NaN`, `Infinity` and
/// `-Infinity`. Magnitudes of `1e21` and above or below `1e-6` use exponent
/// notation with an explicit exponent sign.
///
/// ## Example
/// ```
/// use ks::util::num::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-2.5e22), "-2.5e+22");
/// assert_eq!(format_number(1e-7), "1e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return name.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => exponential,
    }
}

/// Interprets one line of external input as a number, if it fully is one.
///
/// Surrounding whitespace is ignored. Only an optional sign, digits, a
/// decimal point and an exponent are accepted, so words such as `NaN` or
/// `inf` and grouped digits such as `1,000` stay text.
///
/// ## Returns
/// - `Some(f64)`: The parsed number.
/// - `None`: If the input is empty or not purely numeric.
///
/// ## Example
/// ```
/// use ks::util::num::parse_numeric_input;
///
/// assert_eq!(parse_numeric_input("7"), Some(7.0));
/// assert_eq!(parse_numeric_input(" 3.25\n"), Some(3.25));
/// assert_eq!(parse_numeric_input("1e3"), Some(1000.0));
/// assert_eq!(parse_numeric_input("inf"), None);
/// assert_eq!(parse_numeric_input("  "), None);
/// ```
#[must_use]
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    let numeric_chars = trimmed.chars()
                               .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric_chars || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    trimmed.parse().ok()
}

/// Parses the repetition count of a `반복` statement.
///
/// The count must be a plain non-negative integer literal.
///
/// ## Example
/// ```
/// use ks::util::num::parse_count;
///
/// assert_eq!(parse_count("3"), Some(3));
/// assert_eq!(parse_count("0"), Some(0));
/// assert_eq!(parse_count("-1"), None);
/// assert_eq!(parse_count("세"), None);
/// ```
#[must_use]
pub fn parse_count(text: &str) -> Option<u64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
