use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token of a KS expression.
///
/// Tokens are produced fresh every time an expression is evaluated; nothing
/// is cached between statements or loop iterations.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`. Integers only; signs are applied
    /// by the additive operators.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Text literal tokens, such as `"안녕"`. The content is taken verbatim;
    /// escape sequences are not interpreted.
    #[regex(r#""[^"]*""#, parse_text, allow_greedy = true)]
    Text(String),
    /// A text literal whose closing quote is missing.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedText,
    /// Variable references such as `점수` or `total_2`.
    #[regex(r"[\p{L}_][\p{L}0-9_]*", |lex| lex.slice().to_string())]
    VarRef(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits one expression into tokens.
///
/// # Parameters
/// - `expr`: The expression text, without statement keywords.
/// - `line`: 1-based line of the statement, used for error reporting.
///
/// # Errors
/// - [`LexError::UnterminatedText`] when a `"` is never closed.
/// - [`LexError::UnexpectedCharacter`] for any character that starts no
///   token.
///
/// # Example
/// ```
/// use ks::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("점수 * 2", 1).unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::VarRef("점수".to_string()), Token::Star, Token::Number(2.0)]);
/// assert!(tokenize("\"열린 문자열", 1).is_err());
/// ```
pub fn tokenize(expr: &str, line: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expr);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::UnterminatedText) => return Err(LexError::UnterminatedText { line }),
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let character = lexer.slice().chars().next().map(String::from).unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { character, line });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Digit runs too long for exact representation still parse, rounded to the
/// nearest `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes of a text literal.
fn parse_text(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Returns `true` if `name` is exactly one variable reference token, i.e. a
/// name that can be assigned to.
///
/// # Example
/// ```
/// use ks::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("점수"));
/// assert!(is_identifier("_count2"));
/// assert!(!is_identifier("2등"));
/// assert!(!is_identifier("a b"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Token::lexer(name);
    matches!(lexer.next(), Some(Ok(Token::VarRef(_)))) && lexer.next().is_none()
}
