//! Tokenizer for shell input lines.
//!
//! Splits a raw line into whitespace-separated tokens with support for:
//! - Single and double quoted spans (quotes are stripped)
//! - Mismatched quote characters kept literally inside a quoted span
//! - Unterminated quotes running to end of line
//!
//! Also provides the `key=value` splitter used when binding arguments.

/// Tokenizes an input line.
///
/// Handles:
/// - Whitespace-separated tokens: `s3 add` → `["s3", "add"]`
/// - Double-quoted spans: `name="a b"` → `["name=a b"]`
/// - Single-quoted spans: `'a b' c` → `["a b", "c"]`
/// - Other quote inside a span: `"it's"` → `["it's"]`
/// - Unterminated quotes: `a "b c` → `["a", "b c"]`
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open_quote: Option<char> = None;

    for c in line.chars() {
        match (c, open_quote) {
            (' ' | '\t', None) => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            ('"' | '\'', None) => open_quote = Some(c),
            ('"' | '\'', Some(quote)) if c == quote => open_quote = None,
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// An argument token classified as `key=value` or a bare flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Lower-cased binding key.
    pub key: String,
    /// Raw value; bare flags carry `"true"`.
    pub value: String,
}

/// Classifies a single argument token.
///
/// A token containing `=` splits on the first `=`; the value loses one
/// enclosing pair of matching quotes. A token without `=` is a flag set
/// to `"true"`. Returns `None` for empty tokens.
pub fn split_argument(token: &str) -> Option<Argument> {
    if token.is_empty() {
        return None;
    }

    let argument = match token.split_once('=') {
        Some((key, value)) => Argument {
            key: key.to_lowercase(),
            value: strip_enclosing_quotes(value).to_string(),
        },
        None => Argument {
            key: token.to_lowercase(),
            value: "true".to_string(),
        },
    };

    Some(argument)
}

/// Removes a single leading and trailing quote when both are the same quote character.
fn strip_enclosing_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
