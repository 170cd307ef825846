//! Cutting the default-value expression off the rest of the line.
//!
//! The text handed in starts at the value and runs to the end of the line, so
//! it may also hold following parameters, closing parens or a comment.

use crate::error::{DefaultValueError, Result};

const RAW_QUOTE: &str = "\"\"\"";

/// Extract a string literal, keeping its quotes and escapes verbatim.
///
/// `text` must start with `"`. A quote preceded by an odd number of
/// backslashes is part of the literal.
pub(crate) fn string_literal(text: &str) -> Result<&str> {
    if let Some(body) = text.strip_prefix(RAW_QUOTE) {
        // Raw strings have no escapes; they end at the next triple quote
        return body
            .find(RAW_QUOTE)
            .map(|end| &text[..RAW_QUOTE.len() * 2 + end])
            .ok_or_else(|| unterminated(text));
    }

    quoted(text, b'"')
}

/// Extract a char literal such as `','` or `'\''`, keeping it verbatim.
///
/// `text` must start with `'`. Escapes follow the same rule as strings.
pub(crate) fn char_literal(text: &str) -> Result<&str> {
    quoted(text, b'\'')
}

/// Scan to the first `quote` not preceded by an odd number of backslashes.
fn quoted(text: &str, quote: u8) -> Result<&str> {
    let mut backslashes = 0;
    for (idx, &byte) in text.as_bytes().iter().enumerate().skip(1) {
        match byte {
            b'\\' => {
                backslashes += 1;
                continue;
            }
            b if b == quote && backslashes % 2 == 0 => return Ok(&text[..=idx]),
            _ => {}
        }
        backslashes = 0;
    }
    Err(unterminated(text))
}

fn unterminated(text: &str) -> DefaultValueError {
    DefaultValueError::UnterminatedStringLiteral {
        near: text.to_string(),
    }
}

/// True when the value opens a paren before closing one, e.g. `Foo()` but not `x) {`.
pub(crate) fn is_call_shaped(text: &str) -> bool {
    match (text.find('('), text.find(')')) {
        (Some(open), Some(close)) => open < close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Cut a call expression after its balanced parens.
///
/// Member access chained after the call (`Foo().bar`) stays attached. Running
/// out of text with an open paren means the call continues on a later line.
pub(crate) fn call_expression(text: &str) -> Result<&str> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 && ends_value(text, idx, ch) => return Ok(&text[..idx]),
            _ => {}
        }
    }

    if depth > 0 {
        return Err(DefaultValueError::multiline_call(text));
    }
    Ok(text)
}

/// Cut a plain expression at the first separator.
pub(crate) fn simple_expression(text: &str) -> &str {
    text.char_indices()
        .find(|&(idx, ch)| ends_value(text, idx, ch))
        .map_or(text, |(idx, _)| &text[..idx])
}

/// Whitespace, `,`, `)` or the start of a comment
fn ends_value(text: &str, idx: usize, ch: char) -> bool {
    match ch {
        ',' | ')' => true,
        '/' => matches!(text.as_bytes().get(idx + 1), Some(b'/' | b'*')),
        _ => ch.is_whitespace(),
    }
}

/// Numbers, which can be re-emitted without any import.
pub(crate) fn is_self_contained_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}

/// Drop the first `(`..`)` span, as long as it is well ordered.
pub(crate) fn remove_first_parens(text: &str) -> String {
    match (text.find('('), text.find(')')) {
        (Some(open), Some(close)) if open < close => {
            let mut head = String::with_capacity(text.len());
            head.push_str(&text[..open]);
            head.push_str(&text[close + 1..]);
            head
        }
        _ => text.to_string(),
    }
}
