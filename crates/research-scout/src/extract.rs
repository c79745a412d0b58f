//! Tolerant JSON extraction from model replies.
//!
//! Models wrap JSON in prose or code fences. These helpers scan for the
//! first top-level balanced `[...]` / `{...}` span that parses, skipping
//! whole spans that do not. Brackets inside string literals are ignored.

use serde_json::{Map, Value};

/// First well-formed JSON array in `text`.
#[must_use]
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    candidates(text, b'[').find_map(|span| serde_json::from_str(span).ok())
}

/// First well-formed JSON object in `text`.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    candidates(text, b'{').find_map(|span| serde_json::from_str(span).ok())
}

/// Top-level balanced spans opened by `opener`, in document order.
///
/// Scanning resumes after each span, so brackets nested inside one (parsed or
/// not) never start a candidate of their own.
fn candidates(text: &str, opener: u8) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        loop {
            let start = pos + bytes.get(pos..)?.iter().position(|&b| b == opener)?;
            match scan_span(bytes, start) {
                Span::Closed(end) => {
                    pos = end + 1;
                    return Some(&text[start..=end]);
                }
                // a stray opener in prose; retry after the bracket that broke it
                Span::Mismatched(at) => pos = at + 1,
                Span::Unterminated => return None,
            }
        }
    })
}

enum Span {
    /// Index of the bracket closing the opener.
    Closed(usize),
    /// Index of a closing bracket that does not match the innermost opener.
    Mismatched(usize),
    /// Input ended with brackets still open.
    Unterminated,
}

fn scan_span(bytes: &[u8], start: usize) -> Span {
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' => stack.push(b']'),
            b'{' => stack.push(b'}'),
            b']' | b'}' => {
                if stack.pop() != Some(b) {
                    return Span::Mismatched(start + offset);
                }
                if stack.is_empty() {
                    return Span::Closed(start + offset);
                }
            }
            _ => {}
        }
    }

    Span::Unterminated
}
