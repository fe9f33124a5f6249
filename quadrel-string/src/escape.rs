//! Escaping engine shared by the encoder and the literal-value extractor
//!
//! The escaped classes are: backslash, double quote, the control range
//! U+0000..=U+0019, and everything above U+FFFF. Backslash, quote, and the
//! named whitespace controls get two-character escapes; the remaining
//! control characters become `\uXXXX`; supplementary-plane characters
//! become `\UXXXXXXXX` (the scalar value a UTF-16 surrogate pair would
//! decode to). Everything else passes through untouched, including
//! U+001A..=U+001F and the line/paragraph separators U+2028/U+2029.

use std::borrow::Cow;

use crate::error::{Result, TermStringError};

/// Check whether a character falls in an escaped class
fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\') || c <= '\u{19}' || c > '\u{ffff}'
}

/// Escape a string for embedding in a term encoding
///
/// Applied identically to literal values and to IRI text. Returns the
/// input borrowed when nothing needs escaping.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c <= '\u{19}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c > '\u{ffff}' => out.push_str(&format!("\\U{:08x}", c as u32)),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Resolve the backslash escape sequences `escape` produces
///
/// Also accepts `\'`, which the encoder never emits. Returns the input
/// borrowed when it contains no backslash.
pub fn unescape(value: &str) -> Result<Cow<'_, str>> {
    if !value.contains('\\') {
        return Ok(Cow::Borrowed(value));
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];
        let Some(letter) = rest.chars().next() else {
            return Err(TermStringError::invalid_escape(value, "\\"));
        };
        rest = &rest[letter.len_utf8()..];
        match letter {
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{c}'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '\\' => out.push('\\'),
            'u' => out.push(hex_escape(value, &mut rest, 4)?),
            'U' => out.push(hex_escape(value, &mut rest, 8)?),
            other => {
                return Err(TermStringError::invalid_escape(value, format!("\\{other}")));
            }
        }
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// Consume `digits` hex digits from `rest` and decode them as a code point
fn hex_escape(input: &str, rest: &mut &str, digits: usize) -> Result<char> {
    let marker = if digits == 4 { "\\u" } else { "\\U" };
    let hex = rest
        .get(..digits)
        .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()));
    let Some(hex) = hex else {
        return Err(TermStringError::invalid_escape(input, marker));
    };
    *rest = &rest[digits..];
    let code = u32::from_str_radix(hex, 16)
        .map_err(|_| TermStringError::invalid_escape(input, format!("{marker}{hex}")))?;
    char::from_u32(code)
        .ok_or_else(|| TermStringError::invalid_escape(input, format!("{marker}{hex}")))
}
