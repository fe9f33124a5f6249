//! Literal metadata extraction
//!
//! A literal encoding is a quote-wrapped value with at most one trailing
//! annotation: `"value"`, `"value"^^<iri>`, or `"value"@lang[--dir]`. One
//! envelope-and-annotation parse backs the four public operations
//! ([`literal_value`], [`literal_datatype`], [`literal_language`],
//! [`literal_direction`]) and the decoder's literal path, so the string is
//! never re-scanned per projection.
//!
//! The value sits strictly between the first and the last `"`. The
//! annotation grammar is strict: a datatype needs a non-empty `<...>`
//! wrapped IRI after `^^`, and a language tag is any non-empty text after
//! `@` containing neither `@` nor `"`. Only [`literal_value`] tolerates a
//! tail that merely starts like an annotation.

use std::borrow::Cow;

use quadrel_term::Direction;
use quadrel_vocab::{rdf, xsd};

use crate::error::{Result, TermStringError};
use crate::escape::unescape;

/// A literal encoding split at its quote envelope
#[derive(Debug)]
struct LiteralParts<'a> {
    /// Text strictly between first and last quote, escapes unresolved
    value: &'a str,
    /// Everything after the closing quote (may be empty)
    tail: &'a str,
}

/// A strictly parsed annotation tail
#[derive(Debug, PartialEq, Eq)]
enum Annotation<'a> {
    /// No annotation: plain xsd:string literal
    None,
    /// `^^<iri>` datatype annotation
    Datatype(&'a str),
    /// `@tag` language annotation, raw (may still carry `--direction`)
    Language(&'a str),
}

/// Fully resolved literal metadata for the decoder
#[derive(Debug)]
pub(crate) struct LiteralMeta<'a> {
    /// Unescaped value
    pub value: Cow<'a, str>,
    /// Datatype IRI (`rdf:langString` for any `@` annotation)
    pub datatype: &'a str,
    /// Lower-cased language tag, empty when absent
    pub language: String,
    /// Base direction, when a valid `--` marker is present
    pub direction: Option<Direction>,
}

/// Split a literal encoding at its quote envelope
///
/// The tail is only shape-checked here (empty, `^^...`, or `@...`);
/// `parse_annotation` applies the strict grammar.
fn split_literal(input: &str) -> Result<LiteralParts<'_>> {
    let Some(rest) = input.strip_prefix('"') else {
        return Err(TermStringError::not_a_literal(input));
    };
    let Some(end) = rest.rfind('"') else {
        return Err(TermStringError::not_a_literal(input));
    };
    let tail = &rest[end + 1..];
    if !(tail.is_empty() || tail.starts_with("^^") || tail.starts_with('@')) {
        return Err(TermStringError::not_a_literal(input));
    }
    Ok(LiteralParts {
        value: &rest[..end],
        tail,
    })
}

/// Strictly parse an annotation tail produced by `split_literal`
fn parse_annotation<'a>(input: &str, tail: &'a str) -> Result<Annotation<'a>> {
    if tail.is_empty() {
        return Ok(Annotation::None);
    }
    if let Some(rest) = tail.strip_prefix("^^") {
        let iri = rest
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .filter(|iri| !iri.is_empty() && !iri.contains('"'));
        return match iri {
            Some(iri) => Ok(Annotation::Datatype(iri)),
            None => Err(TermStringError::not_a_literal(input)),
        };
    }
    if let Some(tag) = tail.strip_prefix('@') {
        if tag.is_empty() || tag.contains('@') || tag.contains('"') {
            return Err(TermStringError::not_a_literal(input));
        }
        return Ok(Annotation::Language(tag));
    }
    Err(TermStringError::not_a_literal(input))
}

/// Language part of an `@` annotation: up to the first `--`, lower-cased
fn annotation_language(tag: &str) -> String {
    let language = match tag.find("--") {
        Some(pos) => &tag[..pos],
        None => tag,
    };
    language.to_lowercase()
}

/// Direction part of an `@` annotation: after the last `--`, validated
fn annotation_direction(input: &str, tag: &str) -> Result<Option<Direction>> {
    match tag.rfind("--") {
        Some(pos) => Direction::from_tag(&tag[pos + 2..])
            .map(Some)
            .ok_or_else(|| TermStringError::InvalidDirection(input.to_string())),
        None => Ok(None),
    }
}

/// Parse a complete literal encoding in one pass
///
/// Error order matches the projection operations: envelope, annotation,
/// direction, then escape resolution.
pub(crate) fn parse_literal(input: &str) -> Result<LiteralMeta<'_>> {
    let parts = split_literal(input)?;
    let (datatype, language, direction) = match parse_annotation(input, parts.tail)? {
        Annotation::None => (xsd::STRING, String::new(), None),
        Annotation::Datatype(iri) => (iri, String::new(), None),
        Annotation::Language(tag) => {
            let direction = annotation_direction(input, tag)?;
            (rdf::LANG_STRING, annotation_language(tag), direction)
        }
    };
    Ok(LiteralMeta {
        value: unescape(parts.value)?,
        datatype,
        language,
        direction,
    })
}

/// Extract the value of a literal encoding, with escapes resolved
///
/// Unlike the other projections, this tolerates a malformed annotation as
/// long as the tail still starts with `^^` or `@`.
pub fn literal_value(input: &str) -> Result<String> {
    let parts = split_literal(input)?;
    Ok(unescape(parts.value)?.into_owned())
}

/// Extract the datatype IRI of a literal encoding
///
/// Returns `rdf:langString` for any `@` annotation (directional or not)
/// and `xsd:string` when no annotation is present.
pub fn literal_datatype(input: &str) -> Result<&str> {
    let parts = split_literal(input)?;
    match parse_annotation(input, parts.tail)? {
        Annotation::None => Ok(xsd::STRING),
        Annotation::Datatype(iri) => Ok(iri),
        Annotation::Language(_) => Ok(rdf::LANG_STRING),
    }
}

/// Extract the lower-cased language tag of a literal encoding
///
/// Returns the empty string when the literal has no `@` annotation. Any
/// `--direction` suffix is excluded from the tag.
pub fn literal_language(input: &str) -> Result<String> {
    let parts = split_literal(input)?;
    match parse_annotation(input, parts.tail)? {
        Annotation::Language(tag) => Ok(annotation_language(tag)),
        _ => Ok(String::new()),
    }
}

/// Extract the base direction of a literal encoding
///
/// Returns `None` when no `--` marker is present. A `--` inside a
/// `^^<...>` datatype IRI is datatype text, not a direction marker.
pub fn literal_direction(input: &str) -> Result<Option<Direction>> {
    let parts = split_literal(input)?;
    match parse_annotation(input, parts.tail)? {
        Annotation::Language(tag) => annotation_direction(input, tag),
        _ => Ok(None),
    }
}
