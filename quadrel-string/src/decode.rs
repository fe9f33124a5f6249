//! String to term decoding
//!
//! The first character of an encoding decides the term kind: `_` for blank
//! nodes, `?` for variables, `"` for literals, the empty string for the
//! default graph, `<<` for nested quads, and a plain `<...>` wrapper for
//! named nodes. Anything else is an invalid IRI error.
//!
//! Decoding is factory-driven: [`string_to_term_with`] hands each
//! recognized component to a [`TermFactory`], so callers can produce their
//! own term representation. [`string_to_term`] is the common case, wired to
//! [`DefaultFactory`].
//!
//! # Nested quads
//!
//! A `<<...>>` encoding is split into its component encodings by scanning
//! left to right and counting every `<` up and every `>` down, splitting on
//! the spaces seen at depth zero. The scanner is deliberately ignorant of
//! the component grammar (a `>` inside a literal value still counts), which
//! keeps it a single pass and matches how the encoder lays components out.

use quadrel_term::{DefaultFactory, Term, TermFactory};
use tracing::{debug, trace};

use crate::error::{Result, TermStringError};
use crate::literal::parse_literal;

/// Decode a compact term encoding into a [`Term`]
///
/// Uses [`DefaultFactory`], so variables decode to [`Term::Variable`] and
/// an empty input decodes to [`Term::DefaultGraph`].
pub fn string_to_term(value: &str) -> Result<Term> {
    string_to_term_with(value, &DefaultFactory)
}

/// Decode a compact term encoding through a custom [`TermFactory`]
///
/// Factories that return `None` from [`TermFactory::variable`] make any
/// `?name` input fail with [`TermStringError::UnsupportedVariable`].
pub fn string_to_term_with<F: TermFactory>(value: &str, factory: &F) -> Result<F::Term> {
    trace!(value = %value, "decoding term");
    if value.is_empty() {
        return Ok(factory.default_graph());
    }
    match value.as_bytes()[0] {
        // Inputs shorter than `_:x` yield an empty label
        b'_' => Ok(factory.blank_node(value.get(2..).unwrap_or(""))),
        b'?' => factory
            .variable(&value[1..])
            .ok_or_else(|| TermStringError::UnsupportedVariable(value.to_string())),
        b'"' => {
            let meta = parse_literal(value)?;
            if meta.language.is_empty() {
                Ok(factory.literal(&meta.value, meta.datatype))
            } else {
                Ok(factory.lang_literal(&meta.value, &meta.language, meta.direction))
            }
        }
        _ => {
            if value.starts_with("<<") && value.ends_with(">>") {
                decode_nested_quad(value, factory)
            } else if value.starts_with('<') && value.ends_with('>') {
                Ok(factory.named_node(&value[1..value.len() - 1]))
            } else {
                Err(TermStringError::InvalidIri(value.to_string()))
            }
        }
    }
}

/// Decode a `<<...>>` encoding by splitting it and recursing per component
fn decode_nested_quad<F: TermFactory>(value: &str, factory: &F) -> Result<F::Term> {
    let fields = split_quad_fields(value)?;
    debug!(value = %value, fields = fields.len(), "decoding nested quad");
    let subject = string_to_term_with(fields[0], factory)?;
    let predicate = string_to_term_with(fields[1], factory)?;
    let object = string_to_term_with(fields[2], factory)?;
    let graph = match fields.get(3) {
        Some(graph) if !graph.is_empty() => Some(string_to_term_with(graph, factory)?),
        _ => None,
    };
    Ok(factory.quad(subject, predicate, object, graph))
}

/// Split the inside of a `<<...>>` encoding into 3 or 4 component encodings
///
/// The caller guarantees the `<<` and `>>` delimiters. Both delimiters are
/// ASCII so the byte slice below always lands on character boundaries.
fn split_quad_fields(value: &str) -> Result<Vec<&str>> {
    let inner = &value[2..value.len() - 2];
    let mut fields = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (pos, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TermStringError::UnexpectedClosingTag(value.to_string()))?;
            }
            ' ' if depth == 0 => {
                fields.push(&inner[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(TermStringError::UnclosedOpeningTag(value.to_string()));
    }
    fields.push(&inner[start..]);
    if fields.len() != 3 && fields.len() != 4 {
        return Err(TermStringError::QuadArity {
            input: value.to_string(),
            count: fields.len(),
        });
    }
    Ok(fields)
}
