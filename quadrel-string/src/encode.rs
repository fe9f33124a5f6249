//! Term to string encoding
//!
//! Every term kind maps onto one compact single-line form:
//!
//! - named node: `<iri>`
//! - blank node: `_:label`
//! - variable: `?name`
//! - default graph: the empty string
//! - literal: `"value"` with an optional `^^<iri>` or `@lang[--dir]` tail
//! - quad: `<<subject predicate object[ graph]>>`
//!
//! Literal values and named-node IRIs go through [`escape`](crate::escape).
//! Blank labels, variable names, language tags, and the datatype IRI inside
//! a `^^<...>` tail are written verbatim. A quad's default graph component
//! is omitted, so triples and default-graph quads encode identically.

use quadrel_term::{Literal, Quad, Term};

/// Datatype IRIs that are implied by the literal shape and never written
fn datatype_is_implied(iri: &str) -> bool {
    matches!(
        iri,
        quadrel_vocab::xsd::STRING
            | quadrel_vocab::rdf::LANG_STRING
            | quadrel_vocab::rdf::DIR_LANG_STRING
    )
}

fn write_literal(out: &mut String, literal: &Literal) {
    out.push('"');
    out.push_str(&crate::escape::escape(&literal.value));
    out.push('"');
    if let Some(language) = &literal.language {
        out.push('@');
        out.push_str(language);
        if let Some(direction) = literal.direction {
            out.push_str("--");
            out.push_str(direction.as_str());
        }
    } else if !datatype_is_implied(literal.datatype.as_iri()) {
        out.push_str("^^<");
        out.push_str(literal.datatype.as_iri());
        out.push('>');
    }
}

fn write_quad(out: &mut String, quad: &Quad) {
    out.push_str("<<");
    write_term(out, &quad.subject);
    out.push(' ');
    write_term(out, &quad.predicate);
    out.push(' ');
    write_term(out, &quad.object);
    if !quad.graph.is_default_graph() {
        out.push(' ');
        write_term(out, &quad.graph);
    }
    out.push_str(">>");
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::NamedNode(iri) => {
            out.push('<');
            out.push_str(&crate::escape::escape(iri));
            out.push('>');
        }
        Term::BlankNode(label) => {
            out.push_str("_:");
            out.push_str(label);
        }
        Term::Variable(name) => {
            out.push('?');
            out.push_str(name);
        }
        Term::DefaultGraph => {}
        Term::Literal(literal) => write_literal(out, literal),
        Term::Quad(quad) => write_quad(out, quad),
    }
}

/// Encode a term as its compact string form
pub fn term_to_string(term: &Term) -> String {
    let mut out = String::new();
    write_term(&mut out, term);
    out
}

/// Encode an optional term: `None` in, `None` out
///
/// Keeps "no term supplied" distinct from the default graph, whose encoding
/// is the empty string.
pub fn opt_term_to_string(term: Option<&Term>) -> Option<String> {
    term.map(term_to_string)
}
