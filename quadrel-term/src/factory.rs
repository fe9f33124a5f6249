//! TermFactory trait for decoder-driven term construction
//!
//! The term-string decoder never builds terms itself - it calls a factory
//! for every term it recognizes, so callers can substitute their own term
//! representation (an interning table, an id-mapped store, ...) without
//! touching the codec.
//!
//! # Design
//!
//! One constructor per term kind, plus an optional variable capability:
//! `variable()` returns `Option` and defaults to `None`, which the decoder
//! reports as a capability error. [`DefaultFactory`] is the shipped
//! implementation producing this crate's [`Term`].

use crate::{Datatype, Direction, Literal, Quad, Term};
use quadrel_vocab::xsd;

/// Construction interface the decoder drives
///
/// Methods take `&self`; an implementation that needs state (e.g. a blank
/// node table) uses interior mutability.
///
/// # Example
///
/// ```
/// use quadrel_term::{DefaultFactory, TermFactory};
///
/// let factory = DefaultFactory;
/// let term = factory.named_node("http://example.org/alice");
/// assert_eq!(term.as_iri(), Some("http://example.org/alice"));
/// assert!(factory.variable("v").is_some());
/// ```
pub trait TermFactory {
    /// The term representation this factory produces
    type Term;

    /// Construct a named node from an expanded IRI
    fn named_node(&self, iri: &str) -> Self::Term;

    /// Construct a blank node from a label (without the `_:` prefix)
    fn blank_node(&self, label: &str) -> Self::Term;

    /// Construct a literal from a value and a datatype IRI
    ///
    /// Called for plain (`xsd:string`) and custom-typed literals; never for
    /// language-tagged ones, which go through [`lang_literal`](Self::lang_literal).
    fn literal(&self, value: &str, datatype: &str) -> Self::Term;

    /// Construct a language-tagged literal, optionally with a base direction
    ///
    /// The datatype is implied: `rdf:langString` without a direction,
    /// `rdf:dirLangString` with one.
    fn lang_literal(
        &self,
        value: &str,
        language: &str,
        direction: Option<Direction>,
    ) -> Self::Term;

    /// Construct a variable from a name (without the `?` prefix)
    ///
    /// Variables are an optional capability. The default implementation
    /// returns `None`; the decoder surfaces that as a capability error.
    fn variable(&self, name: &str) -> Option<Self::Term> {
        let _ = name;
        None
    }

    /// Construct the default graph term
    fn default_graph(&self) -> Self::Term;

    /// Construct a quad term from four previously constructed terms
    ///
    /// `graph` is `None` when the surface syntax omitted it; the factory
    /// decides how to represent the default graph in that case.
    fn quad(
        &self,
        subject: Self::Term,
        predicate: Self::Term,
        object: Self::Term,
        graph: Option<Self::Term>,
    ) -> Self::Term;
}

/// The shipped factory, producing this crate's [`Term`]
///
/// Supports variables. Language tags are canonicalized to lower-case by the
/// underlying [`Literal`] constructors.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFactory;

impl TermFactory for DefaultFactory {
    type Term = Term;

    fn named_node(&self, iri: &str) -> Term {
        Term::named_node(iri)
    }

    fn blank_node(&self, label: &str) -> Term {
        Term::blank_node(label)
    }

    fn literal(&self, value: &str, datatype: &str) -> Term {
        if datatype == xsd::STRING {
            Term::string(value)
        } else {
            Term::typed(value, Datatype::from_iri(datatype))
        }
    }

    fn lang_literal(&self, value: &str, language: &str, direction: Option<Direction>) -> Term {
        match direction {
            Some(direction) => Term::Literal(Literal::dir_lang_string(value, language, direction)),
            None => Term::Literal(Literal::lang_string(value, language)),
        }
    }

    fn variable(&self, name: &str) -> Option<Term> {
        Some(Term::variable(name))
    }

    fn default_graph(&self) -> Term {
        Term::DefaultGraph
    }

    fn quad(&self, subject: Term, predicate: Term, object: Term, graph: Option<Term>) -> Term {
        let quad = match graph {
            Some(graph) => Quad::with_graph(subject, predicate, object, graph),
            None => Quad::new(subject, predicate, object),
        };
        Term::from(quad)
    }
}
