//! RDF-star term types: named node, blank node, literal, variable,
//! default graph, and quad
//!
//! Terms are immutable value objects. A quad is itself a term wrapping four
//! terms, which is what allows arbitrary RDF-star nesting.

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Base writing direction of a directional language-tagged literal
///
/// Only the two values the `rdf:dirLangString` datatype admits exist;
/// anything else in a `--direction` suffix is a decode error, not a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right (`ltr`)
    Ltr,
    /// Right to left (`rtl`)
    Rtl,
}

impl Direction {
    /// Parse a direction tag, accepting exactly `ltr` or `rtl`
    ///
    /// Matching is case-sensitive: `LTR` is not a valid direction.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ltr" => Some(Direction::Ltr),
            "rtl" => Some(Direction::Rtl),
            _ => None,
        }
    }

    /// Get the tag (`ltr` or `rtl`)
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value with explicit datatype and optional language/direction
///
/// # Invariants
///
/// - `datatype` is always present: `xsd:string` for plain strings,
///   `rdf:langString` when a language tag is present, `rdf:dirLangString`
///   when both a language tag and a direction are present.
/// - `language`, when present, is lower-case (constructors canonicalize).
/// - `direction` is only present together with `language`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The lexical value
    pub value: Arc<str>,
    /// Datatype (always present, never None)
    pub datatype: Datatype,
    /// Language tag, lower-case (only with rdf:langString / rdf:dirLangString)
    pub language: Option<Arc<str>>,
    /// Base direction (only with rdf:dirLangString)
    pub direction: Option<Direction>,
}

impl Literal {
    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: Datatype::xsd_string(),
            language: None,
            direction: None,
        }
    }

    /// Create a typed literal with a custom datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype,
            language: None,
            direction: None,
        }
    }

    /// Create a language-tagged literal (rdf:langString)
    ///
    /// The language tag is canonicalized to lower-case.
    pub fn lang_string(value: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: Datatype::rdf_lang_string(),
            language: Some(canonical_language(language.as_ref())),
            direction: None,
        }
    }

    /// Create a directional language-tagged literal (rdf:dirLangString)
    ///
    /// The language tag is canonicalized to lower-case.
    pub fn dir_lang_string(
        value: impl AsRef<str>,
        language: impl AsRef<str>,
        direction: Direction,
    ) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: Datatype::rdf_dir_lang_string(),
            language: Some(canonical_language(language.as_ref())),
            direction: Some(direction),
        }
    }
}

/// Lower-case a language tag for storage
fn canonical_language(tag: &str) -> Arc<str> {
    if tag.chars().any(char::is_uppercase) {
        Arc::from(tag.to_lowercase())
    } else {
        Arc::from(tag)
    }
}

/// An RDF-star term
///
/// # Invariants
///
/// - `Term::NamedNode` contains an expanded IRI, never a prefixed form.
/// - `Term::Quad` nests arbitrarily: any of its four slots may itself be a
///   quad (subject and object in practice).
/// - A quad's `graph` slot is `Term::DefaultGraph` when the quad lives in
///   the default graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    NamedNode(Arc<str>),

    /// Blank node label, without the `_:` prefix
    BlankNode(Arc<str>),

    /// Literal value with explicit datatype
    Literal(Literal),

    /// Query variable name, without the `?` prefix
    Variable(Arc<str>),

    /// The unnamed graph context
    DefaultGraph,

    /// A quad used as a term (RDF-star)
    Quad(Box<Quad>),
}

impl Term {
    /// Create a named node term from an expanded IRI string
    pub fn named_node(iri: impl AsRef<str>) -> Self {
        Term::NamedNode(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn blank_node(label: impl AsRef<str>) -> Self {
        Term::BlankNode(Arc::from(label.as_ref()))
    }

    /// Create a variable term
    ///
    /// The name should NOT include the `?` prefix.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Term::Variable(Arc::from(name.as_ref()))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::string(value))
    }

    /// Create a typed literal with a custom datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal(Literal::typed(value, datatype))
    }

    /// Create a language-tagged string literal (rdf:langString)
    pub fn lang_string(value: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Term::Literal(Literal::lang_string(value, language))
    }

    /// Create a directional language-tagged string literal (rdf:dirLangString)
    pub fn dir_lang_string(
        value: impl AsRef<str>,
        language: impl AsRef<str>,
        direction: Direction,
    ) -> Self {
        Term::Literal(Literal::dir_lang_string(value, language, direction))
    }

    /// Check if this is a named node
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    /// Check if this is a blank node
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Check if this is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Check if this is the default graph
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    /// Check if this is a quad used as a term
    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node label (without `_:` prefix)
    pub fn as_blank(&self) -> Option<&str> {
        match self {
            Term::BlankNode(label) => Some(label),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Try to get as variable name (without `?` prefix)
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Try to get as quad
    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(quad) => Some(quad),
            _ => None,
        }
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Box::new(quad))
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// A quad: four term slots, any of which may itself be a quad term
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    /// Subject term
    pub subject: Term,
    /// Predicate term
    pub predicate: Term,
    /// Object term
    pub object: Term,
    /// Graph term (`Term::DefaultGraph` for the default graph)
    pub graph: Term,
}

impl Quad {
    /// Create a quad in the default graph
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: Term::DefaultGraph,
        }
    }

    /// Create a quad in a named graph
    pub fn with_graph(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }
}
