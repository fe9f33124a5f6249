//! String-record form of a quad
//!
//! [`StringQuad`] is the serialization-boundary shape of a quad: four named
//! fields, each holding a term encoding. The graph field is optional on the
//! wire; absent and empty both mean the default graph on the way in, while
//! encoding a quad always fills the field (with the empty string for the
//! default graph).

use serde::{Deserialize, Serialize};

use quadrel_term::{Quad, TermFactory};

use crate::decode::{string_to_term, string_to_term_with};
use crate::encode::term_to_string;
use crate::error::Result;

/// A quad as a 4-field record of term encodings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringQuad {
    /// Encoded subject term
    pub subject: String,
    /// Encoded predicate term
    pub predicate: String,
    /// Encoded object term
    pub object: String,
    /// Encoded graph term; absent or empty means the default graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
}

/// Encode each slot of a quad into a [`StringQuad`]
///
/// The graph field is always filled: a default-graph quad gets `Some("")`,
/// not `None`.
pub fn quad_to_string_quad(quad: &Quad) -> StringQuad {
    StringQuad {
        subject: term_to_string(&quad.subject),
        predicate: term_to_string(&quad.predicate),
        object: term_to_string(&quad.object),
        graph: Some(term_to_string(&quad.graph)),
    }
}

/// Decode a [`StringQuad`] into a [`Quad`]
///
/// An absent graph field decodes like the empty string, yielding a quad in
/// the default graph.
pub fn string_quad_to_quad(string_quad: &StringQuad) -> Result<Quad> {
    Ok(Quad::with_graph(
        string_to_term(&string_quad.subject)?,
        string_to_term(&string_quad.predicate)?,
        string_to_term(&string_quad.object)?,
        string_to_term(string_quad.graph.as_deref().unwrap_or(""))?,
    ))
}

/// Decode a [`StringQuad`] through a custom [`TermFactory`]
///
/// The factory's `quad` constructor always receives a graph term, decoded
/// from the graph field or from the empty string when the field is absent.
pub fn string_quad_to_quad_with<F: TermFactory>(
    string_quad: &StringQuad,
    factory: &F,
) -> Result<F::Term> {
    let subject = string_to_term_with(&string_quad.subject, factory)?;
    let predicate = string_to_term_with(&string_quad.predicate, factory)?;
    let object = string_to_term_with(&string_quad.object, factory)?;
    let graph = string_to_term_with(string_quad.graph.as_deref().unwrap_or(""), factory)?;
    Ok(factory.quad(subject, predicate, object, Some(graph)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quadrel_term::Term;

    fn sample_quad(graph: Option<Term>) -> Quad {
        let subject = Term::named_node("http://example.org/s");
        let predicate = Term::named_node("http://example.org/p");
        let object = Term::lang_string("o", "en");
        match graph {
            Some(graph) => Quad::with_graph(subject, predicate, object, graph),
            None => Quad::new(subject, predicate, object),
        }
    }

    #[test]
    fn test_quad_to_string_quad() {
        let record = quad_to_string_quad(&sample_quad(None));
        assert_eq!(record.subject, "<http://example.org/s>");
        assert_eq!(record.object, "\"o\"@en");
        // Default graph encodes to a present, empty field
        assert_eq!(record.graph, Some(String::new()));

        let record = quad_to_string_quad(&sample_quad(Some(Term::named_node(
            "http://example.org/g",
        ))));
        assert_eq!(record.graph, Some("<http://example.org/g>".to_string()));
    }

    #[test]
    fn test_string_quad_to_quad() {
        let record = StringQuad {
            subject: "<http://example.org/s>".to_string(),
            predicate: "<http://example.org/p>".to_string(),
            object: "\"o\"@en".to_string(),
            graph: None,
        };
        let quad = string_quad_to_quad(&record).unwrap();
        assert_eq!(quad, sample_quad(None));

        let empty_graph = StringQuad {
            graph: Some(String::new()),
            ..record.clone()
        };
        assert_eq!(string_quad_to_quad(&empty_graph).unwrap(), sample_quad(None));

        let named_graph = StringQuad {
            graph: Some("<http://example.org/g>".to_string()),
            ..record
        };
        assert_eq!(
            string_quad_to_quad(&named_graph).unwrap(),
            sample_quad(Some(Term::named_node("http://example.org/g")))
        );
    }

    #[test]
    fn test_string_quad_round_trip() {
        let quad = sample_quad(Some(Term::named_node("http://example.org/g")));
        let back = string_quad_to_quad(&quad_to_string_quad(&quad)).unwrap();
        assert_eq!(back, quad);
    }

    #[test]
    fn test_string_quad_decode_errors_propagate() {
        let record = StringQuad {
            subject: "http://example.org/s".to_string(),
            predicate: "<http://example.org/p>".to_string(),
            object: "\"o\"".to_string(),
            graph: None,
        };
        assert!(string_quad_to_quad(&record).is_err());
    }

    #[test]
    fn test_serde_omits_absent_graph() {
        let record = StringQuad {
            subject: "<http://example.org/s>".to_string(),
            predicate: "<http://example.org/p>".to_string(),
            object: "\"o\"".to_string(),
            graph: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "subject": "<http://example.org/s>",
                "predicate": "<http://example.org/p>",
                "object": "\"o\"",
            })
        );

        let parsed: StringQuad = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_serde_keeps_present_graph() {
        let record = StringQuad {
            subject: "<http://example.org/s>".to_string(),
            predicate: "<http://example.org/p>".to_string(),
            object: "\"o\"".to_string(),
            graph: Some("<http://example.org/g>".to_string()),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["graph"], "<http://example.org/g>");
        let parsed: StringQuad = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, record);
    }
}
