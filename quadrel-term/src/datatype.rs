//! RDF literal datatype representation
//!
//! Datatypes are always explicit in this model - there is no "untyped"
//! literal. Plain strings default to `xsd:string`, language-tagged strings
//! use `rdf:langString`, and directional language-tagged strings use
//! `rdf:dirLangString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use quadrel_vocab::rdf::{
        DIR_LANG_STRING as RDF_DIR_LANG_STRING, LANG_STRING as RDF_LANG_STRING,
    };
    pub use quadrel_vocab::xsd::{
        BOOLEAN as XSD_BOOLEAN, DOUBLE as XSD_DOUBLE, INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

/// RDF literal datatype, stored as an expanded IRI
///
/// Use `Datatype::xsd_string()` for plain strings, `Datatype::rdf_lang_string()`
/// for language-tagged strings, and `Datatype::rdf_dir_lang_string()` for
/// language-tagged strings with a base direction. Any other datatype comes
/// from `Datatype::from_iri`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self(Arc::from(iri::XSD_STRING))
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self(Arc::from(iri::XSD_BOOLEAN))
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self(Arc::from(iri::XSD_INTEGER))
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self(Arc::from(iri::XSD_DOUBLE))
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self(Arc::from(iri::RDF_LANG_STRING))
    }

    /// rdf:dirLangString - for language-tagged literals with a base direction
    pub fn rdf_dir_lang_string() -> Self {
        Self(Arc::from(iri::RDF_DIR_LANG_STRING))
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is xsd:string
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is rdf:langString
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }

    /// Check if this is rdf:dirLangString
    pub fn is_dir_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_DIR_LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}
