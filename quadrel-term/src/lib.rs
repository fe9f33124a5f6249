//! RDF term and quad data model for the quadrel codec
//!
//! This crate provides the term types the term-string codec encodes and
//! decodes, plus the factory trait the decoder uses to construct terms.
//!
//! # Key Design Principles
//!
//! 1. **Closed term set** - `Term` is an enum over the six RDF-star term
//!    kinds (named node, blank node, literal, variable, default graph,
//!    quad). Every dispatch point matches exhaustively.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. Plain
//!    strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`, and language-tagged strings with a base direction
//!    use `rdf:dirLangString`.
//!
//! 3. **Immutable value objects** - Term payloads are `Arc<str>`, so terms
//!    clone cheaply and nothing mutates a term in place.
//!
//! 4. **Factory at the boundary** - Code that builds terms from parsed
//!    input goes through [`TermFactory`], so callers can substitute their
//!    own term representation. [`DefaultFactory`] produces this crate's
//!    [`Term`].
//!
//! # Example
//!
//! ```
//! use quadrel_term::{Quad, Term};
//!
//! let quad = Quad::new(
//!     Term::named_node("http://example.org/alice"),
//!     Term::named_node("http://xmlns.com/foaf/0.1/name"),
//!     Term::lang_string("Alice", "en"),
//! );
//! assert!(quad.graph.is_default_graph());
//! ```

pub mod datatype;
mod factory;
mod term;

pub use datatype::Datatype;
pub use factory::{DefaultFactory, TermFactory};
pub use term::{Direction, Literal, Quad, Term};
