//! Compact single-line string encoding for RDF-star terms and quads.
//!
//! Every term kind has exactly one string form:
//!
//! * Named nodes: `<http://example.org/thing>`
//! * Blank nodes: `_:b1`
//! * Variables: `?x`
//! * Literals: `"abc"`, `"abc"@en-us`, `"abc"@en-us--ltr`,
//!   `"42"^^<http://www.w3.org/2001/XMLSchema#integer>`
//! * Default graph: the empty string
//! * Nested quads: `<<<ex:s> <ex:p> <ex:o>>>` (optionally with a fourth,
//!   graph component)
//!
//! [`term_to_string`] and [`string_to_term`] convert between
//! [`quadrel_term::Term`] and this form, and [`StringQuad`] carries a quad
//! as a four-field record of encodings. Decoding is factory-driven: any
//! [`quadrel_term::TermFactory`] implementor can receive the decoded
//! components, with the shipped default producing [`quadrel_term::Term`].
//!
//! # Example
//!
//! ```
//! use quadrel_string::{string_to_term, term_to_string};
//! use quadrel_term::{Direction, Term};
//!
//! let term = Term::dir_lang_string("abc", "en", Direction::Ltr);
//! let encoded = term_to_string(&term);
//! assert_eq!(encoded, "\"abc\"@en--ltr");
//! assert_eq!(string_to_term(&encoded).unwrap(), term);
//! ```

pub mod adapter;
pub mod decode;
pub mod encode;
pub mod error;
pub mod escape;
pub mod literal;

pub use adapter::{
    StringQuad, quad_to_string_quad, string_quad_to_quad, string_quad_to_quad_with,
};
pub use decode::{string_to_term, string_to_term_with};
pub use encode::{opt_term_to_string, term_to_string};
pub use error::{Result, TermStringError};
pub use escape::{escape, unescape};
pub use literal::{literal_datatype, literal_direction, literal_language, literal_value};
