//! Property-based tests for the codec: round-tripping, escaping
//! reversibility, and decoder totality

use proptest::prelude::*;
use quadrel_string::{
    escape, quad_to_string_quad, string_quad_to_quad, string_to_term, term_to_string, unescape,
};
use quadrel_term::{Datatype, Direction, Quad, Term};

/// Generate IRIs from characters the codec never escapes
fn iri_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._~:/#-]{0,24}")
        .unwrap()
        .prop_map(|path| format!("http://example.org/{path}"))
}

/// Generate blank node labels and variable names
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,12}").unwrap()
}

/// Generate language tags (lower-case, at most one subtag)
fn language_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2}(-[a-z0-9]{1,8})?").unwrap()
}

fn direction_strategy() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Ltr)),
        Just(Some(Direction::Rtl)),
    ]
}

/// Literal values that survive inside a quad encoding
///
/// The quad splitter treats raw `<`, `>`, and space as structure, so values
/// destined for quad components must avoid them. Everything else, astral
/// and control characters included, goes through escaping.
fn field_safe_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^ <>]{0,16}").unwrap()
}

/// Generate arbitrary terms, nested quads included
fn term_strategy() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::DefaultGraph),
        iri_strategy().prop_map(Term::named_node),
        label_strategy().prop_map(Term::blank_node),
        label_strategy().prop_map(Term::variable),
        field_safe_text_strategy().prop_map(Term::string),
        (field_safe_text_strategy(), iri_strategy())
            .prop_map(|(value, datatype)| Term::typed(value, Datatype::from_iri(datatype))),
        (
            field_safe_text_strategy(),
            language_strategy(),
            direction_strategy()
        )
            .prop_map(|(value, language, direction)| match direction {
                Some(direction) => Term::dir_lang_string(value, language, direction),
                None => Term::lang_string(value, language),
            }),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        (
            inner.clone(),
            inner.clone(),
            inner,
            prop::option::of(iri_strategy()),
        )
            .prop_map(|(subject, predicate, object, graph)| {
                let quad = match graph {
                    Some(graph) => {
                        Quad::with_graph(subject, predicate, object, Term::named_node(graph))
                    }
                    None => Quad::new(subject, predicate, object),
                };
                Term::from(quad)
            })
    })
}

fn quad_strategy() -> impl Strategy<Value = Quad> {
    (
        term_strategy(),
        term_strategy(),
        term_strategy(),
        prop::option::of(iri_strategy()),
    )
        .prop_map(|(subject, predicate, object, graph)| match graph {
            Some(graph) => Quad::with_graph(subject, predicate, object, Term::named_node(graph)),
            None => Quad::new(subject, predicate, object),
        })
}

proptest! {
    #[test]
    fn test_term_round_trip(term in term_strategy()) {
        let encoded = term_to_string(&term);
        let decoded = string_to_term(&encoded);
        prop_assert!(decoded.is_ok(), "failed to decode {:?}: {:?}", encoded, decoded.err());
        prop_assert_eq!(decoded.unwrap(), term);
    }

    #[test]
    fn test_plain_literal_round_trip(value in any::<String>()) {
        // Top-level literals round-trip any value, spaces and brackets included
        let term = Term::string(&value);
        let encoded = term_to_string(&term);
        prop_assert_eq!(string_to_term(&encoded).unwrap(), term);
    }

    #[test]
    fn test_annotated_literal_round_trip(
        value in any::<String>(),
        language in language_strategy(),
        direction in direction_strategy()
    ) {
        let term = match direction {
            Some(direction) => Term::dir_lang_string(&value, &language, direction),
            None => Term::lang_string(&value, &language),
        };
        let encoded = term_to_string(&term);
        prop_assert_eq!(string_to_term(&encoded).unwrap(), term);
    }

    #[test]
    fn test_escape_round_trip(input in any::<String>()) {
        let escaped = escape(&input);
        let unescaped = unescape(&escaped);
        prop_assert!(unescaped.is_ok(), "failed to unescape {:?}", escaped);
        prop_assert_eq!(unescaped.unwrap(), input.as_str());
    }

    #[test]
    fn test_escape_output_has_no_raw_specials(input in any::<String>()) {
        // Control characters up to U+0019 and astral characters are always
        // rewritten as escape sequences
        let escaped = escape(&input);
        prop_assert!(
            escaped.chars().all(|c| c > '\u{19}' && c <= '\u{ffff}'),
            "raw special in {:?}",
            escaped
        );
    }

    #[test]
    fn test_decode_never_panics_on_arbitrary_input(input in any::<String>()) {
        let _ = string_to_term(&input);
    }

    #[test]
    fn test_decode_never_panics_on_grammar_soup(input in "[<>\"\\\\_:?@^ a-z-]{0,24}") {
        // Dense mixes of the grammar's own delimiters drive the parser deep
        let _ = string_to_term(&input);
    }

    #[test]
    fn test_string_quad_round_trip(quad in quad_strategy()) {
        let record = quad_to_string_quad(&quad);
        let back = string_quad_to_quad(&record);
        prop_assert!(back.is_ok(), "failed to decode record {:?}", record);
        prop_assert_eq!(back.unwrap(), quad);
    }
}
