//! # quill-json
//!
//! `quill-json` is a from-scratch tokenizer and recursive-descent parser
//! for a JSON-like document format, with a small serializer for writing
//! values back out.
//!
//! The library is split along the two stages of the pipeline, and data
//! flows one way: raw text, then tokens, then the value tree.
//!
//! * **Tokenizer:** a lazy `Iterator` that turns the input text into a
//!   sequence of [`Token`]s, using a byte-classification lookup table and
//!   `memchr` for string scanning. Lexical failures surface as a final
//!   `Invalid` token rather than a panic; a clean scan ends with exactly
//!   one `EndOfInput`.
//! * **Parser:** a recursive-descent consumer of any token iterator that
//!   builds a single [`Value`] tree, one routine per grammar rule, with a
//!   configurable nesting-depth limit so hostile input fails with an
//!   error instead of overflowing the stack.
//!
//! The grammar is deliberately small. Strings have no escape sequences:
//! a literal is the shortest run of characters up to the next `"`, and a
//! backslash is ordinary content. Numbers have no exponent form, and
//! whether one is an integer or a float is decided purely by the presence
//! of a decimal point. Object keys keep their insertion order; a
//! duplicate key overwrites the earlier value in place.
//!
//! ## Quick Start: Parsing
//!
//! ```
//! use quill_json::{parse, Value};
//!
//! let value = parse(r#"{ "name": "Ada", "tags": [1, 2.5, null] }"#).unwrap();
//! match &value {
//!     Value::Object(fields) => {
//!         assert_eq!(fields["name"], Value::String("Ada".to_string()));
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Quick Start: Serializing
//!
//! ```
//! use quill_json::{parse, Number, Value};
//!
//! let value = Value::Array(vec![
//!     Value::Number(Number::Int(1)),
//!     Value::String("two".to_string()),
//! ]);
//! let text = value.to_text().unwrap();
//! assert_eq!(text, r#"[1,"two"]"#);
//!
//! // The output re-parses to a structurally equal tree.
//! assert_eq!(parse(&text).unwrap(), value);
//! ```

/// Contains the error types for the library.
pub mod error;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the `Token` and `TokenKind` types shared by the tokenizer
/// and the parser.
pub mod token;
/// Contains the byte-based `Tokenizer` (lexer).
pub mod tokenizer;
/// Contains the `Value` tree and the serialization logic.
pub mod value;

// Re-export the public-facing types.
pub use error::{LexicalErrorKind, ParseError};
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use value::{Number, Value};

// --- Constants ---
/// The default maximum nesting depth (e.g., `[[[]]]`) to prevent stack
/// overflows on deeply nested input.
pub const DEFAULT_MAX_DEPTH: usize = 100;

// --- Public-facing entry points ---

/// Parses a complete document into a [`Value`] tree.
///
/// The whole input must be a single value (object, array, or scalar);
/// trailing content after it is an error. Nesting is limited to
/// [`DEFAULT_MAX_DEPTH`] levels; use [`parse_with_max_depth`] to pick a
/// different limit.
///
/// # Errors
/// Returns a [`ParseError`] describing the first lexical or grammar
/// violation, with the line and column where it was found.
///
/// # Examples
/// ```
/// use quill_json::{parse, Number, Value};
///
/// let value = parse("[1, 2.5]").unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![
///         Value::Number(Number::Int(1)),
///         Value::Number(Number::Float(2.5)),
///     ])
/// );
///
/// let err = parse("{\"a\" 1}").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "expected ':', found a number at line 1, column 6"
/// );
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with_max_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parses a complete document with a caller-chosen nesting-depth limit.
///
/// # Errors
/// Same as [`parse`], with [`ParseError::MaxDepthExceeded`] reported
/// against the given limit.
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> Result<Value, ParseError> {
    Parser::new(Tokenizer::new(input), max_depth).parse()
}

// --- Test Module ---
#[cfg(test)]
mod tests {
    use super::{
        parse, parse_with_max_depth, LexicalErrorKind, Number, ParseError, Parser, Token,
        TokenKind, Tokenizer, Value, DEFAULT_MAX_DEPTH,
    };
    use indexmap::IndexMap;
    use serde_json::Value as SerdeValue;

    #[test]
    fn test_minimal_documents() {
        assert_eq!(parse("{}").unwrap(), Value::Object(IndexMap::new()));
        assert_eq!(parse("[]").unwrap(), Value::Array(Vec::new()));
        assert_eq!(parse(r#""x""#).unwrap(), Value::String("x".to_string()));
        assert_eq!(parse("42").unwrap(), Value::Number(Number::Int(42)));
        assert_eq!(parse("-3.5").unwrap(), Value::Number(Number::Float(-3.5)));
        assert_eq!(parse("true").unwrap(), Value::Boolean(true));
        assert_eq!(parse("false").unwrap(), Value::Boolean(false));
        assert_eq!(parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_nested_document() {
        let input = r#"
        {
            "name": "Babbage",
            "scores": [1, 2.5],
            "meta": { "active": true, "note": null, "empty": {} }
        }
        "#;
        let value = parse(input).unwrap();
        match &value {
            Value::Object(fields) => {
                assert_eq!(fields.len(), 3);
                assert_eq!(fields["name"], Value::String("Babbage".to_string()));
                assert_eq!(
                    fields["scores"],
                    Value::Array(vec![
                        Value::Number(Number::Int(1)),
                        Value::Number(Number::Float(2.5)),
                    ])
                );
                match &fields["meta"] {
                    Value::Object(meta) => {
                        assert_eq!(meta["active"], Value::Boolean(true));
                        assert_eq!(meta["note"], Value::Null);
                        assert_eq!(meta["empty"], Value::Object(IndexMap::new()));
                    }
                    other => panic!("expected object, got {:?}", other),
                }
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let value = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        match value {
            Value::Object(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields["a"], Value::Number(Number::Int(3)));
                // The duplicate keeps its original position.
                let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["a", "b"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_comma_is_rejected() {
        let err = parse(r#"{"a":1,}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: "'}'",
                expected: "a string key",
                ..
            }
        ));

        let err = parse("[1,]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: "']'",
                expected: "a value",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        let err = parse(r#"{"a" 1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected ':', found a number at line 1, column 6"
        );
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = parse("[1 2]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: "',' or ']'",
                ..
            }
        ));

        let err = parse(r#"{"a":1 "b":2}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: "',' or '}'",
                ..
            }
        ));
    }

    #[test]
    fn test_unterminated_string() {
        let err = parse(r#"{"a": "b}"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::Lexical {
                kind: LexicalErrorKind::UnterminatedString,
                line: 1,
                column: 7,
            }
        );
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let err = parse("{} extra").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { .. }));

        let err = parse("[1] [2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected '[' after parsing ends at line 1, column 5"
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = parse("").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: "end of input",
                expected: "a value",
                ..
            }
        ));

        let err = parse(" \t\n ").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_lexical_error_inside_document() {
        let err = parse("[1, ?]").unwrap_err();
        assert_eq!(
            err,
            ParseError::Lexical {
                kind: LexicalErrorKind::UnexpectedCharacter('?'),
                line: 1,
                column: 5,
            }
        );

        let err = parse("[true, fal]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Lexical {
                kind: LexicalErrorKind::MalformedKeyword("false"),
                ..
            }
        ));
    }

    #[test]
    fn test_nesting_depth_limit() {
        // Deeply nested input fails with a controlled error, not a crash.
        let evil = "[".repeat(1000) + &"]".repeat(1000);
        let err = parse(&evil).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MaxDepthExceeded { limit: 100, .. }
        ));

        // Nesting at exactly the limit parses.
        let deep_ok = "[".repeat(DEFAULT_MAX_DEPTH) + &"]".repeat(DEFAULT_MAX_DEPTH);
        assert!(parse(&deep_ok).is_ok());

        let too_deep = "[".repeat(DEFAULT_MAX_DEPTH + 1) + &"]".repeat(DEFAULT_MAX_DEPTH + 1);
        assert!(matches!(
            parse(&too_deep).unwrap_err(),
            ParseError::MaxDepthExceeded { .. }
        ));

        // The limit is per call.
        assert!(parse_with_max_depth(&too_deep, 200).is_ok());
        assert!(matches!(
            parse_with_max_depth("[[]]", 1).unwrap_err(),
            ParseError::MaxDepthExceeded { limit: 1, .. }
        ));
    }

    #[test]
    fn test_round_trip() {
        let input = r#"{"name":"Ada","tags":[1,2.5,true,null],"nested":{"empty":{},"list":[]}}"#;
        let value = parse(input).unwrap();

        let compact = value.to_text().unwrap();
        // Insertion order is preserved, so the compact form reproduces
        // the input byte for byte.
        assert_eq!(compact, input);
        assert_eq!(parse(&compact).unwrap(), value);

        let pretty = value.to_text_pretty().unwrap();
        assert_eq!(parse(&pretty).unwrap(), value);
    }

    #[test]
    fn test_number_tags_survive_round_trip() {
        let value = parse("[2.0, 2]").unwrap();
        match &value {
            Value::Array(items) => {
                assert_eq!(items[0], Value::Number(Number::Float(2.0)));
                assert_eq!(items[1], Value::Number(Number::Int(2)));
            }
            other => panic!("expected array, got {:?}", other),
        }

        let text = value.to_text().unwrap();
        assert_eq!(text, "[2.0,2]");
        assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn test_pretty_printing_shape() {
        let value = parse(r#"{"a":[1,2],"b":{}}"#).unwrap();
        assert_eq!(
            value.to_text_pretty().unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}"
        );
    }

    #[test]
    fn test_string_escape_gap_is_reference_behavior() {
        // The string scan stops at the first quote, so a backslash-escaped
        // quote terminates the literal early and the rest of the input is
        // lexed on its own. This pins the behavior down as a documented
        // limitation rather than silently patching it.
        let input = r#""a\"b""#;
        let kinds: Vec<TokenKind> = Tokenizer::new(input).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::String("a\\".to_string()),
                TokenKind::Invalid(LexicalErrorKind::UnexpectedCharacter('b')),
            ]
        );

        let err = parse(input).unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { .. }));
    }

    #[test]
    fn test_serializer_rejects_inexpressible_values() {
        // The grammar has no escapes, so a quote inside a string has no
        // written form; the serializer refuses rather than emitting text
        // that would re-parse differently.
        assert!(Value::String("a\"b".to_string()).to_text().is_err());
        assert!(Value::String("a\nb".to_string()).to_text().is_err());

        // Likewise there is no literal for NaN or infinity.
        assert!(Value::Number(Number::Float(f64::NAN)).to_text().is_err());
        assert!(Value::Number(Number::Float(f64::INFINITY))
            .to_text_pretty()
            .is_err());
    }

    #[test]
    fn test_output_cross_checked_against_serde_json() {
        let input = r#"{"name":"Babbage","age":30,"admin":true,"friends":["Ada","Grace"],"nested":{"key":[null,1,1.25]}}"#;
        let value = parse(input).unwrap();

        let ours: SerdeValue = serde_json::from_str(&value.to_text().unwrap()).unwrap();
        let pretty: SerdeValue = serde_json::from_str(&value.to_text_pretty().unwrap()).unwrap();
        let theirs: SerdeValue = serde_json::from_str(input).unwrap();
        assert_eq!(ours, theirs);
        assert_eq!(pretty, theirs);
    }

    #[test]
    fn test_parser_runs_over_buffered_tokens() {
        // The parser is written against the lazy iterator interface, so
        // it works unchanged over a materialized token sequence.
        let tokens: Vec<Token> = Tokenizer::new(r#"{"a": [1, 2]}"#).collect();
        let buffered = Parser::new(tokens.into_iter(), DEFAULT_MAX_DEPTH)
            .parse()
            .unwrap();
        assert_eq!(buffered, parse(r#"{"a": [1, 2]}"#).unwrap());
    }

    #[test]
    fn test_error_locations_span_lines() {
        let err = parse("{\n  \"a\": 1,\n  \"b\" 2\n}").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: "':'",
                line: 3,
                column: 7,
                ..
            }
        ));
    }
}
