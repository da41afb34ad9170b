//! Failure-path integration tests
//!
//! Every malformed document must abort at the first error with a message
//! naming the unexpected token and the unmet expectation.

use gdl::{GrammarParser, ParseError, TraceOptions};
use rstest::rstest;

#[rstest]
#[case::bare_identifier_at_top_level("S : 'a' ;")]
#[case::number_at_top_level("42")]
#[case::literal_at_top_level("'a'")]
#[case::empty_expression("productions { S : }")]
#[case::missing_production_name("productions { : 'a' ; }")]
#[case::literal_as_production_name("productions { 'S' : 'a' ; }")]
#[case::eof_after_grammar_keyword("grammar")]
#[case::eof_mid_production("productions { S :")]
#[case::dangling_alternation("productions { S : 'a' | ; }")]
fn test_invalid_documents_fail(#[case] source: &str) {
    assert!(GrammarParser::from_source(source, TraceOptions::NONE).is_err());
}

#[test]
fn test_empty_expression_names_the_factor_expectation() {
    let err = GrammarParser::from_source("productions { S : }", TraceOptions::NONE).unwrap_err();
    match &err {
        ParseError::UnexpectedToken { found, expected } => {
            assert_eq!(found.to_string(), "symbol `}`");
            assert!(expected.contains("identifier"));
            assert!(expected.contains("literal"));
        }
        other => panic!("expected UnexpectedToken, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "unexpected symbol `}`: expected an identifier, a literal, a semantic action, \
         or one of `[`, `(`, `{`"
    );
}

#[test]
fn test_end_of_input_has_its_own_error_class() {
    let err = GrammarParser::from_source("grammar", TraceOptions::NONE).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    assert_eq!(
        err.to_string(),
        "unexpected end of input: expected the grammar name"
    );
}

#[test]
fn test_required_identifier_reports_what_was_found() {
    let err =
        GrammarParser::from_source("productions { 'S' : 'a' ; }", TraceOptions::NONE).unwrap_err();
    assert_eq!(
        err.to_string(),
        "found literal 'S' where a production name was required"
    );
}

#[test]
fn test_first_error_wins() {
    // Both productions are malformed; only the first is ever reported.
    let err = GrammarParser::from_source(
        "productions { S : } productions { : }",
        TraceOptions::NONE,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}
