//! Snapshot tests for the two output renderings

use gdl::{GrammarParser, TraceOptions};

const ROUND_TRIP: &str =
    r#"grammar g; tokens { id : "[a-z]+" } productions { S : 'a' S | 'b' ; }"#;

#[test]
fn test_flat_trace_output() {
    let parser = GrammarParser::from_source(ROUND_TRIP, TraceOptions::NODES).unwrap();
    insta::assert_snapshot!(parser.to_trace_str().trim_end(), @r#"
(Root)
(Grammar g)
(Token id "[a-z]+")
(Production 1)
(Lhs S)
(Terminal 'a')
(Nonterminal S)
(Punctuation |)
(Terminal 'b')
"#);
}

#[test]
fn test_treeviz_output() {
    let parser = GrammarParser::from_source(ROUND_TRIP, TraceOptions::TREE).unwrap();
    insta::assert_snapshot!(parser.to_treeviz_str().trim_end(), @r#"
(Root)
┣╸(Grammar g)
┣╸(Token id "[a-z]+")
┗╸(Production 1)
  ┣╸(Lhs S)
  ┣╸(Terminal 'a')
  ┣╸(Nonterminal S)
  ┣╸(Punctuation |)
  ┗╸(Terminal 'b')
"#);
}

#[test]
fn test_nested_grouping_rendering() {
    let parser = GrammarParser::from_source(
        "productions { S : 'a' [ B | C ] ; }",
        TraceOptions::TREE,
    )
    .unwrap();
    insta::assert_snapshot!(parser.to_treeviz_str().trim_end(), @r"
(Root)
┗╸(Production 1)
  ┣╸(Lhs S)
  ┣╸(Terminal 'a')
  ┣╸(Punctuation [)
  ┣╸(Nonterminal B)
  ┣╸(Punctuation |)
  ┣╸(Nonterminal C)
  ┗╸(Punctuation ])
");
}
