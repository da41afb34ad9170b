//! Recursive-descent parser for the GDL metalanguage
//!
//! One parsing method per grammar rule, driven by a single token of
//! lookahead. Expression, Term, and Factor are mutually recursive, matching
//! the metalanguage's own structure:
//!
//! ```text
//! Syntax      : { Grammar | Tokens | Productions } ;
//! Grammar     : 'grammar' Identifier ';' ;
//! Tokens      : 'tokens' '{' { Identifier ':' Literal } '}' ;
//! Productions : 'productions' '{' { Production } '}' ;
//! Production  : Identifier ':' Expression ';' ;
//! Expression  : Term { '|' Term } ;
//! Term        : Factor { Factor } ;
//! Factor      : Identifier | Literal
//!             | '[' Expression ']' | '(' Expression ')' | '{' Expression '}'
//!             | '{:' CODE_STRING ':}' ;
//! ```
//!
//! The separators `;` `:` `{` `}` and the closing brackets are consumed only
//! when present; their absence is tolerated. The first error aborts the
//! parse, and the tree built up to that point stays available through
//! [`Parser::parse_partial`].

use super::error::ParseError;
use crate::ast::{AstNode, GrammarNode};
use crate::lexer::{Token, TokenStream};

const SECTION_EXPECTATION: &str = "a `grammar`, `tokens`, or `productions` section";
const FACTOR_EXPECTATION: &str =
    "an identifier, a literal, a semantic action, or one of `[`, `(`, `{`";

/// The recursive-descent parser. Holds the token stream and the production
/// sequence counter; the counter is a parser field so that numbering needs
/// no shared state.
pub struct Parser {
    stream: TokenStream,
    seq: u32,
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Self { stream, seq: 0 }
    }

    /// Build a parser over `source` with trivia filtered out.
    pub fn from_source(source: &str) -> Self {
        Self::new(TokenStream::new(source, true))
    }

    /// Parse the whole stream, returning the completed tree.
    pub fn parse(self) -> Result<AstNode, ParseError> {
        let (root, error) = self.parse_partial();
        match error {
            Some(err) => Err(err),
            None => Ok(root),
        }
    }

    /// Parse the whole stream, returning the tree built so far together
    /// with the first error, if any. The partial tree is not guaranteed
    /// complete or usable downstream.
    pub fn parse_partial(mut self) -> (AstNode, Option<ParseError>) {
        let mut root = AstNode::new(GrammarNode::Root);
        let error = self.parse_syntax(&mut root).err();
        (root, error)
    }

    /// Entry state: dispatch on section keywords until the stream is
    /// exhausted. End of input is the only non-error exit.
    fn parse_syntax(&mut self, root: &mut AstNode) -> Result<(), ParseError> {
        while let Some(token) = self.stream.next() {
            match token {
                Token::Keyword(ref kw) if kw == "grammar" => self.parse_grammar(root)?,
                Token::Keyword(ref kw) if kw == "tokens" => self.parse_tokens(root)?,
                Token::Keyword(ref kw) if kw == "productions" => self.parse_productions(root)?,
                other => return Err(ParseError::unexpected(other, SECTION_EXPECTATION)),
            }
        }
        Ok(())
    }

    /// `'grammar' Identifier ';'`
    fn parse_grammar(&mut self, root: &mut AstNode) -> Result<(), ParseError> {
        let name = self.expect_identifier("the grammar name")?;
        self.eat_symbol(";");
        root.push(AstNode::new(GrammarNode::Grammar(name)));
        Ok(())
    }

    /// `'tokens' '{' { Identifier ':' Literal } '}'`
    ///
    /// Malformed entries are skipped without producing a node; every
    /// iteration consumes at least one token.
    fn parse_tokens(&mut self, root: &mut AstNode) -> Result<(), ParseError> {
        self.eat_symbol("{");
        while !self.at_symbol("}") && self.stream.peek(1).is_some() {
            match self.stream.next() {
                Some(Token::Identifier(name)) => {
                    self.eat_symbol(":");
                    if let Some(Token::Literal(value)) = self.stream.peek(1).cloned() {
                        self.stream.consume();
                        root.push(AstNode::new(GrammarNode::Token { name, value }));
                    }
                }
                _ => {}
            }
        }
        self.eat_symbol("}");
        Ok(())
    }

    /// `'productions' '{' { Production } '}'`
    fn parse_productions(&mut self, root: &mut AstNode) -> Result<(), ParseError> {
        self.eat_symbol("{");
        while !self.at_symbol("}") && self.stream.peek(1).is_some() {
            self.parse_production(root)?;
        }
        self.eat_symbol("}");
        Ok(())
    }

    /// `Identifier ':' Expression ';'`
    ///
    /// The production node attaches to the root as soon as it exists, so an
    /// error mid-rule leaves the partially built rule in the tree.
    fn parse_production(&mut self, root: &mut AstNode) -> Result<(), ParseError> {
        let lhs = self.expect_identifier("a production name")?;
        self.seq += 1;
        let production = root.push_node(GrammarNode::Production(self.seq));
        production.push(AstNode::new(GrammarNode::Lhs(lhs)));
        self.eat_symbol(":");
        self.parse_expression(production)?;
        self.eat_symbol(";");
        Ok(())
    }

    /// `Term { '|' Term }`
    ///
    /// Alternation flattens: N terms yield N term subtrees interleaved with
    /// N-1 `|` markers, all direct children of the same attachment node.
    fn parse_expression(&mut self, parent: &mut AstNode) -> Result<(), ParseError> {
        self.parse_term(parent)?;
        while self.at_symbol("|") {
            self.stream.consume();
            parent.push(AstNode::new(GrammarNode::Punctuation('|')));
            self.parse_term(parent)?;
        }
        Ok(())
    }

    /// `Factor { Factor }`; adjacency is the concatenation operator.
    fn parse_term(&mut self, parent: &mut AstNode) -> Result<(), ParseError> {
        self.parse_factor(parent)?;
        while self.at_factor_start() {
            self.parse_factor(parent)?;
        }
        Ok(())
    }

    fn at_factor_start(&self) -> bool {
        match self.stream.peek(1) {
            Some(Token::Identifier(_)) | Some(Token::Literal(_)) | Some(Token::Action(_)) => true,
            Some(Token::Symbol(s)) => matches!(s.as_str(), "[" | "(" | "{"),
            _ => false,
        }
    }

    /// Leaf dispatch of the rule grammar.
    fn parse_factor(&mut self, parent: &mut AstNode) -> Result<(), ParseError> {
        match self.next_required(FACTOR_EXPECTATION)? {
            Token::Identifier(name) => {
                parent.push(AstNode::new(GrammarNode::Nonterminal(name)));
            }
            Token::Literal(text) => {
                parent.push(AstNode::new(GrammarNode::Terminal(text)));
            }
            Token::Action(code) => {
                parent.push(AstNode::new(GrammarNode::SemanticAction(code)));
            }
            Token::Symbol(s) if s == "[" => self.parse_group(parent, '[', ']')?,
            Token::Symbol(s) if s == "(" => self.parse_group(parent, '(', ')')?,
            Token::Symbol(s) if s == "{" => self.parse_group(parent, '{', '}')?,
            other => return Err(ParseError::unexpected(other, FACTOR_EXPECTATION)),
        }
        Ok(())
    }

    /// Bracketed sub-expression. The nested children attach to the same
    /// parent, between the opening and closing punctuation nodes. A missing
    /// closer is tolerated, but the closing marker always lands in the tree.
    fn parse_group(
        &mut self,
        parent: &mut AstNode,
        open: char,
        close: char,
    ) -> Result<(), ParseError> {
        parent.push(AstNode::new(GrammarNode::Punctuation(open)));
        self.parse_expression(parent)?;
        self.eat_symbol(close.to_string().as_str());
        parent.push(AstNode::new(GrammarNode::Punctuation(close)));
        Ok(())
    }

    fn at_symbol(&self, sym: &str) -> bool {
        matches!(self.stream.peek(1), Some(Token::Symbol(s)) if s == sym)
    }

    /// Consume the next token when it is the given symbol. The optional
    /// separators are never mandatory at the parser level.
    fn eat_symbol(&mut self, sym: &str) -> bool {
        let found = self.at_symbol(sym);
        if found {
            self.stream.consume();
        }
        found
    }

    fn next_required(&mut self, expected: &str) -> Result<Token, ParseError> {
        self.stream.next().ok_or_else(|| ParseError::eof(expected))
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        match self.next_required(expected)? {
            Token::Identifier(name) => Ok(name),
            other => Err(ParseError::required(other, expected)),
        }
    }
}
