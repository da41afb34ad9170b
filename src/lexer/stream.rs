//! Token stream with single-token lookahead
//!
//! The stream buffers the logos output for one source text, classifies
//! identifiers against a reserved-keyword set, and optionally drops trivia
//! (comments and whitespace). The parser drives it through `peek`, the
//! `Iterator` implementation, and `consume`.

use super::tokens::{RawToken, Token};
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Reserved section keywords of the metalanguage.
pub static RESERVED_KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["grammar", "tokens", "productions"].into_iter().collect());

/// A stream of classified tokens over one source text.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Tokenize `source` with the reserved keyword set. With
    /// `filter_trivia`, comment and whitespace tokens never enter the
    /// stream.
    pub fn new(source: &str, filter_trivia: bool) -> Self {
        Self::with_keywords(source, filter_trivia, &RESERVED_KEYWORDS)
    }

    /// Tokenize `source`, classifying identifiers found in `keywords` as
    /// keyword tokens.
    pub fn with_keywords(source: &str, filter_trivia: bool, keywords: &HashSet<&str>) -> Self {
        let mut lexer = RawToken::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let token = match result {
                Ok(raw) => classify(raw, keywords),
                Err(()) => Token::Invalid(lexer.slice().to_owned()),
            };
            if filter_trivia && token.is_trivia() {
                continue;
            }
            tokens.push(token);
        }
        Self { tokens, pos: 0 }
    }

    /// Look `ahead_by` tokens ahead without consuming anything; `peek(1)`
    /// is the next unconsumed token.
    pub fn peek(&self, ahead_by: usize) -> Option<&Token> {
        debug_assert!(ahead_by >= 1, "lookahead is 1-based");
        self.tokens.get(self.pos + ahead_by - 1)
    }

    /// Discard the next token without returning it.
    pub fn consume(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Whether any unconsumed tokens remain.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

fn classify(raw: RawToken, keywords: &HashSet<&str>) -> Token {
    match raw {
        RawToken::Identifier(s) => {
            if keywords.contains(s.as_str()) {
                Token::Keyword(s)
            } else {
                Token::Identifier(s)
            }
        }
        RawToken::Literal(s) => Token::Literal(s),
        RawToken::Number(s) => Token::Number(s),
        RawToken::Symbol(s) => Token::Symbol(s),
        RawToken::Comment(s) => Token::Comment(s),
        RawToken::Space(s) => Token::Space(s),
        RawToken::Action(s) => Token::Action(s),
    }
}
