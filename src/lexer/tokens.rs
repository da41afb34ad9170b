//! Token definitions for the GDL metalanguage
//!
//! Raw classification is handled by logos; the stream layer reclassifies
//! identifiers against the reserved-keyword set and maps lexing failures to
//! the invalid token class. Equality on tokens is structural (variant plus
//! payload).

use logos::{Lexer, Logos};
use std::fmt;

/// A classified lexical unit, as consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A reserved section keyword (`grammar`, `tokens`, `productions`).
    Keyword(String),
    Identifier(String),
    /// A quoted literal; the payload excludes the surrounding quotes.
    Literal(String),
    Symbol(String),
    Number(String),
    Comment(String),
    Space(String),
    /// A `{: ... :}` semantic action; the payload is the raw text between
    /// the markers.
    Action(String),
    /// Source text that matched no token class.
    Invalid(String),
}

impl Token {
    /// Comment and whitespace tokens, dropped by filtering streams.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Comment(_) | Token::Space(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// The payload when this token is the given symbol.
    pub fn is_symbol(&self, sym: &str) -> bool {
        matches!(self, Token::Symbol(s) if s == sym)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(s) => write!(f, "keyword `{}`", s),
            Token::Identifier(s) => write!(f, "identifier `{}`", s),
            Token::Literal(s) => write!(f, "literal '{}'", s),
            Token::Symbol(s) => write!(f, "symbol `{}`", s),
            Token::Number(s) => write!(f, "number `{}`", s),
            Token::Comment(_) => write!(f, "comment"),
            Token::Space(_) => write!(f, "whitespace"),
            Token::Action(_) => write!(f, "semantic action"),
            Token::Invalid(s) => write!(f, "invalid input `{}`", s),
        }
    }
}

fn text(lex: &mut Lexer<RawToken>) -> String {
    lex.slice().to_owned()
}

fn quoted(lex: &mut Lexer<RawToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_owned()
}

/// Capture everything up to the matching `:}`. An unterminated action is a
/// lexing error.
fn action_body(lex: &mut Lexer<RawToken>) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find(":}")?;
    let body = rest[..end].to_owned();
    lex.bump(end + 2);
    Some(body)
}

/// Capture a `/* ... */` comment, terminator included. An unterminated
/// comment is a lexing error.
fn block_comment(lex: &mut Lexer<RawToken>) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find("*/")?;
    let body = format!("/*{}*/", &rest[..end]);
    lex.bump(end + 2);
    Some(body)
}

/// Lexical classes recognized directly by logos. Keywords are not known at
/// this level; the stream reclassifies identifiers.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[A-Za-z][A-Za-z_-]*", text)]
    Identifier(String),

    #[regex(r#""[^"]*""#, quoted)]
    #[regex(r"'[^']*'", quoted)]
    Literal(String),

    #[regex(r"[0-9]+", text)]
    Number(String),

    #[token("{:", action_body)]
    Action(String),

    #[regex(r"//[^\n]*", text)]
    #[token("/*", block_comment)]
    Comment(String),

    #[regex(r"[ \t\r\n]+", text)]
    Space(String),

    #[token("|", text)]
    #[token("[", text)]
    #[token("]", text)]
    #[token("(", text)]
    #[token(")", text)]
    #[token("{", text)]
    #[token("}", text)]
    #[token(":}", text)]
    #[token(":", text)]
    #[token(";", text)]
    #[token(",", text)]
    #[token("->", text)]
    #[token(".", text)]
    #[token("<", text)]
    #[token(">", text)]
    #[token("!", text)]
    #[token("*", text)]
    Symbol(String),
}
