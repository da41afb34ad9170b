//! # gdl
//!
//! A parser for the GDL grammar description format.
//!
//! A GDL document declares a grammar in three sections (`grammar`, `tokens`,
//! `productions`). This crate tokenizes the source text, runs a
//! one-token-lookahead recursive-descent parse over the token stream, and
//! hands back the grammar's syntax tree for callers to walk, render, or
//! serialize.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, GrammarNode};
pub use lexer::{Token, TokenStream};
pub use parser::{GdlError, GrammarParser, ParseError, TraceOptions};
