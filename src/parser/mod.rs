//! Recursive-descent parsing of GDL documents
//!
//! [`parser`] holds the descent itself, [`error`] its failure types, and
//! [`api`] the consumer-facing wrapper around a completed parse.

pub mod api;
pub mod error;
pub mod parser;

pub use api::{GrammarParser, TraceOptions};
pub use error::{GdlError, ParseError};
pub use parser::Parser;
