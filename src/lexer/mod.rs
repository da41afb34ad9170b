//! Tokenization of GDL source text
//!
//! Raw classification is handled by logos in [`tokens`]; [`stream`] wraps
//! the output in a buffered stream with single-token lookahead, keyword
//! classification, and trivia filtering.

pub mod stream;
pub mod tokens;

pub use stream::{TokenStream, RESERVED_KEYWORDS};
pub use tokens::Token;
