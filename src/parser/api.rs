//! Consumer-facing API for parsing grammar descriptions
//!
//! [`GrammarParser`] wraps a completed parse: it owns the tree root and
//! offers the traversal entry points, the flat trace and box-drawing
//! renderings, and a JSON dump of the tree.

use std::io::{self, Read, Write};
use std::ops::BitOr;
use std::path::Path;

use super::error::{GdlError, ParseError};
use super::parser::Parser;
use crate::ast::{treeviz, AstNode};

/// Output selection for [`GrammarParser::print`]. The flags are independent
/// and combinable; the CLI maps its `--tree` switch onto exactly one of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceOptions(u8);

impl TraceOptions {
    pub const NONE: TraceOptions = TraceOptions(0);
    /// One flat `(Type description)` line per node, in traversal order.
    pub const NODES: TraceOptions = TraceOptions(1);
    /// The box-drawing tree rendering.
    pub const TREE: TraceOptions = TraceOptions(1 << 1);

    pub fn contains(self, flags: TraceOptions) -> bool {
        self.0 & flags.0 == flags.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TraceOptions {
    type Output = TraceOptions;

    fn bitor(self, rhs: TraceOptions) -> TraceOptions {
        TraceOptions(self.0 | rhs.0)
    }
}

/// A parsed grammar description.
#[derive(Debug)]
pub struct GrammarParser {
    root: AstNode,
    trace: TraceOptions,
}

impl GrammarParser {
    /// Parse `source`; the first syntax error aborts and is returned.
    pub fn from_source(source: &str, trace: TraceOptions) -> Result<Self, ParseError> {
        let root = Parser::from_source(source).parse()?;
        Ok(Self { root, trace })
    }

    /// Read the whole input from `reader` (typically an open file) and
    /// parse it.
    pub fn from_reader(mut reader: impl Read, trace: TraceOptions) -> Result<Self, GdlError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::from_source(&source, trace)?)
    }

    /// Convenience wrapper reading the file at `path`.
    pub fn from_path(path: impl AsRef<Path>, trace: TraceOptions) -> Result<Self, GdlError> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_source(&source, trace)?)
    }

    /// Parse without failing: returns the tree built before the first
    /// error, together with that error if there was one.
    pub fn parse_partial(source: &str) -> (AstNode, Option<ParseError>) {
        Parser::from_source(source).parse_partial()
    }

    pub fn root(&self) -> &AstNode {
        &self.root
    }

    /// Depth-first pre-order traversal over the whole tree.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&AstNode),
    {
        self.root.walk(visit);
    }

    /// Traversal passing each node its indentation prefix.
    pub fn walk_indented<F>(&self, visit: &mut F)
    where
        F: FnMut(&AstNode, &str),
    {
        self.root.walk_indented(visit);
    }

    /// The flat trace: one `(Type description)` line per node.
    pub fn to_trace_str(&self) -> String {
        let mut out = String::new();
        self.root.walk(&mut |node| {
            out.push_str(&node.to_string());
            out.push('\n');
        });
        out
    }

    /// The box-drawing tree rendering.
    pub fn to_treeviz_str(&self) -> String {
        treeviz::to_treeviz_str(&self.root)
    }

    /// The tree as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.root)
    }

    /// Write the outputs selected by the trace options, trace lines first.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        if self.trace.contains(TraceOptions::NODES) {
            out.write_all(self.to_trace_str().as_bytes())?;
        }
        if self.trace.contains(TraceOptions::TREE) {
            out.write_all(self.to_treeviz_str().as_bytes())?;
        }
        Ok(())
    }
}
