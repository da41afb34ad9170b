//! AST node type definitions and traversal
//!
//! This module defines the node taxonomy for parsed grammar descriptions
//! and the tree container that owns them. Nodes are created during parsing,
//! appended to their parent in source order, and never mutated afterwards;
//! the finished tree is handed to the caller as a plain value.

pub mod treeviz;

use serde::Serialize;
use std::fmt;

/// What a node means at its position in the tree.
///
/// Variants carry tree-position semantics, not lexical class: the same
/// identifier token becomes [`GrammarNode::Lhs`] on the left of a production
/// and [`GrammarNode::Nonterminal`] inside a rule body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GrammarNode {
    /// Synthetic tree root; exactly one per parse.
    Root,
    /// The declared grammar name.
    Grammar(String),
    /// One terminal definition from the `tokens` section.
    Token { name: String, value: String },
    /// Wraps one production rule; numbered in declaration order from 1.
    Production(u32),
    /// Left-hand nonterminal of a production.
    Lhs(String),
    /// A quoted literal appearing in a rule body.
    Terminal(String),
    /// A referenced rule name appearing in a rule body.
    Nonterminal(String),
    /// Raw `{: ... :}` payload, kept as literal text and never interpreted.
    SemanticAction(String),
    /// Structural marker (`|` or a bracket) kept in the flat child list so
    /// the shape of alternation, grouping, and repetition stays recoverable.
    Punctuation(char),
}

impl GrammarNode {
    /// The variant name used in trace output and rendering.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GrammarNode::Root => "Root",
            GrammarNode::Grammar(_) => "Grammar",
            GrammarNode::Token { .. } => "Token",
            GrammarNode::Production(_) => "Production",
            GrammarNode::Lhs(_) => "Lhs",
            GrammarNode::Terminal(_) => "Terminal",
            GrammarNode::Nonterminal(_) => "Nonterminal",
            GrammarNode::SemanticAction(_) => "SemanticAction",
            GrammarNode::Punctuation(_) => "Punctuation",
        }
    }
}

impl fmt::Display for GrammarNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarNode::Root => write!(f, "(Root)"),
            GrammarNode::Grammar(name) => write!(f, "(Grammar {})", name),
            GrammarNode::Token { name, value } => write!(f, "(Token {} \"{}\")", name, value),
            GrammarNode::Production(number) => write!(f, "(Production {})", number),
            GrammarNode::Lhs(name) => write!(f, "(Lhs {})", name),
            GrammarNode::Terminal(text) => write!(f, "(Terminal '{}')", text),
            GrammarNode::Nonterminal(name) => write!(f, "(Nonterminal {})", name),
            GrammarNode::SemanticAction(code) => write!(f, "(SemanticAction {})", code),
            GrammarNode::Punctuation(mark) => write!(f, "(Punctuation {})", mark),
        }
    }
}

/// One node of the syntax tree: a [`GrammarNode`] tag plus an ordered,
/// exclusively owned child list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstNode {
    pub kind: GrammarNode,
    children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(kind: GrammarNode) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Append a child; children keep their insertion order.
    pub fn push(&mut self, child: AstNode) {
        self.children.push(child);
    }

    /// Append a fresh node and return a mutable handle to it, so nested
    /// structure can be built in place while the node is already attached.
    pub fn push_node(&mut self, kind: GrammarNode) -> &mut AstNode {
        let index = self.children.len();
        self.children.push(AstNode::new(kind));
        &mut self.children[index]
    }

    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// Depth-first pre-order traversal: the node itself, then each child in
    /// insertion order.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&AstNode),
    {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Pre-order traversal passing each node its indentation prefix, two
    /// spaces per nesting level.
    pub fn walk_indented<F>(&self, visit: &mut F)
    where
        F: FnMut(&AstNode, &str),
    {
        self.walk_indented_from("", visit);
    }

    fn walk_indented_from<F>(&self, prefix: &str, visit: &mut F)
    where
        F: FnMut(&AstNode, &str),
    {
        visit(self, prefix);
        let child_prefix = format!("{}  ", prefix);
        for child in &self.children {
            child.walk_indented_from(&child_prefix, visit);
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
