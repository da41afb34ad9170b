//! Treeviz formatter for grammar syntax trees

use super::AstNode;

/// Render `node` and its descendants with box-drawing connectors. The last
/// child of every node gets the closing connector and a blank continuation
/// column; earlier children get the tee connector and a pipe column.
pub fn to_treeviz_str(node: &AstNode) -> String {
    let mut out = String::new();
    out.push_str(&node.to_string());
    out.push('\n');
    append_children(&mut out, node, "");
    out
}

fn append_children(out: &mut String, node: &AstNode, prefix: &str) {
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗╸" } else { "┣╸" };
        out.push_str(&format!("{}{}{}\n", prefix, connector, child));

        let continuation = if is_last { "  " } else { "┃ " };
        let child_prefix = format!("{}{}", prefix, continuation);
        append_children(out, child, &child_prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::GrammarNode;

    #[test]
    fn test_root_only() {
        let root = AstNode::new(GrammarNode::Root);
        assert_eq!(to_treeviz_str(&root), "(Root)\n");
    }

    #[test]
    fn test_last_child_uses_closing_connector() {
        let mut root = AstNode::new(GrammarNode::Root);
        root.push(AstNode::new(GrammarNode::Grammar("g".to_string())));
        let mut production = AstNode::new(GrammarNode::Production(1));
        production.push(AstNode::new(GrammarNode::Lhs("S".to_string())));
        production.push(AstNode::new(GrammarNode::Terminal("a".to_string())));
        root.push(production);

        let expected =
            "(Root)\n┣╸(Grammar g)\n┗╸(Production 1)\n  ┣╸(Lhs S)\n  ┗╸(Terminal 'a')\n";
        assert_eq!(to_treeviz_str(&root), expected);
    }

    #[test]
    fn test_pipe_column_continues_under_non_last_children() {
        let mut root = AstNode::new(GrammarNode::Root);
        let mut first = AstNode::new(GrammarNode::Production(1));
        first.push(AstNode::new(GrammarNode::Lhs("A".to_string())));
        root.push(first);
        root.push(AstNode::new(GrammarNode::Grammar("g".to_string())));

        let expected = "(Root)\n┣╸(Production 1)\n┃ ┗╸(Lhs A)\n┗╸(Grammar g)\n";
        assert_eq!(to_treeviz_str(&root), expected);
    }

    #[test]
    fn test_rendering_is_pure() {
        let mut root = AstNode::new(GrammarNode::Root);
        root.push(AstNode::new(GrammarNode::Grammar("g".to_string())));
        assert_eq!(to_treeviz_str(&root), to_treeviz_str(&root));
    }
}
