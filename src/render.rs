//! Text rendering built only on the public read API (`root`, `value`,
//! `children`).

use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::node::Node;
use crate::tree::Tree;

pub trait ToTermTree {
    fn to_term_tree(&self) -> TermTree<String>;
}

impl<T: fmt::Display> ToTermTree for Node<T> {
    fn to_term_tree(&self) -> TermTree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_term_tree()).collect();
        TermTree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl<T: fmt::Display, const K: usize> ToTermTree for Tree<T, K> {
    #[instrument(level = "debug", skip_all)]
    fn to_term_tree(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => root.to_term_tree(),
            None => TermTree::new("Empty Tree".to_string()),
        }
    }
}

impl<T: fmt::Display, const K: usize> fmt::Display for Tree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root.to_term_tree()),
            None => writeln!(f, "Empty Tree"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_displayed_then_says_empty() {
        let tree: Tree<i32> = Tree::new();
        assert_eq!(tree.to_string(), "Empty Tree\n");
        assert_eq!(tree.to_term_tree().root, "Empty Tree");
    }

    #[test]
    fn given_tree_when_rendered_then_mirrors_structure() {
        let mut tree: Tree<&str> = Tree::new();
        tree.add_root("root").unwrap();
        tree.add_sub_node(&"root", "child1").unwrap();
        tree.add_sub_node(&"root", "child2").unwrap();
        tree.add_sub_node(&"child1", "grandchild1").unwrap();

        let rendered = tree.to_term_tree();
        assert_eq!(rendered.root, "root");
        assert_eq!(rendered.leaves.len(), 2);
        assert_eq!(rendered.leaves[0].leaves[0].root, "grandchild1");

        let text = tree.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "root");
        assert!(lines[1].ends_with("child1"));
        assert!(lines[2].ends_with("grandchild1"));
        assert!(lines[3].ends_with("child2"));
    }
}
