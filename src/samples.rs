//! Ready-made trees used by `ktree demo` and by the tests.

use crate::complex::Complex;
use crate::errors::TreeResult;
use crate::node::Node;
use crate::tree::Tree;

/// ```text
///       1.1
///     /     \
///   1.2     1.3
///   / \     /
/// 1.4 1.5 1.6
/// ```
///
/// Built from template nodes, the way callers holding `Node` values do it.
pub fn binary_f64() -> TreeResult<Tree<f64>> {
    let root = Node::new(1.1);
    let [n1, n2, n3, n4, n5] = [1.2, 1.3, 1.4, 1.5, 1.6].map(Node::new);

    let mut tree = Tree::new();
    tree.add_root_node(&root)?;
    tree.add_sub_node_from(&root, &n1)?;
    tree.add_sub_node_from(&root, &n2)?;
    tree.add_sub_node_from(&n1, &n3)?;
    tree.add_sub_node_from(&n1, &n4)?;
    tree.add_sub_node_from(&n2, &n5)?;
    Ok(tree)
}

/// ```text
///          1
///       /  |  \
///      2   3   4
///    / | \  |\
///   5  6  7 8 9
/// ```
pub fn ternary_i32() -> TreeResult<Tree<i32, 3>> {
    let mut tree = Tree::new();
    tree.add_root(1)?;
    for (parent, child) in [(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (2, 7), (3, 8), (3, 9)] {
        tree.add_sub_node(&parent, child)?;
    }
    Ok(tree)
}

/// ```text
///           1+1i
///          /    \
///       2+2i    3+3i
///       /  \    /  \
///    4+4i 5+5i 6+6i 7+7i
/// ```
pub fn complex_binary() -> TreeResult<Tree<Complex>> {
    let c = |n: f64| Complex::new(n, n);
    let mut tree = Tree::new();
    tree.add_root(c(1.0))?;
    for (parent, child) in [(1.0, 2.0), (1.0, 3.0), (2.0, 4.0), (2.0, 5.0), (3.0, 6.0), (3.0, 7.0)] {
        tree.add_sub_node(&c(parent), c(child))?;
    }
    Ok(tree)
}
