use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;

/// Rooted tree in which every node owns at most `K` children.
///
/// `K` defaults to 2, which gives binary semantics for the in-order
/// family of traversals (see [`crate::traversal`]).
///
/// Parents are located by value, not by identity: attaching under a value
/// that occurs several times picks the first match in pre-order (root,
/// then children left to right, depth first).
#[derive(Debug)]
pub struct Tree<T, const K: usize = 2> {
    /// None until `add_root` is called, never removed afterwards
    root: Option<Node<T>>,
}

impl<T, const K: usize> Default for Tree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> Tree<T, K> {
    const ARITY_IS_POSITIVE: () = assert!(K > 0, "tree arity must be at least 1");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY_IS_POSITIVE;
        Self { root: None }
    }

    /// Maximum number of children per node.
    pub fn arity(&self) -> usize {
        K
    }

    pub fn is_binary(&self) -> bool {
        K == 2
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Installs a new root holding `value`.
    ///
    /// # Errors
    /// [`TreeError::DuplicateRoot`] if the tree already has a root; the
    /// existing root is kept.
    #[instrument(level = "debug", skip_all, fields(arity = K))]
    pub fn add_root(&mut self, value: T) -> TreeResult<()> {
        if self.root.is_some() {
            debug!("rejecting second root");
            return Err(TreeError::DuplicateRoot);
        }
        self.root = Some(Node::new(value));
        Ok(())
    }

    /// Total number of nodes.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = &self.root {
            queue.push_back((root, 1)); // (node, depth)
        }

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Nodes without children, left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn leaves(&self) -> Vec<&Node<T>> {
        let mut leaves = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves.push(node);
            } else {
                // reverse push keeps left-to-right output
                stack.extend(node.children().iter().rev());
            }
        }
        leaves
    }
}

impl<T: PartialEq, const K: usize> Tree<T, K> {
    /// Attaches a new node holding `child` under the first node (in
    /// pre-order) whose value equals `parent`.
    ///
    /// # Errors
    /// - [`TreeError::MissingRoot`] if the tree has no root
    /// - [`TreeError::ParentNotFound`] if no node equals `parent`
    /// - [`TreeError::CapacityExceeded`] if that node already has `K` children
    ///
    /// On error the tree is unchanged.
    #[instrument(level = "debug", skip_all, fields(arity = K))]
    pub fn add_sub_node(&mut self, parent: &T, child: T) -> TreeResult<()> {
        let root = self.root.as_mut().ok_or(TreeError::MissingRoot)?;
        let path = locate(root, parent).ok_or_else(|| {
            debug!("no node matches the parent value");
            TreeError::ParentNotFound
        })?;

        let mut target = root;
        for idx in path {
            target = &mut target.children_mut()[idx];
        }

        if target.child_count() >= K {
            debug!(children = target.child_count(), "parent is full");
            return Err(TreeError::CapacityExceeded { arity: K });
        }

        target.push_child(child);
        trace!(children = target.child_count(), "attached child");
        Ok(())
    }

    /// First node in pre-order whose value equals `value`.
    #[instrument(level = "trace", skip_all)]
    pub fn find_node(&self, value: &T) -> Option<&Node<T>> {
        let root = self.root.as_ref()?;
        let path = locate(root, value)?;
        Some(
            path.into_iter()
                .fold(root, |node, idx| &node.children()[idx]),
        )
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }
}

impl<T: Clone + PartialEq, const K: usize> Tree<T, K> {
    /// [`Tree::add_root`] taking a template node; only its value is used.
    pub fn add_root_node(&mut self, prototype: &Node<T>) -> TreeResult<()> {
        self.add_root(prototype.value().clone())
    }

    /// [`Tree::add_sub_node`] taking template nodes; only their values are used.
    pub fn add_sub_node_from(&mut self, parent: &Node<T>, child: &Node<T>) -> TreeResult<()> {
        self.add_sub_node(parent.value(), child.value().clone())
    }
}

impl<T, const K: usize> Drop for Tree<T, K> {
    /// Releases nodes iteratively in post-order, so deep trees cannot
    /// overflow the stack through recursive drops.
    fn drop(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };
        let mut stack = vec![root];
        while let Some(mut node) = stack.pop() {
            if node.is_leaf() {
                drop(node);
                continue;
            }
            let children = node.take_children();
            stack.push(node);
            stack.extend(children.into_iter().rev());
        }
    }
}

/// Child-index path from `root` to the first pre-order node equal to
/// `value`. An empty path means the root itself.
fn locate<T: PartialEq>(root: &Node<T>, value: &T) -> Option<Vec<usize>> {
    if root.value() == value {
        return Some(Vec::new());
    }

    let mut path = Vec::new();
    let mut stack = vec![root.children().iter().enumerate()];
    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            Some((idx, child)) => {
                path.push(idx);
                if child.value() == value {
                    return Some(path);
                }
                stack.push(child.children().iter().enumerate());
            }
            None => {
                stack.pop();
                path.pop();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    fn sample() -> Tree<i32> {
        //      10
        //     /  \
        //   20    30
        //   |
        //   40
        let mut tree = Tree::new();
        tree.add_root(10).unwrap();
        tree.add_sub_node(&10, 20).unwrap();
        tree.add_sub_node(&10, 30).unwrap();
        tree.add_sub_node(&20, 40).unwrap();
        tree
    }

    #[test]
    fn given_new_tree_when_inspected_then_is_empty() {
        let tree: Tree<i32> = Tree::new();
        assert!(tree.root().is_none());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.leaves().is_empty());
        assert_eq!(tree.arity(), 2);
        assert!(tree.is_binary());
    }

    #[test]
    fn given_tree_when_locating_then_returns_index_path() {
        let tree = sample();
        let root = tree.root().unwrap();
        assert_eq!(locate(root, &10), Some(vec![]));
        assert_eq!(locate(root, &30), Some(vec![1]));
        assert_eq!(locate(root, &40), Some(vec![0, 0]));
        assert_eq!(locate(root, &99), None);
    }

    #[test]
    fn given_tree_when_measuring_then_reports_len_depth_and_leaves() {
        let tree = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
        let leaves: Vec<_> = tree.leaves().iter().map(|n| *n.value()).collect();
        assert_eq!(leaves, vec![40, 30]);
    }

    #[test]
    fn given_full_parent_when_adding_then_error_reports_arity() {
        let mut tree: Tree<i32, 1> = Tree::new();
        tree.add_root(1).unwrap();
        tree.add_sub_node(&1, 2).unwrap();
        assert_eq!(
            tree.add_sub_node(&1, 3),
            Err(TreeError::CapacityExceeded { arity: 1 })
        );
        assert_eq!(tree.root().unwrap().child_count(), 1);
    }

    #[test]
    fn given_very_deep_tree_when_dropped_then_does_not_overflow() {
        let mut tree: Tree<u32, 1> = Tree::new();
        tree.add_root(0).unwrap();
        // build a chain by hand: value lookup would make this quadratic
        let mut node = tree.root.as_mut().unwrap();
        for i in 1..200_000 {
            node = node.push_child(i);
        }
        assert_eq!(tree.depth(), 200_000);
        drop(tree);
    }
}
