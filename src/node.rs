use std::fmt;

/// A single tree vertex: a value plus its exclusively owned children.
///
/// A `Node` built with [`Node::new`] outside a tree is only a template:
/// the tree copies its value into a fresh node when attaching, the
/// template itself never becomes part of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// Payload, never mutated after construction
    value: T,
    /// Owned children in insertion order
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Children in insertion order. Index 0 is the left child and index 1
    /// the right child for binary trees.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a new childless node holding `value` and returns it.
    ///
    /// No arity check happens here, the owning tree enforces its bound
    /// before calling this.
    pub fn push_child(&mut self, value: T) -> &mut Node<T> {
        self.children.push(Node::new(value));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node<T>> {
        &mut self.children
    }

    pub(crate) fn take_children(&mut self) -> Vec<Node<T>> {
        std::mem::take(&mut self.children)
    }
}

impl<T: Clone> Node<T> {
    /// Appends a copy of `prototype`'s value as a new child.
    /// The prototype's own children are not copied.
    pub fn add_child(&mut self, prototype: &Node<T>) -> &mut Node<T> {
        self.push_child(prototype.value.clone())
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_template_with_children_when_add_child_then_copies_value_only() {
        let mut template = Node::new(2);
        template.push_child(5);

        let mut parent = Node::new(1);
        parent.add_child(&template);

        assert_eq!(parent.child_count(), 1);
        assert_eq!(*parent.children()[0].value(), 2);
        assert!(parent.children()[0].is_leaf());
        // template untouched
        assert_eq!(template.child_count(), 1);
    }

    #[test]
    fn given_node_when_pushing_children_then_keeps_insertion_order() {
        let mut node = Node::new("root");
        node.push_child("a");
        node.push_child("b").push_child("b1");
        node.push_child("c");

        let values: Vec<_> = node.children().iter().map(|c| *c.value()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(*node.children()[1].children()[0].value(), "b1");
    }

    #[test]
    fn given_node_when_displayed_then_shows_value() {
        assert_eq!(Node::new(1.5).to_string(), "1.5");
    }
}
