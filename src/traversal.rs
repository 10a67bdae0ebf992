//! Traversal engine.
//!
//! Every traversal eagerly collects references to all nodes into a fresh
//! [`Traversal`] snapshot and hands it back as an iterator. Snapshots are
//! independent of each other; running a traversal twice builds two
//! separate sequences. A snapshot borrows the tree, so the tree cannot be
//! mutated while one is alive.
//!
//! Pre-order, post-order and in-order are binary-tree orders. For any
//! arity other than 2 they fall back to depth-first order.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::node::Node;
use crate::tree::Tree;

/// The traversal kinds a tree can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    PreOrder,
    PostOrder,
    InOrder,
    Bfs,
    Dfs,
    Heap,
}

impl Order {
    pub const ALL: [Order; 6] = [
        Order::PreOrder,
        Order::PostOrder,
        Order::InOrder,
        Order::Bfs,
        Order::Dfs,
        Order::Heap,
    ];

    /// True for the orders that only have a meaning on binary trees.
    pub fn is_binary_only(self) -> bool {
        matches!(self, Order::PreOrder | Order::PostOrder | Order::InOrder)
    }

    pub fn label(self) -> &'static str {
        match self {
            Order::PreOrder => "Pre-Order",
            Order::PostOrder => "Post-Order",
            Order::InOrder => "In-Order",
            Order::Bfs => "BFS",
            Order::Dfs => "DFS",
            Order::Heap => "Heap",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a tree walk: forward-only, single pass, finite.
#[derive(Debug)]
pub struct Traversal<'a, T> {
    /// Order actually used to build the snapshot (DFS after a fallback)
    order: Order,
    nodes: std::vec::IntoIter<&'a Node<T>>,
}

impl<'a, T> Traversal<'a, T> {
    fn new(order: Order, nodes: Vec<&'a Node<T>>) -> Self {
        trace!(%order, nodes = nodes.len(), "traversal snapshot built");
        Self {
            order,
            nodes: nodes.into_iter(),
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Nodes not yet yielded.
    pub fn remaining(&self) -> &[&'a Node<T>] {
        self.nodes.as_slice()
    }

    /// Maps the remaining nodes to their values.
    pub fn values(self) -> impl Iterator<Item = &'a T> {
        self.map(|node| node.value())
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}

impl<T, const K: usize> Tree<T, K> {
    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn pre_order(&self) -> Traversal<'_, T> {
        if K != 2 {
            return self.dfs();
        }
        Traversal::new(Order::PreOrder, pre_order_nodes(self.root()))
    }

    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn post_order(&self) -> Traversal<'_, T> {
        if K != 2 {
            return self.dfs();
        }
        Traversal::new(Order::PostOrder, post_order_nodes(self.root()))
    }

    /// Left subtree, node, right subtree. Only the first two children of a
    /// node take part; any further children are left out.
    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn in_order(&self) -> Traversal<'_, T> {
        if K != 2 {
            return self.dfs();
        }
        Traversal::new(Order::InOrder, in_order_nodes(self.root()))
    }

    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn bfs(&self) -> Traversal<'_, T> {
        Traversal::new(Order::Bfs, bfs_nodes(self.root()))
    }

    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn dfs(&self) -> Traversal<'_, T> {
        Traversal::new(Order::Dfs, pre_order_nodes(self.root()))
    }

    /// Default iteration order (breadth-first).
    pub fn iter(&self) -> Traversal<'_, T> {
        self.bfs()
    }
}

impl<T: PartialOrd, const K: usize> Tree<T, K> {
    /// All nodes sorted by value, largest first. Equal values keep their
    /// depth-first relative order.
    ///
    /// Values that do not compare with themselves (such as `f64::NAN`) go
    /// last, in depth-first order.
    #[instrument(level = "trace", skip_all, fields(arity = K))]
    pub fn heap_order(&self) -> Traversal<'_, T> {
        Traversal::new(Order::Heap, heap_nodes(self.root()))
    }

    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        match order {
            Order::PreOrder => self.pre_order(),
            Order::PostOrder => self.post_order(),
            Order::InOrder => self.in_order(),
            Order::Bfs => self.bfs(),
            Order::Dfs => self.dfs(),
            Order::Heap => self.heap_order(),
        }
    }
}

impl<'a, T, const K: usize> IntoIterator for &'a Tree<T, K> {
    type Item = &'a Node<T>;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn pre_order_nodes<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        // Push children in reverse order for left-to-right traversal
        stack.extend(node.children().iter().rev());
    }
    nodes
}

fn post_order_nodes<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<(&Node<T>, bool)> = root.into_iter().map(|n| (n, false)).collect();
    while let Some((node, visited)) = stack.pop() {
        if visited {
            nodes.push(node);
        } else {
            stack.push((node, true));
            for child in node.children().iter().rev() {
                stack.push((child, false));
            }
        }
    }
    nodes
}

fn in_order_nodes<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<(&Node<T>, bool)> = root.into_iter().map(|n| (n, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            nodes.push(node);
            continue;
        }
        let children = node.children();
        if let Some(right) = children.get(1) {
            stack.push((right, false));
        }
        stack.push((node, true));
        if let Some(left) = children.first() {
            stack.push((left, false));
        }
    }
    nodes
}

fn bfs_nodes<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut nodes = Vec::new();
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        nodes.push(node);
        queue.extend(node.children());
    }
    nodes
}

fn heap_nodes<T: PartialOrd>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let (mut nodes, unordered): (Vec<_>, Vec<_>) = pre_order_nodes(root)
        .into_iter()
        .partition(|n| n.value().partial_cmp(n.value()).is_some());
    // stable sort, comparable values only, so the comparator is a total preorder
    nodes.sort_by(|a, b| {
        b.value()
            .partial_cmp(a.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    nodes.extend(unordered);
    nodes
}
