//! Arity-bounded generic trees and their traversals.
//!
//! A [`Tree<T, K>`] owns its nodes outright: every [`Node`] holds its
//! children by value and no node knows its parent. Trees grow by value:
//! [`Tree::add_sub_node`] finds the parent by equality, checks that it
//! has room for another child, and appends a new node.
//!
//! ```
//! use ktree::{Tree, TreeError};
//!
//! let mut tree: Tree<f64> = Tree::new();
//! tree.add_root(1.1)?;
//! tree.add_sub_node(&1.1, 1.2)?;
//! tree.add_sub_node(&1.1, 1.3)?;
//! assert_eq!(tree.add_sub_node(&1.1, 1.4), Err(TreeError::CapacityExceeded { arity: 2 }));
//!
//! let pre: Vec<f64> = tree.pre_order().values().copied().collect();
//! assert_eq!(pre, vec![1.1, 1.2, 1.3]);
//! # Ok::<(), TreeError>(())
//! ```

pub mod cli;
pub mod complex;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod node;
pub mod render;
pub mod samples;
pub mod traversal;
pub mod tree;
pub mod util;

pub use complex::Complex;
pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use render::ToTermTree;
pub use traversal::{Order, Traversal};
pub use tree::Tree;
