//! # primer-tree
//!
//! A persistent binary search tree.
//!
//! Every update returns a new tree and leaves the old one valid. Subtrees
//! that an insertion does not touch are shared between the versions through
//! `Arc`, so keeping many versions around costs O(depth) per insertion.
//!
//! The tree does not rebalance: inserting keys in sorted order produces a
//! tree of depth n.
//!
//! ```
//! use primer_tree::StringTree;
//!
//! let tree: StringTree = ["b", "a", "c"].into_iter().map(String::from).collect();
//! assert_eq!(tree.to_string(), "((a)b(c))");
//!
//! let bigger = tree.insert("d".to_string());
//! assert!(bigger.contains("d"));
//! assert!(!tree.contains("d"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod iter;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use iter::Iter;
pub use tree::{Branch, SearchTree, StringTree};
