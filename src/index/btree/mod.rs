//! B-tree index implementation.
//!
//! An in-memory B-tree over any `T: Ord`, built from two layers:
//! - [`Node`] - key storage, child splitting, recursive search and traversal
//! - [`BTree`] - root ownership and growth, the public insert/search API
//!
//! Insertion is single-pass and top-down: every full node met on the way to
//! a leaf is split before descending into it, so the parent always has room
//! for the promoted key. The tree grows only when the root itself is full.
//!
//! Deletion, iteration, and persistence are not provided.

mod node;
mod stats;
mod tree;

pub use node::Node;
pub use stats::TreeStats;
pub use tree::BTree;
