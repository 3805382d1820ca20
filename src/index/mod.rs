//! Index structures.
//!
//! - [`btree`] - Generic in-memory B-tree

pub mod btree;
