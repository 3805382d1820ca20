//! InterchangeDB B-tree - a generic in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      interchange_btree                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                BTree<T> (index/btree/tree)               │   │
//! │  │     insert · search · root growth · validate · stats     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Node<T> (index/btree/node)                │   │
//! │  │   insert_key · insert_child · split_child · search       │   │
//! │  │            insert_non_full · traverse                    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                    common/                               │   │
//! │  │            Order · Error · config constants              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Order, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use interchange_btree::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for key in [10, 20, 30, 5, 6, 12] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.search(&12));
//! assert!(!tree.search(&7));
//! assert!(tree.height() > 1);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, Order, Result};

pub use index::btree::{BTree, Node, TreeStats};
