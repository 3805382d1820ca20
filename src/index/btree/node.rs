//! B-tree node: key storage, splitting, and the recursive walks.

use std::fmt;

use crate::common::config::TRAVERSE_INDENT;
use crate::common::{Order, Result};

/// A single B-tree node.
///
/// Holds up to `order - 1` sorted keys. An internal node owns exactly one
/// more child than it has keys; a leaf owns none. Each child lives in exactly
/// one slot of its parent's `children`, so relocating a subtree is a move.
///
/// # Example
/// ```
/// use interchange_btree::index::btree::Node;
///
/// let mut leaf: Node<i32> = Node::new(3, true).unwrap();
/// assert!(leaf.insert_key(20));
/// assert!(leaf.insert_key(10));
/// assert!(!leaf.insert_key(30)); // full: order 3 holds 2 keys
/// assert_eq!(leaf.keys(), &[10, 20]);
/// ```
#[derive(Debug)]
pub struct Node<T> {
    keys: Vec<T>,
    children: Vec<Node<T>>,
    is_leaf: bool,
    order: Order,
}

impl<T: Ord> Node<T> {
    /// Create an empty node.
    ///
    /// Returns [`Error::InvalidOrder`](crate::Error::InvalidOrder) if
    /// `order < 2`.
    pub fn new(order: usize, is_leaf: bool) -> Result<Self> {
        Ok(Self::with_order(Order::new(order)?, is_leaf))
    }

    /// Create an empty node from an already validated order.
    pub(crate) fn with_order(order: Order, is_leaf: bool) -> Self {
        Self {
            keys: Vec::with_capacity(order.max_keys()),
            children: Vec::new(),
            is_leaf,
            order,
        }
    }

    /// Keys stored in this node, in sorted order.
    #[inline]
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Children of this node (empty for a leaf).
    #[inline]
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Check if the node holds `order - 1` keys.
    #[inline]
    pub fn has_max_keys(&self) -> bool {
        self.keys.len() == self.order.max_keys()
    }

    /// Check if the node holds `order` children.
    #[inline]
    pub fn has_max_children(&self) -> bool {
        self.children.len() == self.order.max_children()
    }

    /// First position whose key is not less than `key`.
    #[inline]
    fn lower_bound(&self, key: &T) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Insert a key at its sorted position.
    ///
    /// Returns `false` and leaves the node untouched if it is already full.
    /// Equal keys are not merged.
    #[must_use]
    pub fn insert_key(&mut self, key: T) -> bool {
        if self.has_max_keys() {
            return false;
        }
        let pos = self.lower_bound(&key);
        self.keys.insert(pos, key);
        true
    }

    /// Insert a child at `index`, shifting later children right.
    ///
    /// Returns `false` if the node already has `order` children. The caller
    /// picks an `index` consistent with the key ordering.
    #[must_use]
    pub fn insert_child(&mut self, index: usize, child: Node<T>) -> bool {
        if self.has_max_children() {
            return false;
        }
        self.children.insert(index, child);
        true
    }

    /// Search `key` in the subtree rooted at this node.
    pub fn search(&self, key: &T) -> bool {
        let i = self.lower_bound(key);

        if self.keys.get(i).is_some_and(|k| k == key) {
            return true;
        }
        if self.is_leaf {
            return false;
        }

        self.children[i].search(key)
    }

    /// Split the full child at `children[index]` around its median key.
    ///
    /// The child keeps the keys (and children) before the median, a new right
    /// sibling takes the ones after it, and the median is promoted into this
    /// node with the sibling attached at `index + 1`.
    ///
    /// The child must be full and this node must have room for one more key
    /// and one more child.
    pub fn split_child(&mut self, index: usize) {
        let order = self.order;
        let mid = order.split_index();

        let child = &mut self.children[index];
        debug_assert!(child.has_max_keys(), "split of a non-full child");

        let mut sibling = Node::with_order(order, child.is_leaf);

        // Keys at mid.. leave the child; the first of them is the median.
        let mut upper = child.keys.split_off(mid);
        let median = upper.remove(0);
        sibling.keys = upper;

        if !child.is_leaf {
            sibling.children = child.children.split_off(mid + 1);
        }

        tracing::trace!(
            target: "btree::split",
            index,
            left_keys = child.keys.len(),
            right_keys = sibling.keys.len(),
            leaf = child.is_leaf,
            "split full child"
        );

        let promoted = self.insert_key(median);
        debug_assert!(promoted, "parent full during split");
        let attached = self.insert_child(index + 1, sibling);
        debug_assert!(attached, "parent out of child slots during split");
    }

    /// Insert `key` into a subtree whose root is known not to be full.
    ///
    /// Full children met on the way down are split before descending, so
    /// every node this recurses into has room for the key.
    pub fn insert_non_full(&mut self, key: T) -> bool {
        if self.is_leaf {
            return self.insert_key(key);
        }

        let mut index = self.lower_bound(&key);

        if self.children[index].has_max_keys() {
            self.split_child(index);

            // The promoted key now sits at `index`; larger keys go right.
            if self.keys[index] < key {
                index += 1;
            }
        }

        self.children[index].insert_non_full(key)
    }
}

impl<T: fmt::Display> Node<T> {
    /// Write an in-order dump of this subtree into `out`.
    ///
    /// Each key is on its own line, indented by depth, with the child before
    /// it dumped first. Diagnostic only; the format is not stable.
    pub fn traverse<W: fmt::Write>(&self, level: usize, out: &mut W) -> fmt::Result {
        let indent = " ".repeat(level * TRAVERSE_INDENT);

        for (i, key) in self.keys.iter().enumerate() {
            if let Some(child) = self.children.get(i) {
                child.traverse(level + 1, out)?;
            }
            writeln!(out, "{}{}", indent, key)?;
        }

        if let Some(last) = self.children.get(self.keys.len()) {
            last.traverse(level + 1, out)?;
        }

        Ok(())
    }
}
