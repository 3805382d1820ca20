//! The B-tree: root ownership, root growth, and the public entry points.

use std::fmt;

use super::node::Node;
use super::stats::TreeStats;
use crate::common::{Error, Order, Result};

/// A generic in-memory B-tree over a totally ordered key type.
///
/// Insertion splits full nodes on the way down, so the tree only ever grows
/// at the root and every leaf stays at the same depth. Duplicate keys are
/// stored as separate entries.
///
/// Not internally synchronized: mutate from one thread at a time.
///
/// # Example
/// ```
/// use interchange_btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(5);
///
/// assert!(tree.search(&10));
/// assert!(!tree.search(&99));
/// ```
#[derive(Debug)]
pub struct BTree<T> {
    root: Option<Node<T>>,
    order: Order,
    len: usize,
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree of the given order.
    ///
    /// Returns [`Error::InvalidOrder`] if `order < 2`.
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self::with_order(Order::new(order)?))
    }

    /// Create an empty tree from an already validated order.
    pub fn with_order(order: Order) -> Self {
        tracing::debug!(order = order.get(), "creating btree");
        Self {
            root: None,
            order,
            len: 0,
        }
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of keys inserted, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root.as_ref();
        while let Some(node) = current {
            height += 1;
            current = node.children().first();
        }
        height
    }

    /// Insert a key.
    ///
    /// A full root is split first, adding one level to the tree; the key is
    /// then inserted into the grown tree.
    pub fn insert(&mut self, key: T) {
        let inserted = match self.root.take() {
            None => {
                let mut root = Node::with_order(self.order, true);
                let inserted = root.insert_key(key);
                self.root = Some(root);
                inserted
            }
            Some(old_root) if old_root.has_max_keys() => {
                let mut root = Node::with_order(self.order, false);
                let attached = root.insert_child(0, old_root);
                debug_assert!(attached, "fresh root out of child slots");
                root.split_child(0);

                let inserted = root.insert_non_full(key);
                self.root = Some(root);
                tracing::debug!(height = self.height(), "grew btree root");
                inserted
            }
            Some(mut root) => {
                let inserted = root.insert_non_full(key);
                self.root = Some(root);
                inserted
            }
        };

        debug_assert!(inserted, "insert hit a full node");
        if inserted {
            self.len += 1;
        }
    }

    /// Check whether a key comparing equal to `key` is present.
    pub fn search(&self, key: &T) -> bool {
        match &self.root {
            None => false,
            Some(root) => root.search(key),
        }
    }

    /// Take a structural snapshot of the tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            height: self.height(),
            max_keys_per_node: self.order.max_keys(),
            ..TreeStats::default()
        };

        let mut stack: Vec<&Node<T>> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            stats.nodes += 1;
            stats.keys += node.keys().len();
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stack.extend(node.children());
        }

        stats
    }

    /// Walk the whole tree and check every structural invariant.
    ///
    /// Returns [`Error::InvariantViolation`] describing the first problem
    /// found. Intended for tests and debugging; runs in O(n).
    pub fn validate(&self) -> Result<()> {
        let Some(root) = self.root.as_ref() else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(Error::InvariantViolation(format!(
                    "empty tree reports {} keys",
                    self.len
                )))
            };
        };

        let mut check = Validator {
            order: self.order,
            leaf_depth: None,
            keys: 0,
        };
        check.node(root, None, None, 0)?;

        if check.keys != self.len {
            return Err(Error::InvariantViolation(format!(
                "tree holds {} keys but reports {}",
                check.keys, self.len
            )));
        }
        Ok(())
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        Self::with_order(Order::default())
    }
}

impl<T: Ord + fmt::Display> BTree<T> {
    /// Dump the tree to stdout, one key per line, indented by depth.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl<T: fmt::Display> fmt::Display for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => Ok(()),
            Some(root) => root.traverse(0, f),
        }
    }
}

/// Recursive state for [`BTree::validate`].
struct Validator {
    order: Order,
    leaf_depth: Option<usize>,
    keys: usize,
}

impl Validator {
    fn node<T: Ord>(
        &mut self,
        node: &Node<T>,
        lower: Option<&T>,
        upper: Option<&T>,
        depth: usize,
    ) -> Result<()> {
        let keys = node.keys();
        let children = node.children();

        if node.order() != self.order {
            return violation(
                depth,
                format!("node has {} in a tree of {}", node.order(), self.order),
            );
        }
        if keys.len() > self.order.max_keys() {
            return violation(
                depth,
                format!("{} keys exceeds maximum {}", keys.len(), self.order.max_keys()),
            );
        }
        if keys.windows(2).any(|w| w[0] > w[1]) {
            return violation(depth, "keys out of order".to_string());
        }
        if lower.is_some_and(|lo| keys.iter().any(|k| k < lo))
            || upper.is_some_and(|hi| keys.iter().any(|k| k > hi))
        {
            return violation(
                depth,
                "key outside its parent's separator range".to_string(),
            );
        }

        self.keys += keys.len();

        if node.is_leaf() {
            if !children.is_empty() {
                return violation(depth, format!("leaf owns {} children", children.len()));
            }
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(d) if d != depth => {
                    return violation(depth, format!("leaf depth differs from {}", d));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if children.len() != keys.len() + 1 {
            return violation(
                depth,
                format!("{} children for {} keys", children.len(), keys.len()),
            );
        }

        for (i, child) in children.iter().enumerate() {
            let lo = if i == 0 { lower } else { keys.get(i - 1) };
            let hi = keys.get(i).or(upper);
            self.node(child, lo, hi, depth + 1)?;
        }
        Ok(())
    }
}

fn violation(depth: usize, message: String) -> Result<()> {
    Err(Error::InvariantViolation(format!("depth {}: {}", depth, message)))
}
