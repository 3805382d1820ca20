//! Structural statistics for a B-tree.

use std::fmt;

/// A point-in-time snapshot of a tree's shape.
///
/// Computed by walking the tree, so it is always consistent with the tree
/// it was taken from and can be freely copied, printed, and compared.
///
/// # Example
/// ```
/// use interchange_btree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for k in 0..10 {
///     tree.insert(k);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.keys, 10);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TreeStats {
    /// Number of levels (0 for an empty tree).
    pub height: usize,
    /// Total number of nodes.
    pub nodes: usize,
    /// Number of leaf nodes.
    pub leaves: usize,
    /// Total number of keys across all nodes.
    pub keys: usize,
    /// Maximum keys per node for the tree's order.
    pub max_keys_per_node: usize,
}

impl TreeStats {
    /// Fraction of key slots in use (0.0 to 1.0).
    pub fn fill_factor(&self) -> f64 {
        let capacity = self.nodes * self.max_keys_per_node;
        if capacity == 0 {
            0.0
        } else {
            self.keys as f64 / capacity as f64
        }
    }

    /// Number of internal (non-leaf) nodes.
    pub fn internal_nodes(&self) -> usize {
        self.nodes - self.leaves
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ height: {}, nodes: {}, leaves: {}, keys: {}, fill: {:.2}% }}",
            self.height,
            self.nodes,
            self.leaves,
            self.keys,
            self.fill_factor() * 100.0
        )
    }
}
