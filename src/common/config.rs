//! Configuration constants for the B-tree index.

/// Smallest order a B-tree may be built with.
///
/// With fewer than two children per node a split has nowhere to put the
/// promoted key, so construction rejects anything below this.
pub const MIN_ORDER: usize = 2;

/// Order used by [`BTree::default`](crate::BTree).
///
/// 64 children per node keeps trees shallow for in-memory workloads:
/// - 1M keys fit in 4 levels
/// - a full node holds 63 keys, enough for binary search to matter
pub const DEFAULT_ORDER: usize = 64;

/// Spaces added per tree level in traversal dumps.
pub const TRAVERSE_INDENT: usize = 4;
