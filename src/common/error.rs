//! Error types for the B-tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the B-tree index.
///
/// Capacity violations inside a node are not errors: `insert_key` and
/// `insert_child` report them with `false`, and the insertion algorithm
/// never triggers them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested order is below [`MIN_ORDER`](super::config::MIN_ORDER).
    #[error("Invalid order {0}: a B-tree requires an order of at least 2")]
    InvalidOrder(usize),

    /// A structural check found a broken invariant.
    ///
    /// This indicates a bug in the insertion algorithm.
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),
}
