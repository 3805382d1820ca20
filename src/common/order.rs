//! Validated B-tree order.

use std::fmt;

use super::config::{DEFAULT_ORDER, MIN_ORDER};
use super::error::{Error, Result};

/// The order `m` of a B-tree: the maximum number of children per node.
///
/// A node of order `m` holds at most `m - 1` keys and `m` children.
/// An `Order` only comes from [`Order::new`] or the default, so every node
/// built from one is guaranteed a well-defined split.
///
/// # Example
/// ```
/// use interchange_btree::Order;
///
/// let order = Order::new(4).unwrap();
/// assert_eq!(order.max_keys(), 3);
/// assert_eq!(order.max_children(), 4);
/// assert!(Order::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(usize);

impl Order {
    /// Validate and wrap an order.
    ///
    /// Returns [`Error::InvalidOrder`] if `order < 2`.
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder(order));
        }
        Ok(Order(order))
    }

    /// The raw order value.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Maximum keys per node (`m - 1`).
    #[inline]
    pub fn max_keys(&self) -> usize {
        self.0 - 1
    }

    /// Maximum children per node (`m`).
    #[inline]
    pub fn max_children(&self) -> usize {
        self.0
    }

    /// Position of the promoted key within a full node (`(m - 1) / 2`).
    ///
    /// Keys before it stay in the split node, keys after it move to the
    /// new right sibling.
    #[inline]
    pub fn split_index(&self) -> usize {
        (self.0 - 1) / 2
    }
}

impl Default for Order {
    fn default() -> Self {
        Order(DEFAULT_ORDER)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_rejects_below_two() {
        assert_eq!(Order::new(0), Err(Error::InvalidOrder(0)));
        assert_eq!(Order::new(1), Err(Error::InvalidOrder(1)));
        assert!(Order::new(2).is_ok());
    }

    #[test]
    fn test_order_bounds() {
        let order = Order::new(5).unwrap();
        assert_eq!(order.get(), 5);
        assert_eq!(order.max_keys(), 4);
        assert_eq!(order.max_children(), 5);
    }

    #[test]
    fn test_split_index() {
        assert_eq!(Order::new(2).unwrap().split_index(), 0);
        assert_eq!(Order::new(3).unwrap().split_index(), 1);
        assert_eq!(Order::new(4).unwrap().split_index(), 1);
        assert_eq!(Order::new(5).unwrap().split_index(), 2);
    }

    #[test]
    fn test_default_order() {
        assert_eq!(Order::default().get(), DEFAULT_ORDER);
    }

    #[test]
    fn test_order_display() {
        assert_eq!(format!("{}", Order::new(3).unwrap()), "Order(3)");
    }
}
