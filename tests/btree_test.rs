//! B-tree scenario tests.
//!
//! End-to-end insert/search behavior through the public API, including
//! the scenarios the index is expected to handle for every order.

use interchange_btree::{BTree, Error, Order};

fn build(order: usize, keys: &[i32]) -> BTree<i32> {
    let mut tree = BTree::new(order).unwrap();
    for &k in keys {
        tree.insert(k);
    }
    tree
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_validation() {
    assert_eq!(BTree::<i32>::new(0).unwrap_err(), Error::InvalidOrder(0));
    assert_eq!(BTree::<i32>::new(1).unwrap_err(), Error::InvalidOrder(1));

    let tree = BTree::<i32>::new(2).unwrap();
    assert_eq!(tree.order(), Order::new(2).unwrap());
}

#[test]
fn test_empty_tree_search() {
    let tree: BTree<i32> = BTree::new(3).unwrap();
    for k in [-1, 0, 10, i32::MAX] {
        assert!(!tree.search(&k));
    }
}

// ============================================================================
// Search scenarios
// ============================================================================

/// Three keys in an order-3 tree: the third insert grows the root.
#[test]
fn test_search_small() {
    let tree = build(3, &[10, 20, 5]);

    assert!(tree.search(&10));
    assert!(tree.search(&20));
    assert!(tree.search(&5));
    assert!(!tree.search(&99));
    tree.validate().unwrap();
}

/// Six keys force splits below the root as well as root growth.
#[test]
fn test_search_after_splits() {
    let keys = [10, 20, 30, 5, 6, 12];
    let tree = build(3, &keys);

    for k in keys {
        assert!(tree.search(&k), "missing key {}", k);
    }
    for k in [4, 7, 17, 21, 31] {
        assert!(!tree.search(&k), "unexpected key {}", k);
    }
    assert!(tree.height() > 1);
    tree.validate().unwrap();
}

#[test]
fn test_search_larger_mixed_order() {
    let keys = [10, 20, 30, 5, 6, 12, 7, 17];
    for order in 2..=6 {
        let tree = build(order, &keys);
        for k in keys {
            assert!(tree.search(&k), "order {}: missing {}", order, k);
        }
        assert!(!tree.search(&4));
        assert!(!tree.search(&21));
        tree.validate().unwrap();
    }
}

// ============================================================================
// Growth
// ============================================================================

#[test]
fn test_ascending_inserts() {
    let mut tree = BTree::new(5).unwrap();
    for k in 0..1_000 {
        tree.insert(k);
    }

    assert_eq!(tree.len(), 1_000);
    assert!((0..1_000).all(|k| tree.search(&k)));
    assert!(!tree.search(&1_000));
    tree.validate().unwrap();
}

#[test]
fn test_descending_inserts() {
    let mut tree = BTree::new(4).unwrap();
    for k in (0..1_000).rev() {
        tree.insert(k);
    }

    assert!((0..1_000).all(|k| tree.search(&k)));
    assert!(!tree.search(&-1));
    tree.validate().unwrap();
}

#[test]
fn test_height_stays_logarithmic() {
    let mut tree = BTree::new(8).unwrap();
    for k in 0..10_000u32 {
        // Scatter keys with a multiplicative hash.
        tree.insert(k.wrapping_mul(2_654_435_761));
    }

    // Order 8 splits leave 3 keys on each side, so fan-out is at least 4.
    let stats = tree.stats();
    assert!(stats.height <= 8, "height {}", stats.height);
    assert_eq!(stats.keys, 10_000);
    tree.validate().unwrap();
}

#[test]
fn test_root_growth_never_loses_keys() {
    for order in 2..=7 {
        let mut tree = BTree::new(order).unwrap();
        for k in 0..50 {
            let root_full = tree
                .root()
                .is_some_and(|root| root.keys().len() == order - 1);
            let height_before = tree.height();

            tree.insert(k);

            let expected = if height_before == 0 || root_full {
                height_before + 1
            } else {
                height_before
            };
            assert_eq!(tree.height(), expected, "order {} key {}", order, k);
            assert!((0..=k).all(|prev| tree.search(&prev)));
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_display_lists_keys_in_order() {
    let tree = build(3, &[10, 20, 30, 5, 6, 12]);
    let dump = format!("{}", tree);

    let keys: Vec<i32> = dump
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect();
    assert_eq!(keys, vec![5, 6, 10, 12, 20, 30]);
}

#[test]
fn test_stats_match_len() {
    let tree = build(4, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
    let stats = tree.stats();

    assert_eq!(stats.keys, tree.len());
    assert_eq!(stats.height, tree.height());
    assert!(stats.fill_factor() > 0.0 && stats.fill_factor() <= 1.0);
}
