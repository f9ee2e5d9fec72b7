use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use wbtree::wbtree_map;
use wbtree::{Subtree, WBTreeMap};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// The weight-balance ratio every node must respect.
const DELTA: usize = 3;

/// Generates keys in a range small enough to cause collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Structural validation through `Subtree` views ───────────────────────────

/// Checks key order, cached sizes and weight balance below `node`, returning its size.
fn validate_subtree<K: Ord + std::fmt::Debug, V>(node: Subtree<'_, K, V>, low: Option<&K>, high: Option<&K>) -> usize {
    let key = node.key();
    if let Some(low) = low {
        assert!(low < key, "{low:?} must sort before {key:?}");
    }
    if let Some(high) = high {
        assert!(key < high, "{key:?} must sort before {high:?}");
    }

    let left = node.left().map_or(0, |l| validate_subtree(l, low, Some(key)));
    let right = node.right().map_or(0, |r| validate_subtree(r, Some(key), high));

    assert_eq!(node.len(), left + right + 1, "cached size of {key:?} is stale");
    assert!((left + 1) * DELTA >= right + 1, "{key:?} is right-heavy: {left} vs {right}");
    assert!((right + 1) * DELTA >= left + 1, "{key:?} is left-heavy: {left} vs {right}");
    left + right + 1
}

fn validate<K: Ord + std::fmt::Debug, V>(map: &WBTreeMap<K, V>) {
    let size = map.root().map_or(0, |root| validate_subtree(root, None, None));
    assert_eq!(size, map.len());
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    PopFirst,
    PopLast,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both WBTreeMap and BTreeMap, checking results
    /// and the tree's structural invariants at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut wb_map: WBTreeMap<i64, i64> = WBTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let added = wb_map.insert(*k, *v);
                    let bt_result = bt_map.insert(*k, *v);
                    prop_assert_eq!(added, bt_result.is_none(), "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let removed = wb_map.remove(k);
                    let bt_result = bt_map.remove(k);
                    prop_assert_eq!(removed, bt_result.is_some(), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(wb_map.get(k), bt_map.get(k), "get({})", k);
                    prop_assert_eq!(wb_map.get_or_default(k), bt_map.get(k).copied().unwrap_or_default());
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(wb_map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(wb_map.pop_first(), bt_map.pop_first(), "pop_first");
                }
                MapOp::PopLast => {
                    prop_assert_eq!(wb_map.pop_last(), bt_map.pop_last(), "pop_last");
                }
            }
            prop_assert_eq!(wb_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(wb_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
            validate(&wb_map);
        }
    }

    /// Tests that iteration order matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let wb_map: WBTreeMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let wb_items: Vec<_> = wb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&wb_items, &bt_items, "iter() mismatch");

        let wb_rev: Vec<_> = wb_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let bt_rev: Vec<_> = bt_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&wb_rev, &bt_rev, "iter().rev() mismatch");

        let wb_keys: Vec<_> = wb_map.keys().copied().collect();
        let bt_keys: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&wb_keys, &bt_keys, "keys() mismatch");

        let wb_vals: Vec<_> = wb_map.values().copied().collect();
        let bt_vals: Vec<_> = bt_map.values().copied().collect();
        prop_assert_eq!(&wb_vals, &bt_vals, "values() mismatch");

        let wb_into: Vec<_> = wb_map.clone().into_iter().collect();
        let bt_into: Vec<_> = bt_map.clone().into_iter().collect();
        prop_assert_eq!(&wb_into, &bt_into, "into_iter() mismatch");

        let wb_into_keys: Vec<_> = wb_map.clone().into_keys().collect();
        prop_assert_eq!(&wb_into_keys, &bt_keys, "into_keys() mismatch");

        let wb_into_vals: Vec<_> = wb_map.into_values().collect();
        prop_assert_eq!(&wb_into_vals, &bt_vals, "into_values() mismatch");
    }

    /// Alternating `next` and `next_back` yields every element exactly once.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let wb_map: WBTreeMap<i64, i64> = entries.iter().copied().collect();
        prop_assert_eq!(wb_map.iter().len(), wb_map.len(), "ExactSizeIterator len mismatch");

        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut iter = wb_map.iter();
        let mut toggle = true;
        loop {
            let item = if toggle { iter.next() } else { iter.next_back() };
            match item {
                Some(item) if toggle => from_front.push(*item.0),
                Some(item) => from_back.push(*item.0),
                None => break,
            }
            toggle = !toggle;
        }
        prop_assert_eq!(iter.next(), None);

        from_back.reverse();
        from_front.extend(from_back);
        let keys: Vec<_> = wb_map.keys().copied().collect();
        prop_assert_eq!(from_front, keys);
    }

    /// Removing every key in arbitrary order keeps the tree valid and ends empty.
    #[test]
    fn remove_all_in_any_order(
        keys in proptest::collection::hash_set(any::<i32>(), 0..TEST_SIZE),
        seed in any::<u64>(),
    ) {
        let mut order: Vec<i32> = keys.into_iter().collect();
        let mut wb_map: WBTreeMap<i32, i32> = order.iter().map(|&k| (k, -k)).collect();
        validate(&wb_map);

        // Shuffle deterministically from the seed.
        let mut x = seed | 1;
        for i in (1..order.len()).rev() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            order.swap(i, (x % (i as u64 + 1)) as usize);
        }

        let mut remaining = order.len();
        for k in &order {
            prop_assert!(wb_map.remove(k), "remove({}) should succeed", k);
            remaining -= 1;
            prop_assert_eq!(wb_map.len(), remaining);
            validate(&wb_map);
        }
        prop_assert!(wb_map.is_empty());
        prop_assert!(wb_map.root().is_none());
    }

    /// Bounded extraction returns the same prefix and suffix as a full iteration.
    #[test]
    fn least_and_greatest_match_iteration(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..500),
        n in 0usize..600,
    ) {
        let wb_map: WBTreeMap<i64, i64> = entries.iter().copied().collect();

        let least: Vec<_> = wb_map.least(n).iter().map(|node| node.key_value()).collect();
        let expected: Vec<_> = wb_map.iter().take(n).collect();
        prop_assert_eq!(least, expected);

        let greatest: Vec<_> = wb_map.greatest(n).iter().map(|node| node.key_value()).collect();
        let expected: Vec<_> = wb_map.iter().rev().take(n).collect();
        prop_assert_eq!(greatest, expected);

        prop_assert_eq!(wb_map.least_keys(n), wb_map.keys().take(n).collect::<Vec<_>>());
        prop_assert_eq!(wb_map.least_values(n), wb_map.values().take(n).collect::<Vec<_>>());
        prop_assert_eq!(wb_map.greatest_keys(n), wb_map.keys().rev().take(n).collect::<Vec<_>>());
        prop_assert_eq!(wb_map.greatest_values(n), wb_map.values().rev().take(n).collect::<Vec<_>>());
    }

    /// Every node found by `get_node` roots a subtree that iterates in key order.
    #[test]
    fn get_node_subtrees_are_sorted(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..500)) {
        let wb_map: WBTreeMap<i64, i64> = entries.iter().copied().collect();
        for (k, v) in &wb_map {
            let node = wb_map.get_node(k).expect("key present");
            prop_assert_eq!(node.key_value(), (k, v));

            let keys: Vec<_> = node.iter().map(|(k, _)| *k).collect();
            prop_assert_eq!(keys.len(), node.len());
            prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(keys.contains(k));
        }
    }

    #[test]
    fn clone_produces_equal_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let wb_map: WBTreeMap<i64, i64> = entries.iter().copied().collect();
        let cloned = wb_map.clone();
        prop_assert_eq!(&cloned, &wb_map);
        validate(&cloned);
    }
}

// ─── Scenario tests ──────────────────────────────────────────────────────────

#[test]
fn insert_replace_remove_scenario() {
    let mut map = WBTreeMap::new();

    assert!(map.insert(5, "fie"));
    assert_eq!(map.len(), 1);

    assert!(!map.insert(5, "five"));
    assert_eq!(map.get(&5), Some(&"five"));
    assert_eq!(map.len(), 1);

    assert!(map.insert(4, "four"));
    assert!(map.insert(3, "three"));
    assert_eq!(map.len(), 3);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 4, 5]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), ["three", "four", "five"]);

    assert!(map.remove(&4));
    assert_eq!(map.len(), 2);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 5]);

    assert!(!map.remove(&42));
    assert_eq!(map.len(), 2);
    validate(&map);
}

#[test]
fn empty_map_queries_are_well_defined() {
    let map: WBTreeMap<String, u32> = WBTreeMap::new();

    assert_eq!(map.len(), 0);
    assert_eq!(map.get("missing"), None);
    assert_eq!(map.get_or_default("missing"), 0);
    assert!(map.get_node("missing").is_none());
    assert_eq!(map.root_key(), None);
    assert_eq!(map.root_value(), None);
    assert!(map.least_node().is_none());
    assert!(map.greatest_node().is_none());
    assert!(map.least(3).is_empty());
    assert!(map.greatest_keys(3).is_empty());
    assert_eq!(map.keys().count(), 0);
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.last_key_value(), None);

    let mut visits = 0;
    map.for_each(|_, _| {
        visits += 1;
        true
    });
    assert_eq!(visits, 0);
}

#[test]
fn remove_absent_key_leaves_map_unchanged() {
    let mut map: WBTreeMap<i32, i32> = (0..64).map(|k| (k * 2, k)).collect();
    let keys_before: Vec<_> = map.keys().copied().collect();
    let root_before = map.root_key().copied();

    assert!(!map.remove(&13));
    assert_eq!(map.remove_entry(&1000), None);

    assert_eq!(map.len(), 64);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), keys_before);
    assert_eq!(map.root_key().copied(), root_before);
}

#[test]
fn sorted_round_trip() {
    let n = 10_000;
    let mut map = WBTreeMap::new();
    // Multiplying by a unit modulo n visits every residue exactly once, out of order.
    for i in 0..n {
        assert!(map.insert((i * 7_919) % n, i));
    }
    validate(&map);

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, (0..n).collect::<Vec<_>>());
}

#[test]
fn replace_returns_previous_value() {
    let mut map = WBTreeMap::new();
    assert_eq!(map.replace("k", 1), None);
    assert_eq!(map.replace("k", 2), Some(1));
    assert_eq!(map["k"], 2);
    assert_eq!(map.len(), 1);
}

#[test]
fn for_each_stops_after_first() {
    let map: WBTreeMap<u32, u32> = (0..1_000).map(|k| (k, k)).collect();

    let mut visited = Vec::new();
    map.for_each(|&k, _| {
        visited.push(k);
        false
    });
    assert_eq!(visited, [0]);

    let mut visited = Vec::new();
    map.rev_for_each(|&k, _| {
        visited.push(k);
        false
    });
    assert_eq!(visited, [999]);
}

#[test]
fn for_each_visits_everything_in_order() {
    let map = WBTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);

    let mut forward = String::new();
    map.for_each(|_, &c| {
        forward.push(c);
        true
    });
    assert_eq!(forward, "abc");

    let mut backward = String::new();
    map.rev_for_each(|_, &c| {
        backward.push(c);
        true
    });
    assert_eq!(backward, "cba");
}

#[rstest]
#[case(0, vec![])]
#[case(1, vec![1])]
#[case(2, vec![1, 2])]
#[case(5, vec![1, 2, 3, 4, 5])]
#[case(100, vec![1, 2, 3, 4, 5])]
fn least_is_bounded(#[case] n: usize, #[case] expected: Vec<i32>) {
    let map = WBTreeMap::from([(4, "d"), (2, "b"), (5, "e"), (1, "a"), (3, "c")]);

    let least: Vec<i32> = map.least(n).iter().map(|node| *node.key()).collect();
    assert_eq!(least, expected);

    let mut greatest: Vec<i32> = map.greatest_keys(n).into_iter().copied().collect();
    greatest.reverse();
    assert_eq!(greatest.len(), expected.len());
    assert!(greatest.iter().all(|k| *k > 5 - n as i32));
}

#[rstest]
#[case::ascending((0..512).collect())]
#[case::descending((0..512).rev().collect())]
#[case::zig_zag((0..256).flat_map(|i| [i, 511 - i]).collect())]
fn insertion_orders_stay_balanced(#[case] keys: Vec<i32>) {
    let mut map = WBTreeMap::new();
    for &k in &keys {
        map.insert(k, ());
        validate(&map);
    }
    assert_eq!(map.len(), 512);
    assert_eq!(map.least_keys(1), [&0]);
    assert_eq!(map.greatest_keys(1), [&511]);

    // Removing one half keeps every node in balance.
    for k in (0..512).filter(|k| k % 2 == 0) {
        assert!(map.remove(&k));
        validate(&map);
    }
    assert_eq!(map.len(), 256);
}

#[test]
fn extreme_nodes() {
    let map: WBTreeMap<i32, String> = [7, 3, 9, 1, 5].into_iter().map(|k| (k, k.to_string())).collect();

    assert_eq!(map.least_node().map(|n| *n.key()), Some(1));
    assert_eq!(map.greatest_node().map(|n| n.value().as_str()), Some("9"));
    assert_eq!(map.first_key_value(), Some((&1, &"1".to_string())));
    assert_eq!(map.last_key_value(), Some((&9, &"9".to_string())));
    assert_eq!(map.least_values(2), [&"1".to_string(), &"3".to_string()]);
}

#[test]
fn root_accessors_agree_with_root_view() {
    let map: WBTreeMap<i32, i32> = (0..31).map(|k| (k, k * 3)).collect();
    let root = map.root().expect("non-empty");

    assert_eq!(map.root_key(), Some(root.key()));
    assert_eq!(map.root_value(), Some(root.value()));
    assert_eq!(root.len(), map.len());
    assert!(!root.is_empty());
}

#[test]
fn get_mut_updates_in_place() {
    let mut map = WBTreeMap::from([("a", 1), ("b", 2)]);
    *map.get_mut("a").expect("present") += 10;
    assert_eq!(map.get("a"), Some(&11));
    assert_eq!(map.get_mut("z"), None);
}

#[test]
fn custom_key_order() {
    #[derive(Debug, PartialEq, Eq)]
    struct ByLength(&'static str);

    impl PartialOrd for ByLength {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for ByLength {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.len().cmp(&other.0.len())
        }
    }

    let mut map = WBTreeMap::new();
    assert!(map.insert(ByLength("ccc"), 3));
    assert!(map.insert(ByLength("a"), 1));
    // Equal under the key order: this replaces, even though the strings differ.
    assert!(!map.insert(ByLength("b"), 10));

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&ByLength("z")), Some(&10));
    assert_eq!(map.keys().map(|k| k.0).collect::<Vec<_>>(), ["a", "ccc"]);
}

#[test]
fn capacity_is_reused_after_removals() {
    let mut map = WBTreeMap::with_capacity(16);
    let capacity = map.capacity();
    assert!(capacity >= 16);

    for round in 0..4 {
        for k in 0..16 {
            map.insert(k, round);
        }
        for k in 0..16 {
            assert!(map.remove(&k));
        }
    }
    assert_eq!(map.capacity(), capacity);
}

#[test]
fn clear_empties_map() {
    let mut map: WBTreeMap<i32, i32> = (0..100).map(|k| (k, k)).collect();
    map.clear();
    assert!(map.is_empty());
    assert!(map.root().is_none());
    assert!(map.insert(1, 1));
    validate(&map);
}

#[test]
fn debug_output() {
    let map = WBTreeMap::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    assert_eq!(format!("{:?}", map.keys()), "[1, 2]");

    let root = map.root().expect("non-empty");
    assert!(format!("{root:?}").starts_with("Subtree"));
}

#[test]
fn extend_and_equality() {
    let mut a = WBTreeMap::from([(1, 1), (2, 2)]);
    let b = WBTreeMap::from([(2, 2), (1, 1), (3, 3)]);
    assert_ne!(a, b);
    a.extend([(3, 3)]);
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map = WBTreeMap::from([(1, "a")]);
    let _ = map[&2];
}

#[test]
fn iterators_are_send_and_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<WBTreeMap<i32, String>>();
    assert_sync::<WBTreeMap<i32, String>>();
    assert_send::<wbtree_map::Iter<'_, i32, String>>();
    assert_sync::<wbtree_map::Iter<'_, i32, String>>();
    assert_send::<wbtree_map::IntoIter<i32, String>>();
    assert_send::<wbtree_map::Keys<'_, i32, String>>();
    assert_send::<wbtree_map::Values<'_, i32, String>>();
    assert_send::<Subtree<'_, i32, String>>();
}
