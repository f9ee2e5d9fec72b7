use alloc::vec::Vec;

use super::{Subtree, WBTreeMap};
use crate::raw::Side;

impl<K, V> WBTreeMap<K, V> {
    /// Returns views of at most `n` entries with the smallest keys, in ascending order.
    ///
    /// Only the first `n` entries of the in-order walk are visited.
    ///
    /// # Complexity
    ///
    /// O(log len + n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map: WBTreeMap<_, _> = (1..=5).map(|k| (k, k * 100)).collect();
    ///
    /// let least: Vec<_> = map.least(2).iter().map(|node| node.key_value()).collect();
    /// assert_eq!(least, [(&1, &100), (&2, &200)]);
    /// assert_eq!(map.least(100).len(), 5);
    /// ```
    #[must_use]
    pub fn least(&self, n: usize) -> Vec<Subtree<'_, K, V>> {
        self.from_end(Side::Left, n)
    }

    /// Returns views of at most `n` entries with the greatest keys, in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map: WBTreeMap<_, _> = (1..=5).map(|k| (k, ())).collect();
    /// let greatest: Vec<_> = map.greatest(2).iter().map(|node| *node.key()).collect();
    /// assert_eq!(greatest, [5, 4]);
    /// ```
    #[must_use]
    pub fn greatest(&self, n: usize) -> Vec<Subtree<'_, K, V>> {
        self.from_end(Side::Right, n)
    }

    /// Returns at most `n` of the smallest keys, in ascending order.
    #[must_use]
    pub fn least_keys(&self, n: usize) -> Vec<&K> {
        self.least(n).into_iter().map(|node| node.key()).collect()
    }

    /// Returns the values of at most `n` of the smallest keys, in ascending key order.
    #[must_use]
    pub fn least_values(&self, n: usize) -> Vec<&V> {
        self.least(n).into_iter().map(|node| node.value()).collect()
    }

    /// Returns at most `n` of the greatest keys, in descending order.
    #[must_use]
    pub fn greatest_keys(&self, n: usize) -> Vec<&K> {
        self.greatest(n).into_iter().map(|node| node.key()).collect()
    }

    /// Returns the values of at most `n` of the greatest keys, in descending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let scores = WBTreeMap::from([(90, "Ann"), (75, "Bo"), (82, "Cy")]);
    /// assert_eq!(scores.greatest_values(2), [&"Ann", &"Cy"]);
    /// ```
    #[must_use]
    pub fn greatest_values(&self, n: usize) -> Vec<&V> {
        self.greatest(n).into_iter().map(|node| node.value()).collect()
    }

    /// Returns a view of the entry with the smallest key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map = WBTreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.least_node().map(|node| *node.value()), Some("a"));
    /// assert!(WBTreeMap::<i32, i32>::new().least_node().is_none());
    /// ```
    #[must_use]
    pub fn least_node(&self) -> Option<Subtree<'_, K, V>> {
        self.extreme(Side::Left)
    }

    /// Returns a view of the entry with the greatest key, or `None` if the map is empty.
    #[must_use]
    pub fn greatest_node(&self) -> Option<Subtree<'_, K, V>> {
        self.extreme(Side::Right)
    }

    /// Returns the first key-value pair in the map. The key in this pair is the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.least_node().map(|node| node.key_value())
    }

    /// Returns the last key-value pair in the map. The key in this pair is the maximum key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.greatest_node().map(|node| node.key_value())
    }

    /// Removes and returns the first element in the map.
    /// The key of this element is the minimum key that was in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_extreme(Side::Left)
    }

    /// Removes and returns the last element in the map.
    /// The key of this element is the maximum key that was in the map.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_extreme(Side::Right)
    }

    fn from_end(&self, first: Side, n: usize) -> Vec<Subtree<'_, K, V>> {
        self.raw
            .take_from_end(first, n)
            .into_iter()
            .map(|handle| Subtree::new(&self.raw, handle))
            .collect()
    }

    fn extreme(&self, side: Side) -> Option<Subtree<'_, K, V>> {
        self.raw
            .extreme(self.raw.root(), side)
            .map(|handle| Subtree::new(&self.raw, handle))
    }
}
