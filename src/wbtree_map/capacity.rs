use super::WBTreeMap;
use crate::raw::RawWBTree;

impl<K, V> WBTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before the node arena
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map: WBTreeMap<i32, i32> = WBTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WBTreeMap {
            raw: RawWBTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating its node arena.
    ///
    /// Slots freed by removals are reused, so a map that stays below this size never
    /// reallocates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
