use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::Comparable;
use crate::raw::{Link, RawWBTree, Side, Stack};

mod capacity;
mod extremes;
mod subtree;

pub use subtree::Subtree;

/// An ordered map based on a [weight-balanced tree].
///
/// Keys are kept in the order given by their [`Comparable`] implementation, which every [`Ord`]
/// type has. Each node caches the size of its subtree, and after every insertion or removal the
/// nodes along the search path are rebalanced by single or double rotations so that neither
/// child of any node holds more than three times the weight of its sibling. The height is
/// therefore always O(log n).
///
/// All mutation goes through `&mut self`: views such as [`Subtree`] borrow the map and cannot
/// survive a change to it.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key changes while it is in the map. The behavior resulting from such a logic error is
/// not specified, but will be encapsulated to the `WBTreeMap` that observed the logic error and
/// not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use wbtree::WBTreeMap;
///
/// let mut numbers = WBTreeMap::new();
///
/// assert!(numbers.insert(5, "fie"));
/// assert!(!numbers.insert(5, "five")); // replaced, not added
/// numbers.insert(4, "four");
/// numbers.insert(3, "three");
///
/// assert_eq!(numbers.len(), 3);
/// assert_eq!(numbers.get(&5), Some(&"five"));
/// assert_eq!(numbers.keys().copied().collect::<Vec<_>>(), [3, 4, 5]);
///
/// assert!(numbers.remove(&4));
/// assert!(!numbers.remove(&42));
/// assert_eq!(numbers.len(), 2);
/// ```
///
/// A `WBTreeMap` with a known list of items can be initialized from an array:
///
/// ```
/// use wbtree::WBTreeMap;
///
/// let solar_distance = WBTreeMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.least_keys(2), [&"Earth", &"Mars"]);
/// ```
///
/// [weight-balanced tree]: https://en.wikipedia.org/wiki/Weight-balanced_tree
#[derive(Clone)]
pub struct WBTreeMap<K, V> {
    raw: RawWBTree<K, V>,
}

/// An iterator over the entries of a `WBTreeMap` or of one of its subtrees.
///
/// This `struct` is created by the [`iter`] method on [`WBTreeMap`] and by
/// [`Subtree::iter`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use wbtree::WBTreeMap;
///
/// let map = WBTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: WBTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawWBTree<K, V>,
    front: Stack,
    back: Stack,
    remaining: usize,
}

/// An owning iterator over the entries of a `WBTreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`WBTreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `WBTreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`WBTreeMap`].
///
/// [`keys`]: WBTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `WBTreeMap`.
///
/// This `struct` is created by the [`values`] method on [`WBTreeMap`].
///
/// [`values`]: WBTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the keys of a `WBTreeMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`WBTreeMap`].
///
/// [`into_keys`]: WBTreeMap::into_keys
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of a `WBTreeMap`.
///
/// This `struct` is created by the [`into_values`] method on [`WBTreeMap`].
///
/// [`into_values`]: WBTreeMap::into_values
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> WBTreeMap<K, V> {
    /// Makes a new, empty `WBTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> WBTreeMap<K, V> {
        WBTreeMap { raw: RawWBTree::new() }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut a = WBTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut a = WBTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a view of the root node, or `None` if the map is empty.
    ///
    /// The root holds no particular key; which entry sits there depends on the insertion and
    /// removal history. It is mainly useful for inspecting the shape of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map = WBTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    /// let root = map.root().unwrap();
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.len(), 3);
    /// assert_eq!(root.left().map(|l| *l.key()), Some(1));
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<Subtree<'_, K, V>> {
        self.raw.root().map(|handle| Subtree::new(&self.raw, handle))
    }

    /// Returns the key stored at the root, or `None` if the map is empty.
    #[must_use]
    pub fn root_key(&self) -> Option<&K> {
        self.raw.root_entry().map(|(k, _)| k)
    }

    /// Returns the value stored at the root, or `None` if the map is empty.
    #[must_use]
    pub fn root_value(&self) -> Option<&V> {
        self.raw.root_entry().map(|(_, v)| v)
    }

    /// Calls `visit` on every entry in ascending key order until it returns `false`.
    ///
    /// Entries after the one for which `visit` returned `false` are not visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map: WBTreeMap<i32, i32> = (0..1000).map(|k| (k, k * k)).collect();
    /// let mut seen = Vec::new();
    /// map.for_each(|&k, &v| {
    ///     seen.push(v);
    ///     k < 2
    /// });
    /// assert_eq!(seen, [0, 1, 4]);
    /// ```
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.visit_from(Side::Left, visit);
    }

    /// Calls `visit` on every entry in descending key order until it returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map = WBTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    /// let mut word = String::new();
    /// map.rev_for_each(|_, &c| {
    ///     word.push(c);
    ///     true
    /// });
    /// assert_eq!(word, "cba");
    /// ```
    pub fn rev_for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.visit_from(Side::Right, visit);
    }

    fn visit_from<F>(&self, first: Side, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let raw = &self.raw;
        raw.walk(raw.root(), first, &mut |handle| {
            let node = raw.node(handle);
            visit(node.key(), node.value())
        });
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw, self.raw.root())
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut a = WBTreeMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut a = WBTreeMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let a = WBTreeMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = a.into_keys().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys { inner: self.into_iter() }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let a = WBTreeMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = a.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues { inner: self.into_iter() }
    }
}

impl<K: Comparable, V> WBTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
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
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.get(key)
    }

    /// Returns a copy of the value corresponding to the key, or `V::default()` if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map = WBTreeMap::from([("apples", 3)]);
    /// assert_eq!(map.get_or_default("apples"), 3);
    /// assert_eq!(map.get_or_default("pears"), 0);
    /// ```
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.get_node(key).map(|node| node.key_value())
    }

    /// Returns a view of the node holding the key, or `None` if the key is absent.
    ///
    /// The view exposes the subtree rooted at that node.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map: WBTreeMap<_, _> = (1..=7).map(|k| (k, k * 10)).collect();
    /// let node = map.get_node(&4).unwrap();
    /// assert_eq!(node.value(), &40);
    /// assert!(node.len() >= 1);
    /// assert!(map.get_node(&8).is_none());
    /// ```
    pub fn get_node<Q>(&self, key: &Q) -> Option<Subtree<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.search(key).map(|handle| Subtree::new(&self.raw, handle))
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.search(key).is_some()
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.get_mut(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Returns `true` if the key was not present. Otherwise the stored value is overwritten in
    /// place, the key is left untouched, and `false` is returned; the size does not change.
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
    /// let mut map = WBTreeMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.is_empty());
    ///
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map[&37], "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.raw.insert(key, value).is_none()
    }

    /// Inserts a key-value pair into the map, returning the value it replaced, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// assert_eq!(map.replace(37, "a"), None);
    /// assert_eq!(map.replace(37, "b"), Some("a"));
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning `true` if the key was present.
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
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.remove(key).is_some()
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let mut map = WBTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.raw.remove(key)
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Iterates the subtree at `link` in ascending key order.
    pub(crate) fn new(tree: &'a RawWBTree<K, V>, link: Link) -> Self {
        let mut front = Stack::new();
        let mut back = Stack::new();
        tree.descend(&mut front, link, Side::Left);
        tree.descend(&mut back, link, Side::Right);
        Iter {
            tree,
            front,
            back,
            remaining: tree.size(link),
        }
    }
}

impl<K, V> Default for WBTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for WBTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for WBTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for WBTreeMap<K, V> {}

impl<K: Comparable, V> FromIterator<(K, V)> for WBTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = WBTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Comparable, V> Extend<(K, V)> for WBTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.raw.insert(k, v);
        }
    }
}

impl<K: Comparable, V, const N: usize> From<[(K, V); N]> for WBTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a WBTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for WBTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

/// Returns a reference to the value corresponding to the supplied key.
///
/// # Panics
///
/// Panics if the key is not present in the `WBTreeMap`.
impl<K, Q, V> Index<&Q> for WBTreeMap<K, V>
where
    K: Borrow<Q> + Comparable,
    Q: ?Sized + Comparable,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = tree.node(tree.step(&mut self.front, Side::Left)?);
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = tree.node(tree.step(&mut self.back, Side::Right)?);
        self.remaining -= 1;
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}
