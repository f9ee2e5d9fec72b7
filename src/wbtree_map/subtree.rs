use core::fmt;

use super::Iter;
use crate::raw::{Handle, Node, RawWBTree};

/// A borrowed view of one node of a [`WBTreeMap`](super::WBTreeMap) and the subtree below it.
///
/// Views are handed out by [`root`], [`get_node`], [`least`] and friends. Every subtree is itself
/// a valid weight-balanced tree, so a view can be walked with [`left`], [`right`] and [`iter`].
///
/// A view borrows the map, so the map cannot be changed while the view is alive.
///
/// # Examples
///
/// ```
/// use wbtree::WBTreeMap;
///
/// let map: WBTreeMap<_, _> = (0..10).map(|k| (k, k.to_string())).collect();
/// let root = map.root().unwrap();
///
/// let left = root.left().map_or(0, |l| l.len());
/// let right = root.right().map_or(0, |r| r.len());
/// assert_eq!(left + right + 1, root.len());
/// ```
///
/// [`root`]: super::WBTreeMap::root
/// [`get_node`]: super::WBTreeMap::get_node
/// [`least`]: super::WBTreeMap::least
/// [`left`]: Subtree::left
/// [`right`]: Subtree::right
/// [`iter`]: Subtree::iter
pub struct Subtree<'a, K, V> {
    tree: &'a RawWBTree<K, V>,
    handle: Handle,
}

impl<'a, K, V> Subtree<'a, K, V> {
    pub(crate) fn new(tree: &'a RawWBTree<K, V>, handle: Handle) -> Self {
        Subtree { tree, handle }
    }

    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.handle)
    }

    /// Returns the key stored at this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.node().key()
    }

    /// Returns the value stored at this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.node().value()
    }

    /// Returns the key and value stored at this node.
    #[must_use]
    pub fn key_value(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (node.key(), node.value())
    }

    /// Returns the number of entries in this subtree, including this node.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().size()
    }

    /// Always `false`: a view refers to at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the subtree of smaller keys, if any.
    #[must_use]
    pub fn left(&self) -> Option<Subtree<'a, K, V>> {
        self.node().left().map(|handle| Subtree::new(self.tree, handle))
    }

    /// Returns the subtree of greater keys, if any.
    #[must_use]
    pub fn right(&self) -> Option<Subtree<'a, K, V>> {
        self.node().right().map(|handle| Subtree::new(self.tree, handle))
    }

    /// Gets an iterator over the entries of this subtree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wbtree::WBTreeMap;
    ///
    /// let map = WBTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    /// let root = map.root().unwrap();
    /// let right: Vec<_> = root.right().unwrap().iter().collect();
    /// assert_eq!(right, [(&3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'a, K, V> {
        Iter::new(self.tree, Some(self.handle))
    }
}

impl<K, V> Clone for Subtree<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Subtree<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Subtree<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key, value) = self.key_value();
        f.debug_struct("Subtree")
            .field("key", key)
            .field("value", value)
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, K, V> IntoIterator for Subtree<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
