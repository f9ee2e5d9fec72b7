use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::{Handle, Link};
use super::node::{Node, Side};
use crate::Comparable;

/// The weight-balanced tree backing `WBTreeMap`.
///
/// Every mutation descends recursively from the root and rebuilds links on the way back up,
/// rebalancing each node on the path innermost first.
#[derive(Clone)]
pub(crate) struct RawWBTree<K, V> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<K, V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Link,
}

/// Which way a key lies from a node, or `None` if it is the node's key.
#[inline]
fn direction(ordering: Ordering) -> Option<Side> {
    match ordering {
        Ordering::Less => Some(Side::Left),
        Ordering::Equal => None,
        Ordering::Greater => Some(Side::Right),
    }
}

impl<K, V> RawWBTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Size of the subtree behind `link`.
    pub(crate) fn size(&self, link: Link) -> usize {
        self.nodes.size(link)
    }

    pub(crate) fn root_entry(&self) -> Option<(&K, &V)> {
        let root = self.nodes.get(self.root?);
        Some((root.key(), root.value()))
    }

    /// Follows `side` links from `link` to the outermost node.
    pub(crate) fn extreme(&self, link: Link, side: Side) -> Link {
        let mut current = link?;
        while let Some(next) = self.nodes.get(current).child(side) {
            current = next;
        }
        Some(current)
    }

    /// Removes the outermost node on `side` of the tree.
    pub(crate) fn pop_extreme(&mut self, side: Side) -> Option<(K, V)> {
        let root = self.root?;
        let (root, entry) = self.detach_extreme(root, side);
        self.root = root;
        Some(entry)
    }

    /// Detaches the outermost node on `side` of the subtree at `node`, rebalancing every level
    /// of the descent. Returns the new subtree root and the detached entry.
    fn detach_extreme(&mut self, node: Handle, side: Side) -> (Link, (K, V)) {
        let n = self.nodes.get(node);
        let Some(next) = n.child(side) else {
            // Outermost node: its other child (if any) takes its place.
            let rest = n.child(side.opposite());
            return (rest, self.nodes.take(node).into_entry());
        };
        let (child, entry) = self.detach_extreme(next, side);
        (Some(self.attach_shrunk(node, side, child)), entry)
    }

    /// Takes every entry out of the tree in ascending key order, leaving it empty.
    pub(crate) fn drain_to_vec(&mut self) -> alloc::vec::Vec<(K, V)> {
        let mut order = alloc::vec::Vec::with_capacity(self.len());
        self.walk(self.root, Side::Left, &mut |handle| {
            order.push(handle);
            true
        });

        let entries = order.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.clear();
        entries
    }
}

impl<K: Comparable, V> RawWBTree<K, V> {
    /// Searches for a key and returns the handle of its node, if present.
    pub(crate) fn search<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match direction(key.compare(node.key().borrow())) {
                None => return Some(handle),
                Some(side) => current = node.child(side),
            }
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, replaced) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        replaced
    }

    fn insert_at(&mut self, link: Link, key: K, value: V) -> (Handle, Option<V>) {
        let Some(node) = link else {
            return (self.nodes.alloc_leaf(key, value), None);
        };

        let n = self.nodes.get_mut(node);
        let Some(side) = direction(key.compare(n.key())) else {
            // Same key: update in place, nothing moves.
            return (node, Some(n.replace_value(value)));
        };

        let next = n.child(side);
        let (child, replaced) = self.insert_at(next, key, value);
        if replaced.is_some() {
            return (node, replaced);
        }
        (self.attach_grown(node, side, Some(child)), None)
    }

    /// Removes a key from the tree, returning the stored entry if it was present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        let root = self.root?;
        let (root, removed) = self.remove_at(root, key);
        if removed.is_some() {
            self.root = root;
        }
        removed
    }

    fn remove_at<Q>(&mut self, node: Handle, key: &Q) -> (Link, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Comparable,
    {
        let n = self.nodes.get(node);
        let Some(side) = direction(key.compare(n.key().borrow())) else {
            let (root, entry) = self.unlink(node);
            return (root, Some(entry));
        };

        let Some(next) = n.child(side) else {
            return (Some(node), None);
        };
        let (child, removed) = self.remove_at(next, key);
        if removed.is_none() {
            return (Some(node), None);
        }
        (Some(self.attach_shrunk(node, side, child)), removed)
    }

    /// Deletes `node` from its subtree, returning the new subtree root and the node's entry.
    fn unlink(&mut self, node: Handle) -> (Link, (K, V)) {
        let n = self.nodes.get(node);
        match (n.left(), n.right()) {
            (None, None) => (None, self.nodes.take(node).into_entry()),
            (Some(only), None) | (None, Some(only)) => (Some(only), self.nodes.take(node).into_entry()),
            (Some(_), Some(right)) => {
                // Splice in the in-order successor; the right side shrinks by one.
                let (right, (key, value)) = self.detach_extreme(right, Side::Left);
                let entry = self.nodes.get_mut(node).replace_entry(key, value);
                (Some(self.attach_shrunk(node, Side::Right, right)), entry)
            }
        }
    }
}

#[cfg(test)]
impl<K: Comparable, V> RawWBTree<K, V> {
    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        fn height<K, V>(tree: &RawWBTree<K, V>, link: Link) -> usize {
            link.map_or(0, |h| {
                let n = tree.nodes.get(h);
                1 + height(tree, n.left()).max(height(tree, n.right()))
            })
        }
        height(self, self.root)
    }

    /// Panics unless key order, descendant counts and weight balance hold at every node.
    pub(crate) fn check_invariants(&self) {
        fn check<'a, K: Comparable, V>(
            tree: &'a RawWBTree<K, V>,
            link: Link,
            low: Option<&'a K>,
            high: Option<&'a K>,
        ) -> usize {
            let Some(h) = link else {
                return 0;
            };
            let n = tree.nodes.get(h);
            if let Some(low) = low {
                assert_eq!(low.compare(n.key()), Ordering::Less, "key order violated");
            }
            if let Some(high) = high {
                assert_eq!(n.key().compare(high), Ordering::Less, "key order violated");
            }
            let left = check(tree, n.left(), low, Some(n.key()));
            let right = check(tree, n.right(), Some(n.key()), high);
            assert_eq!(n.descendants(), left + right, "descendant count is stale");
            assert!(super::balance::is_balanced(left, right), "right-heavy: {left} vs {right}");
            assert!(super::balance::is_balanced(right, left), "left-heavy: {left} vs {right}");
            left + right + 1
        }
        let total = check(self, self.root, None, None);
        assert_eq!(total, self.nodes.len(), "arena holds unreachable nodes");
    }
}
