use core::mem;

use super::handle::Link;

/// Which child of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single entry of the tree together with its two subtrees.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Link,
    right: Link,
    // Number of nodes in `left` plus `right`. The node's own subtree has `descendants + 1`.
    descendants: usize,
}

impl<K, V> Node<K, V> {
    /// Creates a node with no children.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            descendants: 0,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Overwrites the value, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Overwrites both key and value, returning the previous entry.
    ///
    /// Used to splice an in-order successor into a node that is being removed.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (mem::replace(&mut self.key, key), mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.right
    }

    #[cfg(test)]
    pub(crate) fn descendants(&self) -> usize {
        self.descendants
    }

    #[inline]
    pub(crate) fn set_descendants(&mut self, descendants: usize) {
        self.descendants = descendants;
    }

    /// Number of nodes in the subtree rooted here.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.descendants + 1
    }

    pub(crate) fn grow(&mut self) {
        self.descendants += 1;
    }

    pub(crate) fn shrink(&mut self) {
        debug_assert!(self.descendants > 0, "`Node::shrink()` - node has no descendants!");
        self.descendants -= 1;
    }
}
