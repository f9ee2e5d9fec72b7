use alloc::vec::Vec;

use super::handle::{Handle, Link};
use super::node::Node;

/// Slot storage for the nodes of one tree.
///
/// Freed slots are recycled before the backing vector grows, so handles stay small and a
/// tree that shrinks and regrows does not reallocate.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<Handle>,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Stores a new childless node and returns its handle.
    pub(crate) fn alloc_leaf(&mut self, key: K, value: V) -> Handle {
        let node = Node::leaf(key, value);
        if let Some(handle) = self.free.pop() {
            #[cfg(feature = "tracing")]
            tracing::debug!(slot = handle.to_index(), "Arena: reusing freed slot");

            self.slots[handle.to_index()] = Some(node);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc_leaf()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Some(node));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &Node<K, V> {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Size of the subtree behind `link`; the empty tree has size 0.
    #[inline]
    pub(crate) fn size(&self, link: Link) -> usize {
        link.map_or(0, |handle| self.get(handle).size())
    }

    /// Removes a node from the arena, freeing its slot for reuse.
    pub(crate) fn take(&mut self, handle: Handle) -> Node<K, V> {
        let node = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
