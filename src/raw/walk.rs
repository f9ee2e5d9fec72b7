use smallvec::SmallVec;

use super::handle::{Handle, Link};
use super::node::Side;
use super::raw_wbtree::RawWBTree;

/// Pending nodes of an in-order walk. Weight balance keeps the depth small, so the stack rarely
/// spills to the heap.
pub(crate) type Stack = SmallVec<[Handle; 32]>;

impl<K, V> RawWBTree<K, V> {
    /// Visits the subtree at `link` depth-first, `first` side before the node and the opposite
    /// side after it. Stops as soon as `visit` returns false.
    ///
    /// Returns false if the walk was cut short.
    pub(crate) fn walk<F>(&self, link: Link, first: Side, visit: &mut F) -> bool
    where
        F: FnMut(Handle) -> bool,
    {
        let Some(handle) = link else {
            return true;
        };
        let node = self.nodes.get(handle);
        self.walk(node.child(first), first, visit)
            && visit(handle)
            && self.walk(node.child(first.opposite()), first, visit)
    }

    /// Collects at most `limit` handles from the `first` end of the tree, in walk order.
    pub(crate) fn take_from_end(&self, first: Side, limit: usize) -> alloc::vec::Vec<Handle> {
        let mut taken = alloc::vec::Vec::with_capacity(limit.min(self.len()));
        if limit > 0 {
            self.walk(self.root(), first, &mut |handle| {
                taken.push(handle);
                taken.len() < limit
            });
        }
        taken
    }

    /// Pushes `link` and its chain of `side` children, outermost last.
    pub(crate) fn descend(&self, stack: &mut Stack, mut link: Link, side: Side) {
        while let Some(handle) = link {
            stack.push(handle);
            link = self.nodes.get(handle).child(side);
        }
    }

    /// Pops the next node of a walk that visits `side` first, queueing its successors.
    pub(crate) fn step(&self, stack: &mut Stack, side: Side) -> Option<Handle> {
        let handle = stack.pop()?;
        self.descend(stack, self.nodes.get(handle).child(side.opposite()), side);
        Some(handle)
    }
}
