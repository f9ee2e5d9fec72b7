//! Weight-balance restoration after a single insertion or removal.
//!
//! A node is balanced when `(size(light) + 1) * DELTA >= size(heavy) + 1`. When an update breaks
//! that, a single rotation is used if the heavy child's near grandchild is light enough
//! (`size(near) + 1 < GAMMA * (size(far) + 1)`), and a double rotation otherwise.
//!
//! These are the integer parameters shown valid by Hirai and Yamamoto, "Balancing weight-balanced
//! trees" (JFP 2011). Under them one rebalance per level keeps every node balanced.

use super::handle::{Handle, Link};
use super::node::Side;
use super::raw_wbtree::RawWBTree;

pub(crate) const DELTA: usize = 3;
pub(crate) const GAMMA: usize = 2;

/// Returns true if a subtree of size `light` may sit next to a sibling of size `heavy`.
#[inline]
pub(crate) const fn is_balanced(light: usize, heavy: usize) -> bool {
    (light + 1) * DELTA >= heavy + 1
}

/// Returns true if a single rotation suffices given the heavy child's near and far sizes.
#[inline]
const fn is_single(near: usize, far: usize) -> bool {
    near + 1 < GAMMA * (far + 1)
}

impl<K, V> RawWBTree<K, V> {
    /// Rebalances the subtree rooted at `node` after its `heavy` side grew or its opposite side
    /// shrank by one. Returns the new subtree root, which is `node` when nothing moved.
    pub(crate) fn balance(&mut self, node: Handle, heavy: Side) -> Handle {
        let light = heavy.opposite();
        let (x, c) = {
            let n = self.nodes.get(node);
            (n.child(light), n.child(heavy))
        };
        let x_size = self.nodes.size(x);
        let c_size = self.nodes.size(c);
        if is_balanced(x_size, c_size) {
            return node;
        }

        // An unbalanced node always has a non-empty heavy child.
        let Some(c) = c else {
            return node;
        };
        let (b, z) = {
            let c = self.nodes.get(c);
            (c.child(light), c.child(heavy))
        };
        let b_size = self.nodes.size(b);
        let z_size = self.nodes.size(z);

        if is_single(b_size, z_size) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?heavy, x_size, b_size, z_size, "balance: single rotation");

            self.rotate_single(node, c, heavy, x_size + b_size, z_size);
            return c;
        }

        // `b` holds at least one node here since `b_size + 1 >= GAMMA * (z_size + 1)`.
        let Some(b) = b else {
            return node;
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?heavy, x_size, b_size, z_size, "balance: double rotation");

        self.rotate_double(node, c, b, heavy, x_size, z_size);
        b
    }

    /// `c` replaces `node`; `node` keeps its light child and adopts `c`'s near child.
    fn rotate_single(&mut self, node: Handle, c: Handle, heavy: Side, node_descendants: usize, z_size: usize) {
        let light = heavy.opposite();
        let b = self.nodes.get(c).child(light);

        let n = self.nodes.get_mut(node);
        n.set_child(heavy, b);
        n.set_descendants(node_descendants);

        let c_node = self.nodes.get_mut(c);
        c_node.set_child(light, Some(node));
        c_node.set_descendants(node_descendants + 1 + z_size);
    }

    /// `b`, the near grandchild, replaces `node`, with `node` and `c` as its children.
    fn rotate_double(&mut self, node: Handle, c: Handle, b: Handle, heavy: Side, x_size: usize, z_size: usize) {
        let light = heavy.opposite();
        let (s, y) = {
            let b = self.nodes.get(b);
            (b.child(light), b.child(heavy))
        };
        let node_descendants = x_size + self.nodes.size(s);
        let c_descendants = self.nodes.size(y) + z_size;

        let n = self.nodes.get_mut(node);
        n.set_child(heavy, s);
        n.set_descendants(node_descendants);

        let c_node = self.nodes.get_mut(c);
        c_node.set_child(light, y);
        c_node.set_descendants(c_descendants);

        let b_node = self.nodes.get_mut(b);
        b_node.set_child(light, Some(node));
        b_node.set_child(heavy, Some(c));
        b_node.set_descendants(node_descendants + c_descendants + 2);
    }

    /// Reattaches a changed child on `side` and rebalances after the subtree grew there.
    pub(crate) fn attach_grown(&mut self, node: Handle, side: Side, child: Link) -> Handle {
        let n = self.nodes.get_mut(node);
        n.set_child(side, child);
        n.grow();
        self.balance(node, side)
    }

    /// Reattaches a changed child on `side` and rebalances after the subtree shrank there.
    pub(crate) fn attach_shrunk(&mut self, node: Handle, side: Side, child: Link) -> Handle {
        let n = self.nodes.get_mut(node);
        n.set_child(side, child);
        n.shrink();
        self.balance(node, side.opposite())
    }
}
