mod arena;
mod balance;
mod handle;
mod node;
mod raw_wbtree;
mod walk;

pub(crate) use handle::{Handle, Link};
pub(crate) use node::{Node, Side};
pub(crate) use raw_wbtree::RawWBTree;
pub(crate) use walk::Stack;
