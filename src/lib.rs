//! Weight-balanced binary search tree map for Rust.
//!
//! This crate provides [`WBTreeMap`], an ordered map kept balanced by subtree sizes rather than
//! heights. Every node caches the number of entries below it, and after each insertion or
//! removal the nodes on the search path are checked and, if one side has grown more than three
//! times heavier than the other, restored by a single or double rotation.
//!
//! Besides the usual map operations it offers bounded extraction from either end:
//!
//! - [`least`](WBTreeMap::least) / [`greatest`](WBTreeMap::greatest) - The `n` smallest or
//!   largest entries, found without walking the rest of the tree
//! - [`for_each`](WBTreeMap::for_each) / [`rev_for_each`](WBTreeMap::rev_for_each) - Ordered
//!   visits that stop as soon as the callback says so
//! - [`get_node`](WBTreeMap::get_node) - A [`Subtree`] view of the node holding a key
//!
//! # Example
//!
//! ```
//! use wbtree::WBTreeMap;
//!
//! let mut scores = WBTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // `insert` reports whether the key was new.
//! assert!(!scores.insert("Bob", 88));
//! assert_eq!(scores.get_or_default("Dave"), 0);
//!
//! // The two alphabetically first players.
//! assert_eq!(scores.least_keys(2), [&"Alice", &"Bob"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Arena storage** - Nodes live in one slot vector; removed slots are reused
//! - **`tracing`** (off by default) - Emits `tracing` events for every rotation
//!
//! # Implementation
//!
//! Balance follows Hirai and Yamamoto, "Balancing weight-balanced trees", with the integer
//! parameters delta = 3 and gamma = 2. Insertion and removal descend recursively and rebalance
//! each node on the way back up, so the height stays within log<sub>4/3</sub>(n + 1).

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod raw;

pub mod wbtree_map;

pub use compare::Comparable;
pub use wbtree_map::{Subtree, WBTreeMap};
