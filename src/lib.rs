//! Ordered collections backed by a left-leaning red-black tree.
//!
//! This crate provides [`LlrbMap`] and [`LlrbSet`], ordered map and set
//! collections in the style of the standard library's `BTreeMap` and
//! `BTreeSet` with additional O(log n) order-statistic operations:
//!
//! - [`get_by_rank`](LlrbMap::get_by_rank) - Get the element at a given sorted position
//! - [`rank`](LlrbMap::rank) - Count the keys strictly less than a probe key
//! - [`floor`](LlrbMap::floor) / [`ceiling`](LlrbMap::ceiling) - Nearest-key queries
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//!
//! # Example
//!
//! ```
//! use llrb_tree::{LlrbMap, Rank};
//!
//! let mut scores = LlrbMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Standard ordered-map operations work as expected
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Order-statistic operations (O(log n))
//! let (name, score) = scores.get_by_rank(1).unwrap();
//! assert_eq!((*name, *score), ("Bob", 85)); // keys sort alphabetically
//!
//! // Rank of a key: number of strictly smaller keys
//! assert_eq!(scores.rank(&"Carol"), 2);
//!
//! // Index by rank
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(log n) rank operations** - Subtree size augmentation on every node
//! - **Index-based arena storage** - Nodes live in one contiguous slot arena,
//!   addressed by niche-optimized handles instead of per-node boxes
//!
//! # Implementation
//!
//! The collections are backed by a left-leaning red-black tree: a binary
//! search tree whose red links may only lean left and never chain, which
//! guarantees perfect black balance and a height of at most 2 log2(n).
//! Restricting red links to the left halves the rebalancing case analysis of
//! a classical red-black tree; every structural repair is a composition of
//! rotations and color flips. Each node also tracks the size of its subtree,
//! which is what makes rank and select O(log n).

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: `IterMut` requires a small amount of unsafe to hand out disjoint
// mutable value references from the arena.
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod llrb_map;
pub mod llrb_set;

pub use llrb_map::LlrbMap;
pub use llrb_set::LlrbSet;
pub use order_statistic::Rank;
