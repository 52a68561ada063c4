//! This is extrinsic priority queue that supports changing priority of queued items.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each item is unique and hashable; priorities are numbers supplied separately
//! (`f32` or `f64`, see [`Priority`]).
//! A queue is created either as a min-queue or as a max-queue.
//!
//! Getting returns the most prioritized item, removing also takes it out.
//! Adding puts new item to queue.
//! Also it is possible to change priority of any item in queue, both up and down.
//!
//! Add, remove, change priority have ***O(log n)*** time complexity;
//! get, lookup by item are ***O(1)***.
//!
//! [`ReferencePriorityQueue`] implements the same [`PriorityQueue`] trait with linear scans.
//! It is useful for checking other implementations against it.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra algorithm][dijkstra] on small directed graph.
//! When shorter path to node in queue is found, its priority is decreased in place.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`Priority`]: trait.Priority.html
//! [`PriorityQueue`]: trait.PriorityQueue.html
//! [`ReferencePriorityQueue`]: struct.ReferencePriorityQueue.html
//!
//! ```
//! use indexed_priority_queue::IndexedBinaryHeap;
//! use std::collections::HashMap;
//!
//! // (from, to, length)
//! let edges = [
//!     ('a', 'b', 7.0),
//!     ('a', 'c', 9.0),
//!     ('a', 'f', 14.0),
//!     ('b', 'c', 10.0),
//!     ('b', 'd', 15.0),
//!     ('c', 'd', 11.0),
//!     ('c', 'f', 2.0),
//!     ('d', 'e', 6.0),
//!     ('f', 'e', 9.0),
//! ];
//!
//! let mut distances: HashMap<char, f64> = HashMap::new();
//! let mut settled: HashMap<char, f64> = HashMap::new();
//! // Min-queue: the closest node goes first
//! let mut frontier = IndexedBinaryHeap::new(false);
//! frontier.add('a', 0.0).unwrap();
//! distances.insert('a', 0.0);
//!
//! while let Ok(node) = frontier.remove() {
//!     let distance = distances[&node];
//!     settled.insert(node, distance);
//!     for &(_, next, length) in edges.iter().filter(|e| e.0 == node) {
//!         if settled.contains_key(&next) {
//!             continue;
//!         }
//!         let candidate = distance + length;
//!         match distances.get(&next) {
//!             Some(&known) if known <= candidate => {}
//!             _ => {
//!                 distances.insert(next, candidate);
//!                 if frontier.contains(&next) {
//!                     // Have found shorter path to node in queue
//!                     frontier.change_priority(&next, candidate).unwrap();
//!                 } else {
//!                     frontier.add(next, candidate).unwrap();
//!                 }
//!             }
//!         }
//!     }
//! }
//!
//! assert_eq!(settled[&'e'], 20.0);
//! assert_eq!(settled[&'f'], 11.0);
//! assert_eq!(settled[&'d'], 20.0);
//! ```
//!

mod editable_binary_heap;
mod indexed_binary_heap;
mod mediator;
mod priority;
mod priority_queue;
mod reference;

pub use crate::indexed_binary_heap::{IndexedBinaryHeap, IndexedBinaryHeapIterator};
pub use crate::priority::Priority;
pub use crate::priority_queue::{PriorityQueue, PriorityQueueError};
pub use crate::reference::ReferencePriorityQueue;

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
