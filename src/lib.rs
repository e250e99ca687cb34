//! Array-backed binary min-heap for Rust
//!
//! This crate provides [`MinHeap`], a priority container over a flat array
//! laid out as an implicit complete binary tree. It supports O(n) heap
//! construction from an arbitrary vector, O(log n) insertion and
//! extraction, O(1) peek at the minimum, and an O(log n) in-place
//! [`replace`](MinHeap::replace) of the minimum that is cheaper than a pop
//! followed by a push.
//!
//! The [`render`] module renders a heap's implicit tree as ASCII, either as
//! an indented dump or as a textbook-style centered picture.
//!
//! # Example
//!
//! ```rust
//! use minheap::MinHeap;
//!
//! let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! heap.push(0);
//! assert_eq!(heap.pop(), Ok(0));
//!
//! // Swap the minimum for a new candidate with a single sift-down
//! assert_eq!(heap.replace(100), Ok(1));
//! assert_eq!(heap.peek(), Ok(&2));
//!
//! // Draining yields ascending order
//! let sorted: Vec<i32> = heap.into_iter().collect();
//! assert_eq!(sorted, vec![2, 3, 5, 8, 9, 100]);
//! ```

pub mod heap;
pub mod render;

// Re-export the container and its error for convenience
pub use heap::{HeapError, IntoIterSorted, MinHeap};
