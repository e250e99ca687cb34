//! Array-backed binary min-heap
//!
//! A [`MinHeap`] stores its elements in a `Vec<T>` laid out as an implicit
//! complete binary tree: the element at index `i` has its parent at
//! `(i - 1) / 2` and its children at `2 * i + 1` and `2 * i + 2`. The heap
//! maintains the min-heap property (every parent is less than or equal to
//! both of its children) across all public operations, so the minimum is
//! always at index 0.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `from_vec`   | O(n)       |
//! | `push`       | O(log n)   |
//! | `peek`       | O(1)       |
//! | `pop`        | O(log n)   |
//! | `replace`    | O(log n)   |
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
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.peek(), Ok(&2));
//! ```

use std::fmt;
use std::mem;

/// Error type for heap operations
///
/// The only failure mode: asking an empty heap for its minimum. The heap is
/// never left in a partially updated state when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements, so there is no minimum to report
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "heap is empty: there is no minimum element")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A binary min-heap over a contiguous array
///
/// The element type only needs a total order (`Ord`); the heap stores the
/// values themselves rather than (priority, item) pairs. Callers that want
/// to attach payloads can store a tuple or a struct whose `Ord` compares the
/// key first.
///
/// Operations that require a minimum to exist (`peek`, `pop`, `replace`)
/// return `Err(HeapError::EmptyContainer)` on an empty heap instead of
/// panicking, and leave the heap untouched in that case.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty heap with space reserved for `capacity` elements
    ///
    /// Purely a performance hint; the heap grows past it like any `Vec`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from a vector in arbitrary order
    ///
    /// Heapifies bottom-up: sift-down at every internal node, last one
    /// first, so that both subtrees of a node are already valid heaps when
    /// the node itself is processed. This is O(n) overall, cheaper than
    /// pushing the elements one by one.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the underlying array in heap order
    ///
    /// Index 0 is the minimum; the rest follow the implicit tree layout,
    /// not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap and returns the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.pop() {
            sorted.push(min);
        }
        sorted
    }

    /// Inserts an element
    ///
    /// Appends at the last position of the tree and sifts it up until its
    /// parent is no larger. O(log n).
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the minimum element
    ///
    /// The last element moves into the root slot and sifts down. O(log n).
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Replaces the minimum with `element` and returns the old minimum
    ///
    /// Equivalent to a `pop` followed by a `push`, but with a single
    /// sift-down and no length change. Useful for streaming patterns that
    /// always trade the current minimum for a new candidate.
    ///
    /// On an empty heap the replacement value is dropped and
    /// `HeapError::EmptyContainer` is returned.
    pub fn replace(&mut self, element: T) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let old = mem::replace(&mut self.data[0], element);
        self.sift_down(0);
        Ok(old)
    }

    /// Restores the heap property over the whole array, bottom-up
    fn rebuild(&mut self) {
        if self.data.len() < 2 {
            return;
        }
        for i in (0..self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Iterative rather than recursive so the stack stays O(1) regardless
    /// of tree depth. Requires that both subtrees below `index` already
    /// satisfy the heap property.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Heapifies the vector in place, O(n)
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

/// Draining iterator that yields elements in ascending order
///
/// Created by [`MinHeap::into_iter`]. Each step pops the current minimum,
/// so the whole drain is O(n log n).
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T: Ord> {
    heap: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIterSorted<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterSorted { heap: self }
    }
}
