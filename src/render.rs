//! ASCII visualization of a heap's implicit tree
//!
//! Read-only presentation helpers: they render whatever array the heap
//! currently holds and never mutate it. The output is only meaningful as a
//! tree picture when the array satisfies the min-heap property, but the
//! renderers do not verify that.
//!
//! Two layouts are available:
//!
//! - [`indented`]: a top-down `[node, right, left]` dump, one node per line,
//!   indented four spaces per tree level.
//! - [`tree`]: a textbook-style picture with one centered row per level and
//!   `/` `\` branches between rows. Readable for small heaps with short
//!   element renderings; wide for anything else.
//!
//! Each layout comes in a `write_*` form targeting any [`fmt::Write`] sink
//! and a convenience form returning a `String`.

use std::fmt::{self, Display, Write};

use crate::heap::MinHeap;

/// Renders the heap as an indented `[node, right, left]` dump
///
/// The root is tagged `H=`, right children `R=` and left children `L=`,
/// with the right subtree printed before the left one:
///
/// ```text
/// H=1
///     R=3
///     L=2
/// ```
pub fn indented<T: Ord + Display>(heap: &MinHeap<T>) -> String {
    let mut out = String::new();
    // fmt::Write to a String cannot fail
    let _ = write_indented(heap, &mut out);
    out
}

/// [`indented`], writing into any `fmt::Write` sink
///
/// An empty heap produces no output.
pub fn write_indented<T, W>(heap: &MinHeap<T>, out: &mut W) -> fmt::Result
where
    T: Ord + Display,
    W: Write,
{
    let data = heap.as_slice();
    if data.is_empty() {
        return Ok(());
    }
    writeln!(out, "H={}", data[0])?;
    write_children(data, 0, 1, out)
}

fn write_children<T, W>(data: &[T], index: usize, level: usize, out: &mut W) -> fmt::Result
where
    T: Display,
    W: Write,
{
    let left = 2 * index + 1;
    let right = 2 * index + 2;

    if right < data.len() {
        pad(out, 4 * level)?;
        writeln!(out, "R={}", data[right])?;
    }
    if left < data.len() {
        pad(out, 4 * level)?;
        writeln!(out, "L={}", data[left])?;
    }

    if right < data.len() {
        write_children(data, right, level + 1, out)?;
    }
    if left < data.len() {
        write_children(data, left, level + 1, out)?;
    }
    Ok(())
}

/// Renders the heap as a textbook-style tree picture
///
/// One row per level of the complete tree, values centered over their
/// subtrees, with a branch row of `/` and `\` between levels and a
/// `[Root Node]` header above.
pub fn tree<T: Ord + Display>(heap: &MinHeap<T>) -> String {
    let mut out = String::new();
    let _ = write_tree(heap, &mut out);
    out
}

/// [`tree`], writing into any `fmt::Write` sink
///
/// An empty heap produces no output.
pub fn write_tree<T, W>(heap: &MinHeap<T>, out: &mut W) -> fmt::Result
where
    T: Ord + Display,
    W: Write,
{
    let data = heap.as_slice();
    let len = data.len();
    if len == 0 {
        return Ok(());
    }

    // Number of levels in the complete tree: floor(log2(len)) + 1
    let mut levels = 0;
    while (len >> levels) != 0 {
        levels += 1;
    }

    writeln!(out)?;
    pad(out, (1usize << levels).saturating_sub(6))?;
    writeln!(out, "[Root Node]")?;

    for i in 0..levels {
        let offset = (1 << i) - 1;

        // Value row: each node padded into a slot sized for its subtree width
        for j in 0..=offset {
            let index = j + offset;
            if index < len {
                let slot = (1 << (levels - i)) - 1;
                pad(out, slot)?;
                write!(out, "{}", data[index])?;
                pad(out, slot)?;
            }
        }
        writeln!(out)?;
        writeln!(out)?;

        // Branch row: a '/' for every node with a left child, a '\' when
        // the right child exists as well
        let mid = (1usize << (levels - i)).saturating_sub(2);
        for j in 0..=offset {
            let index = j + offset;
            if index < len / 2 {
                let arm = 1 << (levels - i - 1);
                pad(out, arm)?;
                out.write_char('/')?;
                if index + 2 <= len / 2 || len % 2 == 1 {
                    pad(out, mid)?;
                    out.write_char('\\')?;
                    pad(out, arm)?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn pad<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    for _ in 0..width {
        out.write_char(' ')?;
    }
    Ok(())
}
