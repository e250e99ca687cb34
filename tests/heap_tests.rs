//! Integration tests for the heap and its renderers
//!
//! These exercise the public surface the way a caller would: constructors,
//! mixed operation sequences under load, and the ASCII dumps.

use minheap::{render, HeapError, MinHeap};

/// Every parent must be <= both children
fn assert_heap_property(heap: &MinHeap<i32>) {
    let data = heap.as_slice();
    for i in 0..data.len() {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < data.len() {
                assert!(
                    data[i] <= data[child],
                    "heap property violated at parent {i} / child {child}: {data:?}"
                );
            }
        }
    }
}

#[test]
fn test_constructors_agree() {
    let values = vec![9, 4, 7, 1, 8, 2, 6, 3, 5];

    let built = MinHeap::from_vec(values.clone());
    let converted: MinHeap<i32> = values.clone().into();
    let collected: MinHeap<i32> = values.clone().into_iter().collect();
    let mut pushed = MinHeap::with_capacity(values.len());
    for v in &values {
        pushed.push(*v);
    }

    // Layouts may differ between construction orders, but the contents and
    // the drain order must not
    let expected: Vec<i32> = {
        let mut sorted = values;
        sorted.sort();
        sorted
    };
    assert_eq!(built.into_sorted_vec(), expected);
    assert_eq!(converted.into_sorted_vec(), expected);
    assert_eq!(collected.into_sorted_vec(), expected);
    assert_eq!(pushed.into_sorted_vec(), expected);
}

#[test]
fn test_size_laws() {
    let mut heap = MinHeap::from_vec(vec![10, 20, 30]);

    heap.push(5);
    assert_eq!(heap.len(), 4);

    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.replace(25), Ok(10));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_empty_heap_is_left_unchanged_on_error() {
    let mut heap: MinHeap<i32> = MinHeap::new();

    assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.replace(1), Err(HeapError::EmptyContainer));
    assert!(heap.is_empty());

    // The error is a std error with a readable message
    let err: Box<dyn std::error::Error> = Box::new(HeapError::EmptyContainer);
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_massive_push_then_pop() {
    let mut heap = MinHeap::new();

    for i in (0..1000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 1000);
    assert_heap_property(&heap);

    for i in 0..1000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_alternating_push_and_pop() {
    let mut heap = MinHeap::new();

    for i in 0..200 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        let min = heap.pop().unwrap();
        assert_eq!(min, i);
        assert_heap_property(&heap);
    }
    assert_eq!(heap.len(), 200);
}

#[test]
fn test_replace_stream_keeps_window() {
    // Streaming top-k pattern: keep the 8 largest of a stream by replacing
    // the smallest survivor whenever a bigger candidate arrives
    let stream: Vec<i32> = (0..100).map(|i| (i * 37) % 100).collect();
    let mut window = MinHeap::from_vec(stream[..8].to_vec());

    for &candidate in &stream[8..] {
        if candidate > *window.peek().unwrap() {
            window.replace(candidate).unwrap();
        }
        assert_heap_property(&window);
        assert_eq!(window.len(), 8);
    }

    assert_eq!(window.into_sorted_vec(), vec![92, 93, 94, 95, 96, 97, 98, 99]);
}

#[test]
fn test_heapsort_round_trip() {
    let values = vec![42, -7, 13, 0, 99, -50, 7, 7, 3];
    let mut expected = values.clone();
    expected.sort();

    let drained: Vec<i32> = MinHeap::from_vec(values).into_iter().collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_walkthrough_with_render() {
    let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.peek(), Ok(&1));

    heap.push(0);
    assert!(render::indented(&heap).starts_with("H=0\n"));

    assert_eq!(heap.pop(), Ok(0));
    assert!(render::indented(&heap).starts_with("H=1\n"));

    assert_eq!(heap.replace(100), Ok(1));
    assert!(render::indented(&heap).starts_with("H=2\n"));

    let picture = render::tree(&heap);
    assert!(picture.contains("[Root Node]"));
    assert!(picture.contains("100"));
}

#[test]
fn test_write_variants_match_string_variants() {
    use std::fmt::Write;

    let heap = MinHeap::from_vec(vec![6, 2, 9, 4]);

    let mut indented = String::new();
    render::write_indented(&heap, &mut indented).unwrap();
    assert_eq!(indented, render::indented(&heap));

    let mut tree = String::new();
    render::write_tree(&heap, &mut tree).unwrap();
    assert_eq!(tree, render::tree(&heap));

    // Renderers compose with any fmt::Write sink
    let mut combined = String::new();
    write!(combined, "heap of {}:\n{}", heap.len(), indented).unwrap();
    assert!(combined.starts_with("heap of 4:\nH=2\n"));
}
