//! Heap walkthrough
//!
//! Builds a heap from a batch of random values and shows every core
//! operation with an ASCII dump after each step. Run with:
//!
//! ```sh
//! cargo run --example heap_walkthrough
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use minheap::{render, HeapError, MinHeap};

const N_VALUES: usize = 26;
const SEED: u64 = 101;

fn main() -> Result<(), HeapError> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values: Vec<i32> = (0..N_VALUES).map(|_| rng.gen_range(9..99)).collect();

    println!();
    println!("initial array was:    {values:?}");

    let mut heap = MinHeap::from_vec(values);
    println!("after heapification:  {:?}", heap.as_slice());
    println!();
    println!("visualisation to check for correctness:");
    println!("{}", render::tree(&heap));

    println!("insert 0 into the heap:");
    heap.push(0);
    println!("{}", render::tree(&heap));

    let min = heap.pop()?;
    println!("extract minimum {min} from the heap:");
    println!("{}", render::tree(&heap));

    let old = heap.replace(33)?;
    println!("replace minimum {old} with 33:");
    println!("{}", render::tree(&heap));

    println!("same heap as an indented [node, right, left] dump:");
    println!("{}", render::indented(&heap));

    Ok(())
}
