//! Top-K Selection API demonstration
//!
//! Compares partition-based and heap-based selection against a full sort
//! for several values of K.
//!
//! Run with: cargo run --example topk_selection --release

use rand::Rng;
use std::time::Instant;
use trueno_rank::offline::{heap_top_k, partition_top_k};

const NUM_LEVELS: usize = 1_000_000;

fn main() {
    println!("=== Trueno-Rank Top-K Selection Example ===\n");

    println!("Creating sample population ({NUM_LEVELS} levels)...");
    let mut rng = rand::thread_rng();
    let levels: Vec<u32> = (0..NUM_LEVELS).map(|_| rng.gen_range(0..1_000_000)).collect();
    println!("  ✓ Created population\n");

    for k in [10, 1_000, 100_000] {
        println!("=== K = {k} ===");

        let mut scratch = levels.clone();
        let start = Instant::now();
        let by_partition = partition_top_k(&mut scratch, k);
        println!("  Partition (quickselect): {:?}", start.elapsed());

        let mut scratch = levels.clone();
        let start = Instant::now();
        let by_heap = heap_top_k(&mut scratch, k);
        println!("  In-place max-heap:       {:?}", start.elapsed());

        let mut scratch = levels.clone();
        let start = Instant::now();
        scratch.sort_unstable();
        let by_sort = scratch.split_off(scratch.len() - k);
        println!("  Full sort baseline:      {:?}", start.elapsed());

        assert_eq!(by_partition, by_sort);
        assert_eq!(by_heap, by_sort);
        println!(
            "  ✓ All three agree (highest level: {})\n",
            by_sort.last().copied().unwrap_or_default()
        );
    }

    println!("=== Algorithm Explanation ===");
    println!("Partition:");
    println!("  1. Quickselect the (N - K)-th order statistic into place");
    println!("  2. Everything after it is >= it: that tail is the top K");
    println!("  3. Sort only the tail\n");

    println!("Heap:");
    println!("  1. Build a max-heap over the whole population in place");
    println!("  2. Pop the maximum K times");
    println!("  3. Sort the popped entities\n");

    println!("=== Performance Benefits ===");
    println!("✓ Memory: no copy of the population, only the K winners");
    println!("✓ Time: O(N + K log K) / O(N + K log N) vs O(N log N)");
}
