//! Offline top-decile selection
//!
//! **Problem**: the whole population is in memory and only its top 10% is
//! wanted, in order. Sorting everything is O(N log N) for a result a tenth
//! the size.
//!
//! **Solution**: two interchangeable selectors that reorder the caller's
//! collection in place and copy out only the winners:
//!
//! | Selector             | Algorithm                          | Time                  | Extra memory |
//! |----------------------|------------------------------------|-----------------------|--------------|
//! | [`quickselect_rank`] | partition around the cut, sort top | O(N + K log K)        | O(1)         |
//! | [`heap_rank`]        | in-place max-heap, pop K times     | O(N + K log N)        | O(1)         |
//!
//! (K = `ceil(N / 10)`, output vector not counted.)
//!
//! Both selectors return the same multiset of levels for the same input,
//! which makes them a cross-check for each other.
//!
//! Toyota Way Principles:
//! - **Muda elimination**: never sort the 90% that is thrown away
//! - **Jidoka**: two independent algorithms, one contract

use crate::heap::{heapify, pop_to_back, HeapOrder};
use crate::player::Ranked;
use crate::result::RankingResult;
use std::time::Instant;
use tracing::debug;

/// Size of the top decile of `n` entities: `ceil(n / 10)`.
#[must_use]
pub const fn top_decile_count(n: usize) -> usize {
    n.div_ceil(10)
}

/// Select the `k` highest-level entities by partitioning, ascending.
///
/// `k` is clamped to `entities.len()`. The order of `entities` is scrambled.
pub fn partition_top_k<T: Ranked + Clone>(entities: &mut [T], k: usize) -> Vec<T> {
    let n = entities.len();
    let k = k.min(n);
    if k == 0 {
        return Vec::new();
    }

    // Everything before the cut is <= the cut, everything after is >=
    let cut = n - k;
    entities.select_nth_unstable_by_key(cut, |entity| entity.level());

    let mut top = entities[cut..].to_vec();
    top.sort_by_key(|entity| entity.level());
    top
}

/// Select the `k` highest-level entities with an in-place max-heap, ascending.
///
/// `k` is clamped to `entities.len()`. The order of `entities` is scrambled.
pub fn heap_top_k<T: Ranked + Clone>(entities: &mut [T], k: usize) -> Vec<T> {
    let n = entities.len();
    let k = k.min(n);
    if k == 0 {
        return Vec::new();
    }

    heapify(entities, HeapOrder::Max);

    // Each pop parks the current maximum just past the shrinking heap
    let mut top = Vec::with_capacity(k);
    for popped in 0..k {
        let end = n - popped;
        pop_to_back(&mut entities[..end], HeapOrder::Max);
        top.push(entities[end - 1].clone());
    }

    top.sort_by_key(|entity| entity.level());
    top
}

/// Top 10% of `entities` via quickselect, sorted ascending.
///
/// The returned result owns copies of the winners; `cutoffs` is empty.
///
/// # Examples
///
/// ```rust
/// use trueno_rank::offline::quickselect_rank;
///
/// let mut levels = vec![50u32, 10, 90, 30, 70, 20, 60, 40, 80, 100];
/// let result = quickselect_rank(&mut levels);
/// assert_eq!(result.top(), &[100]);
/// assert!(result.cutoffs().is_empty());
/// ```
pub fn quickselect_rank<T: Ranked + Clone>(entities: &mut [T]) -> RankingResult<T> {
    let start = Instant::now();

    let n = entities.len();
    let top = partition_top_k(entities, top_decile_count(n));

    let elapsed = start.elapsed();
    debug!(n, k = top.len(), ?elapsed, "quickselect_rank complete");
    RankingResult::offline(top, elapsed)
}

/// Top 10% of `entities` via early-stopping heapsort, sorted ascending.
///
/// The returned result owns copies of the winners; `cutoffs` is empty.
///
/// # Examples
///
/// ```rust
/// use trueno_rank::offline::heap_rank;
///
/// let mut levels = vec![5u32, 1, 4, 2, 8, 7, 3, 6, 9, 10, 11];
/// let result = heap_rank(&mut levels);
/// assert_eq!(result.top(), &[10, 11]);
/// ```
pub fn heap_rank<T: Ranked + Clone>(entities: &mut [T]) -> RankingResult<T> {
    let start = Instant::now();

    let n = entities.len();
    let top = heap_top_k(entities, top_decile_count(n));

    let elapsed = start.elapsed();
    debug!(n, k = top.len(), ?elapsed, "heap_rank complete");
    RankingResult::offline(top, elapsed)
}
