//! Array-backed binary heaps
//!
//! Hand-rolled heap primitives over plain slices. The children of slot `i`
//! live at `2i + 1` and `2i + 2`; the root is slot 0.
//!
//! - [`heapify`], [`sift_down`] and [`pop_to_back`] work in place on any
//!   slice, in either [`HeapOrder`]. The offline heap selector uses them to
//!   turn the caller's collection into a max-heap without allocating.
//! - [`replace_min`] is the bounded leaderboard update: overwrite the root of
//!   a min-heap and sift it down in O(log K).
//! - [`MinHeap`] owns its slots and is the leaderboard of the streaming
//!   tracker.
//!
//! `std::collections::BinaryHeap` is not used: the offline selector works on
//! slots it does not own.

use crate::player::Ranked;

/// Which end of the ordering sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Root holds the lowest level
    Min,
    /// Root holds the highest level
    Max,
}

impl HeapOrder {
    /// True if `a` belongs strictly above `b` in this ordering.
    #[inline]
    fn outranks<T: Ranked>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Min => a.level() < b.level(),
            Self::Max => a.level() > b.level(),
        }
    }
}

/// Arrange `heap` into a binary heap in place (Floyd's bottom-up build, O(N)).
pub fn heapify<T: Ranked>(heap: &mut [T], order: HeapOrder) {
    for root in (0..heap.len() / 2).rev() {
        sift_down(heap, root, order);
    }
}

/// Sift the entity at `index` down until neither child outranks it.
///
/// Both subtrees below `index` must already satisfy the heap property.
pub fn sift_down<T: Ranked>(heap: &mut [T], mut index: usize, order: HeapOrder) {
    let len = heap.len();
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut best = index;

        if left < len && order.outranks(&heap[left], &heap[best]) {
            best = left;
        }
        if right < len && order.outranks(&heap[right], &heap[best]) {
            best = right;
        }
        if best == index {
            break;
        }

        heap.swap(index, best);
        index = best;
    }
}

/// Move the root of `heap` to its last slot and restore the heap over the
/// remaining prefix `heap[..len - 1]`.
pub fn pop_to_back<T: Ranked>(heap: &mut [T], order: HeapOrder) {
    let len = heap.len();
    if len < 2 {
        return;
    }
    heap.swap(0, len - 1);
    sift_down(&mut heap[..len - 1], 0, order);
}

/// Replace the minimum of a min-heap with `incoming` and restore the heap.
///
/// Returns the evicted root. An empty heap has nothing to replace, so
/// `incoming` is handed straight back.
///
/// Runs in O(log N). `heap` must already be a min-heap.
pub fn replace_min<T: Ranked>(heap: &mut [T], incoming: T) -> T {
    let Some(root) = heap.first_mut() else {
        return incoming;
    };
    let evicted = std::mem::replace(root, incoming);
    sift_down(heap, 0, HeapOrder::Min);
    evicted
}

/// Check the heap property over the whole slice.
#[must_use]
pub fn is_heap<T: Ranked>(heap: &[T], order: HeapOrder) -> bool {
    (1..heap.len()).all(|child| !order.outranks(&heap[child], &heap[(child - 1) / 2]))
}

/// Fixed-layout min-heap leaderboard.
///
/// The root is always the lowest-level entity, i.e. the current admission
/// threshold.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    slots: Vec<T>,
}

impl<T: Ranked> MinHeap<T> {
    /// Create an empty heap with room for `capacity` entities
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Build a heap from an arbitrary vector in O(N)
    #[must_use]
    pub fn from_vec(mut slots: Vec<T>) -> Self {
        heapify(&mut slots, HeapOrder::Min);
        Self { slots }
    }

    /// Insert an entity, sifting it up to its place.
    pub fn push(&mut self, entity: T) {
        self.slots.push(entity);
        let mut index = self.slots.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].level() >= self.slots[parent].level() {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    /// Lowest-level entity, if any
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Level of the root, if any
    #[must_use]
    pub fn min_level(&self) -> Option<T::Level> {
        self.peek().map(Ranked::level)
    }

    /// Replace the root with `incoming`; returns the evicted entity.
    ///
    /// See [`replace_min`].
    pub fn replace_min(&mut self, incoming: T) -> T {
        replace_min(&mut self.slots, incoming)
    }

    /// Number of entities held
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the heap holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Heap slots in layout order
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Consume the heap, returning its entities sorted ascending by level.
    ///
    /// The sort is stable, equal levels keep their slot order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.slots.sort_by_key(Ranked::level);
        self.slots
    }
}
