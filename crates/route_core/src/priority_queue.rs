use std::{cmp::Ordering, collections::BinaryHeap};

use crate::constants::Latency;

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the entry with the lowest tentative distance
/// is always at the top.
///
/// There is no decrease-key. The same router may be pushed several times with
/// different distances and stale entries are left to the caller to discard
/// once popped. Entries with equal distance are popped in insertion order.
#[derive(Debug)]
pub struct PriorityQueue<N> {
    heap: BinaryHeap<HeapItem<N>>,
    next_seq: u64,
}

impl<N> PriorityQueue<N> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, entry: FrontierEntry<N>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapItem { entry, seq });
    }

    /// Removes the entry with the smallest distance. Returns `None` if the
    /// queue is empty.
    pub fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop().map(|item| item.entry)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<N> Default for PriorityQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate router on the search frontier
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry<N> {
    pub router: N,
    pub distance: Latency,
}

impl<N> FrontierEntry<N> {
    pub fn new(router: N, distance: Latency) -> Self {
        FrontierEntry { router, distance }
    }
}

#[derive(Debug)]
struct HeapItem<N> {
    entry: FrontierEntry<N>,
    seq: u64,
}

impl<N> PartialOrd for HeapItem<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for HeapItem<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for HeapItem<N> {}

impl<N> Ord for HeapItem<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the ordering so that the smallest element is at the top of the heap.
        other
            .entry
            .distance
            .partial_cmp(&self.entry.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
