//! Max-priority queue of candidate gains without deletion.
//!
//! Updating a candidate pushes a fresh entry; older entries for the same
//! pixel stay in the heap and are recognised as stale by the caller when
//! popped (their gain no longer matches the live gain table).
//!
//! Ordering is by gain (descending, `f32::total_cmp`), then by insertion
//! sequence (ascending), so equal gains pop in FIFO order and runs are
//! reproducible.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct Entry {
    gain: f32,
    seq: u64,
    pixel: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .total_cmp(&other.gain)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Lazily invalidated max-heap keyed by gain.
#[derive(Debug, Default)]
pub struct GainQueue {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl GainQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Push an entry for `pixel`; earlier entries for it are left in place.
    pub fn push(&mut self, pixel: usize, gain: f32) {
        self.heap.push(Entry {
            gain,
            seq: self.seq,
            pixel,
        });
        self.seq += 1;
    }

    /// Pop the highest-gain entry as `(pixel, gain)`, stale or not.
    pub fn pop(&mut self) -> Option<(usize, f32)> {
        self.heap.pop().map(|e| (e.pixel, e.gain))
    }

    /// Number of entries held, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
