//! Min-priority queue of cells awaiting expansion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Point;

/// Heap entry ordered by `(priority, seq)`, reversed so that `BinaryHeap`
/// (a max-heap) pops the smallest first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: i32,
    seq: u64,
    point: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over points with FIFO order among equal priorities.
///
/// Each push is stamped with the next value of an insertion counter, so
/// ties are resolved by insertion order rather than by the points
/// themselves. There is no decrease-key: pushing a point again adds a second
/// entry and the stale one stays queued until popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    /// Queue `point` with the given priority.
    pub fn push(&mut self, point: Point, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            point,
        });
    }

    /// Remove the lowest-priority point, earliest pushed first on ties.
    pub fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.point)
    }

    /// Whether nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes so far.
    #[inline]
    pub fn pushes(&self) -> u64 {
        self.next_seq
    }
}
