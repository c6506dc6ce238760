use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A min-heap entry: the vertex to relax, the predecessor that produced
/// the relaxation, and the tentative distance used as the heap key.
/// `std::collections::BinaryHeap` is a max-heap, so `Ord` is implemented
/// on the negated distance — the same trick the teacher's `FringeNode`
/// uses (`distance: -0.0` for the source, comparisons on the raw field).
struct HeapEntry {
    neg_distance: f64,
    vertex: usize,
    predecessor: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.neg_distance
            .partial_cmp(&other.neg_distance)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.neg_distance == other.neg_distance
    }
}

impl Eq for HeapEntry {}

/// Min-heap keyed by tentative distance, payload `(vertex, predecessor)`
/// (`§4.2`). No decrease-key primitive: [`sssp_weighted`](super::sssp_weighted)
/// relies on lazy re-insertion and filters stale entries on [`PriorityQueue::pop_min`].
pub struct PriorityQueue {
    heap: BinaryHeap<HeapEntry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, distance: f64, vertex: usize, predecessor: usize) {
        self.heap.push(HeapEntry {
            neg_distance: -distance,
            vertex,
            predecessor,
        });
    }

    pub fn pop_min(&mut self) -> Option<(f64, usize, usize)> {
        self.heap
            .pop()
            .map(|entry| (-entry.neg_distance, entry.vertex, entry.predecessor))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        PriorityQueue::new()
    }
}
