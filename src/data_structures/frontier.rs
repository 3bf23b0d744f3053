use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(distance, vertex)` candidates.
///
/// A vertex may be pushed several times as its distance improves. Older
/// entries stay in the heap and come out later with a larger distance;
/// callers recognise them by comparing against their distance table.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    pushes: usize,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    /// True once every entry, stale ones included, has been popped
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Queues `vertex` at `distance`; earlier entries for the same vertex stay queued
    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
        self.pushes += 1;
    }

    /// Removes the entry with the smallest distance, as `(vertex, distance)`
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// The entry [`Frontier::pop`] would return next, left in place
    pub fn peek(&self) -> Option<(usize, P)> {
        let Reverse((distance, vertex)) = *self.heap.peek()?;
        Some((vertex, distance))
    }
}

impl<P> Default for Frontier<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
