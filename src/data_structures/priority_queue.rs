use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A queued (node, tentative distance) pair.
///
/// Ordering only looks at the priority, so nodes need no `Ord` of their own
/// and ties come out in whatever order the heap yields them.
#[derive(Debug, Clone)]
struct FrontierEntry<N, P> {
    priority: P,
    node: N,
}

impl<N, P: Ord> PartialEq for FrontierEntry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<N, P: Ord> Eq for FrontierEntry<N, P> {}

impl<N, P: Ord> PartialOrd for FrontierEntry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, P: Ord> Ord for FrontierEntry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A min-priority frontier over (node, priority) pairs backed by a binary heap.
///
/// There is no decrease-key: a better distance for a node is inserted as a
/// fresh entry and the older one stays behind as a stale entry.
#[derive(Debug)]
pub struct FrontierQueue<N, P>
where
    N: Clone + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<FrontierEntry<N, P>>>,
}

impl<N, P> Default for FrontierQueue<N, P>
where
    N: Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P> FrontierQueue<N, P>
where
    N: Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FrontierQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an entry; the same node may already be queued with another priority
    pub fn insert(&mut self, node: N, priority: P) {
        self.heap.push(Reverse(FrontierEntry { priority, node }));
    }

    /// Removes and returns the entry with the smallest priority
    pub fn extract_min(&mut self) -> Option<(N, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.priority))
    }

    pub fn peek_min(&self) -> Option<(&N, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.node, entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
