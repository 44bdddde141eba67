use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};


/// Discovered-but-not-yet-expanded nodes
/// The removal discipline is what separates one search strategy from another
pub trait Frontier {
    type Item;

    fn push(&mut self, item: Self::Item);
    fn pop(&mut self) -> Option<Self::Item>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


/// First in, first out - breadth-first search
#[derive(Debug)]
pub struct Fifo<T>(VecDeque<T>);

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for Fifo<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}


/// Last in, first out - depth-first search
#[derive(Debug)]
pub struct Lifo<T>(Vec<T>);

impl<T> Lifo<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for Lifo<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}


/// Heap entry
/// BinaryHeap pops the biggest entry, so the ordering is reversed to get the
/// smallest priority first. Equal priorities fall back to the item itself,
/// keeping extraction order fully determined by what was pushed.
#[derive(Debug)]
struct Prioritized<P, T> {
    priority: P,
    item: T,
}

impl<P: Ord, T: Ord> Ord for Prioritized<P, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.item.cmp(&self.item))
    }
}
impl<P: Ord, T: Ord> PartialOrd for Prioritized<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<P: Ord, T: Ord> PartialEq for Prioritized<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<P: Ord, T: Ord> Eq for Prioritized<P, T> {}


/// Min-priority queue keyed by an explicit cost - Dijkstra and A*
/// Entries are never removed on relaxation; callers discard stale ones when popped
#[derive(Debug)]
pub struct MinQueue<P, T>(BinaryHeap<Prioritized<P, T>>);

impl<P: Ord, T: Ord> MinQueue<P, T> {
    pub fn new() -> Self {
        Self(BinaryHeap::new())
    }
}

impl<P: Ord, T: Ord> Default for MinQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T: Ord> Frontier for MinQueue<P, T> {
    type Item = (P, T);

    fn push(&mut self, (priority, item): (P, T)) {
        self.0.push(Prioritized { priority, item });
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.0.pop().map(|Prioritized { priority, item }| (priority, item))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
