//! Indexed binary min-heap
//!
//! Entries are (value, priority) pairs stored as a complete binary tree in a
//! dense array. Priorities are ordered by a caller-supplied comparison, so
//! floating-point weights work as well as `Ord` types. Values are not required
//! to be unique: duplicates are independent entries.
//!
//! Lookups by value (`contains`, `get_priority`, `remove`, `set_priority`) are
//! linear scans. Every mutation restores heap order before returning.

use crate::error::{GraphError, Result};
use std::cmp::Ordering;

/// Smallest logical capacity a queue is ever sized to
pub const DEFAULT_CAPACITY: usize = 16;

/// Utilization below which `trim_excess` shrinks storage
const TRIM_THRESHOLD: f64 = 0.9;

/// A value with its priority
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityQueueItem<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> PriorityQueueItem<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }
}

/// Comparison function type used by default
pub type Comparison<P> = fn(&P, &P) -> Ordering;

/// Binary min-heap keyed by a priority comparison
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V, P, C = Comparison<P>> {
    items: Vec<PriorityQueueItem<V, P>>,
    capacity: usize,
    compare: C,
}

impl<V, P: Ord> IndexedPriorityQueue<V, P> {
    /// Empty queue ordered by `P`'s natural order
    pub fn new() -> Self {
        Self::with_comparer(DEFAULT_CAPACITY, P::cmp as Comparison<P>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparer(capacity, P::cmp as Comparison<P>)
    }
}

impl<V, P: Ord> Default for IndexedPriorityQueue<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IndexedPriorityQueue<V, f64> {
    /// Empty queue over `f64` priorities using IEEE total ordering
    pub fn for_weights() -> Self {
        Self::with_comparer(DEFAULT_CAPACITY, f64::total_cmp as Comparison<f64>)
    }
}

impl<V, P, C> IndexedPriorityQueue<V, P, C>
where
    C: Fn(&P, &P) -> Ordering,
{
    /// Empty queue with an explicit comparison. Capacities below
    /// [`DEFAULT_CAPACITY`] are raised to it.
    pub fn with_comparer(capacity: usize, compare: C) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resize the backing storage.
    ///
    /// Requests below [`DEFAULT_CAPACITY`] are raised to it; a capacity
    /// smaller than the current element count is rejected.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        if capacity < self.items.len() {
            return Err(GraphError::InvalidCapacity {
                requested: capacity,
                count: self.items.len(),
            });
        }

        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Insert a value, growing storage by half when full
    pub fn enqueue(&mut self, value: V, priority: P) {
        if self.items.len() == self.capacity {
            let grown = (self.capacity * 3 / 2).max(self.capacity + 1);
            self.items.reserve_exact(grown - self.items.len());
            self.capacity = grown;
        }

        self.items.push(PriorityQueueItem::new(value, priority));
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Remove and return the minimum-priority entry
    pub fn dequeue(&mut self) -> Result<PriorityQueueItem<V, P>> {
        if self.items.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        Ok(self.remove_at(0))
    }

    /// Minimum-priority entry without removing it
    pub fn peek(&self) -> Result<&PriorityQueueItem<V, P>> {
        self.items.first().ok_or(GraphError::EmptyQueue)
    }

    /// Remove the first entry whose value satisfies `matches`
    pub fn remove_by(&mut self, matches: impl Fn(&V) -> bool) -> Option<PriorityQueueItem<V, P>> {
        let index = self.items.iter().position(|item| matches(&item.value))?;
        Some(self.remove_at(index))
    }

    /// Remove the first entry equal to `value`
    pub fn remove(&mut self, value: &V) -> Option<PriorityQueueItem<V, P>>
    where
        V: PartialEq,
    {
        self.remove_by(|v| v == value)
    }

    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.items.iter().any(|item| item.value == *value)
    }

    /// Priority of the first entry equal to `value`
    pub fn get_priority(&self, value: &V) -> Option<&P>
    where
        V: PartialEq,
    {
        self.items
            .iter()
            .find(|item| item.value == *value)
            .map(|item| &item.priority)
    }

    /// Change the priority of the first entry equal to `value` and move it to
    /// its new heap position. Returns `false` if no entry matches.
    pub fn set_priority(&mut self, value: &V, priority: P) -> bool
    where
        V: PartialEq,
    {
        let Some(index) = self.items.iter().position(|item| item.value == *value) else {
            return false;
        };
        self.items[index].priority = priority;
        self.restore(index);
        true
    }

    /// Drop every entry and release excess storage
    pub fn clear(&mut self) {
        self.items.clear();
        self.trim_excess();
    }

    /// Shrink storage to the element count when less than 90% of it is used
    pub fn trim_excess(&mut self) {
        if (self.items.len() as f64) < TRIM_THRESHOLD * self.capacity as f64 {
            let capacity = self.items.len().max(DEFAULT_CAPACITY);
            self.items.shrink_to(capacity);
            self.capacity = capacity;
        }
    }

    /// Check that no entry has a lower priority than its parent
    pub fn verify(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let parent = (i - 1) / 2;
            (self.compare)(&self.items[parent].priority, &self.items[i].priority)
                != Ordering::Greater
        })
    }

    /// Entries in storage (heap) order
    pub fn iter(&self) -> std::slice::Iter<'_, PriorityQueueItem<V, P>> {
        self.items.iter()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a].priority, &self.items[b].priority) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.items.swap(i, child);
            i = child;
        }
    }

    /// Move the entry at `index` up or down until heap order holds
    fn restore(&mut self, index: usize) {
        if self.sift_up(index) == index {
            self.sift_down(index);
        }
    }

    /// Replace the hole with the last entry, then repair around it
    fn remove_at(&mut self, index: usize) -> PriorityQueueItem<V, P> {
        let removed = self.items.swap_remove(index);
        if index < self.items.len() {
            self.restore(index);
        }
        removed
    }
}

impl<'a, V, P, C> IntoIterator for &'a IndexedPriorityQueue<V, P, C> {
    type Item = &'a PriorityQueueItem<V, P>;
    type IntoIter = std::slice::Iter<'a, PriorityQueueItem<V, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
