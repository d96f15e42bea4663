//! Collections used by the MST strategies
//!
//! - `disjoint_set`: union-find with naive and union-by-size merging
//! - `priority_queue`: indexed binary min-heap over (value, priority) pairs

pub mod disjoint_set;
pub mod priority_queue;

pub use disjoint_set::{DisjointSet, NaiveDisjointSet, WeightedDisjointSet};
pub use priority_queue::{IndexedPriorityQueue, PriorityQueueItem};
