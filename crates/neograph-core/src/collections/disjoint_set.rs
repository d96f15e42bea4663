//! Union-find over arbitrary hashable keys
//!
//! Two variants share the [`DisjointSet`] trait:
//! - [`NaiveDisjointSet`] always hangs the first root under the second
//! - [`WeightedDisjointSet`] hangs the smaller component under the larger
//!
//! Both compress paths iteratively during `find`. Looking up a key that was
//! never registered yields `None` from `find` and
//! [`GraphError::UnregisteredKey`] from `union`/`is_same_set`; it never
//! inserts the key or alters existing components.

use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Partition of keys into disjoint components
pub trait DisjointSet<K> {
    /// Register `key` as a singleton component. No-op if already present.
    fn make_set(&mut self, key: K);

    /// Representative of the component containing `key`, compressing the
    /// visited path. `None` if `key` was never registered.
    fn find(&mut self, key: &K) -> Option<K>;

    /// Merge the components of `a` and `b`.
    ///
    /// Returns `Ok(false)` if they were already joined, `Ok(true)` after a merge.
    fn union(&mut self, a: &K, b: &K) -> Result<bool>;

    /// Number of live components
    fn count(&self) -> usize;

    /// Number of registered keys
    fn len(&self) -> usize;

    fn contains(&self, key: &K) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `a` and `b` share a representative
    fn is_same_set(&mut self, a: &K, b: &K) -> Result<bool>
    where
        K: Debug + PartialEq,
    {
        let (ra, rb) = find_roots(self, a, b)?;
        Ok(ra == rb)
    }
}

/// Walk to the root of `key`, then point every node on the path at it.
fn find_and_compress<K>(parent: &mut HashMap<K, K>, key: &K) -> Option<K>
where
    K: Eq + Hash + Clone,
{
    let mut root = parent.get(key)?.clone();
    while let Some(next) = parent.get(&root) {
        if *next == root {
            break;
        }
        root = next.clone();
    }

    let mut node = key.clone();
    while node != root {
        match parent.insert(node, root.clone()) {
            Some(next) => node = next,
            None => break,
        }
    }

    Some(root)
}

/// Resolve both roots, failing on the first unregistered key
fn find_roots<K, S>(set: &mut S, a: &K, b: &K) -> Result<(K, K)>
where
    K: Debug,
    S: DisjointSet<K> + ?Sized,
{
    let ra = set.find(a).ok_or_else(|| GraphError::unregistered_key(a))?;
    let rb = set.find(b).ok_or_else(|| GraphError::unregistered_key(b))?;
    Ok((ra, rb))
}

/// Union-find without balancing.
///
/// `union(a, b)` always attaches the root of `a` under the root of `b`, so
/// adversarial union orders build long chains; path compression in `find`
/// flattens them on the next lookup.
#[derive(Debug, Clone, Default)]
pub struct NaiveDisjointSet<K> {
    parent: HashMap<K, K>,
    count: usize,
}

impl<K> NaiveDisjointSet<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            count: 0,
        }
    }

    /// Build with every key as a singleton. Duplicate keys collapse into one.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.make_set(key);
        }
        set
    }
}

impl<K> DisjointSet<K> for NaiveDisjointSet<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn make_set(&mut self, key: K) {
        if !self.parent.contains_key(&key) {
            self.parent.insert(key.clone(), key);
            self.count += 1;
        }
    }

    fn find(&mut self, key: &K) -> Option<K> {
        find_and_compress(&mut self.parent, key)
    }

    fn union(&mut self, a: &K, b: &K) -> Result<bool> {
        let (ra, rb) = find_roots(self, a, b)?;
        if ra == rb {
            return Ok(false);
        }
        self.parent.insert(ra, rb);
        self.count -= 1;
        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.parent.contains_key(key)
    }
}

/// Union-find with union by size.
///
/// The root of the smaller component is attached under the root of the
/// larger one (ties attach `a` under `b`), which bounds tree depth to
/// O(log n) even before path compression.
#[derive(Debug, Clone, Default)]
pub struct WeightedDisjointSet<K> {
    parent: HashMap<K, K>,
    size: HashMap<K, usize>,
    count: usize,
}

impl<K> WeightedDisjointSet<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            size: HashMap::new(),
            count: 0,
        }
    }

    /// Build with every key as a singleton. Duplicate keys collapse into one.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.make_set(key);
        }
        set
    }

    /// Size of the component containing `key`
    pub fn component_size(&mut self, key: &K) -> Option<usize> {
        let root = self.find(key)?;
        self.size.get(&root).copied()
    }
}

impl<K> DisjointSet<K> for WeightedDisjointSet<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn make_set(&mut self, key: K) {
        if !self.parent.contains_key(&key) {
            self.parent.insert(key.clone(), key.clone());
            self.size.insert(key, 1);
            self.count += 1;
        }
    }

    fn find(&mut self, key: &K) -> Option<K> {
        find_and_compress(&mut self.parent, key)
    }

    fn union(&mut self, a: &K, b: &K) -> Result<bool> {
        let (ra, rb) = find_roots(self, a, b)?;
        if ra == rb {
            return Ok(false);
        }

        let size_a = self.size.get(&ra).copied().unwrap_or(1);
        let size_b = self.size.get(&rb).copied().unwrap_or(1);
        let (child, root) = if size_a > size_b { (rb, ra) } else { (ra, rb) };

        self.size.remove(&child);
        self.size.insert(root.clone(), size_a + size_b);
        self.parent.insert(child, root);
        self.count -= 1;
        Ok(true)
    }

    fn count(&self) -> usize {
        self.count
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.parent.contains_key(key)
    }
}
