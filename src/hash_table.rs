//! A chained hash table that remembers insertion order.
//!
//! Collisions are resolved by chaining pairs in a bucket. When an insert
//! makes a chain longer than the configured threshold, the capacity is
//! doubled and every pair is reinserted in insertion order. Enumeration
//! follows a separate ledger of keys, so it never depends on bucket placement.

mod iter;

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

use crate::config::HashTableConfig;
use crate::error::{Error, Result};
pub use iter::Iter;

type Bucket<K, V> = Vec<(K, V)>;

/// Hasher used when none is given. Unkeyed, so bucket placement is
/// reproducible between runs.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// An unordered dictionary with separate chaining.
///
/// ```
/// use dictionaries::HashTable;
/// let mut table = HashTable::new();
/// table.insert("one", 1);
/// table.insert("two", 2);
/// *table.get_or_insert_default("three") += 3;
/// assert_eq!(table.at(&"two"), Ok(&2));
/// assert_eq!(table.keys(), ["one", "two", "three"]);
/// assert!(table.remove(&"one"));
/// assert!(!table.contains_key(&"one"));
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Bucket<K, V>>,
    /// Keys in order of first insertion.
    order: Vec<K>,
    num_elements: usize,
    max_collisions: usize,
    hash_builder: S,
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table with 5 buckets and a collision threshold of 3.
    pub fn new() -> Self {
        Self::with_config(HashTableConfig::default())
    }

    /// Creates an empty table with the given number of buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(HashTableConfig::default().initial_capacity(capacity))
    }

    pub fn with_config(config: HashTableConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    pub fn with_config_and_hasher(config: HashTableConfig, hash_builder: S) -> Self {
        tracing::trace!(
            capacity = config.capacity(),
            max_collisions = config.collision_threshold(),
            "created hash table"
        );
        Self {
            buckets: empty_buckets(config.capacity()),
            order: Vec::new(),
            num_elements: 0,
            max_collisions: config.collision_threshold(),
            hash_builder,
        }
    }

    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.num_elements
    }

    pub fn is_empty(&self) -> bool {
        self.num_elements == 0
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the keys in the order they were first inserted.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Removes every pair. The capacity is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.order.clear();
        self.num_elements = 0;
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashTable<K, V, S> {
    fn bucket_index(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn bucket(&self, key: &K) -> &Bucket<K, V> {
        &self.buckets[self.bucket_index(key)]
    }

    fn bucket_mut(&mut self, key: &K) -> &mut Bucket<K, V> {
        let index = self.bucket_index(key);
        &mut self.buckets[index]
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.bucket(key)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.bucket_mut(key)
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but fails with [`Error::KeyNotFound`].
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Like [`get_mut`](Self::get_mut), but fails with [`Error::KeyNotFound`].
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns true if the table contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` and its value.
    /// Returns whether the key was present; absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        let bucket = self.bucket_mut(key);
        let Some(pos) = bucket.iter().position(|(k, _)| k == key) else {
            return false;
        };
        bucket.remove(pos);
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
        self.num_elements -= 1;
        true
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Ledger holds each key once
        let ledger: std::collections::HashSet<&K> = self.order.iter().collect();
        assert_eq!(ledger.len(), self.order.len());

        let mut num_elements = 0;
        for (index, bucket) in self.buckets.iter().enumerate() {
            assert!(bucket.len() <= self.max_collisions);
            for (key, _) in bucket {
                assert_eq!(self.bucket_index(key), index);
                assert!(ledger.contains(key));
            }
            num_elements += bucket.len();
        }
        assert_eq!(num_elements, self.num_elements);
        assert_eq!(self.order.len(), self.num_elements);
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> HashTable<K, V, S> {
    /// Inserts a pair. If the key is already present its value is replaced
    /// and the old value returned; its position in insertion order is kept.
    ///
    /// Rehashes when the target bucket grows past the collision threshold.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(v) = self.get_mut(&key) {
            return Some(mem::replace(v, value));
        }
        self.push_new(key, value);
        None
    }

    /// Returns the value for `key`, inserting `V::default()` first if it is absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let index = self.bucket_index(&key);
        let pos = self.buckets[index].iter().position(|(k, _)| *k == key);
        match pos {
            Some(pos) => &mut self.buckets[index][pos].1,
            None => self.push_new(key, V::default()),
        }
    }

    /// Appends a pair whose key is not yet stored.
    ///
    /// A chain one past the threshold is rehashed right away, so rehashing
    /// before the push gives the same layout as rehashing after it.
    fn push_new(&mut self, key: K, value: V) -> &mut V {
        while self.bucket(&key).len() >= self.max_collisions {
            self.rehash();
        }
        self.order.push(key.clone());
        self.num_elements += 1;

        let bucket = self.bucket_mut(&key);
        let pos = bucket.len();
        bucket.push((key, value));
        &mut bucket[pos].1
    }

    /// Doubles the capacity and reinserts every pair in insertion order.
    /// Reinsertion may trigger further rehashes.
    fn rehash(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.num_elements,
            "rehashing hash table"
        );

        let mut old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let order = mem::take(&mut self.order);
        self.num_elements = 0;
        for key in order {
            let index = (self.hash_builder.hash_one(&key) % old_capacity as u64) as usize;
            let bucket = &mut old_buckets[index];
            if let Some(pos) = bucket.iter().position(|(k, _)| *k == key) {
                let (key, value) = bucket.swap_remove(pos);
                self.push_new(key, value);
            }
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> HashTable<K, V, S> {
    /// Returns copies of all pairs in insertion order.
    pub fn elements(&self) -> Vec<(K, V)> {
        self.order
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    }

    /// Returns an iterator over a snapshot of all pairs in insertion order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(self.elements())
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.order
                    .iter()
                    .filter_map(|key| self.get(key).map(|value| (key, value))),
            )
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Extend<(K, V)> for HashTable<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = Iter<K, V>;

    fn into_iter(self) -> Iter<K, V> {
        self.iter()
    }
}
