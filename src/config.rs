/// Construction parameters of a [`HashTable`](crate::HashTable).
///
/// ```
/// use dictionaries::HashTableConfig;
/// let config = HashTableConfig::default().initial_capacity(16);
/// assert_eq!(config.capacity(), 16);
/// assert_eq!(config.collision_threshold(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashTableConfig {
    initial_capacity: usize,
    max_collisions: usize,
}

impl HashTableConfig {
    pub const DEFAULT_CAPACITY: usize = 5;
    pub const DEFAULT_MAX_COLLISIONS: usize = 3;

    /// Sets the number of buckets a new table starts with.
    /// A capacity of zero is raised to one.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }

    /// Sets the longest chain a bucket may hold before the table rehashes.
    /// A threshold of zero is raised to one.
    pub fn max_collisions(mut self, max_collisions: usize) -> Self {
        self.max_collisions = max_collisions.max(1);
        self
    }

    pub fn capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn collision_threshold(&self) -> usize {
        self.max_collisions
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            max_collisions: Self::DEFAULT_MAX_COLLISIONS,
        }
    }
}
