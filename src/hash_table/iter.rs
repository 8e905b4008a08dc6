use std::iter::FusedIterator;

/// An iterator over a snapshot of the pairs of a [`HashTable`](crate::HashTable),
/// in insertion order.
///
/// Both ends of a pass come from the same snapshot, so changing the table
/// while iterating cannot make them disagree.
#[derive(Clone, Debug)]
pub struct Iter<K, V> {
    snapshot: Vec<(K, V)>,
    pos: usize,
}

impl<K, V> Iter<K, V> {
    pub(crate) fn new(snapshot: Vec<(K, V)>) -> Self {
        Self { snapshot, pos: 0 }
    }

    /// Index of the next pair in the snapshot.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once every pair has been yielded.
    pub fn is_end(&self) -> bool {
        self.pos >= self.snapshot.len()
    }

    /// Returns the pair at the current position without advancing.
    pub fn peek(&self) -> Option<&(K, V)> {
        self.snapshot.get(self.pos)
    }
}

impl<K: Clone, V: Clone> Iterator for Iter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let pair = self.snapshot.get(self.pos)?.clone();
        self.pos += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<K: Clone, V: Clone> ExactSizeIterator for Iter<K, V> {}

impl<K: Clone, V: Clone> FusedIterator for Iter<K, V> {}

/// Compares positions only; the snapshots themselves are not inspected.
impl<K, V> PartialEq for Iter<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
