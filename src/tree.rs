//! An ordered dictionary kept at minimum height.
//!
//! Every insert and remove is followed by a full rebuild: the tree is
//! flattened into its sorted sequence and rebuilt by choosing the middle
//! value as each subtree root. The AVL condition therefore always holds
//! and the height is always `floor(log2(n))`, at the cost of `O(n)` work per
//! update.

mod iter;
mod node;

use std::fmt::{self, Display, Write};

use crate::error::{Error, Result};
pub use iter::{Traversal, TreeIter};
use node::{Link, Node};

/// An ordered dictionary implemented as a rebuilt AVL tree.
///
/// Equal values are kept: a value equal to a node goes to its right subtree,
/// so inserting the same value twice stores it twice.
///
/// ```
/// use dictionaries::AvlTree;
/// let mut tree = AvlTree::new();
/// for value in [5, 3, 8, 1, 4] {
///     tree.insert(value);
/// }
/// assert_eq!(tree.in_order(), "1 3 4 5 8 ");
/// assert_eq!(tree.height(), Some(2));
/// assert_eq!(tree.successor(&4), Ok(&5));
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T> AvlTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first value is inserted.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns true if the tree contains no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of stored values, counting duplicates.
    /// Walks the whole tree.
    pub fn len(&self) -> usize {
        let mut num_nodes = 0;
        iter::traverse(&self.root, Traversal::PreOrder, |_| num_nodes += 1);
        num_nodes
    }

    /// Returns the recorded height of the root, `None` for an empty tree.
    /// A single node has height 0.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.height)
    }

    /// Checks the AVL condition at every node using the recorded heights.
    pub fn is_balanced(&self) -> bool {
        let mut balanced = true;
        iter::traverse(&self.root, Traversal::PreOrder, |node| {
            let left_height = Node::link_height(&node.left);
            let right_height = Node::link_height(&node.right);
            if (left_height - right_height).abs() > 1 {
                balanced = false;
            }
        });
        balanced
    }

    /// Removes all values, deallocating all memory.
    pub fn clear(&mut self) {
        Node::destroy(self.root.take());
    }

    /// Returns the smallest value.
    pub fn min(&self) -> Result<&T> {
        match self.root.as_deref() {
            None => Err(Error::EmptyTree),
            Some(root) => Ok(&root.min().value),
        }
    }

    /// Returns the largest value.
    pub fn max(&self) -> Result<&T> {
        match self.root.as_deref() {
            None => Err(Error::EmptyTree),
            Some(root) => Ok(&root.max().value),
        }
    }

    fn take_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::new();
        Node::drain_sorted(self.root.take(), &mut sorted);
        sorted
    }

    /// Replaces the (empty) tree by a minimum-height tree over `sorted`.
    fn build(&mut self, sorted: Vec<T>) {
        debug_assert!(self.root.is_none());
        let len = sorted.len();
        self.root = Node::build_balanced(&mut sorted.into_iter(), len);
        tracing::trace!(len, height = ?self.height(), "rebuilt tree");
    }

    fn rebuild(&mut self) {
        let sorted = self.take_sorted();
        self.build(sorted);
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts a value and rebuilds the tree.
    pub fn insert(&mut self, value: T) {
        Node::insert(&mut self.root, value);
        self.rebuild();
    }

    /// Removes one occurrence of a value and rebuilds the tree.
    /// Returns whether the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Node::remove(&mut self.root, value);
        self.rebuild();
        removed
    }

    /// Returns true if the tree contains the value.
    pub fn contains(&self, value: &T) -> bool {
        Node::find(&self.root, value).is_some()
    }

    /// Returns the value that follows `value` in sorted order.
    ///
    /// Fails with [`Error::ValueNotFound`] if `value` is not stored and with
    /// [`Error::NoSuccessor`] if it is the largest value.
    pub fn successor(&self, value: &T) -> Result<&T> {
        let mut successor = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *value == node.value {
                return match node.right.as_deref() {
                    Some(right) => Ok(&right.min().value),
                    None => successor.ok_or(Error::NoSuccessor),
                };
            }
            // Last ancestor where the search turned left
            if *value < node.value {
                successor = Some(&node.value);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }
        Err(Error::ValueNotFound)
    }

    /// Returns the value that precedes `value` in sorted order.
    ///
    /// Fails with [`Error::ValueNotFound`] if `value` is not stored and with
    /// [`Error::NoPredecessor`] if it is the smallest value.
    pub fn predecessor(&self, value: &T) -> Result<&T> {
        let mut predecessor = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *value == node.value {
                return match node.left.as_deref() {
                    Some(left) => Ok(&left.max().value),
                    None => predecessor.ok_or(Error::NoPredecessor),
                };
            }
            // Last ancestor where the search turned right
            if *value > node.value {
                predecessor = Some(&node.value);
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }
        Err(Error::ValueNotFound)
    }

    /// Panics unless every node satisfies the search, height and balance invariants.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        iter::traverse(&self.root, Traversal::PostOrder, |node| {
            if let Some(left) = node.left.as_deref() {
                assert!(left.max().value <= node.value);
            }
            if let Some(right) = node.right.as_deref() {
                assert!(right.min().value >= node.value);
            }

            let left_height = Node::link_height(&node.left);
            let right_height = Node::link_height(&node.right);
            assert_eq!(node.height as isize, 1 + left_height.max(right_height));
            assert!((left_height - right_height).abs() <= 1);
        });

        // Minimum height
        let len = self.len();
        match self.height() {
            None => assert_eq!(len, 0),
            Some(height) => assert_eq!(height, len.ilog2() as usize),
        }
    }
}

impl<T: Clone> AvlTree<T> {
    /// Returns an iterator over a snapshot of the values in the given order.
    pub fn iter(&self, traversal: Traversal) -> TreeIter<T> {
        TreeIter::new(&self.root, traversal)
    }
}

impl<T: Display> AvlTree<T> {
    /// Values in sorted order, each followed by a single space.
    pub fn in_order(&self) -> String {
        self.render(Traversal::InOrder)
    }

    /// Values in pre-order, each followed by a single space.
    pub fn pre_order(&self) -> String {
        self.render(Traversal::PreOrder)
    }

    /// Values in post-order, each followed by a single space.
    pub fn post_order(&self) -> String {
        self.render(Traversal::PostOrder)
    }

    fn render(&self, traversal: Traversal) -> String {
        let mut out = String::new();
        iter::traverse(&self.root, traversal, |node| {
            let _ = write!(out, "{} ", node.value);
        });
        out
    }

    /// Draws the tree rotated a quarter turn: the root in the left column,
    /// right subtrees above their parent and left subtrees below.
    pub fn render_pretty(&self) -> String {
        const INDENT: usize = 5;

        // Reverse in-order so the right subtree is printed first.
        let mut out = String::new();
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|right| (right, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                break;
            };
            let _ = write!(out, "\n{:width$}{}\n", "", node.value, width = depth * INDENT);
            current = node.left.as_deref().map(|left| (left, depth + 1));
        }
        out
    }

    /// Prints [`render_pretty`](Self::render_pretty) to standard output.
    pub fn print_pretty(&self) {
        print!("{}", self.render_pretty());
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        iter::traverse(&self.root, Traversal::InOrder, |node| {
            list.entry(&node.value);
        });
        list.finish()
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    /// Inserts every value, rebuilding once at the end.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut sorted = self.take_sorted();
        sorted.extend(iter);
        sorted.sort();
        self.build(sorted);
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Clone> IntoIterator for &'a AvlTree<T> {
    type Item = T;
    type IntoIter = TreeIter<T>;

    fn into_iter(self) -> TreeIter<T> {
        self.iter(Traversal::InOrder)
    }
}
