use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::vec;

use super::node::{Link, Node};

/// Visiting order of a [`TreeIter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields values in sorted order.
    #[default]
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Level by level from the root, left to right.
    LevelOrder,
}

/// A forward iterator over a snapshot of an [`AvlTree`](crate::AvlTree).
///
/// The whole sequence is materialized when the iterator is created,
/// so later changes to the tree are not observed.
///
/// ```
/// use dictionaries::{AvlTree, Traversal};
/// let tree: AvlTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
/// let level_order: Vec<i32> = tree.iter(Traversal::LevelOrder).collect();
/// assert_eq!(level_order, [4, 1, 5, 3, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct TreeIter<T> {
    traversal: Traversal,
    total: usize,
    sequence: vec::IntoIter<T>,
}

impl<T: Clone> TreeIter<T> {
    pub(crate) fn new(root: &Link<T>, traversal: Traversal) -> Self {
        let mut values = Vec::new();
        match traversal {
            Traversal::LevelOrder => level_order(root, |node| values.push(node.value.clone())),
            _ => traverse(root, traversal, |node| values.push(node.value.clone())),
        }
        Self {
            traversal,
            total: values.len(),
            sequence: values.into_iter(),
        }
    }
}

impl<T> TreeIter<T> {
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Returns the value at the current position without advancing.
    /// Returns `None` at the end position.
    pub fn peek(&self) -> Option<&T> {
        self.sequence.as_slice().first()
    }

    /// Number of values already yielded.
    pub fn position(&self) -> usize {
        self.total - self.sequence.len()
    }

    /// Returns true once every value has been yielded.
    pub fn is_end(&self) -> bool {
        self.sequence.len() == 0
    }
}

/// All exhausted iterators are equal; others are equal at the same position
/// of equally long sequences.
impl<T> PartialEq for TreeIter<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_end() || other.is_end() {
            return self.is_end() && other.is_end();
        }
        self.position() == other.position() && self.total == other.total
    }
}

impl<T> Iterator for TreeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<T> ExactSizeIterator for TreeIter<T> {}

impl<T> FusedIterator for TreeIter<T> {}

enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

/// Depth-first walk calling `visit` on each node in the given order.
/// Uses an explicit stack; `LevelOrder` is handled by [`level_order`].
pub(crate) fn traverse<'a, T, F>(root: &'a Link<T>, traversal: Traversal, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let Some(root) = root.as_deref() else {
        return;
    };
    let mut stack = vec![(root, Direction::FromParent)];
    while let Some((node, dir)) = stack.pop() {
        match dir {
            Direction::FromParent => {
                if traversal == Traversal::PreOrder {
                    visit(node);
                }
                stack.push((node, Direction::FromLeft));
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, Direction::FromParent));
                }
            }
            Direction::FromLeft => {
                if traversal == Traversal::InOrder {
                    visit(node);
                }
                stack.push((node, Direction::FromRight));
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, Direction::FromParent));
                }
            }
            Direction::FromRight => {
                if traversal == Traversal::PostOrder {
                    visit(node);
                }
            }
        }
    }
}

pub(crate) fn level_order<'a, T, F>(root: &'a Link<T>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut queue: VecDeque<&Node<T>> = root.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
}
