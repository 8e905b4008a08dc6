use std::cmp::Ordering;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Edges on the longest path down to a leaf.
    /// Only assigned by `build_balanced`; stale between a plain insert and the rebuild.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    pub(crate) fn create(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// Recorded height of a subtree, -1 for an empty one.
    pub(crate) fn link_height(link: &Link<T>) -> isize {
        match link {
            None => -1,
            Some(node) => node.height as isize,
        }
    }

    pub(crate) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    pub(crate) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Moves all values out of the subtree in in-order sequence.
    pub(crate) fn drain_sorted(root: Link<T>, sorted: &mut Vec<T>) {
        let mut stack = Vec::new();
        let mut current = root;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    let Node { value, right, .. } = *node;
                    sorted.push(value);
                    current = right;
                }
            }
        }
    }

    /// Builds a minimum-height subtree from the next `len` values of a sorted sequence.
    /// The middle value becomes the root; the left half is one smaller on odd splits.
    pub(crate) fn build_balanced<I>(sorted: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let left_len = (len - 1) / 2;
        let left = Self::build_balanced(sorted, left_len);
        let value = sorted.next()?;
        let right = Self::build_balanced(sorted, len - 1 - left_len);
        let height = 1 + Self::link_height(&left).max(Self::link_height(&right));
        Some(Box::new(Node {
            value,
            left,
            right,
            height: height as usize,
        }))
    }

    /// Detaches the leftmost node of the subtree and returns its value.
    pub(crate) fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut current = link;
        while current.as_ref().map_or(false, |node| node.left.is_some()) {
            current = &mut current.as_mut()?.left;
        }
        let mut node = current.take()?;
        *current = node.right.take();
        Some(node.value)
    }

    /// Removes the node owned by `link`, splicing its children back into place.
    fn unlink(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                // Two children: replace by in-order successor.
                let mut right = Some(right);
                if let Some(successor) = Self::take_min(&mut right) {
                    node.value = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
    }

    /// Releases a subtree without recursing on its depth.
    pub(crate) fn destroy(root: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> Node<T> {
    /// Plain BST descent: smaller values go left, everything else goes right.
    pub(crate) fn insert(root: &mut Link<T>, value: T) {
        let mut link = root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Self::create(value));
    }

    /// Deletes the first node equal to `value` on the search path.
    pub(crate) fn remove(link: &mut Link<T>, value: &T) -> bool {
        let Some(node) = link else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove(&mut node.left, value),
            Ordering::Greater => Self::remove(&mut node.right, value),
            Ordering::Equal => {
                Self::unlink(link);
                true
            }
        }
    }

    pub(crate) fn find<'a>(link: &'a Link<T>, value: &T) -> Option<&'a Node<T>> {
        let mut current = link.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}
