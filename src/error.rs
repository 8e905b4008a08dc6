/// Errors raised by [`AvlTree`](crate::AvlTree) and [`HashTable`](crate::HashTable).
///
/// Each variant is a precondition failure detected at the call site; none of
/// them is retried or recovered from inside the containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `min` or `max` was requested on a tree without nodes.
    #[error("tree is empty")]
    EmptyTree,
    /// The value passed to `successor` or `predecessor` is not stored in the tree.
    #[error("value not found")]
    ValueNotFound,
    /// The value is the largest one stored in the tree.
    #[error("value has no successor")]
    NoSuccessor,
    /// The value is the smallest one stored in the tree.
    #[error("value has no predecessor")]
    NoPredecessor,
    /// Keyed access on a hash table for a key it does not hold.
    #[error("key not found")]
    KeyNotFound,
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Querying the extremes of an empty ordered dictionary.
    EmptyContainer,
    /// A tree value is absent, or has no neighbour in the requested direction.
    ValueNotFound,
    /// A hash table key is absent.
    KeyNotFound,
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// ```
    /// use dictionaries::{Error, ErrorKind};
    /// assert_eq!(Error::NoSuccessor.kind(), ErrorKind::ValueNotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyTree => ErrorKind::EmptyContainer,
            Error::ValueNotFound | Error::NoSuccessor | Error::NoPredecessor => {
                ErrorKind::ValueNotFound
            }
            Error::KeyNotFound => ErrorKind::KeyNotFound,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
