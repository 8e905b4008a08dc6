//! Two dictionaries over generic values.
//!
//! [`AvlTree`] is an ordered dictionary. It is rebuilt into a minimum-height
//! binary search tree after every change and supports order queries
//! (min, max, successor, predecessor) and four traversal orders.
//!
//! [`HashTable`] is an unordered key-value dictionary with separate chaining.
//! It doubles its capacity whenever a chain grows past a collision threshold
//! and enumerates pairs in insertion order.
//!
//! ```
//! use dictionaries::{AvlTree, HashTable, Traversal};
//!
//! let tree: AvlTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(tree.pre_order(), "4 1 3 5 8 ");
//! assert_eq!(tree.iter(Traversal::PostOrder).collect::<Vec<_>>(), [3, 1, 8, 5, 4]);
//!
//! let mut table = HashTable::new();
//! table.insert("b", 2);
//! table.insert("a", 1);
//! assert_eq!(table.elements(), [("b", 2), ("a", 1)]);
//! ```

mod config;
mod error;
pub mod hash_table;
pub mod tree;

pub use config::HashTableConfig;
pub use error::{Error, ErrorKind, Result};
pub use hash_table::HashTable;
pub use tree::{AvlTree, Traversal, TreeIter};
