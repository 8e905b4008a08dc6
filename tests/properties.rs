//! Property-based tests for `AvlTree` and `HashTable`.

use std::collections::{BTreeSet, HashSet};

use dictionaries::{AvlTree, Error, HashTable, Traversal};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arbitrary_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 0..200)
}

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| s)
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..100)
}

#[derive(Clone, Debug)]
enum TreeOp {
    Insert(i32),
    Remove(i32),
}

fn arbitrary_tree_ops() -> impl Strategy<Value = Vec<TreeOp>> {
    prop::collection::vec(
        prop_oneof![
            (-50i32..50).prop_map(TreeOp::Insert),
            (-50i32..50).prop_map(TreeOp::Remove),
        ],
        0..150,
    )
}

fn build_tree(values: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for value in values {
        tree.insert(*value);
    }
    tree
}

// =============================================================================
// AvlTree
// =============================================================================

proptest! {
    #[test]
    fn prop_in_order_is_sorted(values in arbitrary_values()) {
        let tree = build_tree(&values);
        let in_order: Vec<i32> = tree.iter(Traversal::InOrder).collect();

        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(in_order, sorted);
    }
}

proptest! {
    #[test]
    fn prop_in_order_string_matches_iterator(values in arbitrary_values()) {
        let tree = build_tree(&values);
        let rendered: String = tree
            .iter(Traversal::InOrder)
            .map(|value| format!("{} ", value))
            .collect();
        prop_assert_eq!(tree.in_order(), rendered);
    }
}

proptest! {
    #[test]
    fn prop_balanced_after_any_ops(ops in arbitrary_tree_ops()) {
        let mut tree = AvlTree::new();
        let mut expected_len = 0usize;
        for op in ops {
            match op {
                TreeOp::Insert(value) => {
                    tree.insert(value);
                    expected_len += 1;
                }
                TreeOp::Remove(value) => {
                    if tree.remove(&value) {
                        expected_len -= 1;
                    }
                }
            }
            prop_assert!(tree.is_balanced());
            prop_assert_eq!(tree.len(), expected_len);
        }
    }
}

proptest! {
    #[test]
    fn prop_minimum_height(values in arbitrary_values()) {
        let tree = build_tree(&values);
        let expected = if values.is_empty() {
            None
        } else {
            Some(values.len().ilog2() as usize)
        };
        prop_assert_eq!(tree.height(), expected);
    }
}

proptest! {
    #[test]
    fn prop_successor_is_next_larger(values in arbitrary_values()) {
        let distinct: BTreeSet<i32> = values.into_iter().collect();
        let tree: AvlTree<i32> = distinct.iter().copied().collect();

        for value in &distinct {
            let next = distinct.range(value + 1..).next();
            match next {
                Some(next) => prop_assert_eq!(tree.successor(value), Ok(next)),
                None => prop_assert_eq!(tree.successor(value), Err(Error::NoSuccessor)),
            }
            let prev = distinct.range(..*value).next_back();
            match prev {
                Some(prev) => prop_assert_eq!(tree.predecessor(value), Ok(prev)),
                None => prop_assert_eq!(tree.predecessor(value), Err(Error::NoPredecessor)),
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_traversals_visit_every_value(values in arbitrary_values()) {
        let tree = build_tree(&values);
        let mut sorted = values.clone();
        sorted.sort();

        for traversal in [Traversal::PreOrder, Traversal::PostOrder, Traversal::LevelOrder] {
            let mut visited: Vec<i32> = tree.iter(traversal).collect();
            visited.sort();
            prop_assert_eq!(&visited, &sorted);
        }
    }
}

// =============================================================================
// HashTable
// =============================================================================

proptest! {
    #[test]
    fn prop_keys_in_first_insertion_order(entries in arbitrary_entries()) {
        let table: HashTable<String, i32> = entries.iter().cloned().collect();

        let mut seen = HashSet::new();
        let expected: Vec<String> = entries
            .iter()
            .filter(|(key, _)| seen.insert(key.clone()))
            .map(|(key, _)| key.clone())
            .collect();
        prop_assert_eq!(table.keys(), expected.as_slice());
        prop_assert_eq!(table.len(), expected.len());
    }
}

proptest! {
    #[test]
    fn prop_last_value_wins(entries in arbitrary_entries()) {
        let table: HashTable<String, i32> = entries.iter().cloned().collect();

        for (key, _) in &entries {
            let last = entries
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v);
            prop_assert_eq!(table.get(key), last);
            prop_assert_eq!(table.at(key).ok(), last);
        }
    }
}

proptest! {
    #[test]
    fn prop_remove_then_find(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut table: HashTable<String, i32> = entries.into_iter().collect();
        let was_present = table.contains_key(&key);
        let len = table.len();

        prop_assert_eq!(table.remove(&key), was_present);
        prop_assert!(!table.contains_key(&key));
        prop_assert_eq!(table.at(&key), Err(Error::KeyNotFound));
        prop_assert_eq!(table.len(), if was_present { len - 1 } else { len });
        prop_assert!(!table.keys().contains(&key));
    }
}

proptest! {
    #[test]
    fn prop_elements_follow_keys(entries in arbitrary_entries()) {
        let table: HashTable<String, i32> = entries.into_iter().collect();
        let elements = table.elements();

        prop_assert_eq!(elements.len(), table.len());
        for ((key, value), ledger_key) in elements.iter().zip(table.keys()) {
            prop_assert_eq!(key, ledger_key);
            prop_assert_eq!(table.get(key), Some(value));
        }
        prop_assert_eq!(table.iter().collect::<Vec<_>>(), elements);
    }
}

proptest! {
    #[test]
    fn prop_default_on_absent_key(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut table: HashTable<String, i32> = entries.into_iter().collect();
        let before = table.get(&key).copied();

        let value = *table.get_or_insert_default(key.clone());
        prop_assert_eq!(value, before.unwrap_or_default());
        prop_assert_eq!(table.at(&key), Ok(&value));
    }
}
