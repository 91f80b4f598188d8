//! Behavioural tests for the ordered index

use proptest::prelude::*;

use super::*;

const SEED: [(Isbn, &str); 10] = [
    (10, "Book One"),
    (5, "Book Two"),
    (2, "Book Three"),
    (8, "Book Four"),
    (15, "Book Five"),
    (12, "Book Six"),
    (18, "Book Seven"),
    (11, "Book Eight"),
    (14, "Book Nine"),
    (20, "Book Ten"),
];

fn book(key: Isbn, title: &str) -> Record {
    Record::new(key, title, "Author", "Publisher", "2000")
}

fn seeded() -> OrderedIndex {
    let mut index = OrderedIndex::new();
    for (key, title) in SEED {
        assert!(index.insert(key, book(key, title), false));
    }
    index
}

fn keys<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<Isbn> {
    records.map(|record| record.isbn).collect()
}

/// Check the ordering invariant on every node and return the node count
fn check_bst(index: &OrderedIndex) -> usize {
    let mut count = 0;
    let mut stack: Vec<(&Node, Option<Isbn>, Option<Isbn>)> = index
        .root()
        .map(|node| (node, None, None))
        .into_iter()
        .collect();

    while let Some((node, low, high)) = stack.pop() {
        count += 1;
        assert!(low.is_none_or(|low| node.key() > low), "key {} too small", node.key());
        assert!(high.is_none_or(|high| node.key() < high), "key {} too large", node.key());
        assert_eq!(node.key(), node.record().isbn);
        if let Some(left) = node.left() {
            stack.push((left, low, Some(node.key())));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(node.key()), high));
        }
    }

    count
}

#[test]
fn test_new_index() {
    let index = OrderedIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.height(), 0);
    assert_eq!(index.root_key(), None);
    assert_eq!(index.search(10), None);
    for order in TraversalOrder::ALL {
        assert!(index.traverse(order).is_empty());
    }
}

#[test]
fn test_first_insert_becomes_root() {
    let mut index = OrderedIndex::new();
    assert_eq!(
        index.insert_with_outcome(42, book(42, "Only"), false),
        InsertOutcome::Inserted
    );
    assert_eq!(index.root_key(), Some(42));
    assert_eq!(index.len(), 1);
    assert_eq!(index.height(), 1);
}

#[test]
fn test_seeded_shape() {
    let index = seeded();

    assert_eq!(index.len(), 10);
    assert_eq!(index.height(), 4);
    assert_eq!(check_bst(&index), 10);

    assert_eq!(keys(index.inorder()), vec![2, 5, 8, 10, 11, 12, 14, 15, 18, 20]);
    assert_eq!(keys(index.preorder()), vec![10, 5, 2, 8, 15, 12, 11, 14, 18, 20]);
    assert_eq!(keys(index.postorder()), vec![2, 8, 5, 11, 14, 12, 20, 18, 15, 10]);
    assert_eq!(keys(index.level_order()), vec![10, 5, 15, 2, 8, 12, 18, 11, 14, 20]);
}

#[test]
fn test_traverse_matches_iterators() {
    let index = seeded();

    assert_eq!(
        index.traverse(TraversalOrder::Inorder),
        index.inorder().collect::<Vec<_>>()
    );
    assert_eq!(
        index.traverse(TraversalOrder::LevelOrder),
        index.level_order().collect::<Vec<_>>()
    );

    // Repeatable and non-destructive
    for order in TraversalOrder::ALL {
        assert_eq!(index.traverse(order), index.traverse(order));
    }
    assert_eq!(index.len(), 10);
}

#[test]
fn test_traversal_exact_size() {
    let index = seeded();

    let mut iter = index.postorder();
    assert_eq!(iter.len(), 10);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.count(), 8);

    assert_eq!(index.preorder().len(), 10);
    assert_eq!(index.level_order().len(), 10);
    assert_eq!(index.inorder().len(), 10);
}

#[test]
fn test_search() {
    let index = seeded();

    assert_eq!(index.search(999), None);
    assert_eq!(index.search(14).map(|r| r.title.as_str()), Some("Book Nine"));
    assert_eq!(index.search(10).map(|r| r.title.as_str()), Some("Book One"));
    assert!(index.contains(20));
    assert!(!index.contains(-1));
}

#[test]
fn test_duplicate_rejected() {
    let mut index = seeded();
    let before: Vec<Record> = index.inorder().cloned().collect();

    let outcome = index.insert_with_outcome(12, book(12, "Impostor"), false);
    assert_eq!(outcome, InsertOutcome::Rejected);
    assert!(!index.insert(12, book(12, "Impostor"), false));

    let after: Vec<Record> = index.inorder().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(index.len(), 10);
}

#[test]
fn test_duplicate_overwritten() {
    let mut index = seeded();

    let outcome = index.insert_with_outcome(12, book(12, "Book Six, Revised"), true);
    assert_eq!(outcome, InsertOutcome::Updated);
    assert_eq!(index.len(), 10);
    assert_eq!(
        index.search(12).map(|r| r.title.as_str()),
        Some("Book Six, Revised")
    );

    // Only that record changed; shape is the same
    assert_eq!(keys(index.level_order()), vec![10, 5, 15, 2, 8, 12, 18, 11, 14, 20]);
    assert_eq!(index.search(11).map(|r| r.title.as_str()), Some("Book Eight"));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "index key must match the record's ISBN")]
fn test_insert_key_must_match_record() {
    let mut index = OrderedIndex::new();
    index.insert(5, book(7, "Mislabelled"), false);
}

#[test]
fn test_overwrite_on_new_key_inserts() {
    let mut index = seeded();
    assert_eq!(
        index.insert_with_outcome(13, book(13, "Thirteen"), true),
        InsertOutcome::Inserted
    );
    assert_eq!(index.len(), 11);
    assert_eq!(check_bst(&index), 11);
}

#[test]
fn test_delete_root_with_two_children() {
    let mut index = seeded();

    let removed = index.delete(10).unwrap();
    assert_eq!(removed.title, "Book One");

    // In-order successor 11 takes the root's place
    assert_eq!(index.root_key(), Some(11));
    assert_eq!(index.search(10), None);
    assert_eq!(index.len(), 9);
    assert_eq!(keys(index.inorder()), vec![2, 5, 8, 11, 12, 14, 15, 18, 20]);
    assert_eq!(keys(index.level_order()), vec![11, 5, 15, 2, 8, 12, 18, 14, 20]);
    assert_eq!(index.search(11).map(|r| r.title.as_str()), Some("Book Eight"));
    assert_eq!(check_bst(&index), 9);
}

#[test]
fn test_delete_inner_with_two_children() {
    let mut index = seeded();

    assert!(index.delete(5).is_some());
    assert_eq!(keys(index.level_order()), vec![10, 8, 15, 2, 12, 18, 11, 14, 20]);
    assert_eq!(check_bst(&index), 9);
}

#[test]
fn test_delete_successor_with_right_child() {
    let mut index = seeded();

    // 15's successor is 18, which has a right child 20
    assert!(index.delete(12).is_some());
    assert!(index.delete(15).is_some());
    assert_eq!(keys(index.level_order()), vec![10, 5, 18, 2, 8, 14, 20, 11]);
    assert_eq!(check_bst(&index), 8);
}

#[test]
fn test_delete_one_child() {
    let mut index = seeded();

    assert!(index.delete(18).is_some());
    assert_eq!(keys(index.level_order()), vec![10, 5, 15, 2, 8, 12, 20, 11, 14]);
    assert_eq!(check_bst(&index), 9);
}

#[test]
fn test_delete_leaf() {
    let mut index = seeded();

    assert_eq!(index.delete(2).map(|r| r.title), Some("Book Three".to_string()));
    assert_eq!(keys(index.preorder()), vec![10, 5, 8, 15, 12, 11, 14, 18, 20]);
    assert_eq!(index.len(), 9);
}

#[test]
fn test_delete_not_found() {
    let mut index = seeded();

    assert_eq!(index.delete(999), None);
    assert_eq!(index.delete(9), None);
    assert_eq!(index.len(), 10);
    assert_eq!(keys(index.level_order()), vec![10, 5, 15, 2, 8, 12, 18, 11, 14, 20]);

    let mut empty = OrderedIndex::new();
    assert_eq!(empty.delete(1), None);
    assert!(empty.is_empty());
}

#[test]
fn test_delete_until_empty() {
    let mut index = seeded();

    for (key, _) in SEED {
        assert!(index.delete(key).is_some());
        assert_eq!(index.search(key), None);
        assert_eq!(check_bst(&index), index.len());
    }

    assert!(index.is_empty());
    assert_eq!(index.height(), 0);
}

#[test]
fn test_reinsert_after_delete() {
    let mut index = seeded();

    index.delete(15);
    assert!(index.insert(15, book(15, "Book Five Again"), false));
    assert_eq!(index.len(), 10);
    assert_eq!(
        index.search(15).map(|r| r.title.as_str()),
        Some("Book Five Again")
    );
}

#[test]
fn test_clear() {
    let mut index = seeded();
    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert!(index.insert(1, book(1, "Fresh"), false));
}

#[test]
fn test_negative_keys() {
    let mut index = OrderedIndex::new();
    for key in [0, -5, 5, -10, -1] {
        index.insert(key, book(key, "Neg"), false);
    }
    assert_eq!(keys(index.inorder()), vec![-10, -5, -1, 0, 5]);
}

#[test]
fn test_degenerate_tree() {
    // Sorted input builds a linked list; no rebalancing happens
    const N: Isbn = 20_000;
    let mut index = OrderedIndex::new();
    for key in 0..N {
        index.insert(key, book(key, "Chain"), false);
    }

    assert_eq!(index.len(), N as usize);
    assert_eq!(index.height(), N as usize);
    assert_eq!(index.root_key(), Some(0));
    assert_eq!(index.search(N - 1).map(|r| r.isbn), Some(N - 1));
    assert_eq!(index.inorder().count(), N as usize);
    assert_eq!(index.postorder().next().map(|r| r.isbn), Some(N - 1));
    assert_eq!(index.delete(N / 2).map(|r| r.isbn), Some(N / 2));
    assert_eq!(index.len(), N as usize - 1);
    // Dropping must not overflow the stack either
}

fn unique_keys() -> impl Strategy<Value = Vec<Isbn>> {
    prop::collection::hash_set(-1000i64..1000, 0..64)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn prop_inorder_is_sorted(keys_in in unique_keys()) {
        let mut index = OrderedIndex::new();
        for &key in &keys_in {
            prop_assert!(index.insert(key, book(key, "P"), false));
        }

        let mut expected = keys_in.clone();
        expected.sort_unstable();
        prop_assert_eq!(keys(index.inorder()), expected);
        prop_assert_eq!(check_bst(&index), keys_in.len());
    }

    #[test]
    fn prop_traversals_are_permutations(keys_in in unique_keys()) {
        let mut index = OrderedIndex::new();
        for &key in &keys_in {
            index.insert(key, book(key, "P"), false);
        }

        let sorted = keys(index.inorder());
        for order in [TraversalOrder::Preorder, TraversalOrder::Postorder, TraversalOrder::LevelOrder] {
            let mut visited = keys(index.traverse(order).into_iter());
            prop_assert_eq!(visited.len(), index.len());
            visited.sort_unstable();
            prop_assert_eq!(&visited, &sorted);
        }
    }

    #[test]
    fn prop_delete_removes_exactly_one(keys_in in unique_keys(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!keys_in.is_empty());
        let mut index = OrderedIndex::new();
        for &key in &keys_in {
            index.insert(key, book(key, "P"), false);
        }

        let victim = keys_in[pick.index(keys_in.len())];
        prop_assert_eq!(index.delete(victim).map(|r| r.isbn), Some(victim));
        prop_assert_eq!(index.search(victim), None);
        prop_assert_eq!(index.len(), keys_in.len() - 1);
        prop_assert_eq!(check_bst(&index), keys_in.len() - 1);
    }

    #[test]
    fn prop_delete_absent_is_noop(keys_in in unique_keys(), absent in 1000i64..2000) {
        let mut index = OrderedIndex::new();
        for &key in &keys_in {
            index.insert(key, book(key, "P"), false);
        }
        let before = keys(index.preorder());

        prop_assert_eq!(index.delete(absent), None);
        prop_assert_eq!(keys(index.preorder()), before);
        prop_assert_eq!(index.len(), keys_in.len());
    }
}
