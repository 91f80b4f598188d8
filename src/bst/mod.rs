//! Unbalanced binary search tree keyed by ISBN
//!
//! Each node owns one record and at most two children. Keys are unique
//! across the tree: for every node, keys in the left subtree are smaller
//! and keys in the right subtree are larger.
//!
//! No rebalancing is ever performed, so the shape is decided entirely by
//! insertion order and sorted input degrades into a linked list. Every
//! operation descends or walks iteratively, which keeps such degenerate
//! trees safe to build, query and drop.
//!
//! The index has no internal locking and performs no I/O. Callers sharing
//! it across threads must wrap the whole index in a single lock.

mod iter;
mod node;

#[cfg(test)]
mod tests;

pub use iter::{Inorder, LevelOrder, Postorder, Preorder, TraversalOrder};
pub use node::Node;

use std::mem;

use crate::record::{Isbn, Record};

use node::{Link, slot_for, split_min};

/// Result of an insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was attached
    Inserted,
    /// The key existed and its record was replaced
    Updated,
    /// The key existed and `overwrite` was false; tree unchanged
    Rejected,
}

impl InsertOutcome {
    /// Whether the tree now holds the offered record
    pub fn is_applied(self) -> bool {
        !matches!(self, InsertOutcome::Rejected)
    }
}

/// Ordered index over book records
#[derive(Debug, Default)]
pub struct OrderedIndex {
    /// Root node (None if index is empty)
    root: Link,

    /// Number of nodes in the tree
    len: usize,
}

impl OrderedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if index is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get number of records in the index
    pub fn len(&self) -> usize {
        self.len
    }

    /// Key currently stored at the root
    pub fn root_key(&self) -> Option<Isbn> {
        self.root.as_ref().map(|node| node.key)
    }

    /// Root node, for shape inspection
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    // ========== Insert ==========

    /// Insert `record` under `key`
    ///
    /// # Returns
    /// * `true` - A node was added, or an existing one was overwritten
    /// * `false` - `key` already exists and `overwrite` is false
    pub fn insert(&mut self, key: Isbn, record: Record, overwrite: bool) -> bool {
        self.insert_with_outcome(key, record, overwrite).is_applied()
    }

    /// Insert `record` under `key`, reporting what happened
    ///
    /// `key` must equal `record.isbn`; traversals report the record's own ISBN.
    pub fn insert_with_outcome(
        &mut self,
        key: Isbn,
        record: Record,
        overwrite: bool,
    ) -> InsertOutcome {
        debug_assert_eq!(key, record.isbn, "index key must match the record's ISBN");
        let slot = slot_for(&mut self.root, key);

        match slot {
            Some(node) if overwrite => {
                node.record = record;
                InsertOutcome::Updated
            }
            Some(_) => InsertOutcome::Rejected,
            None => {
                *slot = Some(Node::leaf(key, record));
                self.len += 1;
                InsertOutcome::Inserted
            }
        }
    }

    // ========== Search ==========

    /// Search for a key, returning its record
    pub fn search(&self, key: Isbn) -> Option<&Record> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return Some(&node.record),
                std::cmp::Ordering::Less => node.left(),
                std::cmp::Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Check if a key is present
    pub fn contains(&self, key: Isbn) -> bool {
        self.search(key).is_some()
    }

    // ========== Delete ==========

    /// Delete the node holding `key`
    ///
    /// # Returns
    /// * `Some(Record)` - The record that was removed
    /// * `None` - Key not found; tree unchanged
    pub fn delete(&mut self, key: Isbn) -> Option<Record> {
        let slot = slot_for(&mut self.root, key);
        let mut target = slot.take()?;
        self.len -= 1;

        match (target.left.take(), target.right.take()) {
            // Leaf or single child: the child (if any) takes the node's place
            (None, child) | (child, None) => {
                *slot = child;
                Some(target.record)
            }
            (Some(left), Some(right)) => {
                let (rest, successor) = split_min(right);
                target.key = successor.key;
                let removed = mem::replace(&mut target.record, successor.record);
                target.left = Some(left);
                target.right = rest;
                *slot = Some(target);
                Some(removed)
            }
        }
    }

    /// Remove every record
    pub fn clear(&mut self) {
        drop_links(self.root.take());
        self.len = 0;
    }

    // ========== Traversals ==========

    /// Records in ascending key order
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder::new(self.root.as_deref(), self.len)
    }

    /// Records with each node before its subtrees
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self.root.as_deref(), self.len)
    }

    /// Records with each node after its subtrees
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder::new(self.root.as_deref(), self.len)
    }

    /// Records breadth-first, level by level
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder::new(self.root.as_deref(), self.len)
    }

    /// Collect the records in the requested order
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&Record> {
        match order {
            TraversalOrder::Inorder => self.inorder().collect(),
            TraversalOrder::Preorder => self.preorder().collect(),
            TraversalOrder::Postorder => self.postorder().collect(),
            TraversalOrder::LevelOrder => self.level_order().collect(),
        }
    }
}

impl Drop for OrderedIndex {
    fn drop(&mut self) {
        drop_links(self.root.take());
    }
}

/// Release a subtree without recursing once per level
fn drop_links(root: Link) {
    let mut pending: Vec<Box<Node>> = root.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
