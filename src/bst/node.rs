use crate::record::{Isbn, Record};

/// Owning, emptiable child slot
pub type Link = Option<Box<Node>>;

/// Tree node: one key/record pair plus exclusively owned children
///
/// `key` only changes when a two-child deletion copies the in-order
/// successor into this node.
#[derive(Debug)]
pub struct Node {
    pub(super) key: Isbn,
    pub(super) record: Record,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    /// Create a leaf holding `record` under `key`
    pub(super) fn leaf(key: Isbn, record: Record) -> Box<Self> {
        Box::new(Self {
            key,
            record,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> Isbn {
        self.key
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Check if node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Walk down from `slot` to the slot that holds `key`, or to the empty
/// slot where `key` would be attached.
pub(super) fn slot_for(mut slot: &mut Link, key: Isbn) -> &mut Link {
    loop {
        // Pick the direction through a shared borrow, then reborrow mutably
        let go_left = match slot.as_deref() {
            Some(node) if key < node.key => true,
            Some(node) if key > node.key => false,
            _ => return slot,
        };
        let Some(node) = slot else {
            return slot;
        };
        slot = if go_left {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Walk down the left spine from `slot` to the slot holding its minimum node.
/// Returns `slot` itself when it is empty or has no left child.
pub(super) fn leftmost_slot(mut slot: &mut Link) -> &mut Link {
    loop {
        if !slot.as_ref().is_some_and(|node| node.left.is_some()) {
            return slot;
        }
        let Some(node) = slot else {
            return slot;
        };
        slot = &mut node.left;
    }
}

/// Detach the minimum (leftmost) node of the subtree rooted at `root`
///
/// Returns what remains of the subtree together with the detached node.
/// The minimum has no left child, so only its right child moves up.
pub(super) fn split_min(mut root: Box<Node>) -> (Link, Box<Node>) {
    let slot = leftmost_slot(&mut root.left);
    match slot.take() {
        Some(mut min) => {
            *slot = min.right.take();
            (Some(root), min)
        }
        None => {
            let rest = root.right.take();
            (rest, root)
        }
    }
}
