//! Traversal iterators
//!
//! All four walks keep their own explicit stack or queue, so a degenerate
//! (linear-height) tree is walked without deep recursion. Each iterator
//! yields every record exactly once and knows its exact length up front.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::record::Record;

use super::node::Node;

/// Order in which a traversal visits nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left, node, right (ascending key order)
    Inorder,
    /// Node, left, right
    Preorder,
    /// Left, right, node
    Postorder,
    /// Breadth-first, left to right within each depth
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ];
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Inorder => "Inorder",
            TraversalOrder::Preorder => "Preorder",
            TraversalOrder::Postorder => "Postorder",
            TraversalOrder::LevelOrder => "Level Order",
        };
        f.write_str(name)
    }
}

/// In-order iterator: ascending key order
pub struct Inorder<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Inorder<'a> {
    pub(super) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Pre-order iterator: node before its subtrees
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Preorder<'a> {
    pub(super) fn new(root: Option<&'a Node>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped next
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Post-order iterator: node after both subtrees
pub struct Postorder<'a> {
    /// (node, children already scheduled)
    stack: Vec<(&'a Node, bool)>,
    remaining: usize,
}

impl<'a> Postorder<'a> {
    pub(super) fn new(root: Option<&'a Node>, len: usize) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a> Iterator for Postorder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(node.record());
            }

            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Level-order iterator: FIFO queue seeded with the root
pub struct LevelOrder<'a> {
    queue: VecDeque<&'a Node>,
    remaining: usize,
}

impl<'a> LevelOrder<'a> {
    pub(super) fn new(root: Option<&'a Node>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node.record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Inorder<'_> {}
impl ExactSizeIterator for Preorder<'_> {}
impl ExactSizeIterator for Postorder<'_> {}
impl ExactSizeIterator for LevelOrder<'_> {}

impl FusedIterator for Inorder<'_> {}
impl FusedIterator for Preorder<'_> {}
impl FusedIterator for Postorder<'_> {}
impl FusedIterator for LevelOrder<'_> {}
