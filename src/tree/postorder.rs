use std::iter::FusedIterator;

use simple_stack::Stack;
use tracing::trace;

use super::Node;
use crate::{Traversal, TraversalError};

/// A post-order traversal of a tree: both subtrees of a node are yielded before the node itself
///
/// Unlike the other traversals, the full visitation order is computed when the iterator is
/// created. That takes `O(n)` time and `O(n)` auxiliary space up front, after which every step is
/// a single pop.
#[derive(Debug)]
pub struct IterPostorder<'a, T> {
    /// Nodes in reverse post-order, so the next node to yield is always on top
    visits: Stack<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut pending = Stack::new();
        let mut visits = Stack::new();

        // Visiting node, right, left and then reversing gives left, right, node
        pending.extend(root);
        while let Ok(node) = pending.pop() {
            visits.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        trace!(nodes = visits.len(), "created post-order traversal");

        Self {visits}
    }
}

impl<'a, T> Traversal<'a, T> for IterPostorder<'a, T> {
    fn has_next(&self) -> bool {
        !self.visits.is_empty()
    }

    fn try_next(&mut self) -> Result<&'a T, TraversalError> {
        let node = self.visits.pop()?;
        Ok(node.value())
    }
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.visits.len();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for IterPostorder<'a, T> {}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
