use std::iter::FusedIterator;

use simple_stack::Stack;
use tracing::trace;

use super::Node;
use crate::{Traversal, TraversalError};

/// An in-order traversal of a tree, yielding its values in ascending order
///
/// Only the left spine of the unvisited part of the tree is kept on the stack, so memory use is
/// bounded by the height of the tree.
#[derive(Debug)]
pub struct IterInorder<'a, T> {
    stack: Stack<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Stack::new()};
        iter.push_left_spine(root);
        trace!(depth = iter.stack.len(), "created in-order traversal");

        iter
    }

    /// Pushes `node` and all of its left descendants
    fn push_left_spine(&mut self, node: Option<&'a Node<T>>) {
        let mut current = node;
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

impl<'a, T> Traversal<'a, T> for IterInorder<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn try_next(&mut self) -> Result<&'a T, TraversalError> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Ok(node.value())
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
