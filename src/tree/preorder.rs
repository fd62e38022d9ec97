use std::iter::FusedIterator;

use simple_stack::Stack;
use tracing::trace;

use super::Node;
use crate::{Traversal, TraversalError};

/// A pre-order traversal of a tree: each node is yielded before either of its subtrees
#[derive(Debug)]
pub struct IterPreorder<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Stack::new();
        stack.extend(root);
        trace!(queued = stack.len(), "created pre-order traversal");

        Self {stack}
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> Traversal<'a, T> for IterPreorder<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn try_next(&mut self) -> Result<&'a T, TraversalError> {
        let node = self.stack.pop()?;
        // Right goes first so that the left subtree is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Ok(node.value())
    }
}

impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}
