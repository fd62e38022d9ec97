use crate::TraversalError;

/// A one-shot, resumable cursor over the values of a binary search tree
///
/// Every traversal order implements this trait, so callers can consume any of them through a
/// single `&mut dyn Traversal` or `Box<dyn Traversal>`. Each value is yielded exactly once.
///
/// # Examples
///
/// ```
/// use bst_traversal::{BinarySearchTree, Traversal, TraversalError};
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
///
/// let mut iter = tree.iter_inorder();
/// let mut values = Vec::new();
/// while iter.has_next() {
///     values.push(*iter.try_next()?);
/// }
/// assert_eq!(values, &[1, 2]);
/// assert_eq!(iter.try_next(), Err(TraversalError::ExhaustedIterator));
/// # Ok::<(), TraversalError>(())
/// ```
pub trait Traversal<'a, T: 'a> {
    /// Returns true if another call to `try_next` will yield a value
    fn has_next(&self) -> bool;

    /// Advances the traversal and returns the next value
    ///
    /// Returns `TraversalError::ExhaustedIterator` once every value has been yielded. Calling it
    /// again after that keeps returning the same error.
    fn try_next(&mut self) -> Result<&'a T, TraversalError>;
}

/// The order in which a traversal visits the nodes of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree
    Preorder,
    /// Left subtree, then node, then right subtree (ascending order)
    Inorder,
    /// Left subtree, then right subtree, then node
    Postorder,
}
