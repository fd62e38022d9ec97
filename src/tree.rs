mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::cmp::Ordering;

use simple_stack::Stack;
use tracing::{debug, trace};

use crate::{Order, Traversal};

/// A binary search tree (BST) that uses `Box` for node storage
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Duplicate values are not allowed. Inserting a value that already exists in the tree does not
/// modify the tree.
///
/// The tree is not self-balancing. Its shape depends only on insertion order, so inserting values
/// in sorted order produces a tree with a height equal to its length.
///
/// Cloning and dropping work node by node with an explicit stack and are safe at any height. The
/// `Debug` output is nested once per level.
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord + PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same values may still be shaped differently (e.g. if insertion order
        // is different). In-order traversal yields the values in sorted order regardless of shape,
        // so comparing that is enough.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord + Eq> Eq for BinarySearchTree<T> {}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty `BinarySearchTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    /// let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct values in the tree (i.e. the number of nodes)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree has no root
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.root.is_none()
    }

    /// Returns `true` if the tree contains the specified value.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Inserts a new value into the binary search tree
    ///
    /// The value becomes a new leaf. If an equal value is already present, the tree is left
    /// unchanged and the new value is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&37));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(value)));

                debug_assert_eq!(self.len, 0);
                self.len = 1;
                trace!(len = self.len, "inserted root");

                return;
            },
        };

        while let Some(node) = current.take() {
            match value.cmp(node.value()) {
                Ordering::Less => {
                    // Value not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Node::new(value));
                        break;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Value not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Node::new(value));
                        break;
                    }
                    current = node.right_mut();
                },

                Ordering::Equal => {
                    trace!(len = self.len, "ignored duplicate value");
                    return;
                },
            }
        }

        // A new node was inserted
        self.len += 1;
        trace!(len = self.len, "inserted value");
    }

    /// Clears the tree, removing all values
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        *self = Self::new();
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree
    ///
    /// Values are yielded in ascending order.
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, T> {
        IterPostorder::new(self.root())
    }

    /// Performs a traversal of the tree in the given order
    ///
    /// Useful when the order is only known at runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_traversal::{BinarySearchTree, Order, Traversal};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut iter = tree.traverse(Order::Postorder);
    /// assert_eq!(iter.try_next(), Ok(&1));
    /// assert_eq!(iter.try_next(), Ok(&3));
    /// assert_eq!(iter.try_next(), Ok(&2));
    /// assert!(!iter.has_next());
    /// ```
    pub fn traverse(&self, order: Order) -> Box<dyn Traversal<'_, T> + '_> {
        match order {
            Order::Preorder => Box::new(self.iter_preorder()),
            Order::Inorder => Box::new(self.iter_inorder()),
            Order::Postorder => Box::new(self.iter_postorder()),
        }
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// The root is always the first value that was inserted since the tree was created or last
    /// cleared.
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bst_traversal::{BinarySearchTree, tree::Node};
    ///
    /// // Custom traversal that counts the leaves of the tree
    /// fn count_leaves(node: Option<&Node<i32>>) -> usize {
    ///     match node {
    ///         None => 0,
    ///         Some(node) if node.is_leaf() => 1,
    ///         // Recurse through left and right subtrees, just like you would in a GC'd language!
    ///         Some(node) => count_leaves(node.left()) + count_leaves(node.right()),
    ///     }
    /// }
    ///
    /// fn main() {
    ///     let mut tree = BinarySearchTree::new();
    ///     tree.insert(2);
    ///     // ...more insertions...
    ///
    ///     println!("{}", count_leaves(tree.root()));
    /// }
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Copies the tree node by node, keeping its shape
impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let source_root = match self.root.as_deref() {
            Some(root) => root,
            None => return Self::default(),
        };

        let mut root = Box::new(Node::new(source_root.value().clone()));
        {
            // Pairs of (node to copy from, copy still missing its children)
            let mut pending = Stack::new();
            pending.push((source_root, &mut *root));
            while let Ok((source, copy)) = pending.pop() {
                if let Some(left) = source.left() {
                    copy.set_left(Node::new(left.value().clone()));
                }
                if let Some(right) = source.right() {
                    copy.set_right(Node::new(right.value().clone()));
                }

                let (copy_left, copy_right) = copy.children_mut();
                pending.extend(source.left().zip(copy_left));
                pending.extend(source.right().zip(copy_right));
            }
        }

        Self {
            root: Some(root),
            len: self.len,
        }
    }
}

/// Nodes are torn down one at a time so that dropping a degenerate (list-shaped) tree does not
/// recurse once per level
impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending = Stack::new();
        pending.extend(self.root.take());
        while let Ok(mut node) = pending.pop() {
            pending.extend(node.take_left());
            pending.extend(node.take_right());
        }
    }
}
