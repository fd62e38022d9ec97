/// A single node of the binary search tree
///
/// Every value in the left subtree of a node is less than the node's value and every value in
/// the right subtree is greater. The shape of a node can only be changed by the tree that owns it.
///
/// The `Debug` and `PartialEq` impls recurse once per level of the subtree, so they can overflow
/// the call stack on very deep (list-shaped) trees. The same holds for any recursive custom
/// traversal written against `left()` and `right()`.
#[derive(Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Both children at once, so they can be modified independently
    pub(crate) fn children_mut(&mut self) -> (Option<&mut Self>, Option<&mut Self>) {
        (self.left.as_deref_mut(), self.right.as_deref_mut())
    }

    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }
}
