//! A binary search tree with pre-order, in-order and post-order traversals
//!
//! Each traversal walks the tree with an explicit [`simple_stack::Stack`] instead of recursion,
//! so it can be paused after any value and resumed later. All three implement the [`Traversal`]
//! trait as well as [`Iterator`].
//!
//! ```
//! use bst_traversal::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for &value in &[20, 10, 30, 5, 15, 25, 35] {
//!     tree.insert(value);
//! }
//!
//! let values: Vec<_> = tree.iter_postorder().copied().collect();
//! assert_eq!(&values, &[5, 15, 10, 25, 35, 30, 20]);
//! ```

pub mod tree;

mod error;
mod traversal;

pub use error::TraversalError;
pub use traversal::{Order, Traversal};
pub use tree::BinarySearchTree;
