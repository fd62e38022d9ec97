use thiserror::Error;

use simple_stack::StackError;

/// The error returned when a value is requested from a traversal that has no values left
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    #[error("exhausted iterator")]
    ExhaustedIterator,
}

/// A traversal's stack is only empty once every node has been visited
impl From<StackError> for TraversalError {
    fn from(err: StackError) -> Self {
        match err {
            StackError::EmptyContainer => TraversalError::ExhaustedIterator,
        }
    }
}
