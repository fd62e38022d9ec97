use thiserror::Error;

/// The error returned when an element is requested from an empty [`Stack`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("empty stack")]
    EmptyContainer,
}

/// A last-in-first-out (LIFO) stack backed by a growable array
///
/// The stack has no capacity limit. Elements are pushed onto and popped from the same end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self {
            items: Default::default(),
        }
    }
}

impl<T> Stack<T> {
    /// Creates an empty `Stack`
    ///
    /// The stack is initially created with a capacity of 0, so it will not allocate until it is
    /// first pushed onto.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    /// let mut stack: Stack<i32> = Stack::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with the specified capacity.
    ///
    /// The stack will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the stack will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    /// let mut stack: Stack<&str> = Stack::with_capacity(10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the stack
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack has no elements
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// assert!(stack.is_empty());
    /// stack.push(1.1);
    /// assert!(!stack.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element onto the top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the top element of the stack and returns it
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::{Stack, StackError};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(10);
    /// stack.push(20);
    /// assert_eq!(stack.pop(), Ok(20));
    /// assert_eq!(stack.pop(), Ok(10));
    /// assert_eq!(stack.pop(), Err(StackError::EmptyContainer));
    /// ```
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::EmptyContainer)
    }

    /// Returns a reference to the top element of the stack without removing it
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_stack::{Stack, StackError};
    ///
    /// let mut stack = Stack::new();
    /// assert_eq!(stack.peek(), Err(StackError::EmptyContainer));
    /// stack.push("a");
    /// stack.push("b");
    /// assert_eq!(stack.peek(), Ok(&"b"));
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::EmptyContainer)
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}
