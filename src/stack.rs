//! Singly-linked stack data structure.
use std::fmt;

use thiserror::Error;

/// Error returned when an operation needs an element but the stack has none.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;

/// Single-linked stack.
pub struct Stack<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Top-to-bottom iterator over a stack's values.
pub struct Iter<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, data: T) {
        let next = self.root.take();
        self.root = Some(Box::new(Node { data, next }));
        self.len += 1;
    }

    /// Remove the top value and return it.
    ///
    /// An empty stack is left untouched and reports [EmptyStackError].
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        let node = self.root.take().ok_or(EmptyStackError)?;
        self.root = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.root.as_ref().map(|n| &n.data).ok_or(EmptyStackError)
    }

    /// Iterate over the values from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cur: self.root.as_deref(),
        }
    }

    /// Release every node.
    pub fn clear(&mut self) {
        let mut cur = self.root.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

// unlinking one node at a time keeps long chains from recursing on drop
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cur.map(|n| {
            self.cur = n.next.as_deref();
            &n.data
        })
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
