//! In-order traversal.

use std::iter::FusedIterator;

use crate::tree::{Branch, SearchTree};

/// An iterator over the values of a [`SearchTree`] in ascending order.
///
/// Holds a stack of the branches whose value has not been yielded yet, so it
/// uses O(depth) memory and never recurses.
pub struct Iter<'a, T> {
    stack: Vec<&'a Branch<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a SearchTree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a SearchTree<T>) {
        while let Some(branch) = tree.as_branch() {
            self.stack.push(branch);
            tree = branch.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let branch = self.stack.pop()?;
        self.push_left_spine(branch.right());
        Some(branch.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
