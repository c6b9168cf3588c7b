//! The persistent search tree.
//!
//! A tree is either [`SearchTree::Empty`] or a [`SearchTree::Node`] pointing
//! at a reference-counted [`Branch`]. Inserting copies only the branches on
//! the path from the root to the new leaf; every other subtree is shared with
//! the tree it was inserted into.
//!
//! Trees are not balanced, so a chain as deep as the number of values is a
//! legal shape. Every walk below (including drop, equality and hashing) uses
//! an explicit stack instead of recursion.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use crate::iter::Iter;

/// An immutable binary search tree.
///
/// # Invariants
///
/// - Every value in the left subtree of a node is less than the node's value.
/// - Every value in the right subtree of a node is greater than the node's value.
/// - No value appears twice.
///
/// Equality is structural: two trees holding the same values but built in a
/// different order may compare unequal.
pub enum SearchTree<T> {
    /// The empty tree.
    Empty,
    /// A node with a value and two subtrees.
    Node(Arc<Branch<T>>),
}

/// The string-keyed tree.
pub type StringTree = SearchTree<String>;

/// The contents of a [`SearchTree::Node`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Branch<T> {
    value: T,
    left: SearchTree<T>,
    right: SearchTree<T>,
}

impl<T> Branch<T> {
    /// Returns the value stored at this node.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the subtree of smaller values.
    #[must_use]
    pub fn left(&self) -> &SearchTree<T> {
        &self.left
    }

    /// Returns the subtree of larger values.
    #[must_use]
    pub fn right(&self) -> &SearchTree<T> {
        &self.right
    }
}

/// Unlinks uniquely owned descendants one at a time. Subtrees still shared
/// with another tree only lose a reference.
impl<T> Drop for Branch<T> {
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        let mut pending = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(tree) = pending.pop() {
            if let SearchTree::Node(shared) = tree {
                if let Some(mut branch) = Arc::into_inner(shared) {
                    pending.push(mem::take(&mut branch.left));
                    pending.push(mem::take(&mut branch.right));
                }
            }
        }
    }
}

impl<T> SearchTree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node(Arc::new(Branch { value, left, right }))
    }

    /// Returns true if the tree holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the branch at the root, if any.
    #[must_use]
    pub fn as_branch(&self) -> Option<&Branch<T>> {
        match self {
            Self::Empty => None,
            Self::Node(branch) => Some(branch.as_ref()),
        }
    }

    /// Returns the value at the root, if any.
    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.as_branch().map(Branch::value)
    }

    /// Returns the number of values in the tree.
    ///
    /// This walks the whole tree.
    #[must_use]
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((tree, level)) = pending.pop() {
            match tree {
                Self::Empty => deepest = deepest.max(level),
                Self::Node(branch) => {
                    pending.push((&branch.left, level + 1));
                    pending.push((&branch.right, level + 1));
                }
            }
        }
        deepest
    }

    /// Returns true if the tree contains `x`.
    ///
    /// Follows a single path from the root, so this is O(depth).
    #[must_use]
    pub fn contains<Q>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        while let Self::Node(branch) = current {
            current = match x.cmp(branch.value.borrow()) {
                Ordering::Equal => return true,
                Ordering::Less => &branch.left,
                Ordering::Greater => &branch.right,
            };
        }
        false
    }

    /// Returns true if both trees are the very same allocation (or both empty).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(a), Self::Node(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Ord + Clone> SearchTree<T> {
    /// Returns a tree holding every value of `self` plus `x`.
    ///
    /// `self` is left untouched. If `x` is already present the result is
    /// `self` itself (the same root is shared).
    #[must_use]
    pub fn insert(&self, x: T) -> Self {
        // Ancestors of the insertion point, with the side the path took.
        let mut path: Vec<(&Branch<T>, bool)> = Vec::new();
        let mut current = self;
        while let Self::Node(branch) = current {
            let went_left = match x.cmp(&branch.value) {
                Ordering::Equal => return self.clone(),
                Ordering::Less => true,
                Ordering::Greater => false,
            };
            path.push((branch.as_ref(), went_left));
            current = if went_left { &branch.left } else { &branch.right };
        }

        let mut rebuilt = Self::node(x, Self::Empty, Self::Empty);
        for (branch, went_left) in path.into_iter().rev() {
            rebuilt = if went_left {
                Self::node(branch.value.clone(), rebuilt, branch.right.clone())
            } else {
                Self::node(branch.value.clone(), branch.left.clone(), rebuilt)
            };
        }
        rebuilt
    }
}

impl<T> Clone for SearchTree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(branch) => Self::Node(Arc::clone(branch)),
        }
    }
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: PartialEq> PartialEq for SearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Empty, Self::Empty) => {}
                (Self::Node(a), Self::Node(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((&a.left, &b.left));
                    pending.push((&a.right, &b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for SearchTree<T> {}

/// Hashes the pre-order sequence of values with a marker for every empty
/// subtree, which identifies the shape uniquely.
impl<T: Hash> Hash for SearchTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Self::Empty => state.write_u8(0),
                Self::Node(branch) => {
                    state.write_u8(1);
                    branch.value.hash(state);
                    pending.push(&branch.right);
                    pending.push(&branch.left);
                }
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + Clone> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::Empty, |tree, value| tree.insert(value))
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

enum RenderStep<'a, T> {
    Open(&'a Branch<T>),
    Value(&'a T),
    Close,
}

/// Renders `()` for the empty tree, otherwise `(` left value right `)` with
/// empty children omitted.
impl<T: fmt::Display> fmt::Display for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.as_branch() else {
            return f.write_str("()");
        };

        let mut steps = vec![RenderStep::Open(root)];
        while let Some(step) = steps.pop() {
            match step {
                RenderStep::Open(branch) => {
                    f.write_str("(")?;
                    steps.push(RenderStep::Close);
                    if let Some(right) = branch.right.as_branch() {
                        steps.push(RenderStep::Open(right));
                    }
                    steps.push(RenderStep::Value(&branch.value));
                    if let Some(left) = branch.left.as_branch() {
                        steps.push(RenderStep::Open(left));
                    }
                }
                RenderStep::Value(value) => write!(f, "{value}")?,
                RenderStep::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
