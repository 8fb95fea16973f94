//! A plain Binary Search Tree of unique keys with no balancing whatsoever.
//!
//! This is the baseline the AVL tree is measured against. Its shape depends entirely on the
//! insertion order: sorted input produces a chain as tall as the number of keys. Because that is
//! the expected outcome rather than a corner case, nothing here recurses on the shape of the
//! tree - insertion, traversal, height measurement and drop all walk it with loops.
//!
//! # Examples
//!
//! ```
//! use avl::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! // Every key hangs off the right of the previous one.
//! assert_eq!(tree.height(), 7);
//! assert_eq!(tree.traverse(), vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{self, Link, Node};
use crate::traversal::Iter;

/// A Binary Search Tree that never rebalances.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    // The derived, structural form would recurse once per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` as a new leaf unless it is already present, in which case nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.traverse(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
    }

    /// Returns `true` if the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.root().map_or(false, |root| root.contains(key))
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Collects every key in ascending order.
    pub fn traverse(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Measures how many levels the tree has by visiting every node. An empty tree has a height
    /// of 0.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        tallest
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let tree = Tree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);
        assert_eq!(format!("{tree:?}"), "{}");
    }

    #[test]
    fn keeps_insertion_shape() {
        let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
        let root = tree.root().expect("non-empty tree");

        assert_eq!(root.key, 5);
        assert_eq!(root.left().map(|n| n.key), Some(3));
        assert_eq!(root.right().map(|n| n.key), Some(8));
        assert_eq!(root.left().and_then(Node::left).map(|n| n.key), Some(1));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn ascending_is_a_chain() {
        let tree: Tree<_> = (1..=7).collect();

        assert_eq!(tree.height(), 7);
        let mut node = tree.root();
        for expected in 1..=7 {
            let n = node.expect("chain continues");
            assert_eq!(n.key, expected);
            assert!(n.left().is_none());
            node = n.right();
        }
        assert!(node.is_none());
    }

    #[test]
    fn descending_is_a_chain() {
        let tree: Tree<_> = (1..=7).rev().collect();

        assert_eq!(tree.height(), 7);
        assert_eq!(tree.traverse(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn duplicates_are_absorbed() {
        let mut tree: Tree<_> = [4, 2, 6].into_iter().collect();
        tree.extend([4, 2, 6, 2]);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 2);
        assert_eq!(format!("{tree:?}"), "{2, 4, 6}");
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let depth = 10_000;
        let tree: Tree<_> = (0..depth).collect();

        assert_eq!(tree.height(), depth);
        assert_eq!(tree.iter().count(), depth);
        assert!(tree.contains(&(depth - 1)));
        assert!(!tree.contains(&depth));
        // Dropping at the end of the test must not overflow either.
    }
}
