//! A self-balancing Binary Search Tree (specifically, an AVL tree) of unique keys.
//!
//! Every insertion walks down to an empty subtree, hangs a new leaf there and then, on the way
//! back up, recomputes each ancestor's height and rotates any ancestor whose subtrees differ in
//! height by more than one. The tree therefore never gets taller than roughly `1.44 * lg N`, no
//! matter which order the keys arrive in.
//!
//! # Examples
//!
//! ```
//! use avl::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input would give a plain BST a chain of height 7.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//!
//! // Inserting a key that's already there changes nothing.
//! tree.insert(4);
//! assert_eq!(tree.len(), 7);
//!
//! assert_eq!(tree.traverse(), vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{Link, Node};
use crate::traversal::Iter;

/// A self-balancing Binary Search Tree (specifically, an AVL tree). This can be used for
/// inserting keys and visiting them in ascending order.
///
/// Two trees compare equal only if they have the same shape, keys and cached heights.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` into the tree, rebalancing as needed. Inserting a key that is already
    /// present leaves the tree exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    ///
    /// // The ascending triple was rotated so 20 is the root.
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.traverse(), vec![10, 20, 30]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let inserted = insert(self.root.take(), key);
        self.root = Some(inserted.root);
        if inserted.created {
            self.len += 1;
        }
    }

    /// Returns `true` if the tree holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::avl::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
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

    /// How many levels the tree has. An empty tree has a height of 0 and a single key has a
    /// height of 1.
    pub fn height(&self) -> usize {
        Node::height_of(&self.root)
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

/// The result of inserting into a subtree.
struct Inserted<K> {
    /// The (possibly new) root of the subtree.
    root: Box<Node<K>>,
    /// How the inserted key compared to the key of the subtree's root before the insertion.
    /// `Equal` if the subtree was empty and `root` is the new leaf.
    side: Ordering,
    /// Whether a new node was allocated. `false` means the key was already present.
    created: bool,
}

/// Inserts `key` into the subtree at `link` and returns its new root after rebalancing.
///
/// Recursion depth is bounded by the height of the tree which is `O(lg N)`.
fn insert<K: Ord>(link: Link<K>, key: K) -> Inserted<K> {
    let Some(mut node) = link else {
        return Inserted {
            root: Node::new_boxed(key),
            side: Ordering::Equal,
            created: true,
        };
    };

    let side = key.cmp(&node.key);
    let (created, child_side) = match side {
        Ordering::Less => {
            let below = insert(node.left.take(), key);
            node.left = Some(below.root);
            (below.created, below.side)
        }
        Ordering::Equal => {
            return Inserted {
                root: node,
                side,
                created: false,
            }
        }
        Ordering::Greater => {
            let below = insert(node.right.take(), key);
            node.right = Some(below.root);
            (below.created, below.side)
        }
    };

    node.fix_height();
    Inserted {
        root: rebalance(node, child_side),
        side,
        created,
    }
}

/// Restores the AVL invariant at `node` after an insertion into one of its subtrees.
///
/// `child_side` is how the inserted key compared to the key of the child that was descended
/// into. The choice between a single and a double rotation is made from that comparison and not
/// from the child's balance factor, so that a given key sequence always yields the same shape.
/// A subtree only becomes too tall on the side that was just inserted into, so the left-heavy
/// arm always sees the left child's comparison and the right-heavy arm the right child's.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance<K>(mut node: Box<Node<K>>, child_side: Ordering) -> Box<Node<K>> {
    let node = match node.balance_factor() {
        2.. => {
            let inner_grandchild = node.left().map_or(false, |l| l.right.is_some());
            if child_side != Ordering::Less && inner_grandchild {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        ..=-2 => {
            let inner_grandchild = node.right().map_or(false, |r| r.left.is_some());
            if child_side != Ordering::Greater && inner_grandchild {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    };

    // After balancing, assert that we've restored/maintained the AVL invariant.
    if cfg!(debug_assertions) {
        let left_height = Node::height_of(&node.left);
        let right_height = Node::height_of(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Without a left child there is nothing to rotate and `old_root` is returned as is.
///
/// # Diagram
///
/// ```text
///   old_root                new_root
///    /     \                /     \
/// new_root  z     rotate ->  x    old_root
///  / \                               /  \
/// x   y                             y    z
/// ```
fn rotate_right<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child, taking over its old left subtree as the new right subtree.
fn rotate_left<K>(mut old_root: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`, checking the traversals agree
    /// whenever an `Op::Iter` comes up.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
    where
        K: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    bst.insert(k.clone());
                    set.insert(k.clone());
                }
                Op::Iter => {
                    if !bst.iter().eq(set.iter()) {
                        return false;
                    }
                }
            }
        }

        bst.len() == set.len()
    }

    /// Returns the height of `node` if every node below it is ordered and AVL balanced with a
    /// correct cached height.
    fn valid_height(node: Option<&Node<i8>>) -> Option<usize> {
        let Some(n) = node else {
            return Some(0);
        };
        if n.left().map_or(false, |l| l.key >= n.key) || n.right().map_or(false, |r| r.key <= n.key) {
            return None;
        }
        let left = valid_height(n.left())?;
        let right = valid_height(n.right())?;
        (left.abs_diff(right) <= 1 && n.height == left.max(right) + 1).then_some(n.height)
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn balanced_after_every_insert(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            xs.into_iter().all(|x| {
                tree.insert(x);
                valid_height(tree.root()) == Some(tree.height())
            })
        }
    }

    quickcheck::quickcheck! {
        fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let mut again = tree.clone();
            again.extend(xs.iter().rev().copied());

            again == tree
        }
    }
}
