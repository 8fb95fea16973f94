//! This crate exposes a self-balancing (AVL) Binary Search Tree of unique keys alongside a plain,
//! unbalanced one that exists to show what balancing buys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). A plain BST fed sorted keys turns into a chain
//! whose height is the number of keys. An AVL tree additionally keeps, for every `Node`, the
//! heights of its two subtrees within one of each other, rotating `Node`s after each insertion
//! where needed. That limits its height to about `1.44 * lg N` for `N` keys. Both trees support
//! sorted iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! Neither tree allocates anything but `Node`s on insertion, and neither does any I/O, so
//! callers can time batches of insertions without interference.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod keys;
mod node;
pub mod traversal;
pub mod unbalanced;
