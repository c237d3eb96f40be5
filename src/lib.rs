//! This crate exposes an unbalanced Binary Search Tree (BST) of keys, mostly for educational
//! purposes, plus a small interactive menu (the `bst-menu` binary) driving it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean no key is ever stored twice. Searching for a key takes
//! `O(height)` (where `height` is defined as the longest path from the root `Node`
//! to a leaf `Node`), and visiting the left subtree, then the subtree root, then the
//! right subtree yields the keys in sorted order.
//!
//! This tree makes no attempt to limit its height. Keys inserted in sorted order build a
//! tree that is as tall as it has keys, which is why none of its operations recurse.
//!
//! Operations that can't do what was asked (inserting a duplicate, searching for or deleting
//! a missing key) return a [`TreeError`] and leave the tree exactly as it was. Nothing is
//! printed: the library only emits [`tracing`] events and leaves reporting to the caller.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod tree;
mod util;

pub use error::TreeError;
pub use iter::Iter;
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
