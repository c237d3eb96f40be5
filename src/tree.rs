//! An unbalanced Binary Search Tree of keys. Each `Node` exclusively owns its two (possibly
//! empty) subtrees through a `Box`, so there is no shared ownership and no cycles.
//!
//! The tree never rebalances. Inserting keys in sorted order degenerates it into a list that is
//! `N` levels deep, so every walk over it (insert, search, delete, traversal and drop) is a loop
//! rather than a recursive call.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&50), Err(TreeError::EmptyTree));
//!
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.to_string(), "20 30 40 50 60 70 80");
//!
//! // Keys are stored once.
//! assert_eq!(tree.insert(50), Err(TreeError::DuplicateKey(50)));
//!
//! // 30 has two children so its successor, 40, takes its place.
//! assert_eq!(tree.delete(&30), Ok(30));
//! assert_eq!(tree.to_string(), "20 40 50 60 70 80");
//!
//! assert_eq!(tree.search(&65), Err(TreeError::KeyNotFound(65)));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, warn};

use crate::error::TreeError;
use crate::iter::Iter;
use crate::util::Removal;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree. This can be used for inserting, searching for, and deleting keys.
///
/// The `Tree` is the only handle to its nodes: dropping it releases all of them.
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
        self.clear();
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many levels the tree has. An empty tree has a height of 0 and a single node
    /// has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// // Sorted input is not rebalanced.
    /// let tree: Tree<i64> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    ///
    /// let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree<i64> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Returns the smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, if any.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// Removes every key from the tree, releasing the nodes one at a time.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            // `node` has no children left so dropping it can't recurse.
        }
        self.len = 0;
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Finds the stored key equal to `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree<i64> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.key),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Returns `true` if the tree stores `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `key` into the tree.
    ///
    /// If an equal key is already stored the tree is left untouched and the rejected key is
    /// handed back in [`TreeError::DuplicateKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(50), Ok(()));
    /// assert_eq!(tree.insert(50), Err(TreeError::DuplicateKey(50)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), TreeError<K>>
    where
        K: fmt::Debug,
    {
        let link = Self::descend(&mut self.root, &key);
        if link.is_some() {
            warn!(?key, "duplicate key ignored");
            return Err(TreeError::DuplicateKey(key));
        }

        debug!(?key, "inserted");
        *link = Some(Node::new_boxed(key));
        self.len += 1;
        Ok(())
    }

    /// Searches for `key`, returning the stored key on success.
    ///
    /// A miss is reported as [`TreeError::EmptyTree`] when there is nothing to search and as
    /// [`TreeError::KeyNotFound`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.search(&7), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(7).unwrap();
    /// assert_eq!(tree.search(&7), Ok(&7));
    /// assert_eq!(tree.search(&8), Err(TreeError::KeyNotFound(8)));
    /// ```
    pub fn search(&self, key: &K) -> Result<&K, TreeError<K>>
    where
        K: Clone + fmt::Debug,
    {
        self.find(key).ok_or_else(|| self.miss(key))
    }

    /// Deletes the node holding `key` and returns the key that was stored. If the tree does not
    /// contain the key, nothing changes and the miss is reported like [`Tree::search`] does.
    ///
    /// A node with two children is not unlinked itself. It takes the key of its in-order
    /// successor (the smallest key in its right subtree) and the successor's node, which has at
    /// most one child, is unlinked instead. Either way exactly one node is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i64> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.delete(&2), Err(TreeError::KeyNotFound(2)));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<K, TreeError<K>>
    where
        K: Clone + fmt::Debug,
    {
        let link = Self::descend(&mut self.root, key);
        let Some(node) = link.take() else {
            return Err(self.miss(key));
        };

        let (removed, case, replacement) = Node::unlink(node);
        *link = replacement;
        debug!(key = ?removed, %case, "deleted");
        self.len -= 1;
        Ok(removed)
    }

    /// Walks down from `link` and returns the link that holds `key`, or the empty link where
    /// `key` would be inserted.
    fn descend<'a>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
        loop {
            let ordering = link.as_deref().map(|node| key.cmp(&node.key));
            let go_left = match ordering {
                None | Some(Ordering::Equal) => return link,
                Some(ordering) => ordering == Ordering::Less,
            };
            if let Some(node) = link {
                link = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
    }

    fn miss(&self, key: &K) -> TreeError<K>
    where
        K: Clone + fmt::Debug,
    {
        if self.is_empty() {
            debug!(?key, "lookup on empty tree");
            TreeError::EmptyTree
        } else {
            debug!(?key, "key not found");
            TreeError::KeyNotFound(key.clone())
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node by node, so the clone has the same shape.
    fn clone(&self) -> Self {
        let mut root = None;
        {
            // Each source node paired with the empty link its copy goes into.
            let mut stack: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
            if let Some(node) = self.root() {
                stack.push((node, &mut root));
            }
            while let Some((node, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(node.key.clone()));
                if let Some(left) = node.left() {
                    stack.push((left, &mut copy.left));
                }
                if let Some(right) = node.right() {
                    stack.push((right, &mut copy.right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord + fmt::Debug,
{
    /// Inserts every key, skipping the ones already stored.
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            // Duplicates are already reported by `insert`.
            let _ = self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord + fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
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

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the keys in order, separated by single spaces.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// One stored key and the two subtrees it owns.
pub(crate) struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Removes `node` from its subtree. Returns its key, the structural case that applied, and
    /// what should take its place under the parent.
    fn unlink(mut node: Box<Self>) -> (K, Removal, Link<K>) {
        match (node.left.take(), node.right.take()) {
            (None, None) => (node.key, Removal::Leaf, None),
            (Some(child), None) | (None, Some(child)) => {
                (node.key, Removal::OnlyChild, Some(child))
            }
            (Some(left), Some(right)) => {
                let (successor, right) = Self::split_min(right);
                let removed = mem::replace(&mut node.key, successor.key);
                node.left = Some(left);
                node.right = right;
                (removed, Removal::Successor, Some(node))
            }
        }
    }

    /// Detaches the smallest node of the subtree rooted at `root`, found by following left
    /// children. Returns it along with what remains of the subtree. The smallest node's right
    /// child, if any, takes its place.
    fn split_min(mut root: Box<Self>) -> (Box<Self>, Link<K>) {
        let Some(mut child) = root.left.take() else {
            let rest = root.right.take();
            return (root, rest);
        };
        // `child` is always detached from `parent.left` while we look below it.
        let mut parent = &mut root;
        while let Some(grandchild) = child.left.take() {
            parent = parent.left.insert(child);
            child = grandchild;
        }
        parent.left = child.right.take();
        (child, Some(root))
    }
}
