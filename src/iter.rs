//! In-order traversal of a [`Tree`][crate::Tree].

use std::iter::FusedIterator;

use crate::tree::Node;

/// A lazy, ascending iterator over the keys of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter]. The pending left spine is kept on an explicit
/// stack so the traversal never recurses, however deep the tree is.
///
/// # Examples
///
/// ```
/// use bst_engine::Tree;
///
/// let tree: Tree<i64> = [50, 30, 70].into_iter().collect();
/// let mut iter = tree.iter();
///
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&30));
/// assert_eq!(iter.next(), Some(&50));
/// assert_eq!(iter.next(), Some(&70));
/// assert_eq!(iter.next(), None);
/// ```
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant below it.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    #[test]
    fn empty_tree_yields_nothing() {
        let tree: Tree<i64> = Tree::new();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn yields_ascending_keys() {
        let tree: Tree<i64> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();

        let keys: Vec<_> = tree.iter().copied().collect();
        assert_eq!(keys, [20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn size_hint_counts_down() {
        let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
        let mut iter = tree.iter();

        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn traversal_is_restartable() {
        let tree: Tree<i64> = [5, 3, 8, 1, 4, 9].into_iter().collect();

        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();
        assert_eq!(first, second);

        // A cloned iterator picks up where the original was.
        let mut iter = tree.iter();
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [&3, &4, &5, &8, &9]);
        assert_eq!(iter.count(), 5);
    }
}
