//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! None of these are fatal. Whenever an operation returns one of them the
//! tree is exactly as it was before the call.

use thiserror::Error;

/// The ways an insert, search or delete can fail to do what was asked.
///
/// The key involved is handed back where there is one so the caller can
/// report it (or, for [`DuplicateKey`][TreeError::DuplicateKey], reuse it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError<K> {
    /// The key is already stored. The insert was ignored.
    #[error("duplicate key {0:?} ignored")]
    DuplicateKey(K),
    /// The tree has nodes but none of them holds this key.
    #[error("key {0:?} not found")]
    KeyNotFound(K),
    /// The tree has no nodes at all.
    #[error("tree is empty")]
    EmptyTree,
}

impl<K> TreeError<K> {
    /// Whether this is a lookup miss, either because the key is absent or
    /// because the tree is empty.
    ///
    /// ```
    /// use bst_engine::TreeError;
    ///
    /// assert!(TreeError::KeyNotFound(3).is_not_found());
    /// assert!(TreeError::<i64>::EmptyTree.is_not_found());
    /// assert!(!TreeError::DuplicateKey(3).is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_) | Self::EmptyTree)
    }
}
