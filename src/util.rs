use std::fmt;

/// The structural case a deletion hit once it found the node holding the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The node had no children and was simply unlinked.
    Leaf,
    /// The node had one child which took its place under the parent.
    OnlyChild,
    /// The node had two children. It stays in place, takes its in-order successor's key, and
    /// the successor's node is unlinked instead.
    Successor,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Leaf => "leaf",
            Self::OnlyChild => "only-child",
            Self::Successor => "successor",
        })
    }
}
