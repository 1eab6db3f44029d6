// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Positional descent and in-order neighbours.

use super::node::{size, Link, NodePtr};
use super::AvlTreeList;

/// Leftmost real node of the subtree rooted at `node`.
pub(crate) fn minimum<T>(node: NodePtr<T>) -> NodePtr<T> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    return current;
}

/// Rightmost real node of the subtree rooted at `node`.
pub(crate) fn maximum<T>(node: NodePtr<T>) -> NodePtr<T> {
    let mut current = node;
    while let Some(right) = current.right() {
        current = right;
    }
    return current;
}

/// In-order successor using child and parent links only.
pub(crate) fn next<T>(node: NodePtr<T>) -> Link<T> {
    if let Some(right) = node.right() {
        return Some(minimum(right));
    }
    let mut current = node;
    let mut parent = node.parent();
    while let Some(p) = parent {
        if p.right() != Some(current) {
            break;
        }
        current = p;
        parent = p.parent();
    }
    return parent;
}

/// In-order predecessor using child and parent links only.
pub(crate) fn prev<T>(node: NodePtr<T>) -> Link<T> {
    if let Some(left) = node.left() {
        return Some(maximum(left));
    }
    let mut current = node;
    let mut parent = node.parent();
    while let Some(p) = parent {
        if p.left() != Some(current) {
            break;
        }
        current = p;
        parent = p.parent();
    }
    return parent;
}

impl<T> AvlTreeList<T> {
    /// Node at `index`, or `None` when `index >= len`.
    ///
    /// At each node the rank within its subtree is `size(left) + 1`; descend
    /// left when the wanted rank is smaller, right (subtracting the rank) when
    /// it is larger.
    pub(crate) fn locate(&self, index: usize) -> Link<T> {
        let mut wanted = index.checked_add(1)?;
        let mut current = self.root;
        while let Some(node) = current {
            let rank = size(node.left()) + 1;
            if wanted == rank {
                return Some(node);
            } else if wanted < rank {
                current = node.left();
            } else {
                wanted -= rank;
                current = node.right();
            }
        }
        return None;
    }

    /// Successor, O(1) when `node` is the cached last node.
    pub(crate) fn successor(&self, node: NodePtr<T>) -> Link<T> {
        if self.last == Some(node) {
            return None;
        }
        return next(node);
    }

    /// Predecessor, O(1) when `node` is the cached first node.
    pub(crate) fn predecessor(&self, node: NodePtr<T>) -> Link<T> {
        if self.first == Some(node) {
            return None;
        }
        return prev(node);
    }

    /// Recompute the cached endpoints from the root.
    pub(crate) fn refresh_ends(&mut self) {
        self.first = self.root.map(minimum);
        self.last = self.root.map(maximum);
    }
}
