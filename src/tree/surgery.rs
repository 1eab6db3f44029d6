// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Join, split and concat.
//!
//! All three move whole subtrees between lists by relinking their roots; no
//! payload is copied or reallocated. Join is the primitive: it hangs two
//! trees off a connector node, descending the taller tree's inner spine so
//! the connector lands next to a subtree of matching height. Split walks up
//! from the split point and re-uses every ancestor as the connector of one
//! join, so the height differences telescope to O(log n) overall.

use super::node::{height, Link, NodePtr};
use super::walk::{maximum, minimum};
use super::AvlTreeList;
use crate::error::ListError;

impl<T> AvlTreeList<T> {
    /// Join `left`, `value` and `right` into one list, in that order.
    ///
    /// Returns the joined list and the number of rebalancing operations.
    /// O(|height(left) - height(right)| + 1).
    pub fn join(left: Self, value: T, right: Self) -> (Self, usize) {
        return Self::join_with(left, NodePtr::alloc(value), right);
    }

    fn join_with(mut left: Self, connector: NodePtr<T>, mut right: Self) -> (Self, usize) {
        let first = left.first;
        let last = right.last;
        let (root, ops) = Self::join_roots(left.take_root(), connector, right.take_root());

        let mut joined = AvlTreeList::from_subtree(root);
        joined.first = first.or(Some(connector));
        joined.last = last.or(Some(connector));
        joined.debug_check();
        return (joined, ops);
    }

    /// Join two detached trees around `connector`. The caches of the result
    /// are left to the caller.
    fn join_roots(left: Link<T>, connector: NodePtr<T>, right: Link<T>) -> (Link<T>, usize) {
        connector.reset();
        for root in [left, right].into_iter().flatten() {
            root.set_parent(None);
        }

        let mut out = AvlTreeList::new();
        let ops = match (left, right) {
            (None, None) => {
                out.root = Some(connector);
                0
            }
            // One side empty: the connector goes where `insert` would put it.
            (Some(l), None) => {
                let attach = maximum(l);
                attach.set_right(Some(connector));
                connector.set_parent(Some(attach));
                out.root = Some(l);
                out.rebalance(Some(attach))
            }
            (None, Some(r)) => {
                let attach = minimum(r);
                attach.set_left(Some(connector));
                connector.set_parent(Some(attach));
                out.root = Some(r);
                out.rebalance(Some(attach))
            }
            (Some(l), Some(r)) => {
                let (hl, hr) = (l.height(), r.height());
                if hl == hr {
                    Self::attach_children(connector, Some(l), Some(r));
                    out.root = Some(connector);
                    1
                } else if hl > hr {
                    // Right spine of the taller left tree.
                    let mut parent = l;
                    let mut target = l.right();
                    while height(target) > hr {
                        let Some(next) = target else { break };
                        parent = next;
                        target = next.right();
                    }
                    Self::attach_children(connector, target, Some(r));
                    parent.set_right(Some(connector));
                    connector.set_parent(Some(parent));
                    out.root = Some(l);
                    out.rebalance(Some(parent))
                } else {
                    // Left spine of the taller right tree.
                    let mut parent = r;
                    let mut target = r.left();
                    while height(target) > hl {
                        let Some(next) = target else { break };
                        parent = next;
                        target = next.left();
                    }
                    Self::attach_children(connector, Some(l), target);
                    parent.set_left(Some(connector));
                    connector.set_parent(Some(parent));
                    out.root = Some(r);
                    out.rebalance(Some(parent))
                }
            }
        };

        let root = out.take_root();
        return (root, ops);
    }

    fn attach_children(node: NodePtr<T>, left: Link<T>, right: Link<T>) {
        node.set_left(left);
        node.set_right(right);
        for child in [left, right].into_iter().flatten() {
            child.set_parent(Some(node));
        }
        node.recompute();
    }

    /// Split around `index`: everything before it, the element itself, and
    /// everything after it.
    pub fn try_split(mut self, index: usize) -> Result<(Self, T, Self), ListError> {
        let Some(node) = self.locate(index) else {
            return Err(ListError::IndexOutOfBounds { index, len: self.len() });
        };
        // From here on the nodes are in flight and owned by the two halves.
        self.take_root();

        let mut left = node.left();
        let mut right = node.right();
        let mut child = node;
        let mut parent = node.parent();
        while let Some(p) = parent {
            let grand = p.parent();
            if p.right() == Some(child) {
                // `p` and its left subtree precede everything collected so far.
                let (root, _) = Self::join_roots(p.left(), p, left);
                left = root;
            } else {
                let (root, _) = Self::join_roots(right, p, p.right());
                right = root;
            }
            child = p;
            parent = grand;
        }

        let mut before = AvlTreeList::from_subtree(left);
        let mut after = AvlTreeList::from_subtree(right);
        before.refresh_ends();
        after.refresh_ends();
        node.reset();
        before.debug_check();
        after.debug_check();
        return Ok((before, node.free(), after));
    }

    /// Split around `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn split(self, index: usize) -> (Self, T, Self) {
        return match self.try_split(index) {
            Ok(parts) => parts,
            Err(err) => panic!("split failed: {err}"),
        };
    }

    /// Keep `[0, at)` in `self` and return `[at, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Self {
        let len = self.len();
        if at > len {
            panic!("split_off failed: {}", ListError::IndexOutOfBounds { index: at, len });
        }
        if at == len {
            return AvlTreeList::new();
        }
        let whole = std::mem::take(self);
        let (before, value, after) = whole.split(at);
        *self = before;
        let (after, _) = Self::join(AvlTreeList::new(), value, after);
        return after;
    }

    /// Append `other` to the end of `self`.
    ///
    /// Returns the absolute difference of the two heights measured before the
    /// operation, with -1 as the height of an empty list.
    pub fn concat(&mut self, mut other: Self) -> usize {
        let diff = (self.height() - other.height()).unsigned_abs() as usize;
        if other.is_empty() {
            return diff;
        }
        if self.is_empty() {
            std::mem::swap(self, &mut other);
            return diff;
        }

        let Some(connector) = self.last else {
            unreachable!("non-empty list without a last node");
        };
        self.unlink(connector);
        let left = std::mem::take(self);
        let (joined, _) = Self::join_with(left, connector, other);
        *self = joined;
        return diff;
    }
}
