// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Rotations and the bottom-up rebalance walk.
//!
//! ```text
//!        A                B
//!       / \     right    / \
//!      B   z   ------>  x   A
//!     / \      <------     / \
//!    x   y      left      y   z
//! ```
//!
//! A rotation only rewires links and recomputes the two nodes involved, the
//! lower one first. Every single rotation counts as one rebalancing
//! operation, a double rotation as two.

use super::node::{Link, NodePtr};
use super::AvlTreeList;

impl<T> AvlTreeList<T> {
    /// Rotate `a` right around its left child.
    pub(crate) fn rotate_right(&mut self, a: NodePtr<T>) {
        let Some(b) = a.left() else {
            unreachable!("right rotation on a node without a left child");
        };
        let parent = a.parent();

        let moved = b.right();
        a.set_left(moved);
        if let Some(moved) = moved {
            moved.set_parent(Some(a));
        }
        b.set_right(Some(a));
        b.set_parent(parent);
        self.replace_child(parent, a, Some(b));
        a.set_parent(Some(b));

        a.recompute();
        b.recompute();
    }

    /// Rotate `a` left around its right child.
    pub(crate) fn rotate_left(&mut self, a: NodePtr<T>) {
        let Some(b) = a.right() else {
            unreachable!("left rotation on a node without a right child");
        };
        let parent = a.parent();

        let moved = b.left();
        a.set_right(moved);
        if let Some(moved) = moved {
            moved.set_parent(Some(a));
        }
        b.set_left(Some(a));
        b.set_parent(parent);
        self.replace_child(parent, a, Some(b));
        a.set_parent(Some(b));

        a.recompute();
        b.recompute();
    }

    /// Fix a node whose balance factor is +2 or -2. Returns the number of
    /// single rotations performed.
    fn rotate(&mut self, criminal: NodePtr<T>, balance_factor: i32) -> usize {
        if balance_factor > 0 {
            let Some(left) = criminal.left() else {
                unreachable!("left-heavy node without a left child");
            };
            if left.balance_factor() >= 0 {
                self.rotate_right(criminal);
                return 1;
            }
            self.rotate_left(left);
            self.rotate_right(criminal);
            return 2;
        }

        let Some(right) = criminal.right() else {
            unreachable!("right-heavy node without a right child");
        };
        if right.balance_factor() <= 0 {
            self.rotate_left(criminal);
            return 1;
        }
        self.rotate_right(right);
        self.rotate_left(criminal);
        return 2;
    }

    /// Walk from `start` up to the root restoring heights, sizes and balance.
    ///
    /// Returns the number of rebalancing operations: one per single rotation
    /// and one per node whose height changed without a rotation.
    pub(crate) fn rebalance(&mut self, start: Link<T>) -> usize {
        let mut ops = 0;
        let mut current = start;
        while let Some(node) = current {
            let balance_factor = node.balance_factor();
            if balance_factor.abs() >= 2 {
                debug_assert_eq!(balance_factor.abs(), 2, "balance factor out of range");
                ops += self.rotate(node, balance_factor);
                // `node` now hangs below the subtree's new root, which the
                // rotation already recomputed.
                current = node.parent().and_then(|top| top.parent());
                continue;
            }

            let before = node.height();
            node.recompute();
            if node.height() != before {
                ops += 1;
            }
            current = node.parent();
        }
        return ops;
    }
}
