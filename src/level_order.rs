// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Building lists from level-order slot arrays and exporting them back.
//!
//! A level-order array lists the slots of a complete binary tree row by row:
//! the children of slot `i` are `2i + 1` and `2i + 2`, and `None` marks a
//! virtual node. Tests use it to pin exact tree shapes.

use crate::error::ShapeError;
use crate::tree::node::{Link, NodePtr};
use crate::AvlTreeList;

impl<T> AvlTreeList<T> {
    /// Build a list with exactly the shape described by `slots`.
    ///
    /// The slot count must be `2^k - 1`, every filled slot needs a filled
    /// parent, and the tree must be AVL-balanced. Nothing is allocated when
    /// the array is rejected.
    pub fn from_level_order<I>(slots: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let slots: Vec<Option<T>> = slots.into_iter().collect();
        let n = slots.len();
        if !(n + 1).is_power_of_two() {
            return Err(ShapeError::BadLength(n));
        }
        for i in 1..n {
            if slots[i].is_some() && slots[(i - 1) / 2].is_none() {
                return Err(ShapeError::Orphan(i));
            }
        }

        let mut heights = vec![-1i32; n];
        for i in (0..n).rev() {
            if slots[i].is_none() {
                continue;
            }
            let left = heights.get(2 * i + 1).copied().unwrap_or(-1);
            let right = heights.get(2 * i + 2).copied().unwrap_or(-1);
            let balance_factor = left - right;
            if balance_factor.abs() > 1 {
                return Err(ShapeError::Unbalanced { slot: i, balance_factor });
            }
            heights[i] = 1 + left.max(right);
        }

        return Ok(Self::build_level_order(slots));
    }

    /// Like `from_level_order` but accepts unbalanced shapes, for rotation
    /// tests that need a tree in the middle of a fix-up.
    #[cfg(test)]
    pub(crate) fn from_level_order_unchecked(slots: Vec<Option<T>>) -> Self {
        return Self::build_level_order(slots);
    }

    fn build_level_order(slots: Vec<Option<T>>) -> Self {
        let nodes: Vec<Link<T>> = slots.into_iter().map(|slot| slot.map(NodePtr::alloc)).collect();

        // Children sit at higher slots, so a reverse pass sees them first.
        for i in (0..nodes.len()).rev() {
            let Some(node) = nodes[i] else {
                continue;
            };
            let left = nodes.get(2 * i + 1).copied().flatten();
            let right = nodes.get(2 * i + 2).copied().flatten();
            node.set_left(left);
            node.set_right(right);
            for child in [left, right].into_iter().flatten() {
                child.set_parent(Some(node));
            }
            node.recompute();
        }

        let mut list = AvlTreeList::new();
        list.root = nodes.first().copied().flatten();
        list.refresh_ends();
        return list;
    }

    /// The tree shape as a level-order slot array of `2^(height+1) - 1`
    /// slots. Empty lists give an empty array.
    pub fn to_level_order(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let Some(root) = self.root else {
            return Vec::new();
        };
        let slots = (1usize << (root.height() + 1)) - 1;
        let mut out: Vec<Option<T>> = vec![None; slots];
        let mut stack = vec![(root, 0usize)];
        while let Some((node, slot)) = stack.pop() {
            out[slot] = Some(node.value().clone());
            if let Some(left) = node.left() {
                stack.push((left, 2 * slot + 1));
            }
            if let Some(right) = node.right() {
                stack.push((right, 2 * slot + 2));
            }
        }
        return out;
    }
}
