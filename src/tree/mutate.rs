// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Positional insertion and deletion.
//!
//! Both operations locate their target, do O(1) link surgery, keep the cached
//! first/last nodes current, and hand the rest to the rebalance walk. Deleting
//! a node with two real children first swaps it structurally with its
//! in-order successor, which reduces it to the leaf or one-child case.

use super::node::NodePtr;
use super::walk::{maximum, minimum};
use super::AvlTreeList;
use crate::error::ListError;

impl<T> AvlTreeList<T> {
    /// Insert `value` so that it ends up at `index`.
    ///
    /// Returns the number of rebalancing operations performed.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, ListError> {
        let len = self.len();
        if index > len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }

        let inserted = NodePtr::alloc(value);
        let (Some(first), Some(last)) = (self.first, self.last) else {
            self.root = Some(inserted);
            self.first = Some(inserted);
            self.last = Some(inserted);
            return Ok(0);
        };

        let parent = if index == 0 {
            first.set_left(Some(inserted));
            self.first = Some(inserted);
            first
        } else if index == len {
            last.set_right(Some(inserted));
            self.last = Some(inserted);
            last
        } else {
            let Some(node) = self.locate(index) else {
                unreachable!("index {index} inside a list of length {len}");
            };
            match node.left() {
                // The predecessor is the rightmost node of the left subtree,
                // so its right slot is free.
                Some(left) => {
                    let pred = maximum(left);
                    pred.set_right(Some(inserted));
                    pred
                }
                None => {
                    node.set_left(Some(inserted));
                    node
                }
            }
        };
        inserted.set_parent(Some(parent));

        let ops = self.rebalance(Some(parent));
        self.debug_check();
        return Ok(ops);
    }

    /// Insert `value` at `index`, returning the rebalancing operation count.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        return match self.try_insert(index, value) {
            Ok(ops) => ops,
            Err(err) => panic!("insert failed: {err}"),
        };
    }

    /// Append `value` at the end.
    pub fn push(&mut self, value: T) -> usize {
        let len = self.len();
        return self.insert(len, value);
    }

    /// Remove the element at `index` and return it with the rebalancing
    /// operation count.
    pub fn try_remove(&mut self, index: usize) -> Result<(T, usize), ListError> {
        let Some(node) = self.locate(index) else {
            return Err(ListError::IndexOutOfBounds { index, len: self.len() });
        };
        let ops = self.unlink(node);
        self.debug_check();
        return Ok((node.free(), ops));
    }

    /// Remove the element at `index` and return it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        return match self.try_remove(index) {
            Ok((value, _)) => value,
            Err(err) => panic!("remove failed: {err}"),
        };
    }

    /// Delete the element at `index`, returning the rebalancing operation
    /// count.
    pub fn try_delete(&mut self, index: usize) -> Result<usize, ListError> {
        return self.try_remove(index).map(|(_, ops)| ops);
    }

    /// Delete the element at `index`, returning the rebalancing operation
    /// count.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn delete(&mut self, index: usize) -> usize {
        return match self.try_delete(index) {
            Ok(ops) => ops,
            Err(err) => panic!("delete failed: {err}"),
        };
    }

    /// Detach `node` from the tree without freeing it. Afterwards the node is
    /// a leaf with no parent and can be freed or re-used as a join connector.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> usize {
        return match (node.left(), node.right()) {
            (None, None) => self.unlink_leaf(node),
            (Some(_), None) | (None, Some(_)) => self.unlink_with_one_child(node),
            (Some(_), Some(right)) => {
                // The successor has no left child; after the swap `node` sits
                // where the successor was.
                let successor = minimum(right);
                self.swap_nodes(node, successor);
                if node.right().is_some() {
                    self.unlink_with_one_child(node)
                } else {
                    self.unlink_leaf(node)
                }
            }
        };
    }

    fn unlink_leaf(&mut self, node: NodePtr<T>) -> usize {
        let Some(parent) = node.parent() else {
            self.root = None;
            self.first = None;
            self.last = None;
            return 0;
        };
        if self.first == Some(node) {
            self.first = self.successor(node);
        }
        if self.last == Some(node) {
            self.last = self.predecessor(node);
        }
        self.replace_child(Some(parent), node, None);
        node.set_parent(None);
        return self.rebalance(Some(parent));
    }

    fn unlink_with_one_child(&mut self, node: NodePtr<T>) -> usize {
        let Some(child) = node.left().or(node.right()) else {
            unreachable!("one-child case on a leaf");
        };
        let parent = node.parent();

        // The first node can only have a right subtree and the last node only
        // a left one, so the new endpoint is inside `child`.
        if self.first == Some(node) {
            self.first = Some(minimum(child));
        }
        if self.last == Some(node) {
            self.last = Some(maximum(child));
        }

        child.set_parent(parent);
        self.replace_child(parent, node, Some(child));
        node.reset();
        return self.rebalance(parent);
    }

    /// Exchange the structural positions of `a` and `b`.
    ///
    /// Each node keeps its payload and identity but takes over the other's
    /// parent and children. Root and first/last caches follow the positions.
    pub(crate) fn swap_nodes(&mut self, a: NodePtr<T>, b: NodePtr<T>) {
        if a == b {
            return;
        }
        if b.parent() == Some(a) {
            self.swap_with_child(a, b);
        } else if a.parent() == Some(b) {
            self.swap_with_child(b, a);
        } else {
            self.swap_apart(a, b);
        }

        for end in [&mut self.first, &mut self.last] {
            if *end == Some(a) {
                *end = Some(b);
            } else if *end == Some(b) {
                *end = Some(a);
            }
        }

        // Recompute bottom-up: a node that is now the other's child goes first.
        if a.parent() == Some(b) {
            a.recompute();
            b.recompute();
        } else {
            b.recompute();
            a.recompute();
        }
    }

    /// `child` hangs directly below `upper`.
    fn swap_with_child(&mut self, upper: NodePtr<T>, child: NodePtr<T>) {
        let grand = upper.parent();
        let (upper_left, upper_right) = (upper.left(), upper.right());
        let (child_left, child_right) = (child.left(), child.right());

        self.replace_child(grand, upper, Some(child));
        child.set_parent(grand);

        if upper_left == Some(child) {
            child.set_left(Some(upper));
            child.set_right(upper_right);
            if let Some(sibling) = upper_right {
                sibling.set_parent(Some(child));
            }
        } else {
            child.set_right(Some(upper));
            child.set_left(upper_left);
            if let Some(sibling) = upper_left {
                sibling.set_parent(Some(child));
            }
        }

        upper.set_parent(Some(child));
        upper.set_left(child_left);
        upper.set_right(child_right);
        for grandchild in [child_left, child_right].into_iter().flatten() {
            grandchild.set_parent(Some(upper));
        }
    }

    /// Neither node is the other's parent. They may be siblings.
    fn swap_apart(&mut self, a: NodePtr<T>, b: NodePtr<T>) {
        let (a_parent, a_left, a_right) = (a.parent(), a.left(), a.right());
        let (b_parent, b_left, b_right) = (b.parent(), b.left(), b.right());

        match (a_parent, b_parent) {
            (Some(p), Some(q)) if p == q => {
                let (left, right) = (p.left(), p.right());
                p.set_left(right);
                p.set_right(left);
            }
            _ => {
                self.replace_child(a_parent, a, Some(b));
                self.replace_child(b_parent, b, Some(a));
            }
        }

        a.set_parent(b_parent);
        b.set_parent(a_parent);
        a.set_left(b_left);
        a.set_right(b_right);
        b.set_left(a_left);
        b.set_right(a_right);
        for child in [b_left, b_right].into_iter().flatten() {
            child.set_parent(Some(a));
        }
        for child in [a_left, a_right].into_iter().flatten() {
            child.set_parent(Some(b));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeList;

    fn list(slots: &[Option<&'static str>]) -> AvlTreeList<&'static str> {
        return AvlTreeList::from_level_order(slots.iter().copied()).unwrap();
    }

    /// Swapping twice is the identity on shape, payload order and caches.
    fn assert_swap_round_trip(list: &mut AvlTreeList<&'static str>, i: usize, j: usize) {
        let before = list.to_level_order();
        let a = list.locate(i).unwrap();
        let b = list.locate(j).unwrap();
        list.swap_nodes(a, b);
        list.swap_nodes(a, b);
        assert_eq!(list.to_level_order(), before);
        list.check_invariants().unwrap();
    }

    /// After one swap the two payloads trade places in order, and nothing
    /// else moves.
    fn assert_swap_exchanges(list: &mut AvlTreeList<&'static str>, i: usize, j: usize) {
        let mut expected = list.to_vec();
        expected.swap(i, j);
        let a = list.locate(i).unwrap();
        let b = list.locate(j).unwrap();
        list.swap_nodes(a, b);
        assert_eq!(list.to_vec(), expected);
        assert_eq!(list.first(), expected.first());
        assert_eq!(list.last(), expected.last());
        for (index, value) in expected.iter().enumerate() {
            assert_eq!(list.get(index), Some(value));
        }
        list.check_invariants().unwrap();
    }

    fn sample() -> AvlTreeList<&'static str> {
        //        d
        //      /   \
        //     b     f
        //    / \   / \
        //   a   c e   g
        return list(&[
            Some("d"), Some("b"), Some("f"), Some("a"), Some("c"), Some("e"), Some("g"),
        ]);
    }

    #[test]
    fn swap_parent_with_left_child() {
        assert_swap_exchanges(&mut sample(), 3, 1);
        assert_swap_round_trip(&mut sample(), 3, 1);
    }

    #[test]
    fn swap_left_child_with_parent() {
        assert_swap_exchanges(&mut sample(), 1, 3);
        assert_swap_round_trip(&mut sample(), 1, 3);
    }

    #[test]
    fn swap_parent_with_right_child() {
        assert_swap_exchanges(&mut sample(), 3, 5);
        assert_swap_round_trip(&mut sample(), 3, 5);
    }

    #[test]
    fn swap_right_child_with_parent() {
        assert_swap_exchanges(&mut sample(), 5, 3);
        assert_swap_round_trip(&mut sample(), 5, 3);
    }

    #[test]
    fn swap_inner_parent_with_leaf_child() {
        assert_swap_exchanges(&mut sample(), 1, 0);
        assert_swap_exchanges(&mut sample(), 5, 6);
    }

    #[test]
    fn swap_siblings() {
        assert_swap_exchanges(&mut sample(), 1, 5);
        assert_swap_exchanges(&mut sample(), 0, 2);
        assert_swap_round_trip(&mut sample(), 4, 6);
    }

    #[test]
    fn swap_disjoint_nodes() {
        assert_swap_exchanges(&mut sample(), 0, 6);
        assert_swap_exchanges(&mut sample(), 2, 4);
        assert_swap_exchanges(&mut sample(), 3, 0);
        assert_swap_round_trip(&mut sample(), 6, 0);
    }

    #[test]
    fn swap_root_with_successor_two_levels_down() {
        let mut list = list(&[
            Some("d"), Some("b"), Some("g"), Some("a"), Some("c"), Some("e"), Some("h"),
            None, None, None, None, None, Some("f"), None, None,
        ]);
        assert_swap_exchanges(&mut list, 3, 4);
        assert_eq!(*list.root.unwrap().value(), "e");
    }

    #[test]
    fn swap_with_itself_is_a_no_op() {
        let mut list = sample();
        let before = list.to_level_order();
        let node = list.locate(2).unwrap();
        list.swap_nodes(node, node);
        assert_eq!(list.to_level_order(), before);
    }

    #[test]
    fn delete_two_children_successor_is_right_child() {
        // b's successor c is its right child: the adjacent swap path.
        let mut list = sample();
        let ops = list.delete(1);
        assert_eq!(list.to_vec(), vec!["a", "c", "d", "e", "f", "g"]);
        // c takes b's place and keeps the subtree height.
        assert_eq!(ops, 0);
        assert_eq!(
            list.to_level_order(),
            vec![Some("d"), Some("c"), Some("f"), Some("a"), None, Some("e"), Some("g")]
        );
        list.check_invariants().unwrap();
    }

    #[test]
    fn delete_root_through_distant_successor() {
        let mut list = sample();
        let ops = list.delete(3);
        assert_eq!(list.to_vec(), vec!["a", "b", "c", "e", "f", "g"]);
        assert_eq!(ops, 0);
        assert_eq!(
            list.to_level_order(),
            vec![Some("e"), Some("b"), Some("f"), Some("a"), Some("c"), None, Some("g")]
        );
        list.check_invariants().unwrap();
    }

    #[test]
    fn unlinked_node_is_detached() {
        let mut list = sample();
        let node = list.locate(3).unwrap();
        list.unlink(node);
        assert!(node.parent().is_none());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.size(), 1);
        assert_eq!(node.free(), "d");
        list.check_invariants().unwrap();
    }
}
