// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Full structural check, used by tests and by debug builds after every
//! mutation.

use rustc_hash::FxHashSet;

use super::node::{height, size, NodePtr};
use super::walk::{maximum, minimum};
use super::AvlTreeList;
use crate::error::InvariantError;

impl<T> AvlTreeList<T> {
    /// Verify parent links, stored heights and sizes, AVL balance and the
    /// cached endpoints. O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if let Some(root) = self.root {
            if root.parent().is_some() {
                return Err(InvariantError::RootHasParent);
            }
        }

        let mut visited: FxHashSet<NodePtr<T>> = FxHashSet::default();
        let mut stack: Vec<NodePtr<T>> = Vec::new();
        let mut current = self.root;
        let mut index = 0;
        loop {
            while let Some(node) = current {
                if !visited.insert(node) {
                    return Err(InvariantError::Cycle);
                }
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            check_node(node, index)?;
            index += 1;
            current = node.right();
        }

        if self.first != self.root.map(minimum) {
            return Err(InvariantError::FirstMismatch);
        }
        if self.last != self.root.map(maximum) {
            return Err(InvariantError::LastMismatch);
        }
        return Ok(());
    }
}

fn check_node<T>(node: NodePtr<T>, index: usize) -> Result<(), InvariantError> {
    for child in [node.left(), node.right()].into_iter().flatten() {
        if child.parent() != Some(node) {
            return Err(InvariantError::BrokenParentLink { index });
        }
    }

    let expected = 1 + height(node.left()).max(height(node.right()));
    if node.height() != expected {
        return Err(InvariantError::HeightMismatch {
            index,
            stored: node.height(),
            expected,
        });
    }

    let expected = 1 + size(node.left()) + size(node.right());
    if node.size() != expected {
        return Err(InvariantError::SizeMismatch {
            index,
            stored: node.size(),
            expected,
        });
    }

    let balance_factor = node.balance_factor();
    if balance_factor.abs() > 1 {
        return Err(InvariantError::Unbalanced { index, balance_factor });
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use crate::error::InvariantError;
    use crate::AvlTreeList;

    #[test]
    fn built_lists_pass() {
        let list: AvlTreeList<u32> = (0..100).collect();
        assert_eq!(list.check_invariants(), Ok(()));
        assert_eq!(AvlTreeList::<u32>::new().check_invariants(), Ok(()));
    }

    #[test]
    fn stale_height_is_reported() {
        let list: AvlTreeList<u32> = (0..3).collect();
        let left = list.root.unwrap().left().unwrap();
        left.set_left(None);
        let spare = crate::tree::node::NodePtr::alloc(9);
        left.set_right(Some(spare));
        spare.set_parent(Some(left));
        // `left` is still stored as a leaf.
        assert_eq!(
            list.check_invariants(),
            Err(InvariantError::HeightMismatch { index: 0, stored: 0, expected: 1 })
        );
    }

    #[test]
    fn unbalanced_fixture_is_reported() {
        let list = AvlTreeList::from_level_order_unchecked(vec![
            Some("a"), Some("b"), None, Some("c"), None, None, None,
        ]);
        assert_eq!(
            list.check_invariants(),
            Err(InvariantError::Unbalanced { index: 2, balance_factor: 2 })
        );
    }

    #[test]
    fn stale_cache_is_reported() {
        let mut list: AvlTreeList<u32> = (0..5).collect();
        list.first = list.last;
        assert_eq!(list.check_invariants(), Err(InvariantError::FirstMismatch));
        list.refresh_ends();
        assert_eq!(list.check_invariants(), Ok(()));
    }

    #[test]
    fn broken_parent_link_is_reported() {
        let list: AvlTreeList<u32> = (0..3).collect();
        let root = list.root.unwrap();
        let right = root.right().unwrap();
        right.set_parent(None);
        assert_eq!(
            list.check_invariants(),
            Err(InvariantError::BrokenParentLink { index: 1 })
        );
        right.set_parent(Some(root));
    }
}
