// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! AVL tree list: a sequence keyed by position.
//!
//! Each node stores the height and size of its subtree. Sizes give O(log n)
//! positional lookup (the rank of a node inside its subtree is
//! `size(left) + 1`), heights keep the tree balanced. The list also caches its
//! first and last nodes so that inserting at either end skips the descent.
//!
//! # Operations
//!
//! - `get(index)` / `locate_node(index)`: O(log n)
//! - `insert(index, value)`: O(log n), returns the rebalancing count
//! - `delete(index)` / `remove(index)`: O(log n)
//! - `split(index)`: O(log n), consumes the list
//! - `join(left, value, right)`: O(|height difference| + 1)
//! - `concat(other)`: O(log n)
//! - `first()` / `last()` / `len()`: O(1)
//! - `iter()` / `to_vec()` / `search(value)`: O(n)

mod mutate;
pub(crate) mod node;
mod rotate;
mod surgery;
mod validate;
pub(crate) mod walk;

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Index;

use smallvec::SmallVec;

use self::node::{size, Link, NodePtr};
use self::walk::{next, prev};

pub use self::node::NodeRef;

/// A list backed by an AVL tree with parent links.
pub struct AvlTreeList<T> {
    pub(crate) root: Link<T>,
    /// In-order minimum, `None` iff the list is empty.
    pub(crate) first: Link<T>,
    /// In-order maximum, `None` iff the list is empty.
    pub(crate) last: Link<T>,
    _owns: PhantomData<Box<T>>,
}

// SAFETY: the list owns its nodes exactly like a `Box<T>` tree would, and no
// node is reachable from two lists at once.
unsafe impl<T: Send> Send for AvlTreeList<T> {}
unsafe impl<T: Sync> Sync for AvlTreeList<T> {}

impl<T> AvlTreeList<T> {
    pub fn new() -> Self {
        return AvlTreeList {
            root: None,
            first: None,
            last: None,
            _owns: PhantomData,
        };
    }

    /// A list around a detached subtree. Caches are left empty; callers fix
    /// them with `refresh_ends` once the subtree has settled.
    pub(crate) fn from_subtree(root: Link<T>) -> Self {
        if let Some(root) = root {
            root.set_parent(None);
        }
        let mut list = AvlTreeList::new();
        list.root = root;
        return list;
    }

    /// Hand the tree over to the caller and leave `self` empty.
    pub(crate) fn take_root(&mut self) -> Link<T> {
        self.first = None;
        self.last = None;
        return self.root.take();
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    pub fn len(&self) -> usize {
        return size(self.root);
    }

    /// Height of the tree, -1 when empty.
    pub fn height(&self) -> i32 {
        return node::height(self.root);
    }

    /// The root node, `None` when the list is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        return self.root.map(NodeRef::real);
    }

    /// First element, O(1).
    pub fn first(&self) -> Option<&T> {
        return self.first.map(|n| n.value());
    }

    /// Last element, O(1).
    pub fn last(&self) -> Option<&T> {
        return self.last.map(|n| n.value());
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        return self.locate(index).map(|n| n.value());
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        return self.locate(index).map(|n| n.value_mut());
    }

    /// The node holding the element at `index`.
    pub fn locate_node(&self, index: usize) -> Option<NodeRef<'_, T>> {
        return self.locate(index).map(NodeRef::real);
    }

    /// Point `parent`'s link to `old` at `new` instead, or make `new` the
    /// root when `parent` is `None`.
    pub(crate) fn replace_child(&mut self, parent: Link<T>, old: NodePtr<T>, new: Link<T>) {
        match parent {
            None => self.root = new,
            Some(parent) if old.is_left_child_of(parent) => parent.set_left(new),
            Some(parent) => parent.set_right(new),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            front: self.first,
            back: self.last,
            remaining: self.len(),
            _list: PhantomData,
        };
    }

    /// The elements in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.iter().cloned().collect();
    }

    /// Consume the list, returning its elements in order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        let mut current = self.first;
        // Collect in order first: freeing a node destroys the links that lead
        // to its successor.
        let mut nodes = Vec::with_capacity(self.len());
        while let Some(node) = current {
            nodes.push(node);
            current = next(node);
        }
        self.take_root();
        for node in nodes {
            out.push(node.free());
        }
        return out;
    }

    /// Index of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        return self.iter().position(|item| item == value);
    }

    /// Run the full invariant check in debug builds.
    #[cfg(debug_assertions)]
    pub(crate) fn debug_check(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("INVARIANT VIOLATED: {err}");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn debug_check(&self) {}
}

impl<T> Default for AvlTreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTreeList<T> {
    fn drop(&mut self) {
        let mut stack: SmallVec<[NodePtr<T>; 32]> = SmallVec::new();
        stack.extend(self.take_root());
        while let Some(node) = stack.pop() {
            stack.extend(node.left());
            stack.extend(node.right());
            drop(node.free());
        }
    }
}

impl<T: Clone> Clone for AvlTreeList<T> {
    /// Copies the tree shape as well as the elements.
    fn clone(&self) -> Self {
        fn copy<T: Clone>(node: NodePtr<T>) -> NodePtr<T> {
            let out = NodePtr::alloc(node.value().clone());
            if let Some(left) = node.left() {
                let left = copy(left);
                left.set_parent(Some(out));
                out.set_left(Some(left));
            }
            if let Some(right) = node.right() {
                let right = copy(right);
                right.set_parent(Some(out));
                out.set_right(Some(right));
            }
            out.recompute();
            return out;
        }

        let mut list = AvlTreeList::new();
        list.root = self.root.map(copy);
        list.refresh_ends();
        return list;
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: PartialEq> PartialEq for AvlTreeList<T> {
    /// Element-wise; tree shape is ignored.
    fn eq(&self, other: &Self) -> bool {
        return self.len() == other.len() && self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for AvlTreeList<T> {}

impl<T> Index<usize> for AvlTreeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        return match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        };
    }
}

impl<T> FromIterator<T> for AvlTreeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = AvlTreeList::new();
        list.extend(iter);
        return list;
    }
}

impl<T> Extend<T> for AvlTreeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTreeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T> IntoIterator for AvlTreeList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.into_vec().into_iter();
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// In-order iterator driven by successor/predecessor walks.
///
/// Each step is O(log n) worst case and O(1) amortized over a full pass.
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _list: PhantomData<&'a AvlTreeList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = next(node);
        return Some(node.value());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = prev(node);
        return Some(node.value());
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        return Iter {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _list: PhantomData,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        let list: AvlTreeList<u32> = AvlTreeList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.height(), -1);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert!(list.root().is_none());
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.search(&1), None);
    }

    #[test]
    fn iter_from_both_ends() {
        let list: AvlTreeList<u32> = (0..10).collect();
        assert_eq!(list.iter().len(), 10);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), (0..10).rev().collect::<Vec<_>>());

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.len(), 8);
        let middle: Vec<u32> = iter.copied().collect();
        assert_eq!(middle, (1..9).collect::<Vec<_>>());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list: AvlTreeList<u32> = (0..5).collect();
        *list.get_mut(3).unwrap() = 30;
        assert_eq!(list.to_vec(), vec![0, 1, 2, 30, 4]);
        assert!(list.get_mut(5).is_none());
    }

    #[test]
    fn clone_keeps_shape() {
        let list: AvlTreeList<u32> = (0..20).collect();
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.to_level_order(), list.to_level_order());
        copy.check_invariants().unwrap();
    }

    #[test]
    fn into_vec_drains_in_order() {
        let list: AvlTreeList<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        assert_eq!(list.into_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn drop_releases_payloads() {
        use std::rc::Rc;

        let token = Rc::new(());
        let list: AvlTreeList<Rc<()>> = (0..50).map(|_| token.clone()).collect();
        assert_eq!(Rc::strong_count(&token), 51);
        drop(list);
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_past_end_panics() {
        let list: AvlTreeList<u32> = (0..3).collect();
        let _ = list[3];
    }
}
