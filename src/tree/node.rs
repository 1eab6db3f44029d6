// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Tree nodes and the virtual-node convention.
//!
//! Every real node owns two child links. A child link is either another real
//! node or the virtual node, which is represented by `None`. The virtual node
//! has height -1 and size 0, so balance and rotation code never needs to
//! special-case missing children: it just calls [`height`] and [`size`].
//!
//! # Safety
//!
//! A [`NodePtr`] is created by [`NodePtr::alloc`] and destroyed by
//! [`NodePtr::free`]. In between it points at a live heap allocation that is
//! owned by exactly one [`AvlTreeList`](super::AvlTreeList) (or is in flight
//! between two of them during split/join). Child links are the owning chain;
//! parent links are plain back-pointers and never own anything. The accessors
//! below read and write fields through the raw pointer without creating
//! long-lived references, so two handles to the same node never alias a
//! `&mut`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A child or parent link. `None` is the virtual node.
pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A single element of the list.
struct Node<T> {
    value: T,
    /// Height of the subtree rooted here. A real leaf has height 0.
    height: i32,
    /// Number of real nodes in the subtree rooted here.
    size: usize,
    parent: Link<T>,
    left: Link<T>,
    right: Link<T>,
}

/// Non-owning handle to a heap-allocated node.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.0 == other.0;
    }
}

impl<T> Eq for NodePtr<T> {}

impl<T> Hash for NodePtr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> fmt::Debug for NodePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "NodePtr({:p})", self.0);
    }
}

/// Height of a link, -1 for the virtual node.
#[inline]
pub(crate) fn height<T>(link: Link<T>) -> i32 {
    return match link {
        Some(node) => node.height(),
        None => -1,
    };
}

/// Size of a link, 0 for the virtual node.
#[inline]
pub(crate) fn size<T>(link: Link<T>) -> usize {
    return match link {
        Some(node) => node.size(),
        None => 0,
    };
}

impl<T> NodePtr<T> {
    /// Allocate a detached real leaf: height 0, size 1, two virtual children.
    pub(crate) fn alloc(value: T) -> NodePtr<T> {
        let node = Box::new(Node {
            value,
            height: 0,
            size: 1,
            parent: None,
            left: None,
            right: None,
        });
        return NodePtr(NonNull::from(Box::leak(node)));
    }

    /// Release the allocation and hand back the payload.
    ///
    /// The node must already be unreachable from any tree.
    pub(crate) fn free(self) -> T {
        // SAFETY: the pointer came from `Box::leak` in `alloc` and every
        // caller frees a node exactly once, after unlinking it.
        let node = unsafe { Box::from_raw(self.0.as_ptr()) };
        return node.value;
    }

    #[inline]
    fn raw(self) -> *mut Node<T> {
        return self.0.as_ptr();
    }

    #[inline]
    pub(crate) fn parent(self) -> Link<T> {
        return unsafe { (*self.raw()).parent };
    }

    #[inline]
    pub(crate) fn left(self) -> Link<T> {
        return unsafe { (*self.raw()).left };
    }

    #[inline]
    pub(crate) fn right(self) -> Link<T> {
        return unsafe { (*self.raw()).right };
    }

    #[inline]
    pub(crate) fn height(self) -> i32 {
        return unsafe { (*self.raw()).height };
    }

    #[inline]
    pub(crate) fn size(self) -> usize {
        return unsafe { (*self.raw()).size };
    }

    #[inline]
    pub(crate) fn set_parent(self, link: Link<T>) {
        unsafe { (*self.raw()).parent = link };
    }

    #[inline]
    pub(crate) fn set_left(self, link: Link<T>) {
        unsafe { (*self.raw()).left = link };
    }

    #[inline]
    pub(crate) fn set_right(self, link: Link<T>) {
        unsafe { (*self.raw()).right = link };
    }

    /// Borrow the payload. The caller ties `'a` to a borrow of the owning list.
    #[inline]
    pub(crate) fn value<'a>(self) -> &'a T {
        return unsafe { &(*self.raw()).value };
    }

    /// Mutably borrow the payload. The caller ties `'a` to a mutable borrow
    /// of the owning list.
    #[inline]
    pub(crate) fn value_mut<'a>(self) -> &'a mut T {
        return unsafe { &mut (*self.raw()).value };
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance_factor(self) -> i32 {
        return height(self.left()) - height(self.right());
    }

    /// Recompute height from the children. Children must already be current.
    #[inline]
    pub(crate) fn recompute_height(self) {
        let h = 1 + height(self.left()).max(height(self.right()));
        unsafe { (*self.raw()).height = h };
    }

    /// Recompute size from the children. Children must already be current.
    #[inline]
    pub(crate) fn recompute_size(self) {
        let s = 1 + size(self.left()) + size(self.right());
        unsafe { (*self.raw()).size = s };
    }

    #[inline]
    pub(crate) fn recompute(self) {
        self.recompute_height();
        self.recompute_size();
    }

    /// Drop every link and turn the node back into a detached leaf.
    pub(crate) fn reset(self) {
        self.set_parent(None);
        self.set_left(None);
        self.set_right(None);
        self.recompute();
    }

    /// Which side of `parent` this node hangs from.
    #[inline]
    pub(crate) fn is_left_child_of(self, parent: NodePtr<T>) -> bool {
        return parent.left() == Some(self);
    }
}

// =============================================================================
// Public read-only handle
// =============================================================================

/// A read-only view of a node, real or virtual, borrowed from its list.
///
/// Returned by [`AvlTreeList::locate_node`](super::AvlTreeList::locate_node)
/// and [`AvlTreeList::root`](super::AvlTreeList::root). A virtual handle
/// stands for an empty child slot: it has height -1, size 0, no value and no
/// children, but it still knows its parent.
pub struct NodeRef<'a, T> {
    node: Link<T>,
    /// Only consulted for virtual handles.
    parent: Link<T>,
    _list: PhantomData<&'a T>,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn real(node: NodePtr<T>) -> NodeRef<'a, T> {
        return NodeRef {
            node: Some(node),
            parent: None,
            _list: PhantomData,
        };
    }

    fn child(link: Link<T>, parent: NodePtr<T>) -> NodeRef<'a, T> {
        return NodeRef {
            node: link,
            parent: Some(parent),
            _list: PhantomData,
        };
    }

    pub fn is_real(&self) -> bool {
        return self.node.is_some();
    }

    /// A real node whose children are both virtual.
    pub fn is_leaf(&self) -> bool {
        return self.height() == 0;
    }

    /// The payload, `None` for a virtual node.
    pub fn value(&self) -> Option<&'a T> {
        return self.node.map(|n| n.value());
    }

    /// -1 for a virtual node.
    pub fn height(&self) -> i32 {
        return height(self.node);
    }

    /// Number of real nodes in this subtree.
    pub fn size(&self) -> usize {
        return size(self.node);
    }

    /// `height(left) - height(right)`, 0 for a virtual node.
    pub fn balance_factor(&self) -> i32 {
        return match self.node {
            Some(n) => n.balance_factor(),
            None => 0,
        };
    }

    /// Left child (possibly virtual). `None` when this node is virtual.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        let node = self.node?;
        return Some(NodeRef::child(node.left(), node));
    }

    /// Right child (possibly virtual). `None` when this node is virtual.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        let node = self.node?;
        return Some(NodeRef::child(node.right(), node));
    }

    /// Parent node, `None` at the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        let parent = match self.node {
            Some(n) => n.parent(),
            None => self.parent,
        };
        return parent.map(NodeRef::real);
    }

    /// Global in-order index of this node, `None` for a virtual node.
    ///
    /// Composes `size(left) + 1` ranks on the way up to the root. O(log n).
    pub fn index(&self) -> Option<usize> {
        let node = self.node?;
        let mut index = size(node.left());
        let mut current = node;
        while let Some(parent) = current.parent() {
            if parent.right() == Some(current) {
                index += size(parent.left()) + 1;
            }
            current = parent;
        }
        return Some(index);
    }
}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    /// Identity, not payload equality.
    fn eq(&self, other: &Self) -> bool {
        return match (self.node, other.node) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.parent == other.parent,
            _ => false,
        };
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self.value() {
            Some(value) => f
                .debug_struct("NodeRef")
                .field("value", value)
                .field("height", &self.height())
                .field("size", &self.size())
                .finish(),
            None => f.write_str("NodeRef(virtual)"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_link_has_sentinel_fields() {
        let link: Link<u32> = None;
        assert_eq!(height(link), -1);
        assert_eq!(size(link), 0);
    }

    #[test]
    fn fresh_node_is_a_leaf() {
        let node = NodePtr::alloc("a");
        assert_eq!(node.height(), 0);
        assert_eq!(node.size(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.left().is_none() && node.right().is_none());
        assert_eq!(node.free(), "a");
    }

    #[test]
    fn recompute_reads_only_children() {
        let parent = NodePtr::alloc(2);
        let left = NodePtr::alloc(1);
        parent.set_left(Some(left));
        left.set_parent(Some(parent));
        parent.recompute();
        assert_eq!(parent.height(), 1);
        assert_eq!(parent.size(), 2);
        assert_eq!(parent.balance_factor(), 1);

        let handle = NodeRef::real(parent);
        let right = handle.right().unwrap();
        assert!(!right.is_real());
        assert_eq!(right.value(), None);
        assert_eq!(right.balance_factor(), 0);
        assert_eq!(right.parent(), Some(handle));
        assert_eq!(handle.left().unwrap().index(), Some(0));
        assert_eq!(handle.index(), Some(1));

        parent.set_left(None);
        left.free();
        parent.free();
    }
}
