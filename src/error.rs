// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Error types.

use thiserror::Error;

/// A rejected list operation. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A level-order slot array that does not describe an AVL tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Slot counts must be `2^k - 1`.
    #[error("level-order array has {0} slots, expected 2^k - 1")]
    BadLength(usize),
    #[error("slot {0} is filled but its parent slot is empty")]
    Orphan(usize),
    #[error("subtree at slot {slot} has balance factor {balance_factor}")]
    Unbalanced { slot: usize, balance_factor: i32 },
}

/// A broken structural invariant, reported by `check_invariants`.
///
/// `index` is the in-order position of the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root has a parent link")]
    RootHasParent,
    #[error("child of node {index} does not point back at it")]
    BrokenParentLink { index: usize },
    #[error("node {index} stores height {stored}, children give {expected}")]
    HeightMismatch { index: usize, stored: i32, expected: i32 },
    #[error("node {index} stores size {stored}, children give {expected}")]
    SizeMismatch { index: usize, stored: usize, expected: usize },
    #[error("node {index} has balance factor {balance_factor}")]
    Unbalanced { index: usize, balance_factor: i32 },
    #[error("node reached twice during traversal")]
    Cycle,
    #[error("cached first node is not the in-order minimum")]
    FirstMismatch,
    #[error("cached last node is not the in-order maximum")]
    LastMismatch,
}
