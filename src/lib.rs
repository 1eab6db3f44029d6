// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! avl-list - a positional list backed by an AVL tree.
//!
//! Elements are addressed by index. Every node tracks the height and size of
//! its subtree, so lookup, insertion, deletion, split and concat all run in
//! O(log n).
//!
//! # Quick Start
//!
//! ```
//! use avl_list::AvlTreeList;
//!
//! let mut list: AvlTreeList<&str> = ["a", "c"].into_iter().collect();
//! list.insert(1, "b");
//! assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
//!
//! let (left, middle, right) = list.split(1);
//! assert_eq!((left.to_vec(), middle, right.to_vec()), (vec!["a"], "b", vec!["c"]));
//!
//! let (joined, _) = AvlTreeList::join(left, "b", right);
//! assert_eq!(joined.search(&"c"), Some(2));
//! ```

pub mod collection;
pub mod error;
mod level_order;
mod print;
mod tree;

pub use collection::Collection;
pub use error::{InvariantError, ListError, ShapeError};
pub use tree::{AvlTreeList, Iter, NodeRef};
