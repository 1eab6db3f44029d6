// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Shape fixtures: each case builds a tree from a level-order array, applies
//! one operation and pins the resulting sequence, rebalance count and shape.

use avl_list::{AvlTreeList, ShapeError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Op {
    Insert { index: usize, value: String },
    Delete { index: usize },
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    slots: Vec<Option<String>>,
    op: Op,
    sequence: Vec<String>,
    ops: usize,
    shape: Vec<Option<String>>,
}

fn load_cases() -> Vec<Case> {
    serde_json::from_str(include_str!("data/shapes.json")).expect("failed to parse fixtures")
}

#[test]
fn fixtures_match() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let mut list = AvlTreeList::from_level_order(case.slots.clone())
            .unwrap_or_else(|err| panic!("{}: bad fixture: {err}", case.name));
        list.check_invariants().unwrap();

        let ops = match case.op {
            Op::Insert { index, value } => list.insert(index, value),
            Op::Delete { index } => list.delete(index),
        };

        assert_eq!(list.to_vec(), case.sequence, "{}: sequence", case.name);
        assert_eq!(ops, case.ops, "{}: rebalance count", case.name);
        assert_eq!(list.to_level_order(), case.shape, "{}: shape", case.name);
        assert_eq!(list.first(), case.sequence.first(), "{}: first", case.name);
        assert_eq!(list.last(), case.sequence.last(), "{}: last", case.name);
        list.check_invariants()
            .unwrap_or_else(|err| panic!("{}: {err}", case.name));
    }
}

#[test]
fn fixture_shapes_round_trip() {
    for case in load_cases() {
        let list = AvlTreeList::from_level_order(case.slots.clone()).unwrap();
        // Fixture arrays never carry an all-empty bottom row.
        assert_eq!(list.to_level_order(), case.slots, "{}", case.name);
    }
}

#[test]
fn shape_errors_describe_the_slot() {
    let err = AvlTreeList::from_level_order(vec![Some(1), None, None, None]).unwrap_err();
    assert_eq!(err, ShapeError::BadLength(4));
    assert_eq!(err.to_string(), "level-order array has 4 slots, expected 2^k - 1");

    let err = AvlTreeList::from_level_order(vec![None, Some(2), None]).unwrap_err();
    assert_eq!(err, ShapeError::Orphan(1));

    let err = AvlTreeList::from_level_order(vec![
        Some(4), None, Some(5), None, None, None, Some(6),
    ])
    .unwrap_err();
    assert_eq!(err, ShapeError::Unbalanced { slot: 0, balance_factor: -2 });
}

#[test]
fn node_handles_follow_fixture_shape() {
    let list = AvlTreeList::from_level_order(vec![Some('b'), Some('a'), None]).unwrap();
    let root = list.root().unwrap();
    assert_eq!(root.value(), Some(&'b'));
    assert_eq!(root.height(), 1);
    assert_eq!(root.size(), 2);
    assert_eq!(root.balance_factor(), 1);
    assert!(root.parent().is_none());

    let left = root.left().unwrap();
    assert!(left.is_real());
    assert!(left.is_leaf());
    assert_eq!(left.index(), Some(0));
    assert_eq!(left.parent(), Some(root));

    let right = root.right().unwrap();
    assert!(!right.is_real());
    assert!(!right.is_leaf());
    assert_eq!(right.height(), -1);
    assert_eq!(right.size(), 0);
    assert_eq!(right.index(), None);
    assert!(right.left().is_none());
    assert_eq!(right.parent(), Some(root));
}
