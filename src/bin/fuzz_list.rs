//! AFL Fuzz harness for AvlTreeList
//!
//! Every operation is mirrored on a `Vec<u8>`. After each step the list must
//! hold the same elements as the model and pass `check_invariants`:
//! 1. Insert/delete agree with `Vec::insert`/`Vec::remove`
//! 2. Split followed by join restores the original sequence
//! 3. split_off followed by concat restores the original sequence

use afl::fuzz;
use avl_list::AvlTreeList;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { pos_frac: u8, value: u8 },
    Delete { pos_frac: u8 },
    /// Split at a position and join the three parts back together
    SplitJoin { pos_frac: u8 },
    /// Cut the tail off and concat it back
    SplitOffConcat { pos_frac: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        let (&tag, rest) = bytes.split_first()?;
        match tag % 4 {
            0 if rest.len() >= 2 => {
                let op = FuzzOp::Insert { pos_frac: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            1 if !rest.is_empty() => Some((FuzzOp::Delete { pos_frac: rest[0] }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::SplitJoin { pos_frac: rest[0] }, &rest[1..])),
            3 if !rest.is_empty() => {
                Some((FuzzOp::SplitOffConcat { pos_frac: rest[0] }, &rest[1..]))
            }
            _ => None,
        }
    }
}

/// Scale `pos_frac / 256` onto `0..=len`.
fn position(pos_frac: u8, len: usize) -> usize {
    return (pos_frac as usize * (len + 1)) / 256;
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list: AvlTreeList<u8> = AvlTreeList::new();
        let mut model: Vec<u8> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { pos_frac, value } => {
                    let pos = position(pos_frac, model.len());
                    list.insert(pos, value);
                    model.insert(pos, value);
                }

                FuzzOp::Delete { pos_frac } => {
                    if !model.is_empty() {
                        let pos = position(pos_frac, model.len() - 1);
                        let removed = list.remove(pos);
                        assert_eq!(removed, model.remove(pos), "Removed wrong element");
                    }
                }

                FuzzOp::SplitJoin { pos_frac } => {
                    if !model.is_empty() {
                        let pos = position(pos_frac, model.len() - 1);
                        let whole = std::mem::take(&mut list);
                        let (left, value, right) = whole.split(pos);
                        assert_eq!(left.len(), pos);
                        assert_eq!(value, model[pos]);
                        left.check_invariants().expect("left half invariants");
                        right.check_invariants().expect("right half invariants");
                        list = AvlTreeList::join(left, value, right).0;
                    }
                }

                FuzzOp::SplitOffConcat { pos_frac } => {
                    let pos = position(pos_frac, model.len());
                    let tail = list.split_off(pos);
                    assert_eq!(tail.len(), model.len() - pos);
                    list.concat(tail);
                }
            }

            assert_eq!(list.len(), model.len(), "Length mismatch");
            assert_eq!(list.to_vec(), model, "Content mismatch");
            list.check_invariants().expect("invariants");
        }

        assert_eq!(list.first(), model.first());
        assert_eq!(list.last(), model.last());
    });
}
