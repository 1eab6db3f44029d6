//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use avl_list::AvlTreeList;

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { pos_frac: u8, value: u8 },
    Delete { pos_frac: u8 },
    SplitJoin { pos_frac: u8 },
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

fn position(pos_frac: u8, len: usize) -> usize {
    return (pos_frac as usize * (len + 1)) / 256;
}

fn check(list: &AvlTreeList<u8>, model: &[u8]) {
    if let Err(err) = list.check_invariants() {
        eprintln!("  INVARIANT VIOLATED: {err}");
        eprintln!("{}", list.print_tree());
        std::process::exit(2);
    }
    if list.to_vec() != model {
        eprintln!("  Content mismatch: list={:?} model={:?}", list.to_vec(), model);
        std::process::exit(2);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }
    let data = match fs::read(&args[1]) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", args[1]);
            std::process::exit(1);
        }
    };

    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let mut list: AvlTreeList<u8> = AvlTreeList::new();
    let mut model: Vec<u8> = Vec::new();
    let mut remaining = data.as_slice();
    let mut op_num = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;

        match op {
            FuzzOp::Insert { pos_frac, value } => {
                let pos = position(pos_frac, model.len());
                eprintln!("Op {}: insert {} at pos={}", op_num, value, pos);
                eprintln!("  Before: len={} {:?}", list.len(), list);
                let ops = list.insert(pos, value);
                model.insert(pos, value);
                eprintln!("  After: len={} {:?} ({} rebalance ops)", list.len(), list, ops);
            }

            FuzzOp::Delete { pos_frac } => {
                if model.is_empty() {
                    eprintln!("Op {}: delete (skipped, empty)", op_num);
                    continue;
                }
                let pos = position(pos_frac, model.len() - 1);
                eprintln!("Op {}: delete at pos={}", op_num, pos);
                eprintln!("  Before: len={} {:?}", list.len(), list);
                let ops = list.delete(pos);
                model.remove(pos);
                eprintln!("  After: len={} {:?} ({} rebalance ops)", list.len(), list, ops);
            }

            FuzzOp::SplitJoin { pos_frac } => {
                if model.is_empty() {
                    eprintln!("Op {}: split (skipped, empty)", op_num);
                    continue;
                }
                let pos = position(pos_frac, model.len() - 1);
                eprintln!("Op {}: split at pos={} and join", op_num, pos);
                let whole = std::mem::take(&mut list);
                let (left, value, right) = whole.split(pos);
                eprintln!("  Parts: {:?} {} {:?}", left, value, right);
                let (joined, ops) = AvlTreeList::join(left, value, right);
                list = joined;
                eprintln!("  After: len={} {:?} ({} rebalance ops)", list.len(), list, ops);
            }

            FuzzOp::SplitOffConcat { pos_frac } => {
                let pos = position(pos_frac, model.len());
                eprintln!("Op {}: split_off at pos={} and concat", op_num, pos);
                let tail = list.split_off(pos);
                eprintln!("  Parts: {:?} {:?}", list, tail);
                let gap = list.concat(tail);
                eprintln!("  After: len={} {:?} (height gap {})", list.len(), list, gap);
            }
        }

        check(&list, &model);
    }

    eprintln!("\nFinal tree:\n{}", list.print_tree());
    eprintln!("\nAll checks passed!");
}
