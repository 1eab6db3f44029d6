//! Line-oriented driver for an `AvlTreeList<String>`.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! insert <index> <value>   insert and print the rebalance count
//! delete <index>           delete and print the rebalance count
//! get <index>              print the element
//! search <value>           print its index, or -1
//! split <index>            print the three parts, keep the list intact
//! concat <value>...        append a list of values, print the height gap
//! print                    draw the tree
//! list                     print the elements in order
//! ```
//!
//! Rejected commands are reported on stderr and the session continues.

use std::io::{self, BufRead, Write};

use avl_list::{AvlTreeList, ListError};

fn run(list: &mut AvlTreeList<String>, line: &str) -> Result<String, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(String::new());
    };
    let args: Vec<&str> = words.collect();

    let index = |i: usize| -> Result<usize, String> {
        let Some(raw) = args.get(i) else {
            return Err(format!("{command}: missing index"));
        };
        return raw.parse().map_err(|_| format!("{command}: bad index {raw:?}"));
    };

    match command {
        "insert" => {
            let at = index(0)?;
            let Some(value) = args.get(1) else {
                return Err("insert: missing value".to_string());
            };
            let ops = list.try_insert(at, value.to_string()).map_err(|e| e.to_string())?;
            return Ok(ops.to_string());
        }
        "delete" => {
            let ops = list.try_delete(index(0)?).map_err(|e| e.to_string())?;
            return Ok(ops.to_string());
        }
        "get" => {
            let at = index(0)?;
            return match list.get(at) {
                Some(value) => Ok(value.clone()),
                None => Err(format!("get: no element at {at}")),
            };
        }
        "search" => {
            let Some(value) = args.first() else {
                return Err("search: missing value".to_string());
            };
            return Ok(match list.search(&value.to_string()) {
                Some(at) => at.to_string(),
                None => "-1".to_string(),
            });
        }
        "split" => {
            let at = index(0)?;
            // Splitting consumes the list, so reject bad indices up front.
            if at >= list.len() {
                return Err(ListError::IndexOutOfBounds { index: at, len: list.len() }.to_string());
            }
            let whole = std::mem::take(list);
            let (left, value, right) = whole.split(at);
            let out = format!("{:?} {:?} {:?}", left.to_vec(), value, right.to_vec());
            let (rejoined, _) = AvlTreeList::join(left, value, right);
            *list = rejoined;
            return Ok(out);
        }
        "concat" => {
            let other: AvlTreeList<String> = args.iter().map(|s| s.to_string()).collect();
            return Ok(list.concat(other).to_string());
        }
        "print" => return Ok(list.print_tree()),
        "list" => return Ok(format!("{:?}", list)),
        other => return Err(format!("unknown command {other:?}")),
    }
}

fn main() {
    let mut list = AvlTreeList::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("read error: {err}");
                std::process::exit(1);
            }
        };
        match run(&mut list, &line) {
            Ok(out) if out.is_empty() => {}
            Ok(out) => {
                if writeln!(stdout, "{out}").is_err() {
                    return;
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
}
