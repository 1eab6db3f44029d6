// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Tree pretty-printer.

use std::fmt::Display;

use crate::tree::node::Link;
use crate::AvlTreeList;

/// Drawn in place of a virtual child whose sibling is real.
const VIRTUAL: &str = "∅";

impl<T: Display> AvlTreeList<T> {
    /// Render the tree with box-drawing branches, left child first.
    ///
    /// ```text
    /// d
    /// ├─ b
    /// │  ├─ a
    /// │  └─ c
    /// └─ f
    ///    ├─ ∅
    ///    └─ g
    /// ```
    pub fn print_tree(&self) -> String {
        if self.root.is_none() {
            return VIRTUAL.to_string();
        }
        return render(self.root, "");
    }
}

fn render<T: Display>(link: Link<T>, tab: &str) -> String {
    let Some(node) = link else {
        return VIRTUAL.to_string();
    };
    let mut out = node.value().to_string();
    if node.left().is_none() && node.right().is_none() {
        return out;
    }

    let children = [node.left(), node.right()];
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == children.len() - 1;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let branch = if is_last { "└─" } else { "├─" };
        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        out.push(' ');
        out.push_str(&render(child, &child_tab));
    }
    return out;
}

#[cfg(test)]
mod tests {
    use crate::AvlTreeList;

    #[test]
    fn prints_empty_list() {
        let list: AvlTreeList<char> = AvlTreeList::new();
        assert_eq!(list.print_tree(), "∅");
    }

    #[test]
    fn prints_nested_branches() {
        let list = AvlTreeList::from_level_order(vec![
            Some('d'), Some('b'), Some('f'), Some('a'), Some('c'), None, Some('g'),
        ])
        .unwrap();
        let expected = "\
d
├─ b
│  ├─ a
│  └─ c
└─ f
   ├─ ∅
   └─ g";
        assert_eq!(list.print_tree(), expected);
    }
}
