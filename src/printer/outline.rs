//! Indented tree view of an expression

use crate::parser::ast::{Expr, MatchBranch};

enum Item<'a> {
    Expr(&'a Expr),
    Branch(&'a MatchBranch),
}

impl<'a> Item<'a> {
    fn label(&self) -> String {
        match self {
            Item::Expr(expr) => label(expr),
            Item::Branch(_) => "Branch".to_string(),
        }
    }

    fn children(&self) -> Vec<Item<'a>> {
        match self {
            Item::Expr(expr) => children(expr),
            Item::Branch(branch) => vec![Item::Expr(&branch.pattern), Item::Expr(&branch.value)],
        }
    }
}

fn label(expr: &Expr) -> String {
    let kind = expr.kind_name();
    match expr {
        Expr::Number(value) => format!("{kind} {value}"),
        Expr::String(text) => format!("{kind} \"{text}\""),
        Expr::Symbol(name) => format!("{kind} {name}"),
        Expr::Operation { op, .. } => format!("{kind} {}", op.symbol()),
        Expr::FnCall { name, args } => format!("{kind} {name}/{}", args.len()),
        Expr::FnDecl {
            name,
            params,
            ret_type,
            ..
        } => {
            let params: Vec<String> = params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.type_name))
                .collect();
            format!("{kind} {name}({}) -> {ret_type}", params.join(", "))
        }
        Expr::Match { branches, .. } => format!("{kind} ({} branches)", branches.len()),
    }
}

fn children(expr: &Expr) -> Vec<Item<'_>> {
    match expr {
        Expr::Number(_) | Expr::String(_) | Expr::Symbol(_) => Vec::new(),
        Expr::Operation { left, right, .. } => vec![Item::Expr(left), Item::Expr(right)],
        Expr::FnCall { args, .. } => args.iter().map(Item::Expr).collect(),
        Expr::FnDecl { body, .. } => vec![Item::Expr(body)],
        Expr::Match {
            scrutinee,
            branches,
        } => std::iter::once(Item::Expr(scrutinee))
            .chain(branches.iter().map(Item::Branch))
            .collect(),
    }
}

fn write_children(item: &Item<'_>, prefix: &str, lines: &mut Vec<String>) {
    let kids = item.children();
    let count = kids.len();
    for (i, kid) in kids.iter().enumerate() {
        let last = i + 1 == count;
        let (connector, extension) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{prefix}{connector}{}", kid.label()));
        write_children(kid, &format!("{prefix}{extension}"), lines);
    }
}

/// One line per node, children indented under their parent.
pub fn outline(expr: &Expr) -> Vec<String> {
    let root = Item::Expr(expr);
    let mut lines = vec![root.label()];
    write_children(&root, "", &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_outline_of_operation() {
        let program = parse("1 + 2 * 3").unwrap();
        assert_eq!(
            outline(&program.exprs[0]),
            vec![
                "Operation +",
                "├── Number 1",
                "└── Operation *",
                "    ├── Number 2",
                "    └── Number 3",
            ]
        );
    }

    #[test]
    fn test_outline_of_match_groups_branches() {
        let program = parse("match x { 1 -> { y } }").unwrap();
        assert_eq!(
            outline(&program.exprs[0]),
            vec![
                "Match (1 branches)",
                "├── Symbol x",
                "└── Branch",
                "    ├── Number 1",
                "    └── Symbol y",
            ]
        );
    }
}
