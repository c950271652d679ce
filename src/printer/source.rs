//! Canonical surface syntax
//!
//! Renders a tree back into the input language with normalised spacing.
//! Operators are written without parentheses because the grammar has no
//! grouping: the output is faithful for every tree the parser can build
//! (a `*`/`/` operand is always an atom, a right operand never has an
//! operator of its own level), which is exactly what round-trip tests need.

use crate::parser::ast::Expr;
use std::fmt;

/// Display adapter for the surface form
#[derive(Debug, Clone, Copy)]
pub struct Source<'a>(pub &'a Expr);

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::String(text) => write!(f, "\"{text}\""),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Operation { op, left, right } => {
                write!(f, "{} {} {}", Source(left), op.symbol(), Source(right))
            }
            Expr::FnCall { name, args } => {
                write!(f, "{name}(")?;
                write_list(f, args.iter().map(Source))?;
                f.write_str(")")
            }
            Expr::FnDecl {
                name,
                params,
                ret_type,
                body,
            } => {
                write!(f, "func {name}(")?;
                write_list(
                    f,
                    params.iter().map(|p| format!("{}: {}", p.name, p.type_name)),
                )?;
                write!(f, ") -> {ret_type} {{ {} }}", Source(body))
            }
            Expr::Match {
                scrutinee,
                branches,
            } => {
                if branches.is_empty() {
                    return write!(f, "match {} {{}}", Source(scrutinee));
                }
                write!(f, "match {} {{ ", Source(scrutinee))?;
                write_list(
                    f,
                    branches.iter().map(|b| {
                        format!("{} -> {{ {} }}", Source(&b.pattern), Source(&b.value))
                    }),
                )?;
                f.write_str(" }")
            }
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

pub fn to_source(expr: &Expr) -> String {
    Source(expr).to_string()
}
