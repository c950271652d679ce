//! Canonical prefix form
//!
//! ```text
//! operation  (op left right)
//! call       (name arg ...)
//! decl       (func name(p: t, ...) -> ret body)
//! match      (match scrutinee (pattern -> value) ...)
//! ```
//!
//! Numbers use Rust's shortest round-trip `f64` formatting, so `1.0` prints
//! as `1` and `2.50` as `2.5`.

use crate::parser::ast::Expr;
use std::fmt;

/// Display adapter for the prefix form
#[derive(Debug, Clone, Copy)]
pub struct SExpr<'a>(pub &'a Expr);

impl fmt::Display for SExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::String(text) => write!(f, "\"{text}\""),
            Expr::Symbol(name) => f.write_str(name),
            Expr::Operation { op, left, right } => {
                write!(f, "({} {} {})", op.symbol(), SExpr(left), SExpr(right))
            }
            Expr::FnCall { name, args } => {
                write!(f, "({name}")?;
                for arg in args {
                    write!(f, " {}", SExpr(arg))?;
                }
                f.write_str(")")
            }
            Expr::FnDecl {
                name,
                params,
                ret_type,
                body,
            } => {
                write!(f, "(func {name}(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", param.name, param.type_name)?;
                }
                write!(f, ") -> {ret_type} {})", SExpr(body))
            }
            Expr::Match {
                scrutinee,
                branches,
            } => {
                write!(f, "(match {}", SExpr(scrutinee))?;
                for branch in branches {
                    write!(f, " ({} -> {})", SExpr(&branch.pattern), SExpr(&branch.value))?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SExpr(self).fmt(f)
    }
}

pub fn to_sexpr(expr: &Expr) -> String {
    SExpr(expr).to_string()
}
