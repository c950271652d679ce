//! Rendering of parsed expressions
//!
//! The printer is independent of the parser and has no side effects; every
//! function here returns text. Three forms are available:
//!
//! - [`sexpr`]: the canonical prefix form, `(+ 1 (* 2 3))`. This is the
//!   program's normal output and what `Display for Expr` produces.
//! - [`source`]: canonical surface syntax, `1 + 2 * 3`. Re-parsing it gives
//!   back the same tree, which makes it the round-trip oracle for tests.
//! - [`outline`]: an indented tree, one node per line, used by the viewer.

pub mod outline;
pub mod source;
pub mod sexpr;

pub use outline::outline;
pub use source::{to_source, Source};
pub use sexpr::{to_sexpr, SExpr};

use crate::parser::ast::{Expr, Program};
use std::fmt;
use std::str::FromStr;

/// Output form selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Sexpr,
    Source,
    Tree,
}

impl Format {
    pub const NAMES: [&'static str; 3] = ["sexpr", "source", "tree"];

    pub fn name(self) -> &'static str {
        match self {
            Format::Sexpr => "sexpr",
            Format::Source => "source",
            Format::Tree => "tree",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sexpr" => Ok(Format::Sexpr),
            "source" => Ok(Format::Source),
            "tree" => Ok(Format::Tree),
            other => Err(format!(
                "unknown format '{other}' (expected one of: {})",
                Format::NAMES.join(", ")
            )),
        }
    }
}

/// Render one expression in the given form, without a trailing newline.
pub fn render_expr(expr: &Expr, format: Format) -> String {
    match format {
        Format::Sexpr => to_sexpr(expr),
        Format::Source => to_source(expr),
        Format::Tree => outline(expr).join("\n"),
    }
}

/// Render every top-level expression, each followed by a newline.
pub fn render_program(program: &Program, format: Format) -> String {
    let mut out = String::new();
    for expr in &program.exprs {
        out.push_str(&render_expr(expr, format));
        out.push('\n');
    }
    out
}
