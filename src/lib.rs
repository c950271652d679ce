//! # Introduction
//!
//! efp parses a small expression language into an abstract syntax tree and
//! renders that tree back as canonical text. The tree can also be browsed in
//! a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Parser (cursor + grammar rules) → AST → Printer / TUI
//! ```
//!
//! 1. [`parser`]: hand-written recursive descent with ordered-choice
//!    backtracking and precedence climbing, reading characters straight off
//!    a [`parser::cursor::Cursor`]. Parsing stops at the first error.
//! 2. [`printer`]: pure functions from [`Expr`] to text. The prefix form
//!    `(+ 1 (* 2 3))` is the normal output; the surface form re-parses to
//!    the same tree.
//! 3. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Language
//!
//! ```text
//! func add(a: int, b: int) -> int { a + b }
//! add(1, 2 * 3)
//! match x { 0 -> { "zero" }, 1 -> { "one" } }
//! ```
//!
//! There are no parenthesised sub-expressions; parentheses only delimit
//! argument and parameter lists.

pub mod parser;
pub mod printer;
pub mod ui;

pub use parser::{parse, ErrorKind, Expr, ParseError, Parser, Program};
pub use printer::{render_program, to_sexpr, to_source, Format};
