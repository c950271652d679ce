//! Expression language parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`cursor`]: Read position over the source text, with checkpoints
//! - [`parse`]: Parser struct, errors, backtracking protocol, top-level driver
//! - [`ast`]: AST node definitions
//!
//! Grammar rules are split across `expressions`, `declarations` and
//! `matching`, each extending [`Parser`] with `impl` blocks.
//!
//! # Supported Language
//!
//! - Literals: decimal numbers (`12`, `3.5`), strings without escapes
//! - Symbols `[A-Za-z0-9_]+` and calls `name(arg, ...)`
//! - Arithmetic `+ - * /` with the usual precedence, left-associative
//! - Function declarations `func name(a: t, ...) -> ret { expr }`
//! - Match expressions `match expr { atom -> { expr }, ... }`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with ordered-choice backtracking and
//! precedence climbing, fused with lexical analysis. Parsing stops at the
//! first fatal error; there is no recovery.

pub mod ast;
pub mod cursor;
pub mod parse;

mod declarations;
mod expressions;
mod matching;

pub use ast::{Expr, MatchBranch, Operator, Param, Program};
pub use parse::{parse, ErrorKind, ParseError, Parser};
