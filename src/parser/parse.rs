//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, the backtracking protocol, and the top-level driver.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with no separate tokenizer pass:
//! every rule reads characters straight off the [`Cursor`].
//! - This module: Parser struct, failure types, ordered choice, driver
//! - `expressions`: precedence climbing, atoms, calls and literals
//! - `declarations`: `func` declarations
//! - `matching`: `match` expressions
//!
//! # Backtracking
//!
//! Every rule returns [`PResult`]. A [`ParseOutcome::Soft`] failure means "this
//! production does not apply here": the caller restores its checkpoint and
//! tries the next alternative (see [`Parser::attempt`]). A
//! [`ParseOutcome::Hard`] failure means the production was recognised but is
//! malformed; it propagates untouched to the driver and parsing stops.
//! Once a rule has consumed its keyword or operator it is committed, and
//! later soft failures inside it are promoted to hard ones with
//! [`commit`].

use crate::parser::ast::*;
use crate::parser::cursor::{is_symbol_char, Cursor};
use std::fmt;

/// Kinds of fatal syntax error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnclosedQuote,
    UnknownExpression,
    UnclosedParens,
    ExpectedBlock,
    UnclosedCurlies,
    ExpectedReturn,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::UnclosedQuote => "unclosed quote",
            ErrorKind::UnknownExpression => "unknown expression",
            ErrorKind::UnclosedParens => "unclosed parentheses",
            ErrorKind::ExpectedBlock => "expected block",
            ErrorKind::UnclosedCurlies => "unclosed braces",
            ErrorKind::ExpectedReturn => "expected return type",
        };
        f.write_str(text)
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Why a grammar rule did not produce a node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParseOutcome {
    /// The production does not apply here; try the next alternative.
    Soft,
    /// The production applies but is malformed. Never retried.
    Hard(ParseError),
}

pub(crate) type PResult<T> = Result<T, ParseOutcome>;

/// Promote a soft failure inside a committed production to a hard one.
pub(crate) fn commit<T>(
    result: PResult<T>,
    kind: ErrorKind,
    message: impl FnOnce() -> String,
) -> PResult<T> {
    match result {
        Err(ParseOutcome::Soft) => hard(kind, message()),
        other => other,
    }
}

/// Build a hard failure.
pub(crate) fn hard<T>(kind: ErrorKind, message: impl Into<String>) -> PResult<T> {
    Err(ParseOutcome::Hard(ParseError::new(kind, message)))
}

/// Recursive descent parser for the expression language
pub struct Parser<'src> {
    pub(crate) cursor: Cursor<'src>,
    failed: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    /// Parse every top-level expression until the input is exhausted.
    /// Stops at the first hard failure.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while let Some(expr) = self.next_expr()? {
            program.exprs.push(expr);
        }

        Ok(program)
    }

    /// Parse the next top-level expression, or `None` once only whitespace
    /// remains.
    pub fn next_expr(&mut self) -> Result<Option<Expr>, ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Ok(None);
        }

        match self.parse_expr() {
            Ok(expr) => Ok(Some(expr)),
            Err(ParseOutcome::Hard(err)) => Err(err),
            // parse_expr never soft-fails, but keep the driver total
            Err(ParseOutcome::Soft) => Err(ParseError::new(
                ErrorKind::UnknownExpression,
                "no expression matches here",
            )),
        }
    }

    /// Top-level rule: a function declaration or an arithmetic expression.
    ///
    /// A soft failure of every alternative is reported as
    /// [`ErrorKind::UnknownExpression`], so callers only ever see hard errors.
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        self.cursor.skip_whitespace();

        if let Some(decl) = self.attempt(Self::parse_fn_decl)? {
            return Ok(decl);
        }

        if let Some(expr) = self.attempt(Self::parse_operation)? {
            return Ok(expr);
        }

        // Decode a whole character so non-ASCII input is reported as written
        let offset = self.cursor.checkpoint().offset();
        let found = self
            .cursor
            .source()
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
        hard(
            ErrorKind::UnknownExpression,
            format!("expected an expression, found {found}"),
        )
    }

    // ===== Helper methods =====

    /// Ordered-choice step: run `rule`, and on soft failure restore the
    /// cursor and return `Ok(None)` so the caller can try the next
    /// alternative. Hard failures pass through.
    pub(crate) fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<Option<T>> {
        let saved = self.cursor.checkpoint();
        match rule(self) {
            Ok(value) => Ok(Some(value)),
            Err(ParseOutcome::Soft) => {
                self.cursor.restore(saved);
                Ok(None)
            }
            Err(hard) => Err(hard),
        }
    }

    /// Consume `expected` after optional whitespace, or fail hard with `kind`.
    pub(crate) fn expect_char(
        &mut self,
        expected: char,
        kind: ErrorKind,
        ctx: &str,
    ) -> PResult<()> {
        self.cursor.skip_whitespace();
        if self.cursor.peek_char(expected) {
            self.cursor.advance();
            Ok(())
        } else {
            hard(kind, format!("expected '{expected}' {ctx}"))
        }
    }

    /// Consume `->` after optional whitespace, or fail with
    /// [`ErrorKind::ExpectedReturn`].
    pub(crate) fn expect_arrow(&mut self, ctx: &str) -> PResult<()> {
        self.cursor.skip_whitespace();
        if self.cursor.peek_literal("->") {
            self.cursor.advance_by(2);
            Ok(())
        } else {
            hard(ErrorKind::ExpectedReturn, format!("expected '->' {ctx}"))
        }
    }

    /// Identifier required inside a committed production.
    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> PResult<String> {
        self.cursor.skip_whitespace();
        let name = self.parse_identifier();
        commit(name, ErrorKind::UnknownExpression, || {
            format!("expected identifier {ctx}")
        })
    }

    /// `[A-Za-z0-9_]+`, soft-failing if no identifier character is here.
    pub(crate) fn parse_identifier(&mut self) -> PResult<String> {
        if !self.cursor.peek(is_symbol_char) {
            return Err(ParseOutcome::Soft);
        }
        Ok(self.cursor.take_while(is_symbol_char).to_string())
    }

    /// Match a whole identifier equal to `keyword`. Soft-fails, consuming
    /// nothing, for any other identifier (so `matches` is not `match`).
    pub(crate) fn parse_keyword(&mut self, keyword: &str) -> PResult<()> {
        let saved = self.cursor.checkpoint();
        match self.parse_identifier() {
            Ok(word) if word == keyword => Ok(()),
            Ok(_) => {
                self.cursor.restore(saved);
                Err(ParseOutcome::Soft)
            }
            Err(outcome) => Err(outcome),
        }
    }
}

/// Yields top-level expressions one at a time. Fused after the first error.
impl Iterator for Parser<'_> {
    type Item = Result<Expr, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_expr() {
            Ok(Some(expr)) => Some(Ok(expr)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Parse a whole source text.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}
