//! Expression parsing implementation
//!
//! This module handles arithmetic with precedence climbing and the atoms the
//! operators work on.
//!
//! # Grammar
//!
//! ```text
//! operation ::= term (("+" | "-") term)*
//! term      ::= atom (("*" | "/") atom)*
//! atom      ::= number | match | identifier ["(" args ")"] | string
//! args      ::= [expr ("," expr)* [","]]
//! ```
//!
//! Both operator levels are left-associative. There is no parenthesised
//! grouping: `(` only ever opens a call's argument list.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{commit, hard, ErrorKind, PResult, ParseOutcome, Parser};

/// Tightest operator level; its operands are atoms.
const TIGHTEST_LEVEL: u8 = 1;

impl Parser<'_> {
    /// Parse arithmetic (entry point for the loosest operator level)
    pub(crate) fn parse_operation(&mut self) -> PResult<Expr> {
        self.cursor.skip_whitespace();
        self.parse_binary(0)
    }

    /// Precedence climbing: an operand of this level, then any number of
    /// `op operand` pairs folded to the left.
    fn parse_binary(&mut self, level: u8) -> PResult<Expr> {
        let mut left = self.parse_operand(level)?;

        loop {
            self.cursor.skip_whitespace();
            let Some(op) = self.peek_operator(level) else {
                break;
            };
            self.cursor.advance();

            let right = self.parse_operand(level);
            let right = commit(right, ErrorKind::UnknownExpression, || {
                format!("expected an operand after '{}'", op.symbol())
            })?;
            left = Expr::operation(op, left, right);
        }

        Ok(left)
    }

    fn parse_operand(&mut self, level: u8) -> PResult<Expr> {
        if level >= TIGHTEST_LEVEL {
            self.parse_atom()
        } else {
            self.parse_binary(level + 1)
        }
    }

    /// Operator of exactly this level at the cursor. `->` is never a minus.
    fn peek_operator(&self, level: u8) -> Option<Operator> {
        let op = match self.cursor.current()? {
            '+' => Operator::Add,
            '-' if !self.cursor.peek_literal("->") => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            _ => return None,
        };
        (op.precedence() == level).then_some(op)
    }

    /// Parse an atom: number, match, symbol or call, string (in that order)
    pub(crate) fn parse_atom(&mut self) -> PResult<Expr> {
        self.cursor.skip_whitespace();

        if let Some(number) = self.attempt(Self::parse_number)? {
            return Ok(number);
        }
        if let Some(matched) = self.attempt(Self::parse_match)? {
            return Ok(matched);
        }
        // Falls back to a bare symbol when no argument list follows
        if let Some(call) = self.attempt(Self::parse_call)? {
            return Ok(call);
        }
        if let Some(string) = self.attempt(Self::parse_string)? {
            return Ok(string);
        }

        Err(ParseOutcome::Soft)
    }

    /// Digits, optionally followed by `.` and more digits
    fn parse_number(&mut self) -> PResult<Expr> {
        if !self.cursor.peek(|c| c.is_ascii_digit()) {
            return Err(ParseOutcome::Soft);
        }

        let start = self.cursor.checkpoint();
        self.cursor.take_while(|c| c.is_ascii_digit());
        if self.cursor.peek_char('.') {
            self.cursor.advance();
            self.cursor.take_while(|c| c.is_ascii_digit());
        }

        let text = self.cursor.slice(start, self.cursor.checkpoint());
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
            Ok(_) => hard(
                ErrorKind::UnknownExpression,
                format!("number literal out of range: '{text}'"),
            ),
            Err(e) => hard(
                ErrorKind::UnknownExpression,
                format!("invalid number literal '{text}': {e}"),
            ),
        }
    }

    /// Quote-delimited text, no escape sequences
    fn parse_string(&mut self) -> PResult<Expr> {
        if !self.cursor.peek_char('"') {
            return Err(ParseOutcome::Soft);
        }
        self.cursor.advance();

        let start = self.cursor.checkpoint();
        self.cursor.take_while(|c| c != '"');
        if self.cursor.is_at_end() {
            return hard(
                ErrorKind::UnclosedQuote,
                "string literal is not closed before end of input",
            );
        }

        let text = self.cursor.slice(start, self.cursor.checkpoint()).to_string();
        self.cursor.advance(); // closing quote
        Ok(Expr::String(text))
    }

    /// Identifier, optionally followed by a parenthesised argument list.
    ///
    /// The closing `)` is located first by depth counting; the arguments must
    /// then end exactly there.
    fn parse_call(&mut self) -> PResult<Expr> {
        let name = self.parse_identifier()?;

        let after_name = self.cursor.checkpoint();
        self.cursor.skip_whitespace();
        if !self.cursor.peek_char('(') {
            self.cursor.restore(after_name);
            return Ok(Expr::Symbol(name));
        }

        let Some(close) = self.cursor.find_closing('(', ')') else {
            return hard(
                ErrorKind::UnclosedParens,
                format!("argument list of '{name}' has no matching ')'"),
            );
        };
        self.cursor.advance(); // (

        let mut args = Vec::new();
        while self.cursor.checkpoint() != close {
            self.cursor.skip_whitespace();
            if self.cursor.checkpoint() == close {
                break;
            }
            args.push(self.parse_expr()?);
            self.cursor.skip_whitespace();
            if !self.cursor.peek_char(',') {
                break;
            }
            self.cursor.advance();
        }

        if self.cursor.checkpoint() != close {
            return hard(
                ErrorKind::UnknownExpression,
                format!("unexpected input in argument list of '{name}'"),
            );
        }
        self.cursor.advance(); // )

        Ok(Expr::FnCall { name, args })
    }
}
