//! Function declaration parsing
//!
//! # Grammar
//!
//! ```text
//! fn_decl ::= "func" identifier "(" [param ("," param)* [","]] ")"
//!             "->" identifier "{" expr "}"
//! param   ::= identifier ":" identifier
//! ```
//!
//! The body is exactly one expression. Only the `func` keyword is tried
//! softly; everything after it is committed.

use crate::parser::ast::*;
use crate::parser::parse::{hard, ErrorKind, PResult, Parser};

impl Parser<'_> {
    /// Parse `func name(params) -> ret { body }`
    pub(crate) fn parse_fn_decl(&mut self) -> PResult<Expr> {
        self.parse_keyword("func")?;

        let name = self.expect_identifier("after 'func'")?;
        let params = self.parse_param_list(&name)?;

        self.expect_arrow(&format!("after the parameter list of '{name}'"))?;
        let ret_type = self.expect_identifier("as return type")?;

        self.expect_char(
            '{',
            ErrorKind::ExpectedBlock,
            &format!("to open the body of '{name}'"),
        )?;
        let body = self.parse_expr()?;
        self.expect_char(
            '}',
            ErrorKind::UnclosedCurlies,
            &format!("to close the body of '{name}'"),
        )?;

        Ok(Expr::FnDecl {
            name,
            params,
            ret_type,
            body: Box::new(body),
        })
    }

    /// `( name: type, ... )`, bounded by the depth-matched `)`
    fn parse_param_list(&mut self, fn_name: &str) -> PResult<Vec<Param>> {
        self.cursor.skip_whitespace();
        if !self.cursor.peek_char('(') {
            return hard(
                ErrorKind::UnclosedParens,
                format!("expected '(' after function name '{fn_name}'"),
            );
        }
        let Some(close) = self.cursor.find_closing('(', ')') else {
            return hard(
                ErrorKind::UnclosedParens,
                format!("parameter list of '{fn_name}' has no matching ')'"),
            );
        };
        self.cursor.advance(); // (

        let mut params = Vec::new();
        while self.cursor.checkpoint() != close {
            self.cursor.skip_whitespace();
            if self.cursor.checkpoint() == close {
                break;
            }

            let name = self.expect_identifier("as parameter name")?;
            self.expect_char(
                ':',
                ErrorKind::UnknownExpression,
                &format!("after parameter '{name}'"),
            )?;
            let type_name = self.expect_identifier(&format!("as type of '{name}'"))?;
            params.push(Param { name, type_name });

            self.cursor.skip_whitespace();
            if !self.cursor.peek_char(',') {
                break;
            }
            self.cursor.advance();
        }

        if self.cursor.checkpoint() != close {
            return hard(
                ErrorKind::UnknownExpression,
                format!("unexpected input in parameter list of '{fn_name}'"),
            );
        }
        self.cursor.advance(); // )

        Ok(params)
    }
}
