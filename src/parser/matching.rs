//! Match expression parsing
//!
//! ```text
//! match  ::= "match" expr "{" [branch ("," branch)* [","]] "}"
//! branch ::= atom "->" "{" expr "}"
//! ```
//!
//! The braces around the branches are located first by depth counting, so
//! branch parsing runs within a known bound. Patterns are plain atoms.

use crate::parser::ast::*;
use crate::parser::parse::{commit, hard, ErrorKind, PResult, Parser};

impl Parser<'_> {
    /// Parse `match scrutinee { pattern -> { value }, ... }`
    pub(crate) fn parse_match(&mut self) -> PResult<Expr> {
        self.parse_keyword("match")?;

        let scrutinee = self.parse_expr()?;

        self.cursor.skip_whitespace();
        if !self.cursor.peek_char('{') {
            return hard(
                ErrorKind::ExpectedBlock,
                "expected '{' to open the match branches",
            );
        }
        let Some(close) = self.cursor.find_closing('{', '}') else {
            return hard(
                ErrorKind::UnclosedCurlies,
                "match branches have no matching '}'",
            );
        };
        self.cursor.advance(); // {

        let mut branches = Vec::new();
        while self.cursor.checkpoint() != close {
            self.cursor.skip_whitespace();
            if self.cursor.checkpoint() == close {
                break;
            }
            branches.push(self.parse_branch()?);
            self.cursor.skip_whitespace();
            if !self.cursor.peek_char(',') {
                break;
            }
            self.cursor.advance();
        }

        self.cursor.skip_whitespace();
        if self.cursor.checkpoint() != close {
            return hard(
                ErrorKind::UnknownExpression,
                "unexpected input between match branches",
            );
        }
        self.cursor.advance(); // }

        Ok(Expr::Match {
            scrutinee: Box::new(scrutinee),
            branches,
        })
    }

    fn parse_branch(&mut self) -> PResult<MatchBranch> {
        let pattern = self.parse_atom();
        let pattern = commit(pattern, ErrorKind::UnknownExpression, || {
            "expected a pattern in match branch".to_string()
        })?;

        self.expect_arrow("after match pattern")?;
        self.expect_char('{', ErrorKind::ExpectedBlock, "to open a match branch")?;
        let value = self.parse_expr()?;
        self.expect_char('}', ErrorKind::UnclosedCurlies, "to close a match branch")?;

        Ok(MatchBranch { pattern, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;

    #[test]
    fn test_parse_match() {
        let program = parse("match x { 1 -> { 2 }, 2 -> { 3 } }").unwrap();
        assert_eq!(
            program.exprs,
            vec![Expr::matching(
                Expr::symbol("x"),
                vec![
                    (Expr::number(1.0), Expr::number(2.0)),
                    (Expr::number(2.0), Expr::number(3.0)),
                ]
            )]
        );
    }

    #[test]
    fn test_match_trailing_comma_and_empty() {
        let program = parse("match x { 1 -> { 2 }, }").unwrap();
        assert_eq!(
            program.exprs,
            vec![Expr::matching(
                Expr::symbol("x"),
                vec![(Expr::number(1.0), Expr::number(2.0))]
            )]
        );

        let program = parse("match x {}").unwrap();
        assert_eq!(program.exprs, vec![Expr::matching(Expr::symbol("x"), vec![])]);
    }

    #[test]
    fn test_match_is_an_operand() {
        let program = parse("1 + match y { \"a\" -> { f(y) } } * 2").unwrap();
        assert_eq!(
            program.exprs,
            vec![Expr::operation(
                Operator::Add,
                Expr::number(1.0),
                Expr::operation(
                    Operator::Mul,
                    Expr::matching(
                        Expr::symbol("y"),
                        vec![(
                            Expr::string("a"),
                            Expr::call("f", vec![Expr::symbol("y")])
                        )]
                    ),
                    Expr::number(2.0)
                )
            )]
        );
    }

    #[test]
    fn test_nested_match_in_branch() {
        let program = parse("match a { 0 -> { match b { 1 -> { 2 } } } }").unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn test_match_errors() {
        assert_eq!(parse("match x 1").unwrap_err().kind, ErrorKind::ExpectedBlock);
        assert_eq!(
            parse("match x { 1 -> { 2 }").unwrap_err().kind,
            ErrorKind::UnclosedCurlies
        );
        assert_eq!(
            parse("match x { 1 { 2 } }").unwrap_err().kind,
            ErrorKind::ExpectedReturn
        );
        assert_eq!(
            parse("match x { 1 -> 2 }").unwrap_err().kind,
            ErrorKind::ExpectedBlock
        );
        assert_eq!(
            parse("match x { 1 -> { 2 } 3 -> { 4 } }").unwrap_err().kind,
            ErrorKind::UnknownExpression
        );
    }

    #[test]
    fn test_keyword_prefix_is_a_symbol() {
        let program = parse("matches").unwrap();
        assert_eq!(program.exprs, vec![Expr::symbol("matches")]);
    }
}
