use efp::parser::{Expr, Operator, Param};
use efp::{parse, ErrorKind, Parser};
use rstest::rstest;

fn parse_one(source: &str) -> Expr {
    let program = parse(source).unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    assert_eq!(program.len(), 1, "expected one expression in {source:?}");
    program.exprs.into_iter().next().unwrap()
}

#[rstest]
#[case("0", 0.0)]
#[case("42", 42.0)]
#[case("3.25", 3.25)]
#[case("007", 7.0)]
#[case("12.", 12.0)]
fn test_number_literals(#[case] source: &str, #[case] expected: f64) {
    assert_eq!(parse_one(source), Expr::Number(expected));
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse_one("1 + 2 * 3"),
        Expr::operation(
            Operator::Add,
            Expr::number(1.0),
            Expr::operation(Operator::Mul, Expr::number(2.0), Expr::number(3.0))
        )
    );
}

#[test]
fn test_mixed_levels_fold_left() {
    // (1 * 2) + (3 / 4) - 5
    assert_eq!(
        parse_one("1 * 2 + 3 / 4 - 5"),
        Expr::operation(
            Operator::Sub,
            Expr::operation(
                Operator::Add,
                Expr::operation(Operator::Mul, Expr::number(1.0), Expr::number(2.0)),
                Expr::operation(Operator::Div, Expr::number(3.0), Expr::number(4.0)),
            ),
            Expr::number(5.0)
        )
    );
}

#[rstest]
#[case("add(1, 2)", Expr::call("add", vec![Expr::number(1.0), Expr::number(2.0)]))]
#[case("add()", Expr::call("add", vec![]))]
#[case("add( )", Expr::call("add", vec![]))]
#[case("x", Expr::symbol("x"))]
#[case("f(g(1), \"s\")", Expr::call("f", vec![Expr::call("g", vec![Expr::number(1.0)]), Expr::string("s")]))]
fn test_calls_and_symbols(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_one(source), expected);
}

#[test]
fn test_function_declaration() {
    assert_eq!(
        parse_one("func add(a: int, b: int) -> int { a + b }"),
        Expr::FnDecl {
            name: "add".to_string(),
            params: vec![Param::new("a", "int"), Param::new("b", "int")],
            ret_type: "int".to_string(),
            body: Box::new(Expr::operation(
                Operator::Add,
                Expr::symbol("a"),
                Expr::symbol("b")
            )),
        }
    );
}

#[test]
fn test_match_expression() {
    assert_eq!(
        parse_one("match x { 1 -> { 2 }, 2 -> { 3 } }"),
        Expr::matching(
            Expr::symbol("x"),
            vec![
                (Expr::number(1.0), Expr::number(2.0)),
                (Expr::number(2.0), Expr::number(3.0)),
            ]
        )
    );
}

#[rstest]
#[case::unterminated_string("\"abc", ErrorKind::UnclosedQuote)]
#[case::param_list_not_closed("func f(x: int -> int { x }", ErrorKind::UnclosedParens)]
#[case::missing_arrow("func f(x: int) int { x }", ErrorKind::ExpectedReturn)]
#[case::missing_return_type("func f(x: int) -> { x }", ErrorKind::UnknownExpression)]
#[case::missing_body_open("func f() -> int x", ErrorKind::ExpectedBlock)]
#[case::missing_body_close("func f() -> int { x", ErrorKind::UnclosedCurlies)]
#[case::missing_param_colon("func f(x int) -> int { x }", ErrorKind::UnknownExpression)]
#[case::call_not_closed("add(1, 2", ErrorKind::UnclosedParens)]
#[case::call_leftover("add(1 2)", ErrorKind::UnknownExpression)]
#[case::missing_operand("1 +", ErrorKind::UnknownExpression)]
#[case::stray_paren(")", ErrorKind::UnknownExpression)]
#[case::match_without_block("match x 1", ErrorKind::ExpectedBlock)]
#[case::match_not_closed("match x { 1 -> { 2 }", ErrorKind::UnclosedCurlies)]
#[case::branch_without_arrow("match x { 1 { 2 } }", ErrorKind::ExpectedReturn)]
#[case::missing_param_list("func f x", ErrorKind::UnclosedParens)]
#[case::param_list_leftover("func f(a: int b: int) -> int { a }", ErrorKind::UnknownExpression)]
#[case::missing_param_name("func f(: int) -> int { 1 }", ErrorKind::UnknownExpression)]
#[case::missing_pattern("match x { -> { 1 } }", ErrorKind::UnknownExpression)]
#[case::branch_value_not_closed("match x { 1 -> { 2 3 } }", ErrorKind::UnclosedCurlies)]
fn test_fatal_errors(#[case] source: &str, #[case] expected: ErrorKind) {
    let err = parse(source).unwrap_err();
    assert_eq!(err.kind, expected, "{source:?} gave {err}");
}

#[test]
fn test_number_literal_out_of_range_is_fatal() {
    let err = parse(&"9".repeat(400)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownExpression);
    assert!(err.message.starts_with("number literal out of range"));
}

#[test]
fn test_largest_finite_literal_round_trips() {
    let source = "9".repeat(308);
    let expr = parse_one(&source);
    assert!(matches!(expr, Expr::Number(value) if value.is_finite()));
    assert_eq!(parse_one(&efp::to_source(&expr)), expr);
}

#[test]
fn test_iterator_yields_expressions_before_the_error() {
    let results: Vec<_> = Parser::new("1\nf(x)\n\"open").collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Ok(Expr::number(1.0)));
    assert_eq!(results[1], Ok(Expr::call("f", vec![Expr::symbol("x")])));
    assert_eq!(
        results[2].as_ref().map_err(|e| e.kind),
        Err(ErrorKind::UnclosedQuote)
    );
}

#[test]
fn test_whitespace_between_top_level_expressions() {
    let program = parse("\t1\r\n\x0C2 \x0B").unwrap();
    assert_eq!(program.exprs, vec![Expr::number(1.0), Expr::number(2.0)]);
}

#[test]
fn test_subtraction_inside_branch_value() {
    let expr = parse_one("match n { 1 -> { n - 1 } }");
    assert_eq!(
        expr,
        Expr::matching(
            Expr::symbol("n"),
            vec![(
                Expr::number(1.0),
                Expr::operation(Operator::Sub, Expr::symbol("n"), Expr::number(1.0))
            )]
        )
    );
}
