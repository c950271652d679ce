//! Property-based tests for the parser and printer
//!
//! - Every decimal literal parses to the number it spells.
//! - Printing any parser-shaped tree in surface form and parsing it again
//!   gives back the same tree.

use efp::parser::{Expr, Operator, Param};
use efp::{parse, to_sexpr, to_source};
use proptest::prelude::*;

/// Identifiers that are not keywords
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |name| {
        name != "func" && name != "match"
    })
}

fn number_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| Expr::number(f64::from(n))),
        "[0-9]{1,4}\\.[0-9]{1,3}".prop_map(|text| Expr::number(text.parse().unwrap())),
    ]
}

/// Leaf atoms, also used as match patterns
fn leaf_strategy() -> BoxedStrategy<Expr> {
    prop_oneof![
        number_strategy(),
        "[a-z ]{0,8}".prop_map(Expr::string),
        identifier_strategy().prop_map(Expr::symbol),
    ]
    .boxed()
}

/// Fold `first (op rest)*` to the left, the way the parser associates.
fn fold_left(first: Expr, rest: Vec<(Operator, Expr)>) -> Expr {
    rest.into_iter()
        .fold(first, |left, (op, right)| Expr::operation(op, left, right))
}

/// Trees with the shapes the grammar can produce: operands of `*` and `/`
/// are atoms, operands of `+` and `-` are terms, declarations only appear
/// where a full expression is allowed.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = leaf_strategy();
    leaf.clone().prop_recursive(4, 48, 4, move |inner| {
        let call = (identifier_strategy(), prop::collection::vec(inner.clone(), 0..3))
            .prop_map(|(name, args)| Expr::call(name, args));
        let matching = (
            inner.clone(),
            prop::collection::vec((leaf.clone(), inner.clone()), 0..3),
        )
            .prop_map(|(scrutinee, branches)| Expr::matching(scrutinee, branches));
        let atom = prop_oneof![leaf.clone(), call, matching].boxed();

        let mul_op = prop_oneof![Just(Operator::Mul), Just(Operator::Div)];
        let term = (
            atom.clone(),
            prop::collection::vec((mul_op, atom), 0..3),
        )
            .prop_map(|(first, rest)| fold_left(first, rest))
            .boxed();

        let add_op = prop_oneof![Just(Operator::Add), Just(Operator::Sub)];
        let sum = (term.clone(), prop::collection::vec((add_op, term), 0..3))
            .prop_map(|(first, rest)| fold_left(first, rest));

        let params = prop::collection::vec(
            (identifier_strategy(), identifier_strategy())
                .prop_map(|(name, type_name)| Param::new(name, type_name)),
            0..3,
        );
        let decl = (identifier_strategy(), params, identifier_strategy(), inner)
            .prop_map(|(name, params, ret_type, body)| Expr::decl(name, params, ret_type, body));

        prop_oneof![3 => sum, 1 => decl]
    })
}

proptest! {
    #[test]
    fn test_numeric_literals_parse_to_their_value(text in "[0-9]{1,9}(\\.[0-9]{1,6})?") {
        let program = parse(&text).unwrap();
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(program.exprs, vec![Expr::Number(expected)]);
    }

    #[test]
    fn test_surface_form_round_trips(expr in expr_strategy()) {
        let printed = to_source(&expr);
        let reparsed = parse(&printed);
        prop_assert!(reparsed.is_ok(), "failed to re-parse {:?}: {:?}", printed, reparsed);
        prop_assert_eq!(reparsed.unwrap().exprs, vec![expr]);
    }

    #[test]
    fn test_printing_is_idempotent(expr in expr_strategy()) {
        let once = parse(&to_source(&expr)).unwrap();
        let twice = parse(&to_source(&once.exprs[0])).unwrap();
        prop_assert_eq!(to_sexpr(&once.exprs[0]), to_sexpr(&twice.exprs[0]));
    }
}
