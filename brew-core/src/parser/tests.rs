use crate::lexer::prelude::BinaryOp;
use super::prelude::{parse_line, Expression, ParseErrorType};

fn parse(line: &str) -> Option<Expression> {
    parse_line(line, 0).unwrap()
}

#[test]
fn test_single_number() {
    let expression = parse("42").unwrap();

    assert!(matches!(expression, Expression::Literal { value, .. } if value == 42.0));
}

#[test]
fn test_single_string() {
    let expression = parse("*flat white*").unwrap();

    assert!(matches!(
        expression,
        Expression::StringLiteral { ref value, .. } if value.as_str() == "flat white"
    ));
}

#[test]
fn test_binary_operation() {
    let expression = parse("2 sprinkles 3").unwrap();

    match expression {
        Expression::BinaryOperation {
            operator,
            left,
            right,
            ..
        } => {
            assert_eq!(operator, BinaryOp::Add);
            assert!(matches!(*left, Expression::Literal { value, .. } if value == 2.0));
            assert!(matches!(*right, Expression::Literal { value, .. } if value == 3.0));
        }
        other => panic!("expected a binary operation, got {other:?}"),
    }
}

#[test]
fn test_tree_is_left_leaning() {
    // ((1 sprinkles 2) caffeine 3), never 1 sprinkles (2 caffeine 3)
    let expression = parse("1 sprinkles 2 caffeine 3").unwrap();

    assert_eq!(format!("{expression}"), "((1 sprinkles 2) caffeine 3)");
}

#[test]
fn test_long_chain_folds_leftward() {
    let expression = parse("1 ice 2 frappe 3 sips 4 sprinkles 5").unwrap();

    assert_eq!(
        format!("{expression}"),
        "((((1 ice 2) frappe 3) sips 4) sprinkles 5)"
    );
}

#[test]
fn test_string_operands_in_chains() {
    let expression = parse("*latte* sips *espresso*").unwrap();

    assert_eq!(format!("{expression}"), "(*latte* sips *espresso*)");
}

#[test]
fn test_empty_line_parses_to_none() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("   "), None);
}

#[test]
fn test_lone_order_parses_to_none() {
    assert_eq!(parse("order"), None);
}

#[test]
fn test_expression_must_start_with_operand() {
    let err = parse_line("sprinkles 2", 0).unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::ExpectedExpressionStart { .. }
    ));
    assert_eq!(
        err.details().0,
        "Expected a number or string at the beginning of an expression"
    );
}

#[test]
fn test_identifier_is_not_an_operand() {
    let err = parse_line("cup sprinkles 2", 0).unwrap_err();

    assert!(matches!(
        err.error,
        ParseErrorType::ExpectedExpressionStart { .. }
    ));
}

#[test]
fn test_dangling_operator() {
    let err = parse_line("2 sprinkles", 0).unwrap_err();

    assert_eq!(err.error, ParseErrorType::ExpectedOperandAfterOperator);
    assert_eq!(err.details().0, "Expected a number after operator");
}

#[test]
fn test_operator_followed_by_non_operand() {
    let err = parse_line("2 sprinkles order ice", 0).unwrap_err();

    assert_eq!(err.error, ParseErrorType::ExpectedOperandAfterOperator);
}

#[test]
fn test_trailing_token_after_operand() {
    let err = parse_line("2 3", 0).unwrap_err();

    assert!(matches!(err.error, ParseErrorType::UnexpectedToken { .. }));
}

#[test]
fn test_error_spans_point_at_the_offending_token() {
    let err = parse_line("2 sprinkles order ice", 0).unwrap_err();

    // the `order` keyword sits at bytes 12..17
    assert_eq!((err.span.start, err.span.end), (12, 17));
}
