use crate::parser::prelude::parse_line;
use super::prelude::{
    eval, RuntimeErrorType, Session, Value, ValueType, ACCUMULATOR_SUFFIX,
};

fn eval_line(line: &str) -> Result<Value, super::prelude::RuntimeError> {
    let expression = parse_line(line, 0).unwrap().unwrap();
    let mut session = Session::new();

    eval(&expression, &mut session)
}

#[test]
fn test_addition() {
    assert_eq!(eval_line("2 sprinkles 3").unwrap(), Value::Number(5.0));
}

#[test]
fn test_subtraction_and_multiplication() {
    assert_eq!(eval_line("10 ice 4").unwrap(), Value::Number(6.0));
    assert_eq!(eval_line("6 caffeine 7").unwrap(), Value::Number(42.0));
}

#[test]
fn test_division() {
    assert_eq!(eval_line("10 frappe 4").unwrap(), Value::Number(2.5));
}

#[test]
fn test_left_to_right_fold_without_precedence() {
    // (2 sprinkles 3) caffeine 4 = 20, not 2 + (3 * 4) = 14
    assert_eq!(
        eval_line("2 sprinkles 3 caffeine 4").unwrap(),
        Value::Number(20.0)
    );
}

#[test]
fn test_division_by_zero() {
    let err = eval_line("10 frappe 0").unwrap_err();

    assert_eq!(err.error, RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_division_by_zero_regardless_of_left_operand() {
    let err = eval_line("0 frappe 0").unwrap_err();

    assert_eq!(err.error, RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_addition_rejects_fractional_operands() {
    let err = eval_line("3.5 sprinkles 2").unwrap_err();

    assert!(matches!(
        err.error,
        RuntimeErrorType::AdditionRequiresWholeNumbers { .. }
    ));

    let err = eval_line("2 sprinkles 3.5").unwrap_err();

    assert!(matches!(
        err.error,
        RuntimeErrorType::AdditionRequiresWholeNumbers { .. }
    ));
}

#[test]
fn test_addition_rejects_text_operands() {
    let err = eval_line("*latte* sprinkles 2").unwrap_err();

    assert_eq!(
        err.error,
        RuntimeErrorType::AdditionRequiresWholeNumbers {
            left: ValueType::Text,
            right: ValueType::Number,
        }
    );
}

#[test]
fn test_subtraction_rejects_text_operands() {
    let err = eval_line("*latte* ice 2").unwrap_err();

    assert!(matches!(
        err.error,
        RuntimeErrorType::InvalidOperands { .. }
    ));
}

#[test]
fn test_non_whole_literal_widens() {
    assert_eq!(eval_line("3.5 ice 0.5").unwrap(), Value::Number(3.0));
}

#[test]
fn test_string_literal_evaluates_to_enclosed_text() {
    assert_eq!(
        eval_line("*mocha latte*").unwrap(),
        Value::Text("mocha latte".to_string())
    );
}

#[test]
fn test_concatenation() {
    assert_eq!(
        eval_line("*latte* sips *espresso*").unwrap(),
        Value::Text("latte espresso".to_string())
    );
}

#[test]
fn test_concatenation_accepts_numeric_operands() {
    assert_eq!(
        eval_line("5 sips *abc*").unwrap(),
        Value::Text("5 abc".to_string())
    );
    assert_eq!(
        eval_line("1 sips 2").unwrap(),
        Value::Text("1 2".to_string())
    );
}

#[test]
fn test_accumulator_records_string_literals() {
    let expression = parse_line("*latte* sips *espresso*", 0).unwrap().unwrap();
    let mut session = Session::new();

    let value = eval(&expression, &mut session).unwrap();

    assert_eq!(value, Value::Text("latte espresso".to_string()));
    assert_eq!(
        session.accumulator,
        format!("latte{ACCUMULATOR_SUFFIX}espresso{ACCUMULATOR_SUFFIX}")
    );
}

#[test]
fn test_with_legs_flag_prefixes_accumulated_strings() {
    let expression = parse_line("*latte*", 0).unwrap().unwrap();
    let mut session = Session::with_legs();

    let value = eval(&expression, &mut session).unwrap();

    // the returned value is unchanged, only the accumulator differs
    assert_eq!(value, Value::Text("latte".to_string()));
    assert_eq!(
        session.accumulator,
        format!("with legs latte{ACCUMULATOR_SUFFIX}")
    );
}

#[test]
fn test_error_location_covers_the_failing_operation() {
    let err = eval_line("10 frappe 0").unwrap_err();

    assert_eq!((err.location.start, err.location.end), (0, 11));
}
