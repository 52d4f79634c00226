use super::prelude::{BinaryOp, Lexer, Token};

fn tokenize(line: &str) -> Vec<Token> {
    Lexer::new(line, 0)
        .tokenize()
        .into_iter()
        .map(|(_, token, _)| token)
        .collect()
}

#[test]
fn test_arithmetic_line() {
    let tokens = tokenize("2 sprinkles 3");

    assert_eq!(
        tokens,
        vec![
            Token::Number(2.0),
            Token::Operator(BinaryOp::Add),
            Token::Number(3.0),
        ]
    );
}

#[test]
fn test_all_operator_keywords() {
    let tokens = tokenize("1 sprinkles 2 ice 3 caffeine 4 frappe 5 sips 6");

    assert_eq!(
        tokens,
        vec![
            Token::Number(1.0),
            Token::Operator(BinaryOp::Add),
            Token::Number(2.0),
            Token::Operator(BinaryOp::Subtract),
            Token::Number(3.0),
            Token::Operator(BinaryOp::Multiply),
            Token::Number(4.0),
            Token::Operator(BinaryOp::Divide),
            Token::Number(5.0),
            Token::Operator(BinaryOp::Concatenate),
            Token::Number(6.0),
        ]
    );
}

#[test]
fn test_negative_and_decimal_numbers() {
    let tokens = tokenize("-3 sprinkles 2.5 ice -0.25");

    assert_eq!(
        tokens,
        vec![
            Token::Number(-3.0),
            Token::Operator(BinaryOp::Add),
            Token::Number(2.5),
            Token::Operator(BinaryOp::Subtract),
            Token::Number(-0.25),
        ]
    );
}

#[test]
fn test_number_priority_over_identifier() {
    // A numeric word must never come out identifier-shaped.
    let tokens = tokenize("42");

    assert_eq!(tokens, vec![Token::Number(42.0)]);
}

#[test]
fn test_malformed_numbers_are_not_numbers() {
    assert_eq!(tokenize("1.2.3"), vec![]);
    assert_eq!(tokenize("1."), vec![]);
    assert_eq!(tokenize("-.5"), vec![]);
    assert_eq!(tokenize(".5"), vec![]);
}

#[test]
fn test_string_literal() {
    let tokens = tokenize("*mocha latte*");

    assert_eq!(tokens, vec![Token::Str("mocha latte".to_string())]);
}

#[test]
fn test_strings_interleave_with_words_in_source_order() {
    let tokens = tokenize("*latte* sips *espresso*");

    assert_eq!(
        tokens,
        vec![
            Token::Str("latte".to_string()),
            Token::Operator(BinaryOp::Concatenate),
            Token::Str("espresso".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_string_is_dropped() {
    assert_eq!(tokenize("*latte"), vec![]);
    assert_eq!(
        tokenize("*latte* sips *espresso"),
        vec![
            Token::Str("latte".to_string()),
            Token::Operator(BinaryOp::Concatenate),
        ]
    );
}

#[test]
fn test_order_keyword() {
    assert_eq!(tokenize("order"), vec![Token::Order]);
}

#[test]
fn test_end_of_command() {
    let tokens = tokenize("pour({)");

    assert_eq!(tokens, vec![Token::EndOfCommand("pour".to_string())]);
}

#[test]
fn test_block_marker() {
    let tokens = tokenize(r"\_/steam\_/");

    assert_eq!(tokens, vec![Token::Block("steam".to_string())]);
}

#[test]
fn test_assignment_marker() {
    let tokens = tokenize("cup ~ 5");

    assert_eq!(
        tokens,
        vec![
            Token::Ident("cup".to_string()),
            Token::Equals,
            Token::Number(5.0),
        ]
    );
}

#[test]
fn test_boolean_keyword_is_identifier_class() {
    assert_eq!(tokenize("isDecaf"), vec![Token::Ident("isDecaf".to_string())]);
}

#[test]
fn test_identifiers() {
    let tokens = tokenize("_cup myVar123");

    assert_eq!(
        tokens,
        vec![
            Token::Ident("_cup".to_string()),
            Token::Ident("myVar123".to_string()),
        ]
    );
}

#[test]
fn test_unclassifiable_words_are_dropped() {
    assert_eq!(tokenize("@@@ 2 ??? 3"), vec![Token::Number(2.0), Token::Number(3.0)]);
}

#[test]
fn test_empty_line() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("   \t "), vec![]);
}

#[test]
fn test_spans_are_shifted_by_base() {
    let tokens = Lexer::new("2 sprinkles 3", 100).tokenize();

    assert_eq!(
        tokens,
        vec![
            (100, Token::Number(2.0), 101),
            (102, Token::Operator(BinaryOp::Add), 111),
            (112, Token::Number(3.0), 113),
        ]
    );
}
