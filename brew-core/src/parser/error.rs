use crate::{lexer::prelude::Token, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    ExpectedExpressionStart { token: Token },
    ExpectedOperandAfterOperator,
    UnexpectedToken { token: Token, expected: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan,
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::ExpectedExpressionStart { token } => (
                "Expected a number or string at the beginning of an expression",
                vec![format!("Found {}", describe(token))],
            ),
            ParseErrorType::ExpectedOperandAfterOperator => {
                ("Expected a number after operator", vec![])
            }
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!(
                    "Found {}, expected one of: ",
                    describe(token)
                ))
                .chain(expected.iter().map(|s| format!("- {s}")))
                .collect();

                ("Not expected this", messages)
            }
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(_) => "a Number".to_string(),
        Token::Str(_) => "a String".to_string(),
        Token::Ident(_) => "an Identifier".to_string(),
        Token::Operator(op) => format!("the operator `{}`", op.as_literal()),
        _ => format!("`{}`", token.as_literal()),
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
