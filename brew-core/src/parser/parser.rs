use crate::{
    lexer::prelude::{Lexer, Spanned, Token},
    utils::prelude::SrcSpan,
};
use super::ast::Expression;
use super::error::{parse_error, ParseError, ParseErrorType};

pub struct Parser {
    tokens: Vec<Spanned>,
    index: usize,
    end: u32,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        let end = tokens.last().map(|(_, _, end)| *end).unwrap_or(0);

        Self {
            tokens,
            index: 0,
            end,
        }
    }

    fn current(&self) -> Option<&Spanned> {
        self.tokens.get(self.index)
    }

    fn step(&mut self) {
        self.index += 1;
    }

    /// Builds the expression tree for one line. `Ok(None)` for a line
    /// with no tokens, and for a lone `order` keyword, which prints
    /// nothing and produces no value.
    pub fn parse(&mut self) -> Result<Option<Expression>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        if let [(_, Token::Order, _)] = self.tokens.as_slice() {
            return Ok(None);
        }

        let mut left = self.parse_operand()?;

        // All operators bind equally, folding leftward: the tree for
        // `N0 op1 N1 op2 N2` is `((N0 op1 N1) op2 N2)`.
        while let Some((_, Token::Operator(operator), _)) = self.current() {
            let operator = *operator;
            self.step();

            let right = match self.parse_operand() {
                Ok(right) => right,
                Err(err) => {
                    return parse_error(ParseErrorType::ExpectedOperandAfterOperator, err.span)
                }
            };

            let location = left.location().merge(right.location());

            left = Expression::BinaryOperation {
                location,
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        match self.current() {
            None => Ok(Some(left)),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec!["an operator keyword".to_string()],
                },
                SrcSpan::new(*start, *end),
            ),
        }
    }

    fn parse_operand(&mut self) -> Result<Expression, ParseError> {
        match self.current().cloned() {
            Some((start, Token::Number(value), end)) => {
                self.step();

                Ok(Expression::Literal {
                    location: SrcSpan::new(start, end),
                    value,
                })
            }
            Some((start, Token::Str(value), end)) => {
                self.step();

                Ok(Expression::StringLiteral {
                    location: SrcSpan::new(start, end),
                    value,
                })
            }
            Some((start, token, end)) => parse_error(
                ParseErrorType::ExpectedExpressionStart { token },
                SrcSpan::new(start, end),
            ),
            None => parse_error(
                ParseErrorType::ExpectedOperandAfterOperator,
                SrcSpan::new(self.end, self.end),
            ),
        }
    }
}

/// Tokenizes and parses one line of source text.
pub fn parse_line(line: &str, base: u32) -> Result<Option<Expression>, ParseError> {
    let tokens = Lexer::new(line, base).tokenize();

    Parser::new(tokens).parse()
}
