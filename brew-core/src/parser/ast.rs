use std::fmt::Display;

use crate::{lexer::prelude::BinaryOp, utils::prelude::SrcSpan};

/// One expression tree per evaluable line. The tree is strictly
/// left-leaning: operators fold leftward with no precedence levels.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        location: SrcSpan,
        value: f64,
    },
    StringLiteral {
        location: SrcSpan,
        value: String,
    },
    BinaryOperation {
        location: SrcSpan,
        operator: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Literal { location, .. } => *location,
            Self::StringLiteral { location, .. } => *location,
            Self::BinaryOperation { location, .. } => *location,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "*{value}*"),
            Self::BinaryOperation {
                operator,
                left,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
        }
    }
}
