use crate::{lexer::prelude::BinaryOp, utils::prelude::SrcSpan};
use super::value::ValueType;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    DivisionByZero,
    AdditionRequiresWholeNumbers {
        left: ValueType,
        right: ValueType,
    },
    InvalidOperands {
        operator: BinaryOp,
        left: ValueType,
        right: ValueType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan,
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::DivisionByZero => ("Division by zero", vec![]),
            RuntimeErrorType::AdditionRequiresWholeNumbers { left, right } => (
                "`sprinkles` requires whole numbers on both sides",
                vec![format!("Found `{left}` and `{right}` operands")],
            ),
            RuntimeErrorType::InvalidOperands {
                operator,
                left,
                right,
            } => (
                "Invalid operand types",
                vec![format!(
                    "Cannot apply `{operator}` to `{left}` and `{right}`"
                )],
            ),
        }
    }
}
