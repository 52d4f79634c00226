pub mod error;
pub mod value;

pub mod prelude {
    pub use super::{error::*, value::*};
    pub use super::{eval, Session, ACCUMULATOR_SUFFIX, WITH_LEGS_MARKER};
}

#[cfg(test)]
mod tests;

use crate::{
    lexer::prelude::BinaryOp, parser::prelude::Expression, utils::prelude::SrcSpan,
};
use error::{RuntimeError, RuntimeErrorType};
use value::Value;

/// Marker prepended to accumulated strings when the takeaway flag is set.
pub const WITH_LEGS_MARKER: &str = "with legs";
/// Marker appended to every accumulated string.
pub const ACCUMULATOR_SUFFIX: &str = "~";

/// Per-line evaluator state. A fresh session is used for every line,
/// so nothing in here survives across lines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    pub accumulator: String,
    pub with_legs: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_legs() -> Self {
        Self {
            accumulator: String::new(),
            with_legs: true,
        }
    }

    /// Records a string literal into the accumulator. Observable only
    /// through the accumulator, never through returned values.
    fn record_string(&mut self, value: &str) {
        if self.with_legs {
            self.accumulator.push_str(WITH_LEGS_MARKER);
            self.accumulator.push(' ');
        }

        self.accumulator.push_str(value);
        self.accumulator.push_str(ACCUMULATOR_SUFFIX);
    }
}

/// Walks the expression tree, left child before right child, and
/// produces the line's value.
pub fn eval(expression: &Expression, session: &mut Session) -> Result<Value, RuntimeError> {
    match expression {
        // Non-whole literals widen to the general numeric value.
        Expression::Literal { value, .. } => Ok(Value::Number(*value)),
        Expression::StringLiteral { value, .. } => {
            session.record_string(value);

            Ok(Value::Text(value.clone()))
        }
        Expression::BinaryOperation {
            location,
            operator,
            left,
            right,
        } => {
            let left = eval(left, session)?;
            let right = eval(right, session)?;

            apply(*operator, left, right, *location)
        }
    }
}

fn apply(
    operator: BinaryOp,
    left: Value,
    right: Value,
    location: SrcSpan,
) -> Result<Value, RuntimeError> {
    match operator {
        BinaryOp::Add => {
            if !left.is_whole_number() || !right.is_whole_number() {
                return Err(RuntimeError {
                    error: RuntimeErrorType::AdditionRequiresWholeNumbers {
                        left: left.value_type(),
                        right: right.value_type(),
                    },
                    location,
                });
            }

            match (left, right) {
                (Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
                _ => unreachable!("whole numbers are always numeric"),
            }
        }
        BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide => {
            let (left_value, right_value) = match (&left, &right) {
                (Value::Number(left), Value::Number(right)) => (*left, *right),
                _ => {
                    return Err(RuntimeError {
                        error: RuntimeErrorType::InvalidOperands {
                            operator,
                            left: left.value_type(),
                            right: right.value_type(),
                        },
                        location,
                    })
                }
            };

            match operator {
                BinaryOp::Subtract => Ok(Value::Number(left_value - right_value)),
                BinaryOp::Multiply => Ok(Value::Number(left_value * right_value)),
                BinaryOp::Divide => {
                    if right_value == 0.0 {
                        return Err(RuntimeError {
                            error: RuntimeErrorType::DivisionByZero,
                            location,
                        });
                    }

                    Ok(Value::Number(left_value / right_value))
                }
                _ => unreachable!(),
            }
        }
        // Concatenation always succeeds, numeric operands included.
        BinaryOp::Concatenate => Ok(Value::Text(format!("{left} {right}"))),
    }
}
