//! Evaluation stack

use super::Operator;
use crate::{EvalError, Result};

/// Working storage for a single evaluation.
///
/// Created empty at the start of a call and consumed by [`finish`](Self::finish)
/// at the end, so nothing survives between evaluations.
#[derive(Debug, Default)]
pub struct EvalStack {
    values: Vec<f64>,
}

impl EvalStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Push a value.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop the two operands for `op`.
    ///
    /// The first pop is the left operand and the second pop is the right
    /// one: scanning right-to-left, the most recent push is the operand
    /// written immediately after the operator.
    pub fn pop_operands(&mut self, op: Operator, position: usize) -> Result<(f64, f64)> {
        match (self.values.pop(), self.values.pop()) {
            (Some(left), Some(right)) => Ok((left, right)),
            (first, _) => Err(EvalError::StackUnderflow {
                operator: op.symbol(),
                position,
                available: usize::from(first.is_some()),
            }),
        }
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the stack and return its sole value.
    pub fn finish(self) -> Result<f64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::MalformedExpression {
                remaining: rest.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order() {
        let mut stack = EvalStack::new();
        stack.push(2.0);
        stack.push(1.0);
        assert_eq!(stack.pop_operands(Operator::Sub, 0), Ok((1.0, 2.0)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_underflow_reports_available_count() {
        let mut stack = EvalStack::new();
        assert_eq!(
            stack.pop_operands(Operator::Add, 0),
            Err(EvalError::StackUnderflow {
                operator: '+',
                position: 0,
                available: 0,
            })
        );

        stack.push(1.0);
        assert_eq!(
            stack.pop_operands(Operator::Mul, 2),
            Err(EvalError::StackUnderflow {
                operator: '*',
                position: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_finish_requires_exactly_one_value() {
        assert_eq!(
            EvalStack::new().finish(),
            Err(EvalError::MalformedExpression { remaining: 0 })
        );

        let mut one = EvalStack::with_capacity(1);
        one.push(5.0);
        assert_eq!(one.len(), 1);
        assert_eq!(one.finish(), Ok(5.0));

        let mut two = EvalStack::new();
        two.push(1.0);
        two.push(2.0);
        assert_eq!(
            two.finish(),
            Err(EvalError::MalformedExpression { remaining: 2 })
        );
    }
}
