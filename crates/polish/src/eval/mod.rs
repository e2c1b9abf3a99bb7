//! Prefix expression evaluation
//!
//! Tokens are scanned right-to-left. Operands are pushed onto an
//! [`EvalStack`]; each operator pops its two operands, applies itself, and
//! pushes the result. A well-formed expression leaves exactly one value.

pub mod operand;
pub mod operator;
pub mod stack;

pub use operator::{BinaryFn, Operator, OPERATORS};
pub use stack::EvalStack;

use tracing::{debug, trace};

use crate::{EvalContext, Result, Scope};

/// Trait for things that evaluate to a number.
pub trait Evaluate {
    /// Evaluate against the bindings in `scope`.
    fn eval(&self, scope: &Scope, ctx: &EvalContext) -> Result<f64>;
}

/// A tokenized prefix expression.
///
/// Borrows the source text; tokens are its whitespace-separated pieces in
/// left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    source: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Expression<'a> {
    /// Split `source` into tokens.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: source.split_whitespace().collect(),
        }
    }

    /// The original text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Tokens in left-to-right order.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Evaluate for Expression<'_> {
    fn eval(&self, scope: &Scope, ctx: &EvalContext) -> Result<f64> {
        debug!(expression = self.source, tokens = self.len(), "evaluating");

        let mut stack = EvalStack::with_capacity(self.len());

        for (position, token) in self.tokens.iter().enumerate().rev() {
            match Operator::from_symbol(token) {
                Some(op) => {
                    let (left, right) = stack.pop_operands(op, position)?;
                    let value = op.apply(left, right, position, ctx)?;
                    trace!(position, %op, left, right, value, "apply");
                    stack.push(value);
                }
                None => {
                    let value = operand::resolve(token, position, scope)?;
                    trace!(position, token, value, "push");
                    stack.push(value);
                }
            }
        }

        let result = stack.finish();
        debug!(expression = self.source, ?result, "evaluated");
        result
    }
}

impl Evaluate for str {
    fn eval(&self, scope: &Scope, ctx: &EvalContext) -> Result<f64> {
        Expression::new(self).eval(scope, ctx)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a prefix expression with default settings and no bindings.
///
/// ```
/// assert_eq!(polish::evaluate("+ 1 2").unwrap(), 3.0);
/// assert!(polish::evaluate("/ 1 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, &EvalContext::default())
}

/// Evaluate a prefix expression with explicit settings and no bindings.
pub fn evaluate_with(expression: &str, ctx: &EvalContext) -> Result<f64> {
    evaluate_in(expression, &Scope::new(), ctx)
}

/// Evaluate a prefix expression, resolving names through `scope`.
pub fn evaluate_in(expression: &str, scope: &Scope, ctx: &EvalContext) -> Result<f64> {
    expression.eval(scope, ctx)
}
