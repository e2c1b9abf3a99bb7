//! Operator table and application

use std::fmt;

use crate::{EvalContext, EvalError, Result};

/// A pure binary function over floats.
pub type BinaryFn = fn(f64, f64) -> f64;

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Symbol → operator table. Read-only; every lookup goes through it.
pub const OPERATORS: [(char, Operator); 4] = [
    ('+', Operator::Add),
    ('-', Operator::Sub),
    ('*', Operator::Mul),
    ('/', Operator::Div),
];

impl Operator {
    /// Look up the operator a token denotes.
    ///
    /// Only single-character tokens can be operators, so `-5` is an
    /// operand while `-` is subtraction.
    pub fn from_symbol(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => OPERATORS
                .iter()
                .find(|(symbol, _)| *symbol == c)
                .map(|(_, op)| *op),
            _ => None,
        }
    }

    /// The operator's symbol.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// The pure function implementing this operator.
    pub fn function(self) -> BinaryFn {
        match self {
            Operator::Add => add,
            Operator::Sub => sub,
            Operator::Mul => mul,
            Operator::Div => div,
        }
    }

    /// Apply the operator as `left <op> right`.
    ///
    /// `position` is only used for error reporting. Under the strict
    /// division policy a zero divisor is an error; otherwise division
    /// follows IEEE-754.
    pub fn apply(self, left: f64, right: f64, position: usize, ctx: &EvalContext) -> Result<f64> {
        if self == Operator::Div && right == 0.0 && ctx.is_strict_division() {
            return Err(EvalError::DivisionByZero { position });
        }
        Ok((self.function())(left, right))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn add(left: f64, right: f64) -> f64 {
    left + right
}

fn sub(left: f64, right: f64) -> f64 {
    left - right
}

fn mul(left: f64, right: f64) -> f64 {
    left * right
}

fn div(left: f64, right: f64) -> f64 {
    left / right
}
