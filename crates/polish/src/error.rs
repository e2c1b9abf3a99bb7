//! Error types for Polish evaluation

use thiserror::Error;

/// Errors raised while evaluating a prefix expression.
///
/// Token positions are 0-based indices into the left-to-right token
/// sequence of the expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A token that is neither an operator nor a number
    #[error("Parse error: `{token}` is not a number or operator (token {position})")]
    Parse {
        /// The offending token
        token: String,
        /// Index of the token in the expression
        position: usize,
    },

    /// An operator was reached with fewer than two operands on the stack
    #[error(
        "Stack underflow: `{operator}` needs 2 operands, {available} available (token {position})"
    )]
    StackUnderflow {
        /// Symbol of the operator that could not be applied
        operator: char,
        /// Index of the operator in the expression
        position: usize,
        /// Number of values that were on the stack
        available: usize,
    },

    /// The stack did not end with exactly one value
    #[error("Malformed expression: {remaining} values left on the stack, expected 1")]
    MalformedExpression {
        /// Number of values left after all tokens were consumed
        remaining: usize,
    },

    /// Division by zero under the strict division policy
    #[error("Division by zero (token {position})")]
    DivisionByZero {
        /// Index of the `/` operator in the expression
        position: usize,
    },
}

/// Errors raised when defining bindings in a [`Scope`](crate::Scope).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The name is not a valid identifier
    #[error("Invalid name `{name}`: names start with a letter or `_` and contain only letters, digits, or `_`")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// The name would be read as a number, so it could never be looked up
    #[error("Invalid name `{name}`: it reads as a number")]
    NumericName {
        /// The rejected name
        name: String,
    },
}

/// Errors raised by a [`Session`](crate::Session) command.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Evaluation failed
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Binding failed
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// `let` without the `NAME = EXPR` shape
    #[error("Malformed binding: expected `let NAME = EXPR`, got `{0}`")]
    MalformedBinding(String),

    /// `:restore` with no saved snapshot
    #[error("Nothing to restore: no snapshot has been saved")]
    NothingToRestore,

    /// A `:command` the session does not know
    #[error("Unknown command `:{0}`")]
    UnknownCommand(String),
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
