//! Evaluation context configuration

/// How division by a zero divisor is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Fail with [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero)
    /// whenever the divisor is `0` or `-0`.
    #[default]
    Strict,

    /// Follow IEEE-754: `x / 0` is `±inf`, `0 / 0` is `NaN`.
    Ieee,
}

/// Configuration for evaluation.
///
/// This is passed through every evaluation call. It carries no mutable
/// state, so one context can be shared by any number of callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Zero-divisor handling for `/`
    pub division: DivisionPolicy,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a specific division policy.
    pub fn with_division(division: DivisionPolicy) -> Self {
        Self { division }
    }

    /// Shorthand for a context using IEEE-754 division.
    pub fn ieee() -> Self {
        Self::with_division(DivisionPolicy::Ieee)
    }

    /// Whether a zero divisor should be reported as an error.
    pub fn is_strict_division(&self) -> bool {
        self.division == DivisionPolicy::Strict
    }
}
