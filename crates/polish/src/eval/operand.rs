//! Operand resolution

use std::num::ParseFloatError;

use crate::{EvalError, Result, Scope};

/// Resolve an operand token to a value.
///
/// Numeric literals win; otherwise the token is looked up in `scope`.
/// Anything else is a parse error.
pub fn resolve(token: &str, position: usize, scope: &Scope) -> Result<f64> {
    if let Ok(value) = parse_literal(token) {
        return Ok(value);
    }

    scope.get(token).ok_or_else(|| EvalError::Parse {
        token: token.to_string(),
        position,
    })
}

/// Parse a numeric literal: optionally signed, optionally fractional,
/// optionally with an exponent. `inf` and `nan` are accepted.
pub fn parse_literal(token: &str) -> std::result::Result<f64, ParseFloatError> {
    token.parse::<f64>()
}
