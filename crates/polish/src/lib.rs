//! # Polish
//!
//! A calculator for arithmetic written in prefix ("Polish") notation.
//!
//! Every operator precedes its operands, so `* + 1 2 3` means `(1 + 2) * 3`
//! and no parentheses or precedence rules are needed. Expressions are
//! evaluated in a single right-to-left pass over the tokens with one
//! auxiliary stack.
//!
//! ## Architecture
//!
//! - **Evaluator**: tokenize, scan right-to-left, reduce with a stack
//! - **Scope**: caller-owned named bindings with snapshot/restore
//! - **Session**: line-oriented driver used by the batch and REPL modes
//!
//! ## Example
//!
//! ```
//! use polish::evaluate;
//!
//! assert_eq!(evaluate("* + 1 2 3").unwrap(), 9.0);
//! assert_eq!(evaluate("- 1 2").unwrap(), -1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod display;
pub mod error;
pub mod eval;
pub mod scope;
pub mod session;

// Re-export main types
pub use context::{DivisionPolicy, EvalContext};
pub use display::format_number;
pub use error::{EvalError, Result, ScopeError, SessionError};
pub use eval::{evaluate, evaluate_in, evaluate_with, Evaluate, Expression, Operator};
pub use scope::{Binding, Scope, ScopeGuard, ScopeSnapshot};
pub use session::{Outcome, Session};

/// Polish version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
