//! Line-oriented session over a scope
//!
//! A [`Session`] reads one line at a time. Lines are either expressions,
//! `let` bindings, or `:` commands:
//!
//! ```text
//! + 1 2            evaluate
//! let x = * 2 3    evaluate and bind
//! :save            push a snapshot of the bindings
//! :restore         pop the latest snapshot back into the scope
//! :vars            list bindings
//! :clear           drop all bindings and snapshots
//! # comment        ignored
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::display::format_number;
use crate::error::SessionError;
use crate::eval::evaluate_in;
use crate::{Binding, EvalContext, Scope, ScopeSnapshot};

/// What a single line produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// Blank or comment line
    Empty,

    /// An expression's value
    Value(f64),

    /// A `let` binding
    Bound {
        /// Bound name
        name: String,
        /// Bound value
        value: f64,
    },

    /// `:save`; `depth` is the number of saved snapshots afterwards
    Saved {
        /// Saved snapshot count
        depth: usize,
    },

    /// `:restore`; `depth` is the number of saved snapshots afterwards
    Restored {
        /// Saved snapshot count
        depth: usize,
    },

    /// `:vars`
    Bindings(Vec<Binding>),

    /// `:clear`
    Cleared,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Empty => Ok(()),
            Outcome::Value(value) => write!(f, "{}", format_number(*value)),
            Outcome::Bound { name, value } => write!(f, "{} = {}", name, format_number(*value)),
            Outcome::Saved { depth } => write!(f, "saved (depth {})", depth),
            Outcome::Restored { depth } => write!(f, "restored (depth {})", depth),
            Outcome::Bindings(bindings) => {
                for (i, binding) in bindings.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} = {}", binding.name, format_number(binding.value))?;
                }
                Ok(())
            }
            Outcome::Cleared => write!(f, "cleared"),
        }
    }
}

/// An evaluation session: a scope plus a stack of saved snapshots.
///
/// A line that fails leaves the session exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    scope: Scope,
    ctx: EvalContext,
    saved: Vec<ScopeSnapshot>,
}

impl Session {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with explicit evaluation settings.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            ctx,
            ..Default::default()
        }
    }

    /// The current bindings.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The evaluation settings.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Number of saved snapshots.
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    /// Run one line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(Outcome::Empty);
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.command(command.trim());
        }

        if let Some(binding) = strip_keyword(line, "let") {
            return self.bind(binding);
        }

        let value = evaluate_in(line, &self.scope, &self.ctx)?;
        Ok(Outcome::Value(value))
    }

    fn bind(&mut self, binding: &str) -> Result<Outcome, SessionError> {
        let (name, expression) = binding
            .split_once('=')
            .map(|(name, expression)| (name.trim(), expression.trim()))
            .filter(|(name, expression)| !name.is_empty() && !expression.is_empty())
            .ok_or_else(|| SessionError::MalformedBinding(binding.to_string()))?;

        let value = evaluate_in(expression, &self.scope, &self.ctx)?;
        self.scope.define(name, value)?;
        debug!(name, value, "bound");

        Ok(Outcome::Bound {
            name: name.to_string(),
            value,
        })
    }

    fn command(&mut self, command: &str) -> Result<Outcome, SessionError> {
        debug!(command, "session command");

        match command {
            "save" => {
                self.saved.push(self.scope.snapshot());
                Ok(Outcome::Saved {
                    depth: self.saved.len(),
                })
            }
            "restore" => {
                let snapshot = self.saved.pop().ok_or(SessionError::NothingToRestore)?;
                self.scope.restore(snapshot);
                Ok(Outcome::Restored {
                    depth: self.saved.len(),
                })
            }
            "vars" => Ok(Outcome::Bindings(self.scope.bindings())),
            "clear" => {
                self.scope.clear();
                self.saved.clear();
                Ok(Outcome::Cleared)
            }
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}

/// Strip a leading keyword that is followed by whitespace.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}
