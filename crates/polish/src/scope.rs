//! Named bindings with snapshot and restore

mod guard;

pub use guard::ScopeGuard;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ScopeError;
use crate::eval::operand::parse_literal;

/// A single name → value binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: f64,
}

/// A value copy of a scope's bindings.
///
/// Snapshots are independent of the scope they came from: later changes
/// to the scope never show up in an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScopeSnapshot {
    bindings: IndexMap<String, f64>,
}

impl ScopeSnapshot {
    /// Number of bindings captured.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the snapshot captured no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Value captured for `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}

/// Caller-owned set of named numeric bindings.
///
/// Names keep the order they were first defined in. Redefining a name
/// replaces its value in place.
///
/// # Example
///
/// ```
/// use polish::Scope;
///
/// let mut scope = Scope::new();
/// scope.define("x", 1.0).unwrap();
///
/// let saved = scope.snapshot();
/// scope.define("x", 10.0).unwrap();
/// scope.define("y", 2.0).unwrap();
///
/// scope.restore(saved);
/// assert_eq!(scope.get("x"), Some(1.0)); // change reverted
/// assert_eq!(scope.get("y"), None); // addition dropped
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    bindings: IndexMap<String, f64>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// - `NumericName` if the name would be read as a number (`1`, `inf`)
    /// - `InvalidName` if the name is not an identifier
    pub fn define(&mut self, name: impl Into<String>, value: f64) -> Result<(), ScopeError> {
        let name = name.into();
        validate_name(&name)?;
        self.bindings.insert(name, value);
        Ok(())
    }

    /// Remove a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.bindings.shift_remove(name)
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// All bindings in definition order.
    pub fn bindings(&self) -> Vec<Binding> {
        self.iter()
            .map(|(name, value)| Binding {
                name: name.to_string(),
                value,
            })
            .collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the scope is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Snapshot and Restore
    // ═══════════════════════════════════════════════════════════════════

    /// Copy the current bindings.
    pub fn snapshot(&self) -> ScopeSnapshot {
        ScopeSnapshot {
            bindings: self.bindings.clone(),
        }
    }

    /// Replace the current bindings with a snapshot.
    ///
    /// Bindings defined after the snapshot was taken are dropped and
    /// changed values revert.
    pub fn restore(&mut self, snapshot: ScopeSnapshot) {
        self.bindings = snapshot.bindings;
    }
}

/// Names are identifiers that could never be mistaken for a number.
fn validate_name(name: &str) -> Result<(), ScopeError> {
    if parse_literal(name).is_ok() {
        return Err(ScopeError::NumericName {
            name: name.to_string(),
        });
    }

    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ScopeError::InvalidName {
            name: name.to_string(),
        })
    }
}
