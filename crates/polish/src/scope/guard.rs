//! RAII guard that restores a scope on drop

use super::{Scope, ScopeSnapshot};

/// RAII guard that snapshots a scope now and restores it when dropped.
///
/// # Example
///
/// ```
/// use polish::Scope;
///
/// let mut scope = Scope::new();
/// scope.define("x", 1.0).unwrap();
///
/// {
///     let mut guard = scope.guard();
///     guard.define("y", 2.0).unwrap();
///     guard.define("x", 5.0).unwrap();
///     // both changes are visible here
/// }
/// // guard dropped, scope restored
/// assert!(!scope.contains("y"));
/// assert_eq!(scope.get("x"), Some(1.0));
/// ```
pub struct ScopeGuard<'a> {
    scope: &'a mut Scope,
    snapshot: Option<ScopeSnapshot>,
}

impl Scope {
    /// Create a guard that snapshots now and restores on drop.
    pub fn guard(&mut self) -> ScopeGuard<'_> {
        let snapshot = Some(self.snapshot());
        ScopeGuard {
            scope: self,
            snapshot,
        }
    }
}

impl ScopeGuard<'_> {
    /// Keep the changes made through this guard.
    pub fn commit(mut self) {
        self.snapshot = None;
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.scope.restore(snapshot);
        }
    }
}

impl std::ops::Deref for ScopeGuard<'_> {
    type Target = Scope;

    fn deref(&self) -> &Self::Target {
        self.scope
    }
}

impl std::ops::DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.scope
    }
}
