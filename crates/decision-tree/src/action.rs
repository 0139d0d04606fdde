//! Opaque action identity.
//!
//! An action is a token representing a selectable behavior. No behavior
//! logic lives here — execution belongs to the runtime environment. The
//! engine only requires that actions are comparable for equality and cheap
//! to clone, because the same action appears in many table rows and tree
//! leaves.

use std::fmt;
use std::sync::Arc;

/// An interned, identity-compared handle for a selectable behavior.
///
/// Equality is by identity, not value: two `Action`s compare equal only if
/// they are clones of the same original handle. [`Action::new`] mints a
/// fresh identity every call, so a registry should intern actions — one
/// handle per distinct behavior name — and hand out clones. Two independent
/// `Action::new("attack")` calls are *different* actions.
#[derive(Clone)]
pub struct Action(Arc<str>);

impl Action {
    /// Mints a new action identity with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into().into_boxed_str()))
    }

    /// Diagnostic name of this action.
    ///
    /// Names are not required to be unique across identities; only the
    /// handle itself is.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if both handles refer to the same interned identity.
    pub fn same_as(&self, other: &Action) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Action {}

impl std::hash::Hash for Action {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const u8 as usize).hash(state);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.name()).finish()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let attack = Action::new("attack");
        let alias = attack.clone();
        assert_eq!(attack, alias);
        assert!(attack.same_as(&alias));
    }

    #[test]
    fn equal_names_are_distinct_identities() {
        let a = Action::new("attack");
        let b = Action::new("attack");
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }
}
