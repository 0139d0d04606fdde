//! Action interning registry.
//!
//! Action equality is by identity, so every distinct behavior must have
//! exactly one [`Action`] instance no matter how many table rows reference
//! it. The registry enforces that: registering the same name twice returns
//! clones of the same identity.

use decision_tree::Action;

/// Interns actions by name and resolves name keys from table files.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given behavior names pre-registered, in
    /// order.
    pub fn with_actions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name.as_ref());
        }
        registry
    }

    /// Returns the action interned under `name`, minting it on first use.
    ///
    /// Idempotent: repeated calls with the same name return clones of the
    /// same identity.
    pub fn register(&mut self, name: &str) -> Action {
        if let Some(existing) = self.resolve(name) {
            return existing;
        }
        let action = Action::new(name);
        self.actions.push(action.clone());
        action
    }

    /// Looks up the action interned under `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<Action> {
        self.actions
            .iter()
            .find(|action| action.name() == name)
            .cloned()
    }

    /// Iterates registered actions in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Number of distinct registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
