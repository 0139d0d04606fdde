//! Attribute sources.
//!
//! A source is anything that owns a group of related attributes — the
//! player's observable properties, the deciding agent's own vitals. Sources
//! are handed to the driver explicitly; the driver never goes looking for
//! them in ambient state.

use std::sync::Arc;

use decision_tree::Attribute;

/// A group of related attributes contributed to the situation vector.
pub trait AttributeSource {
    /// The attributes this source exposes, in stable declaration order.
    fn attributes(&self) -> Vec<Arc<dyn Attribute>>;
}

/// Flattens sources into one ordered attribute list.
///
/// Source order and each source's internal order are both preserved; the
/// result is the declaration order the table, tree, and tracker all share.
pub fn collect_attributes(sources: &[&dyn AttributeSource]) -> Vec<Arc<dyn Attribute>> {
    sources
        .iter()
        .flat_map(|source| source.attributes())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Attribute for Named {
        fn subdivision_count(&self) -> usize {
            2
        }
        fn current_state(&self) -> usize {
            0
        }
        fn name(&self) -> &str {
            self.0
        }
        fn state_name(&self, _state: usize) -> String {
            String::new()
        }
    }

    struct Pair(&'static str, &'static str);

    impl AttributeSource for Pair {
        fn attributes(&self) -> Vec<Arc<dyn Attribute>> {
            vec![Arc::new(Named(self.0)), Arc::new(Named(self.1))]
        }
    }

    #[test]
    fn collection_preserves_source_and_internal_order() {
        let player = Pair("PlayerHealth", "PlayerAmmo");
        let enemy = Pair("EnemyHealth", "EnemyAmmo");
        let attributes = collect_attributes(&[&player, &enemy]);

        let names: Vec<&str> = attributes.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["PlayerHealth", "PlayerAmmo", "EnemyHealth", "EnemyAmmo"]
        );
    }
}
