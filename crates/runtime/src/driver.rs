//! The polling decision driver.

use std::sync::Arc;

use decision_tree::{Action, Attribute, DecisionTree, SituationTable, SituationTracker};

use crate::error::DriverError;
use crate::source::{AttributeSource, collect_attributes};

/// Owns one agent's tree and tracker; re-traverses on situation change.
///
/// The tree is built once at construction and frozen; `poll` is the only
/// mutation point (snapshot and held action). The host ticks `poll` at
/// whatever cadence it likes — a poll with no situation change costs one
/// snapshot comparison and returns the held action.
pub struct DecisionDriver {
    tracker: SituationTracker,
    tree: DecisionTree,
    current: Action,
}

impl DecisionDriver {
    /// Builds the tree from the attributes and training table, then selects
    /// the initial action from the current situation.
    pub fn new(
        attributes: Vec<Arc<dyn Attribute>>,
        table: &SituationTable,
    ) -> Result<Self, DriverError> {
        let tree = DecisionTree::build(&attributes, table)?;
        let tracker = SituationTracker::new(attributes);
        let current = tree.traverse(tracker.current())?.clone();

        tracing::debug!(
            situation = ?tracker.current(),
            action = %current,
            "decision driver initialized"
        );

        Ok(Self {
            tracker,
            tree,
            current,
        })
    }

    /// Convenience constructor flattening attribute sources in order.
    pub fn from_sources(
        sources: &[&dyn AttributeSource],
        table: &SituationTable,
    ) -> Result<Self, DriverError> {
        Self::new(collect_attributes(sources), table)
    }

    /// Checks the tracked situation and returns the action that applies.
    ///
    /// Re-traverses only when the situation vector changed since the last
    /// poll; otherwise returns the held action unchanged.
    pub fn poll(&mut self) -> Result<&Action, DriverError> {
        if self.tracker.has_changed() {
            let selected = self.tree.traverse(self.tracker.current())?.clone();
            if !selected.same_as(&self.current) {
                tracing::debug!(
                    situation = ?self.tracker.current(),
                    previous = %self.current,
                    selected = %selected,
                    "situation changed, switching action"
                );
            }
            self.current = selected;
        }
        Ok(&self.current)
    }

    /// The currently selected action.
    pub fn current_action(&self) -> &Action {
        &self.current
    }

    /// The tracker, for inspecting the last snapshot.
    pub fn tracker(&self) -> &SituationTracker {
        &self.tracker
    }

    /// The frozen decision tree.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}
