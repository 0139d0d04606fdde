//! Snapshot-based situation tracking.
//!
//! The tracker is the "senses" half of the engine: it reads every registered
//! attribute's current state into an ordered vector and detects when that
//! vector changes, so an external driver knows when re-traversing the tree
//! is worthwhile. Detection is by full element-wise snapshot comparison —
//! independent of any per-attribute dirty flags.

use std::sync::Arc;

use crate::attribute::Attribute;
use crate::table::Situation;

/// Polls a fixed set of attributes and detects situation changes.
///
/// Attributes are injected at construction and kept in stable registration
/// order, matching the declaration order the table and tree were built
/// from. One tracker per deciding agent.
pub struct SituationTracker {
    attributes: Vec<Arc<dyn Attribute>>,
    snapshot: Situation,
}

impl SituationTracker {
    /// Creates a tracker over the given attributes and stores an initial
    /// snapshot of their current states.
    pub fn new(attributes: Vec<Arc<dyn Attribute>>) -> Self {
        let snapshot = capture(&attributes);
        Self {
            attributes,
            snapshot,
        }
    }

    /// Reads every attribute's current state into a fresh vector.
    ///
    /// Does not touch the stored snapshot.
    pub fn capture(&self) -> Situation {
        capture(&self.attributes)
    }

    /// The last stored snapshot.
    pub fn current(&self) -> &Situation {
        &self.snapshot
    }

    /// Captures a new snapshot and compares it with the stored one.
    ///
    /// On any element-wise difference the new snapshot replaces the stored
    /// one and the call reports `true`; otherwise the capture is discarded
    /// and the call reports `false`.
    pub fn has_changed(&mut self) -> bool {
        let fresh = self.capture();
        if fresh != self.snapshot {
            self.snapshot = fresh;
            true
        } else {
            false
        }
    }

    /// The tracked attributes, in registration order.
    pub fn attributes(&self) -> &[Arc<dyn Attribute>] {
        &self.attributes
    }
}

fn capture(attributes: &[Arc<dyn Attribute>]) -> Situation {
    attributes
        .iter()
        .map(|attribute| attribute.current_state())
        .collect()
}
