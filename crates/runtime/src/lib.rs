//! Driver glue between the environment and the decision tree.
//!
//! The engine itself is pure: build once, traverse on demand. This crate
//! owns the *when* — it wires attribute sources into a
//! [`SituationTracker`](decision_tree::SituationTracker), builds the tree
//! at startup, and on each poll re-traverses only if the tracked situation
//! actually changed. Action *execution* stays with the host simulation;
//! the driver only selects.

pub mod driver;
pub mod error;
pub mod source;

pub use driver::DecisionDriver;
pub use error::DriverError;
pub use source::{AttributeSource, collect_attributes};
