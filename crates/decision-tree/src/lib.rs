//! Inductive decision tree engine for discretized game situations.
//!
//! This library implements the ID3 algorithm over a *complete* enumeration of
//! situations: every combination of discretized attribute states appears
//! exactly once in the training table, paired with the action it should map
//! to. The engine ranks attributes by information gain, builds an immutable
//! tree of question nodes in that order, and answers "which action applies
//! here?" in one hop per attribute.
//!
//! - **Build then freeze**: the tree is constructed once from a static table
//!   and never mutated; rebuilding is always a full reconstruction
//! - **Deterministic**: enumeration order, gain ranking, and leaf resolution
//!   are all reproducible, with ties broken by declaration order
//! - **Pure reads**: [`DecisionTree::traverse`] is side-effect free
//!
//! # Architecture
//!
//! - [`Attribute`]: capability trait for a discretized observable
//! - [`Action`]: interned identity handle for a selectable behavior
//! - [`SituationTable`]: the exhaustive (situation, action) training table
//! - [`entropy`]: entropy and information-gain math over the table
//! - [`DecisionTree`]: question-node tree, built by gain ranking
//! - [`SituationTracker`]: snapshot-based change detection over attributes

pub mod action;
pub mod attribute;
pub mod entropy;
pub mod error;
pub mod table;
pub mod tracker;
pub mod tree;

// Re-export core types for ergonomic API
pub use action::Action;
pub use attribute::Attribute;
pub use entropy::{GainRanking, rank_by_information_gain};
pub use error::{BuildError, TraverseError};
pub use table::{Situation, SituationTable};
pub use tracker::SituationTracker;
pub use tree::{DecisionTree, TreeNode};
