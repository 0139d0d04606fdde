//! Driver errors.

use decision_tree::{BuildError, TraverseError};

/// Errors surfaced by the decision driver.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DriverError {
    /// Tree construction failed at startup.
    #[error("decision tree construction failed: {0}")]
    Build(#[from] BuildError),

    /// Re-traversal failed; the tracked situation disagrees with the
    /// attribute set the tree was built from.
    #[error("situation traversal failed: {0}")]
    Traverse(#[from] TraverseError),
}
