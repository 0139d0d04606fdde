//! Engine error types.
//!
//! All failures here are programmer or data errors, not transient
//! conditions: build-time validation rejects unusable inputs before any
//! partial tree exists, and traversal errors mark contract violations by
//! the caller. No retries apply — every operation is a deterministic pure
//! computation.

use crate::table::Situation;

/// Errors raised while validating inputs or constructing a decision tree.
///
/// Build errors are fatal: no partial tree is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    /// The attribute set is empty; a tree needs at least one question.
    #[error("attribute set is empty")]
    EmptyAttributeSet,

    /// An attribute reports zero subdivisions and can never be tested.
    #[error("attribute '{attribute}' has zero subdivisions")]
    ZeroSubdivisions { attribute: String },

    /// The training table length does not match the product of all
    /// subdivision counts, so the table cannot be complete.
    #[error("situation table has {actual} rows, expected {expected}")]
    TableSizeMismatch { expected: usize, actual: usize },

    /// A table row carries a different number of values than there are
    /// attributes, so the table was enumerated from a different attribute
    /// set — even if the row counts happen to agree.
    #[error("situation rows carry {actual} values, expected one per attribute ({expected})")]
    SituationWidthMismatch { expected: usize, actual: usize },

    /// Leaf resolution reconstructed a situation that no table row matches.
    ///
    /// With a complete table this is structurally impossible; hitting it
    /// means the table invariant was broken. Fail loudly rather than
    /// defaulting to an arbitrary action.
    #[error("no table row matches reconstructed situation {situation:?}")]
    SituationNotFound { situation: Situation },
}

/// Errors raised when walking the tree with a live situation vector.
///
/// These are contract violations by the caller and are not recoverable
/// locally.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraverseError {
    /// The situation vector omits an attribute index the tree queries.
    #[error("situation vector of length {len} is missing attribute index {index}")]
    MissingAttribute { index: usize, len: usize },

    /// A situation value lies outside the tested attribute's state range.
    #[error(
        "state {state} out of range for attribute index {attribute_index} \
         ({subdivisions} subdivisions)"
    )]
    StateOutOfRange {
        attribute_index: usize,
        state: usize,
        subdivisions: usize,
    },
}
