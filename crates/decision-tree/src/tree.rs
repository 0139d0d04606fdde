//! Decision tree construction and traversal.
//!
//! The tree tests attributes in descending information-gain order: depth 0
//! asks the highest-ranked attribute, depth 1 the next, and the last ranked
//! attribute's child slots resolve directly to action leaves. Depth equals
//! the attribute count and the branching factor at each node is that node's
//! attribute's subdivision count.
//!
//! Construction threads an immutable path trace down the recursion: the
//! `(attribute index, chosen value)` pair of every ancestor. At a leaf the
//! trace pins every attribute, so scattering it back into a situation vector
//! reconstructs exactly one table row, found by first-match linear scan.
//! Built once, immutable thereafter; traversal is a pure read.

use std::sync::Arc;

use crate::action::Action;
use crate::attribute::Attribute;
use crate::entropy::{GainRanking, rank_by_information_gain};
use crate::error::{BuildError, TraverseError};
use crate::table::{Situation, SituationTable, total_situations};

/// A tree position: question node or terminal action.
///
/// Children are indexed densely by state value — state `v` of the tested
/// attribute leads to `children[v]`.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Internal node testing one attribute, branching per possible state.
    Question {
        /// Declaration index of the tested attribute.
        attribute_index: usize,
        /// One child per subdivision of the tested attribute.
        children: Vec<TreeNode>,
    },
    /// Terminal node holding the selected action.
    Leaf(Action),
}

/// Accumulated root-to-node path of `(attribute index, chosen value)` pairs.
///
/// Passed by value down the recursion; each branch extends its own copy, so
/// sibling branches never alias a shared trace.
#[derive(Clone, Debug, Default)]
struct Trace {
    pairs: Vec<(usize, usize)>,
}

impl Trace {
    fn extended(&self, attribute_index: usize, value: usize) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.push((attribute_index, value));
        Self { pairs }
    }

    /// Scatters the recorded pairs into a full situation vector.
    ///
    /// Only meaningful once every attribute index appears in the trace,
    /// which holds at the last ranked depth.
    fn reconstruct(&self, attribute_count: usize) -> Situation {
        let mut situation = vec![0; attribute_count];
        for &(attribute_index, value) in &self.pairs {
            situation[attribute_index] = value;
        }
        situation
    }
}

/// An immutable ID3 decision tree over a fixed attribute set.
///
/// Built once from a complete [`SituationTable`]; rebuilding after the
/// table or attribute set changes is always a full reconstruction. Because
/// the tree never mutates after construction, concurrent [`traverse`] calls
/// need no locking.
///
/// [`traverse`]: DecisionTree::traverse
#[derive(Clone, Debug)]
pub struct DecisionTree {
    root: TreeNode,
    ranking: GainRanking,
    attribute_count: usize,
}

impl DecisionTree {
    /// Builds the tree from the attribute set and its complete training
    /// table.
    ///
    /// # Errors
    ///
    /// Fails fast — with no partial tree — on an empty attribute set, an
    /// attribute with zero subdivisions, a table whose length is not the
    /// product of all subdivision counts, or a table whose rows were
    /// enumerated for a different attribute count.
    /// [`BuildError::SituationNotFound`]
    /// marks a broken table invariant and should be unreachable for tables
    /// built through [`SituationTable::new`].
    pub fn build(
        attributes: &[Arc<dyn Attribute>],
        table: &SituationTable,
    ) -> Result<Self, BuildError> {
        let total = total_situations(attributes)?;
        if table.len() != total {
            return Err(BuildError::TableSizeMismatch {
                expected: total,
                actual: table.len(),
            });
        }
        // Row count alone cannot tell apart attribute sets whose subdivision
        // products agree; the row width can.
        if let Some(row) = table
            .situations()
            .iter()
            .find(|situation| situation.len() != attributes.len())
        {
            return Err(BuildError::SituationWidthMismatch {
                expected: attributes.len(),
                actual: row.len(),
            });
        }

        let unique_actions = table.unique_actions();
        let ranking = rank_by_information_gain(table, attributes, &unique_actions);
        let root = build_node(attributes, table, ranking.order(), 0, &Trace::default())?;

        Ok(Self {
            root,
            ranking,
            attribute_count: attributes.len(),
        })
    }

    /// Walks the tree with a live situation vector and returns the selected
    /// action.
    ///
    /// One hop per tree level — O(attribute count), independent of table
    /// size.
    ///
    /// # Errors
    ///
    /// Fails if the vector omits an attribute index the tree queries or
    /// carries a state outside the tested attribute's range. Both are
    /// caller contract violations; the walk never reads out of bounds.
    pub fn traverse(&self, situation: &[usize]) -> Result<&Action, TraverseError> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf(action) => return Ok(action),
                TreeNode::Question {
                    attribute_index,
                    children,
                } => {
                    let state = *situation.get(*attribute_index).ok_or(
                        TraverseError::MissingAttribute {
                            index: *attribute_index,
                            len: situation.len(),
                        },
                    )?;
                    node = children
                        .get(state)
                        .ok_or(TraverseError::StateOutOfRange {
                            attribute_index: *attribute_index,
                            state,
                            subdivisions: children.len(),
                        })?;
                }
            }
        }
    }

    /// The root node, for diagnostics and tests.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The information-gain ranking the tree was built from.
    pub fn ranking(&self) -> &GainRanking {
        &self.ranking
    }

    /// Tree depth: one question level per attribute.
    pub fn depth(&self) -> usize {
        self.attribute_count
    }
}

fn build_node(
    attributes: &[Arc<dyn Attribute>],
    table: &SituationTable,
    order: &[usize],
    depth: usize,
    trace: &Trace,
) -> Result<TreeNode, BuildError> {
    let attribute_index = order[depth];
    let subdivisions = attributes[attribute_index].subdivision_count();
    let is_last = depth == order.len() - 1;

    let mut children = Vec::with_capacity(subdivisions);
    for value in 0..subdivisions {
        let path = trace.extended(attribute_index, value);
        if is_last {
            // The trace now pins every attribute; exactly one row matches.
            let situation = path.reconstruct(attributes.len());
            let action = table
                .find_action(&situation)
                .ok_or(BuildError::SituationNotFound { situation })?;
            children.push(TreeNode::Leaf(action.clone()));
        } else {
            children.push(build_node(attributes, table, order, depth + 1, &path)?);
        }
    }

    Ok(TreeNode::Question {
        attribute_index,
        children,
    })
}
