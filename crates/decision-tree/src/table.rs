//! The exhaustive situation table.
//!
//! The ID3 math in this crate assumes a *complete* training table: exactly
//! one row per distinct combination of attribute states, in a deterministic
//! mixed-radix order. Rather than trusting callers to supply such a table,
//! [`SituationTable::new`] generates the enumeration itself and only accepts
//! the per-row actions from outside — completeness and uniqueness hold by
//! construction.
//!
//! # Enumeration order
//!
//! Attributes enumerate in declaration order with later attributes cycling
//! fastest. With `total = Π subdivisions`:
//!
//! ```text
//! stepsize(j) = total / Π(subdivisions[0..=j])
//! value(i, j) = (i / stepsize(j)) % subdivisions[j]
//! ```
//!
//! For subdivisions `[3, 2]` the six rows read
//! `(0,0) (0,1) (1,0) (1,1) (2,0) (2,1)`. External training data is indexed
//! by this enumeration position, so the order must never change.

use std::sync::Arc;

use crate::action::Action;
use crate::attribute::Attribute;
use crate::error::BuildError;

/// One fully-specified combination of discretized attribute states.
///
/// Ordered per attribute declaration order, each value in
/// `[0, subdivision_count)` of the corresponding attribute.
pub type Situation = Vec<usize>;

/// Validates the attribute set and returns the total situation count.
///
/// # Errors
///
/// Fails on an empty attribute set or any attribute reporting zero
/// subdivisions.
pub fn total_situations(attributes: &[Arc<dyn Attribute>]) -> Result<usize, BuildError> {
    if attributes.is_empty() {
        return Err(BuildError::EmptyAttributeSet);
    }

    let mut total = 1usize;
    for attribute in attributes {
        let subdivisions = attribute.subdivision_count();
        if subdivisions == 0 {
            return Err(BuildError::ZeroSubdivisions {
                attribute: attribute.name().to_string(),
            });
        }
        total *= subdivisions;
    }

    Ok(total)
}

/// The ordered sequence of (situation, action) training pairs.
///
/// Length equals the product of all subdivision counts; row order is the
/// deterministic mixed-radix enumeration described in the module docs.
#[derive(Clone, Debug)]
pub struct SituationTable {
    situations: Vec<Situation>,
    actions: Vec<Action>,
}

impl SituationTable {
    /// Generates the complete enumeration for `attributes`.
    ///
    /// One situation per distinct combination — no duplicates, no gaps.
    /// Enumerating twice from the same attribute list yields identical
    /// vectors in identical order.
    ///
    /// # Errors
    ///
    /// See [`total_situations`].
    pub fn enumerate(attributes: &[Arc<dyn Attribute>]) -> Result<Vec<Situation>, BuildError> {
        let total = total_situations(attributes)?;

        let mut situations = Vec::with_capacity(total);
        for i in 0..total {
            let mut situation = Vec::with_capacity(attributes.len());
            let mut stepsize = total;
            for attribute in attributes {
                let subdivisions = attribute.subdivision_count();
                stepsize /= subdivisions;
                situation.push((i / stepsize) % subdivisions);
            }
            situations.push(situation);
        }

        Ok(situations)
    }

    /// Builds a table from the enumeration of `attributes` and one action
    /// per enumerated row, in enumeration order.
    ///
    /// # Errors
    ///
    /// Fails if the attribute set is unusable or if `actions` does not
    /// supply exactly one action per enumerated situation.
    pub fn new(
        attributes: &[Arc<dyn Attribute>],
        actions: Vec<Action>,
    ) -> Result<Self, BuildError> {
        let situations = Self::enumerate(attributes)?;
        if actions.len() != situations.len() {
            return Err(BuildError::TableSizeMismatch {
                expected: situations.len(),
                actual: actions.len(),
            });
        }

        Ok(Self {
            situations,
            actions,
        })
    }

    /// Number of rows (total distinct situations).
    pub fn len(&self) -> usize {
        self.situations.len()
    }

    /// Returns true if the table has no rows.
    ///
    /// Never the case for a table built through [`SituationTable::new`].
    pub fn is_empty(&self) -> bool {
        self.situations.is_empty()
    }

    /// The enumerated situations, in row order.
    pub fn situations(&self) -> &[Situation] {
        &self.situations
    }

    /// The training action of row `row`.
    pub fn action_at(&self, row: usize) -> &Action {
        &self.actions[row]
    }

    /// Iterates `(situation, action)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (&Situation, &Action)> {
        self.situations.iter().zip(self.actions.iter())
    }

    /// Each distinct action once, in first-occurrence order.
    ///
    /// Distinctness is by action identity. The order is deterministic, so
    /// entropy sums and gain rankings computed from it are reproducible.
    pub fn unique_actions(&self) -> Vec<Action> {
        let mut unique: Vec<Action> = Vec::new();
        for action in &self.actions {
            if !unique.iter().any(|seen| seen.same_as(action)) {
                unique.push(action.clone());
            }
        }
        unique
    }

    /// First row whose situation exactly matches, if any.
    ///
    /// Linear scan with first-match semantics. Because the table holds every
    /// combination exactly once, a fully-specified situation matches exactly
    /// one row and "first" is unambiguous.
    pub fn find_action(&self, situation: &[usize]) -> Option<&Action> {
        self.rows()
            .find(|(row, _)| row.as_slice() == situation)
            .map(|(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::testing::attrs;

    #[test]
    fn mixed_radix_enumeration_order() {
        let attributes = attrs(&[("difficulty", 3), ("health", 2)]);
        let situations = SituationTable::enumerate(&attributes).unwrap();

        let expected: Vec<Situation> = vec![
            vec![0, 0],
            vec![0, 1],
            vec![1, 0],
            vec![1, 1],
            vec![2, 0],
            vec![2, 1],
        ];
        assert_eq!(situations, expected);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let attributes = attrs(&[("a", 2), ("b", 3), ("c", 2)]);
        let first = SituationTable::enumerate(&attributes).unwrap();
        let second = SituationTable::enumerate(&attributes).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn enumeration_has_no_duplicates() {
        let attributes = attrs(&[("a", 3), ("b", 2), ("c", 2)]);
        let situations = SituationTable::enumerate(&attributes).unwrap();
        for (i, left) in situations.iter().enumerate() {
            for right in &situations[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn rejects_empty_attribute_set() {
        let attributes: Vec<std::sync::Arc<dyn crate::Attribute>> = Vec::new();
        assert_eq!(
            SituationTable::enumerate(&attributes),
            Err(BuildError::EmptyAttributeSet)
        );
    }

    #[test]
    fn rejects_zero_subdivisions() {
        let attributes = attrs(&[("ok", 2), ("broken", 0)]);
        assert_eq!(
            SituationTable::enumerate(&attributes),
            Err(BuildError::ZeroSubdivisions {
                attribute: "broken".to_string()
            })
        );
    }

    #[test]
    fn rejects_action_count_mismatch() {
        let attributes = attrs(&[("a", 2)]);
        let actions = vec![Action::new("only-one")];
        match SituationTable::new(&attributes, actions) {
            Err(BuildError::TableSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected size mismatch, got {other:?}"),
        }
    }

    #[test]
    fn unique_actions_in_first_occurrence_order() {
        let attributes = attrs(&[("a", 2), ("b", 2)]);
        let attack = Action::new("attack");
        let flee = Action::new("flee");
        let table = SituationTable::new(
            &attributes,
            vec![flee.clone(), attack.clone(), flee.clone(), attack.clone()],
        )
        .unwrap();

        let unique = table.unique_actions();
        assert_eq!(unique.len(), 2);
        assert!(unique[0].same_as(&flee));
        assert!(unique[1].same_as(&attack));
    }

    #[test]
    fn find_action_matches_exact_row() {
        let attributes = attrs(&[("a", 2), ("b", 2)]);
        let actions: Vec<Action> = (0..4).map(|i| Action::new(format!("act-{i}"))).collect();
        let table = SituationTable::new(&attributes, actions.clone()).unwrap();

        assert!(table.find_action(&[1, 0]).unwrap().same_as(&actions[2]));
        assert!(table.find_action(&[9, 9]).is_none());
    }
}
