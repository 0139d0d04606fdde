//! Entropy and information-gain math over the situation table.
//!
//! Pure functions, all deterministic. This is the ranking half of ID3: the
//! whole-table entropy measures how mixed the training actions are, and an
//! attribute's information gain measures how much of that mixture knowing
//! the attribute's value removes. The builder tests attributes in descending
//! gain order.
//!
//! Zero-probability terms are skipped everywhere — `log2(0)` is undefined
//! and an absent action contributes nothing to the sum.

use std::sync::Arc;

use crate::action::Action;
use crate::attribute::Attribute;
use crate::table::SituationTable;

/// One `-p·log2(p)` term, with the `p = 0` case skipped.
fn entropy_term(p: f64) -> f64 {
    if p == 0.0 { 0.0 } else { -(p * p.log2()) }
}

/// Entropy of the whole action column: `Σ_a -p(a)·log2(p(a))`.
///
/// Zero iff a single action fills every row; at most `log2` of the number
/// of distinct actions.
pub fn action_set_entropy(table: &SituationTable, unique_actions: &[Action]) -> f64 {
    let total = table.len() as f64;
    unique_actions
        .iter()
        .map(|action| {
            let count = table
                .rows()
                .filter(|(_, row_action)| row_action.same_as(action))
                .count();
            entropy_term(count as f64 / total)
        })
        .sum()
}

/// Entropy of the action column restricted to rows where the attribute at
/// `attribute_index` has state `value`.
///
/// Conditional probabilities are measured by scanning the restricted rows;
/// for a complete table the restriction holds exactly `len / k` rows, so an
/// attribute with a single subdivision restricts to the whole table rather
/// than dividing by zero.
pub fn subdivision_entropy(
    table: &SituationTable,
    attribute_index: usize,
    value: usize,
    unique_actions: &[Action],
) -> f64 {
    let rows_with_value = table
        .situations()
        .iter()
        .filter(|situation| situation[attribute_index] == value)
        .count();
    if rows_with_value == 0 {
        return 0.0;
    }

    unique_actions
        .iter()
        .map(|action| {
            let count = table
                .rows()
                .filter(|(situation, row_action)| {
                    situation[attribute_index] == value && row_action.same_as(action)
                })
                .count();
            entropy_term(count as f64 / rows_with_value as f64)
        })
        .sum()
}

/// Information gain of one attribute: the whole-table entropy minus the
/// expected entropy after splitting on the attribute.
///
/// Every subdivision has prior probability exactly `1/k` because the table
/// enumerates all combinations, so the expectation is a plain average over
/// subdivision entropies.
pub fn information_gain(
    table: &SituationTable,
    attributes: &[Arc<dyn Attribute>],
    attribute_index: usize,
    unique_actions: &[Action],
    total_entropy: f64,
) -> f64 {
    let subdivisions = attributes[attribute_index].subdivision_count();
    let prior = 1.0 / subdivisions as f64;

    let mut gain = total_entropy;
    for value in 0..subdivisions {
        gain -= prior * subdivision_entropy(table, attribute_index, value, unique_actions);
    }
    gain
}

/// Attribute indices ordered by descending information gain, plus the gains
/// and whole-table entropy they were derived from.
#[derive(Clone, Debug)]
pub struct GainRanking {
    order: Vec<usize>,
    gains: Vec<f64>,
    total_entropy: f64,
}

impl GainRanking {
    /// Attribute indices, highest gain first. Ties resolve to the earliest
    /// declaration index, so the degenerate all-zero case reads as plain
    /// declaration order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Information gain of the attribute at declaration index `index`.
    pub fn gain_of(&self, index: usize) -> f64 {
        self.gains[index]
    }

    /// Entropy of the whole action column.
    pub fn total_entropy(&self) -> f64 {
        self.total_entropy
    }
}

/// Computes every attribute's information gain and ranks the attribute
/// indices by descending gain.
///
/// Selection is a repeated stable maximum: pick the largest remaining gain,
/// earliest index on ties, and mark it taken. A single-action table (all
/// gains zero) therefore ranks attributes in declaration order instead of
/// looping or repeating an index.
pub fn rank_by_information_gain(
    table: &SituationTable,
    attributes: &[Arc<dyn Attribute>],
    unique_actions: &[Action],
) -> GainRanking {
    let total_entropy = action_set_entropy(table, unique_actions);

    let gains: Vec<f64> = (0..attributes.len())
        .map(|index| information_gain(table, attributes, index, unique_actions, total_entropy))
        .collect();

    let mut order = Vec::with_capacity(attributes.len());
    let mut taken = vec![false; attributes.len()];
    for _ in 0..attributes.len() {
        let mut best: Option<usize> = None;
        for (index, &gain) in gains.iter().enumerate() {
            if taken[index] {
                continue;
            }
            match best {
                Some(current) if gains[current] >= gain => {}
                _ => best = Some(index),
            }
        }
        let best = best.expect("one untaken attribute per selection round");
        taken[best] = true;
        order.push(best);
    }

    GainRanking {
        order,
        gains,
        total_entropy,
    }
}
