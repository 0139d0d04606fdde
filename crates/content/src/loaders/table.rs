//! Training-table loader and skeleton writer.
//!
//! On-disk format: one `[[situation]]` per enumerated row, in enumeration
//! order, each carrying its attribute cells (name, subdivision count, value,
//! state label) for human readability and an `action` key naming the trained
//! behavior:
//!
//! ```toml
//! [[situation]]
//! index = 0
//! action = "generate_hp"
//!
//! [[situation.attribute]]
//! name = "EnemyHealth"
//! subdivisions = 3
//! value = 0
//! state = "Low"
//! ```
//!
//! Loading validates every cell against the deterministic enumeration — row
//! count, attribute names, subdivision counts, and state values all have to
//! line up before the table is accepted. A file that drifted from the
//! attribute declarations (renamed attribute, changed subdivision count,
//! reordered rows) is rejected with the offending row named, instead of
//! silently training a tree on misaligned data.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use decision_tree::{Action, Attribute, SituationTable};

use crate::actions::ActionRegistry;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    #[serde(default)]
    situation: Vec<SituationRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SituationRow {
    index: usize,
    action: String,
    #[serde(default)]
    attribute: Vec<AttributeCell>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AttributeCell {
    name: String,
    subdivisions: usize,
    value: usize,
    state: String,
}

/// Loads and scaffolds situation→action table files.
pub struct TableLoader;

impl TableLoader {
    /// Loads a table file and resolves its action column through the
    /// registry.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, if any row disagrees
    /// with the deterministic enumeration for `attributes`, or if a row
    /// names an action the registry does not know (including the empty
    /// action of an unfilled skeleton).
    pub fn load(
        path: &Path,
        attributes: &[Arc<dyn Attribute>],
        registry: &ActionRegistry,
    ) -> LoadResult<SituationTable> {
        let content = read_file(path)?;
        Self::load_str(&content, attributes, registry)
            .with_context(|| format!("in table file {}", path.display()))
    }

    /// Loads a table from an in-memory TOML string.
    pub fn load_str(
        content: &str,
        attributes: &[Arc<dyn Attribute>],
        registry: &ActionRegistry,
    ) -> LoadResult<SituationTable> {
        let file: TableFile =
            toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse table TOML: {e}"))?;

        let expected = SituationTable::enumerate(attributes)?;
        if file.situation.len() != expected.len() {
            bail!(
                "table has {} situations, expected {} (product of subdivision counts)",
                file.situation.len(),
                expected.len()
            );
        }

        let mut actions: Vec<Action> = Vec::with_capacity(expected.len());
        for (row_index, (row, expected_situation)) in
            file.situation.iter().zip(expected.iter()).enumerate()
        {
            validate_row(row, row_index, expected_situation, attributes)?;

            if row.action.is_empty() {
                bail!("situation {row_index} has no action assigned; fill in the skeleton first");
            }
            let action = registry.resolve(&row.action).ok_or_else(|| {
                anyhow::anyhow!(
                    "situation {} names unknown action '{}'; register it before loading",
                    row_index,
                    row.action
                )
            })?;
            actions.push(action);
        }

        Ok(SituationTable::new(attributes, actions)?)
    }

    /// Writes the full enumeration with empty action fields for a human to
    /// fill in.
    ///
    /// There is no way to compute the correct action per situation — that
    /// mapping *is* the training data.
    pub fn write_skeleton(path: &Path, attributes: &[Arc<dyn Attribute>]) -> LoadResult<()> {
        let content = Self::skeleton_str(attributes)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write skeleton {}: {}", path.display(), e))
    }

    /// Renders the skeleton as a TOML string.
    pub fn skeleton_str(attributes: &[Arc<dyn Attribute>]) -> LoadResult<String> {
        let situations = SituationTable::enumerate(attributes)?;

        let file = TableFile {
            situation: situations
                .iter()
                .enumerate()
                .map(|(index, situation)| SituationRow {
                    index,
                    action: String::new(),
                    attribute: attributes
                        .iter()
                        .zip(situation.iter())
                        .map(|(attribute, &value)| AttributeCell {
                            name: attribute.name().to_string(),
                            subdivisions: attribute.subdivision_count(),
                            value,
                            state: attribute.state_name(value),
                        })
                        .collect(),
                })
                .collect(),
        };

        toml::to_string_pretty(&file)
            .map_err(|e| anyhow::anyhow!("Failed to render skeleton TOML: {e}"))
    }

    /// Loads the table, or scaffolds a skeleton when the file is missing.
    ///
    /// A fresh skeleton carries no actions to train from, so scaffolding
    /// still fails — with a message pointing at the file to fill in.
    pub fn load_or_scaffold(
        path: &Path,
        attributes: &[Arc<dyn Attribute>],
        registry: &ActionRegistry,
    ) -> LoadResult<SituationTable> {
        if path.exists() {
            return Self::load(path, attributes, registry);
        }
        Self::write_skeleton(path, attributes)?;
        bail!(
            "no table at {}; wrote a skeleton — fill in the action column and reload",
            path.display()
        )
    }
}

fn validate_row(
    row: &SituationRow,
    row_index: usize,
    expected_situation: &[usize],
    attributes: &[Arc<dyn Attribute>],
) -> LoadResult<()> {
    if row.index != row_index {
        bail!(
            "situation {} is indexed {} in the file; rows must stay in enumeration order",
            row_index,
            row.index
        );
    }
    if row.attribute.len() != attributes.len() {
        bail!(
            "situation {} has {} attribute cells, expected {}",
            row_index,
            row.attribute.len(),
            attributes.len()
        );
    }

    for (cell_index, (cell, attribute)) in row.attribute.iter().zip(attributes.iter()).enumerate() {
        if cell.name != attribute.name() {
            bail!(
                "situation {} cell {} is named '{}', expected attribute '{}'",
                row_index,
                cell_index,
                cell.name,
                attribute.name()
            );
        }
        if cell.subdivisions != attribute.subdivision_count() {
            bail!(
                "situation {} attribute '{}' has {} subdivisions in the file, \
                 but the attribute declares {}",
                row_index,
                cell.name,
                cell.subdivisions,
                attribute.subdivision_count()
            );
        }
        if cell.value != expected_situation[cell_index] {
            bail!(
                "situation {} attribute '{}' has value {}, expected {} from the enumeration",
                row_index,
                cell.name,
                cell.value,
                expected_situation[cell_index]
            );
        }
    }

    Ok(())
}
