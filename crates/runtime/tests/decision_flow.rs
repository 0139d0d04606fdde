//! End-to-end flow: concrete attributes → loaded table → driver polling.
//!
//! Mirrors the intended embedding: an enemy agent tracks its own health and
//! whether the player is in cover, trains a tree from a hand-filled table,
//! and switches behavior as the environment moves.

use std::sync::Arc;

use decision_content::{ActionRegistry, FlagAttribute, RangeAttribute, TableLoader};
use decision_runtime::{AttributeSource, DecisionDriver};
use decision_tree::Attribute;

const TABLE: &str = r#"
[[situation]]
index = 0
action = "generate_hp"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 0
state = "Low"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 0
state = "False"

[[situation]]
index = 1
action = "generate_hp"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 0
state = "Low"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 1
state = "True"

[[situation]]
index = 2
action = "direct_attack"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 1
state = "Medium"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 0
state = "False"

[[situation]]
index = 3
action = "attack_from_above"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 1
state = "Medium"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 1
state = "True"

[[situation]]
index = 4
action = "direct_attack"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 2
state = "High"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 0
state = "False"

[[situation]]
index = 5
action = "attack_from_above"

[[situation.attribute]]
name = "EnemyHealth"
subdivisions = 3
value = 2
state = "High"

[[situation.attribute]]
name = "PlayerCover"
subdivisions = 2
value = 1
state = "True"
"#;

struct EnemySenses {
    health: Arc<RangeAttribute>,
    cover: Arc<FlagAttribute>,
}

impl EnemySenses {
    fn new() -> Self {
        Self {
            health: Arc::new(RangeAttribute::new("EnemyHealth", 100, 3)),
            cover: Arc::new(FlagAttribute::new("PlayerCover")),
        }
    }
}

impl AttributeSource for EnemySenses {
    fn attributes(&self) -> Vec<Arc<dyn Attribute>> {
        vec![
            self.health.clone() as Arc<dyn Attribute>,
            self.cover.clone() as Arc<dyn Attribute>,
        ]
    }
}

#[test]
fn driver_follows_the_environment() {
    let senses = EnemySenses::new();
    let registry =
        ActionRegistry::with_actions(["attack_from_above", "direct_attack", "generate_hp"]);
    let table =
        TableLoader::load_str(TABLE, &senses.attributes(), &registry).expect("table loads");

    let mut driver = DecisionDriver::from_sources(&[&senses], &table).expect("driver builds");

    // Full health, player exposed.
    assert_eq!(driver.current_action().name(), "direct_attack");

    // Player ducks behind an obstacle.
    senses.cover.set(true);
    assert_eq!(driver.poll().unwrap().name(), "attack_from_above");

    // Taking fire: health drops into the low band.
    senses.health.set(10);
    assert_eq!(driver.poll().unwrap().name(), "generate_hp");

    // Nothing moves: the held action stays.
    assert_eq!(driver.poll().unwrap().name(), "generate_hp");

    // Recovered and the player is exposed again.
    senses.health.set(100);
    senses.cover.set(false);
    assert_eq!(driver.poll().unwrap().name(), "direct_attack");
}

#[test]
fn tree_reproduces_every_trained_row() {
    let senses = EnemySenses::new();
    let registry =
        ActionRegistry::with_actions(["attack_from_above", "direct_attack", "generate_hp"]);
    let table =
        TableLoader::load_str(TABLE, &senses.attributes(), &registry).expect("table loads");

    let driver = DecisionDriver::from_sources(&[&senses], &table).expect("driver builds");
    for (situation, expected) in table.rows() {
        let selected = driver.tree().traverse(situation).expect("complete table");
        assert!(selected.same_as(expected), "situation {situation:?}");
    }
}

#[test]
fn dirty_flags_report_mutations_independently_of_the_tracker() {
    let senses = EnemySenses::new();

    assert!(!senses.health.take_changed());
    senses.health.change_by(-5);
    assert!(senses.health.take_changed());
    // Cleared on read.
    assert!(!senses.health.take_changed());

    // A set that does not transition the flag stays clean.
    senses.cover.set(false);
    assert!(!senses.cover.take_changed());
}
