//! Tests for constraints, constraint sets and analysis.

use rota_core::score::{HardMediumSoftScore, ScoreLevel};
use rota_core::{ConstraintRef, ImpactType};

use super::*;

/// A row of optional values used by the toy constraints below.
struct Row {
    values: Vec<Option<i32>>,
}

/// Penalizes every empty slot once at the medium level.
struct EmptySlot {
    constraint_ref: ConstraintRef,
}

impl EmptySlot {
    fn new() -> Self {
        Self {
            constraint_ref: ConstraintRef::new("test", "Empty slot"),
        }
    }
}

impl Constraint<Row, HardMediumSoftScore> for EmptySlot {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Medium
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Penalty
    }

    fn collect_matches(&self, row: &Row, matches: &mut Vec<ConstraintMatch>) {
        for (i, v) in row.values.iter().enumerate() {
            if v.is_none() {
                matches.push(ConstraintMatch::single(i));
            }
        }
    }

    fn justify(&self, _row: &Row, m: &ConstraintMatch) -> ConstraintJustification {
        ConstraintJustification::new(vec![EntityRef::with_display(
            "Slot",
            m.indices[0].to_string(),
        )])
    }
}

/// Rewards each equal adjacent pair with its value as soft weight.
struct EqualNeighbours {
    constraint_ref: ConstraintRef,
}

impl EqualNeighbours {
    fn new() -> Self {
        Self {
            constraint_ref: ConstraintRef::new("test", "Equal neighbours"),
        }
    }
}

impl Constraint<Row, HardMediumSoftScore> for EqualNeighbours {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.constraint_ref
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Soft
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Reward
    }

    fn collect_matches(&self, row: &Row, matches: &mut Vec<ConstraintMatch>) {
        for i in 1..row.values.len() {
            if let (Some(a), Some(b)) = (row.values[i - 1], row.values[i]) {
                if a == b {
                    let mut m = ConstraintMatch::pair(i - 1, i);
                    m.magnitude = i64::from(a);
                    matches.push(m);
                }
            }
        }
    }

    fn justify(&self, _row: &Row, m: &ConstraintMatch) -> ConstraintJustification {
        ConstraintJustification::new(
            m.indices
                .iter()
                .map(|i| EntityRef::with_display("Slot", i.to_string()))
                .collect(),
        )
    }
}

fn row() -> Row {
    Row {
        values: vec![Some(3), Some(3), None, Some(5), Some(5), None],
    }
}

#[test]
fn test_single_constraint_evaluation() {
    let c = EmptySlot::new();
    assert_eq!(c.evaluate(&row()), HardMediumSoftScore::of_medium(-2));
    assert_eq!(c.match_count(&row()), 2);
    assert_eq!(c.weight(), HardMediumSoftScore::of_medium(-1));
    assert!(!c.is_hard());
    assert_eq!(c.name(), "Empty slot");
}

#[test]
fn test_weighted_reward() {
    let c = EqualNeighbours::new();
    assert_eq!(c.evaluate(&row()), HardMediumSoftScore::of_soft(8));
    let contributions = c.contributions(&row());
    assert_eq!(contributions.len(), 2);
    assert_eq!(contributions[1].signed_magnitude(), 5);
}

#[test]
fn test_constraint_set_sums_levels() {
    let set = (EmptySlot::new(), EqualNeighbours::new());
    assert_eq!(set.constraint_count(), 2);
    assert_eq!(set.evaluate_all(&row()), HardMediumSoftScore::of(0, -2, 8));
}

#[test]
fn test_parallel_matches_sequential() {
    let set = (EmptySlot::new(), EqualNeighbours::new(), EmptySlot::new());
    let r = row();
    assert_eq!(set.evaluate_all_parallel(&r), set.evaluate_all(&r));
}

#[test]
fn test_evaluate_each() {
    let set = (EmptySlot::new(), EqualNeighbours::new());
    let results = set.evaluate_each(&row());
    assert_eq!(results[0].name, "Empty slot");
    assert_eq!(results[0].level, ScoreLevel::Medium);
    assert_eq!(results[0].match_count, 2);
    assert_eq!(results[1].score, HardMediumSoftScore::of_soft(8));
}

#[test]
fn test_explanation() {
    let set = (EmptySlot::new(), EqualNeighbours::new());
    let explanation = set.explain(&row());

    assert_eq!(explanation.score, set.evaluate_all(&row()));
    assert_eq!(explanation.total_match_count(), 4);
    assert_eq!(explanation.non_zero_constraints().len(), 2);

    let equal = explanation.constraint("Equal neighbours").unwrap();
    assert_eq!(equal.matches[0].justification.description, "0, 1");

    let by_entity = explanation.score_by_entity();
    let slot_two = EntityRef::with_display("Slot", "2");
    assert_eq!(by_entity[&slot_two], HardMediumSoftScore::of_medium(-1));

    assert!(explanation.summary().starts_with("Score: 0hard/-2medium/8soft"));
}

#[test]
fn test_reference_set_delegates() {
    let set = (EmptySlot::new(),);
    let by_ref = &set;
    assert_eq!(by_ref.evaluate_all(&row()), HardMediumSoftScore::of_medium(-2));
}

#[test]
fn test_entity_ref_from_debug() {
    #[derive(Debug)]
    struct Probe;
    let r = EntityRef::new(&Probe);
    assert_eq!(r.type_name, "Probe");
    assert_eq!(r.to_string(), "Probe(Probe)");
}
