use rota_core::domain::{BasicVariableSolution, PlanningSolution};
use rota_core::score::{HardMediumSoftScore, Score, ScoreLevel};
use rota_core::{ConstraintRef, ImpactType, RotaError};

use crate::api::{Constraint, ConstraintJustification, ConstraintMatch, EntityRef};

use super::*;

#[derive(Clone, Debug)]
struct Desk {
    seats: Vec<Option<usize>>,
    pinned: Vec<bool>,
    people: usize,
    score: Option<HardMediumSoftScore>,
}

impl Desk {
    fn new(seats: Vec<Option<usize>>, pinned: Vec<bool>) -> Self {
        Self {
            seats,
            pinned,
            people: 3,
            score: None,
        }
    }
}

impl PlanningSolution for Desk {
    type Score = HardMediumSoftScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

impl BasicVariableSolution for Desk {
    type Value = usize;

    fn entity_count(&self) -> usize {
        self.seats.len()
    }

    fn is_pinned(&self, entity_index: usize) -> bool {
        self.pinned[entity_index]
    }

    fn value(&self, entity_index: usize) -> Option<usize> {
        self.seats[entity_index]
    }

    fn set_value(&mut self, entity_index: usize, value: Option<usize>) {
        self.seats[entity_index] = value;
    }

    fn value_range(&self) -> Vec<usize> {
        (0..self.people).collect()
    }
}

struct EmptySeat(ConstraintRef);

impl Constraint<Desk, HardMediumSoftScore> for EmptySeat {
    fn constraint_ref(&self) -> &ConstraintRef {
        &self.0
    }

    fn level(&self) -> ScoreLevel {
        ScoreLevel::Medium
    }

    fn impact_type(&self) -> ImpactType {
        ImpactType::Penalty
    }

    fn collect_matches(&self, desk: &Desk, matches: &mut Vec<ConstraintMatch>) {
        for (i, seat) in desk.seats.iter().enumerate() {
            if seat.is_none() {
                matches.push(ConstraintMatch::single(i));
            }
        }
    }

    fn justify(&self, _desk: &Desk, m: &ConstraintMatch) -> ConstraintJustification {
        ConstraintJustification::new(vec![EntityRef::with_display("Seat", m.indices[0].to_string())])
    }
}

fn empty_seat() -> (EmptySeat,) {
    (EmptySeat(ConstraintRef::new("test", "Empty seat")),)
}

#[test]
fn test_calculate_score_sets_solution_score() {
    let mut director = SimpleScoreDirector::new(Desk::new(vec![None, Some(0)], vec![false; 2]), empty_seat());
    let score = director.calculate_score();
    assert_eq!(score, HardMediumSoftScore::of_medium(-1));
    assert_eq!(director.working_solution().score(), Some(score));
}

#[test]
fn test_score_is_cached_until_change() {
    let mut director = SimpleScoreDirector::new(Desk::new(vec![None, None], vec![false; 2]), empty_seat());
    director.calculate_score();
    director.calculate_score();
    assert_eq!(director.calculation_count(), 1);

    director.change_value(0, None).unwrap();
    director.calculate_score();
    assert_eq!(director.calculation_count(), 1);

    director.change_value(0, Some(2)).unwrap();
    assert_eq!(director.calculate_score(), HardMediumSoftScore::of_medium(-1));
    assert_eq!(director.calculation_count(), 2);
}

#[test]
fn test_change_value_refuses_pinned_entity() {
    let mut director =
        SimpleScoreDirector::new(Desk::new(vec![Some(1), None], vec![true, false]), empty_seat());
    let before = director.calculate_score();

    let err = director.change_value(0, None).unwrap_err();
    assert!(matches!(err, RotaError::PinnedEntity { entity_index: 0 }));
    assert_eq!(director.working_solution().value(0), Some(1));
    assert_eq!(director.calculate_score(), before);
    assert_eq!(director.movable_entities(), vec![1]);
}

#[test]
fn test_dyn_director_surface() {
    let mut director = SimpleScoreDirector::new(Desk::new(vec![None; 3], vec![false; 3]), empty_seat());
    let dyn_director: &mut dyn ScoreDirector<Desk> = &mut director;

    assert_eq!(dyn_director.entity_count(), 3);
    assert_eq!(dyn_director.value_range(), vec![0, 1, 2]);
    assert_eq!(dyn_director.constraint_count(), 1);
    for i in 0..3 {
        dyn_director.change_value(i, Some(i)).unwrap();
    }
    assert!(dyn_director.calculate_score().is_feasible());
    assert_eq!(dyn_director.explain().total_match_count(), 0);
}

#[test]
fn test_parallel_director_agrees() {
    let desk = Desk::new(vec![None, Some(1), None], vec![false; 3]);
    let mut sequential = SimpleScoreDirector::new(desk.clone(), empty_seat());
    let mut parallel = SimpleScoreDirector::new(desk, empty_seat()).with_parallel_evaluation(true);
    assert_eq!(sequential.calculate_score(), parallel.calculate_score());
}

#[test]
fn test_into_solution_carries_score() {
    let director = SimpleScoreDirector::new(Desk::new(vec![None], vec![false]), empty_seat());
    let desk = director.into_solution();
    assert_eq!(desk.score(), Some(HardMediumSoftScore::of_medium(-1)));
}

#[test]
fn test_factory_builds_independent_directors() {
    let factory = ScoreDirectorFactory::new(empty_seat());
    let mut a = factory.build_score_director(Desk::new(vec![None], vec![false]));
    let mut b = factory.build_score_director(Desk::new(vec![Some(0)], vec![false]));
    assert_eq!(a.calculate_score(), HardMediumSoftScore::of_medium(-1));
    assert_eq!(b.calculate_score(), HardMediumSoftScore::ZERO);
    assert_eq!(a.clone_working_solution().seats, vec![None]);
}
