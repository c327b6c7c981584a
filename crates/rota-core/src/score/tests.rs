use super::*;

#[test]
fn test_creation() {
    let score = HardMediumSoftScore::of(-2, -10, -100);
    assert_eq!(score.hard(), -2);
    assert_eq!(score.medium(), -10);
    assert_eq!(score.soft(), -100);
}

#[test]
fn test_feasibility() {
    assert!(HardMediumSoftScore::of(0, -100, -1000).is_feasible());
    assert!(!HardMediumSoftScore::of(-1, 0, 0).is_feasible());
}

#[test]
fn test_hard_outranks_everything_below() {
    let s1 = HardMediumSoftScore::of(-1, 0, 0);
    let s2 = HardMediumSoftScore::of(0, -1000, -1_000_000);
    assert!(s2 > s1);
    assert!(s2.is_better_than(&s1));
    assert!(s1.is_worse_than(&s2));
}

#[test]
fn test_medium_outranks_soft() {
    let s1 = HardMediumSoftScore::of(0, -10, 0);
    let s2 = HardMediumSoftScore::of(0, -5, -1000);
    assert!(s2 > s1);
}

#[test]
fn test_soft_decides_when_others_equal() {
    let s1 = HardMediumSoftScore::of(0, 0, -100);
    let s2 = HardMediumSoftScore::of(0, 0, -50);
    assert!(s2 > s1);
    assert_eq!(s2, HardMediumSoftScore::of_soft(-50));
}

#[test]
fn test_arithmetic() {
    let s1 = HardMediumSoftScore::of(-1, -10, -100);
    let s2 = HardMediumSoftScore::of(-1, -5, -50);

    assert_eq!(s1 + s2, HardMediumSoftScore::of(-2, -15, -150));
    assert_eq!(s1 - s2, HardMediumSoftScore::of(0, -5, -50));
    assert_eq!(-s1, HardMediumSoftScore::of(1, 10, 100));
}

#[test]
fn test_of_level() {
    assert_eq!(
        HardMediumSoftScore::of_level(ScoreLevel::Medium, -3),
        HardMediumSoftScore::of_medium(-3)
    );
    assert_eq!(HardMediumSoftScore::level_index(ScoreLevel::Soft), Some(2));
}

#[test]
fn test_level_numbers() {
    let score = HardMediumSoftScore::of(-1, 2, -3);
    assert_eq!(score.to_level_numbers(), vec![-1, 2, -3]);
    assert_eq!(HardMediumSoftScore::from_level_numbers(&[-1, 2, -3]), score);
}

#[test]
fn test_level_label() {
    assert_eq!(HardMediumSoftScore::level_label(0), ScoreLevel::Hard);
    assert_eq!(HardMediumSoftScore::level_label(1), ScoreLevel::Medium);
    assert_eq!(HardMediumSoftScore::level_label(2), ScoreLevel::Soft);
}

#[test]
fn test_display_and_parse() {
    let score = HardMediumSoftScore::of(-1, -10, -1600);
    assert_eq!(score.to_string(), "-1hard/-10medium/-1600soft");
    assert_eq!(
        HardMediumSoftScore::parse(" 0hard/-2medium/-1600soft ").unwrap(),
        HardMediumSoftScore::of(0, -2, -1600)
    );
}

#[test]
fn test_parse_errors() {
    assert!(HardMediumSoftScore::parse("0hard/0soft").is_err());
    assert!(HardMediumSoftScore::parse("0hard/0soft/0medium").is_err());
    let err = HardMediumSoftScore::parse("0hard/xmedium/0soft").unwrap_err();
    assert!(err.message.contains("medium"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serializes_as_three_integers() {
    let json = serde_json::to_string(&HardMediumSoftScore::of(0, -2, -1600)).unwrap();
    assert_eq!(json, r#"{"hard":0,"medium":-2,"soft":-1600}"#);
}

#[test]
fn test_arithmetic_saturates() {
    let floor = HardMediumSoftScore::of_soft(-i64::MAX);
    assert_eq!((floor + floor).soft(), i64::MIN);
    assert_eq!(-(floor + floor), HardMediumSoftScore::of_soft(i64::MAX));
    assert_eq!(
        HardMediumSoftScore::of_hard(i64::MAX) - HardMediumSoftScore::of_hard(-1),
        HardMediumSoftScore::of_hard(i64::MAX)
    );
}
