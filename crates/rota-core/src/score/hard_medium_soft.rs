//! The three-level score used to rank rosters.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// A score with hard, medium, and soft levels.
///
/// Hard constraints decide feasibility, medium constraints measure how well
/// the duties are staffed, and soft constraints measure fairness.
///
/// Comparison order: hard > medium > soft. Any hard difference outranks
/// any number of medium or soft differences. Arithmetic saturates at the
/// `i64` bounds.
///
/// # Examples
///
/// ```
/// use rota_core::HardMediumSoftScore;
///
/// let fewer_gaps = HardMediumSoftScore::of(0, -1, -900);
/// let fairer = HardMediumSoftScore::of(0, -3, 0);
///
/// assert!(fewer_gaps > fairer);
/// assert!(fairer > HardMediumSoftScore::of_hard(-1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardMediumSoftScore {
    hard: i64,
    medium: i64,
    soft: i64,
}

impl HardMediumSoftScore {
    /// The zero score.
    pub const ZERO: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 0);
    pub const ONE_HARD: HardMediumSoftScore = HardMediumSoftScore::of(1, 0, 0);
    pub const ONE_MEDIUM: HardMediumSoftScore = HardMediumSoftScore::of(0, 1, 0);
    pub const ONE_SOFT: HardMediumSoftScore = HardMediumSoftScore::of(0, 0, 1);

    #[inline]
    pub const fn of(hard: i64, medium: i64, soft: i64) -> Self {
        HardMediumSoftScore { hard, medium, soft }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        Self::of(hard, 0, 0)
    }

    #[inline]
    pub const fn of_medium(medium: i64) -> Self {
        Self::of(0, medium, 0)
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        Self::of(0, 0, soft)
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn medium(&self) -> i64 {
        self.medium
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }
}

impl Score for HardMediumSoftScore {
    #[inline]
    fn is_feasible(&self) -> bool {
        self.hard >= 0
    }

    #[inline]
    fn zero() -> Self {
        HardMediumSoftScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        3
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.hard, self.medium, self.soft]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(
            levels.len(),
            3,
            "expected one number per score level"
        );
        HardMediumSoftScore::of(levels[0], levels[1], levels[2])
    }

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Medium,
            2 => ScoreLevel::Soft,
            _ => panic!("no score level at index {}", index),
        }
    }

    #[inline]
    fn of_level(level: ScoreLevel, value: i64) -> Self {
        match level {
            ScoreLevel::Hard => Self::of_hard(value),
            ScoreLevel::Medium => Self::of_medium(value),
            ScoreLevel::Soft => Self::of_soft(value),
        }
    }
}

impl Ord for HardMediumSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hard
            .cmp(&other.hard)
            .then(self.medium.cmp(&other.medium))
            .then(self.soft.cmp(&other.soft))
    }
}

impl PartialOrd for HardMediumSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardMediumSoftScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::of(
            self.hard.saturating_add(other.hard),
            self.medium.saturating_add(other.medium),
            self.soft.saturating_add(other.soft),
        )
    }
}

impl Sub for HardMediumSoftScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::of(
            self.hard.saturating_sub(other.hard),
            self.medium.saturating_sub(other.medium),
            self.soft.saturating_sub(other.soft),
        )
    }
}

impl Neg for HardMediumSoftScore {
    type Output = Self;

    fn neg(self) -> Self {
        Self::of(
            self.hard.saturating_neg(),
            self.medium.saturating_neg(),
            self.soft.saturating_neg(),
        )
    }
}

impl fmt::Debug for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardMediumSoftScore({}, {}, {})",
            self.hard, self.medium, self.soft
        )
    }
}

impl fmt::Display for HardMediumSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}hard/{}medium/{}soft",
            self.hard, self.medium, self.soft
        )
    }
}

impl ParseableScore for HardMediumSoftScore {
    fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let text = s.trim();
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != ScoreLevel::ALL.len() {
            return Err(ScoreParseError {
                message: format!(
                    "'{}' is not of the form <h>hard/<m>medium/<s>soft",
                    text
                ),
            });
        }

        let mut levels = [0i64; 3];
        for ((slot, part), level) in levels.iter_mut().zip(&parts).zip(ScoreLevel::ALL) {
            let part = part.trim();
            let digits = part.strip_suffix(level.label()).ok_or_else(|| ScoreParseError {
                message: format!("part '{}' must end with '{}'", part, level.label()),
            })?;
            *slot = digits.parse::<i64>().map_err(|e| ScoreParseError {
                message: format!("bad {} value '{}': {}", level.label(), digits, e),
            })?;
        }

        Ok(Self::from_level_numbers(&levels))
    }

    fn to_string_repr(&self) -> String {
        self.to_string()
    }
}
