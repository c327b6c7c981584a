//! Core Score trait definition

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for score types.
///
/// A score is the single comparable value the optimizer ranks candidate
/// solutions by. Implementations must be:
/// - Immutable (operations return new instances)
/// - Thread-safe (Send + Sync)
/// - Totally ordered, highest-priority level first
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns true if no hard level is negative.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns the number of score levels.
    fn levels_count() -> usize;

    /// Returns the level values, highest priority first.
    fn to_level_numbers(&self) -> Vec<i64>;

    /// Creates a score from level numbers, highest priority first.
    ///
    /// # Panics
    /// Panics if the number of levels doesn't match `levels_count()`.
    fn from_level_numbers(levels: &[i64]) -> Self;

    /// Returns the semantic label for the score level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_count()`.
    fn level_label(index: usize) -> ScoreLevel;

    /// Returns the index of `level` within this score type, if it has one.
    fn level_index(level: ScoreLevel) -> Option<usize> {
        (0..Self::levels_count()).find(|&i| Self::level_label(i) == level)
    }

    /// Creates a score with `value` at `level` and zero elsewhere.
    ///
    /// # Panics
    /// Panics if this score type has no such level.
    fn of_level(level: ScoreLevel, value: i64) -> Self {
        let index = Self::level_index(level)
            .unwrap_or_else(|| panic!("score type has no {:?} level", level));
        let mut levels = vec![0; Self::levels_count()];
        levels[index] = value;
        Self::from_level_numbers(&levels)
    }

    /// Returns true if this score is strictly better than `other`.
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is strictly worse than `other`.
    fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }
}

/// Scores that round-trip through their string representation.
pub trait ParseableScore: Score {
    /// Parses a score such as `"0hard/-2medium/-1600soft"`.
    fn parse(s: &str) -> Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
