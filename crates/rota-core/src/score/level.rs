/// Score level representing a constraint priority.
///
/// Maps to the semantic meaning of each level index within a [`Score`](super::Score).
/// Levels are declared from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ScoreLevel {
    /// Feasibility: a rota with any hard penalty cannot be used.
    Hard,
    /// Assignment quality.
    Medium,
    /// Fairness.
    Soft,
}

impl ScoreLevel {
    /// All levels, highest priority first.
    pub const ALL: [ScoreLevel; 3] = [ScoreLevel::Hard, ScoreLevel::Medium, ScoreLevel::Soft];

    /// Returns the lowercase label used in score strings.
    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Hard => "hard",
            ScoreLevel::Medium => "medium",
            ScoreLevel::Soft => "soft",
        }
    }
}
