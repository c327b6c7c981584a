//! Score types for ranking candidate rotas
//!
//! A score is an immutable value compared level by level. The optimizer
//! relies on that ordering to eliminate hard violations before it trades
//! medium or soft quality.

mod hard_medium_soft;
mod level;
mod traits;

#[cfg(test)]
mod tests;

pub use hard_medium_soft::HardMediumSoftScore;
pub use level::ScoreLevel;
pub use traits::{ParseableScore, Score, ScoreParseError};
