//! Core constraint types.
//!
//! Constraint identity, the direction of a constraint's impact, and the
//! weighted contribution a single constraint match makes to the score.

use crate::score::{Score, ScoreLevel};

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use rota_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("rota", "Unassigned task");
/// assert_eq!(cr.full_name(), "rota/Unassigned task");
///
/// let simple = ConstraintRef::new("", "Simple");
/// assert_eq!(simple.full_name(), "Simple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    /// Creates a new constraint reference.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

/// Type of impact a constraint has on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactType {
    /// Penalize (subtract from score).
    Penalty,
    /// Reward (add to score).
    Reward,
}

impl ImpactType {
    /// Returns `-1` for penalties and `+1` for rewards.
    #[inline]
    pub const fn sign(self) -> i64 {
        match self {
            ImpactType::Penalty => -1,
            ImpactType::Reward => 1,
        }
    }
}

/// A weighted contribution to one score level.
///
/// `magnitude` is always the unsigned size of the effect; the sign comes
/// from `impact`.
///
/// # Example
///
/// ```
/// use rota_core::{HardMediumSoftScore, ImpactType, ScoreContribution, ScoreLevel};
///
/// let fairness = ScoreContribution::new(ScoreLevel::Soft, 1600, ImpactType::Penalty);
/// assert_eq!(fairness.signed_magnitude(), -1600);
/// assert_eq!(fairness.to_score::<HardMediumSoftScore>(), HardMediumSoftScore::of_soft(-1600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreContribution {
    /// Level the contribution applies to.
    pub level: ScoreLevel,
    /// Unsigned size of the contribution.
    pub magnitude: i64,
    /// Whether the contribution is subtracted or added.
    pub impact: ImpactType,
}

impl ScoreContribution {
    /// Creates a new contribution.
    pub const fn new(level: ScoreLevel, magnitude: i64, impact: ImpactType) -> Self {
        Self {
            level,
            magnitude,
            impact,
        }
    }

    /// Returns the magnitude with the impact's sign applied.
    #[inline]
    pub const fn signed_magnitude(&self) -> i64 {
        self.impact.sign() * self.magnitude
    }

    /// Converts this contribution into a score of type `Sc`.
    #[inline]
    pub fn to_score<Sc: Score>(&self) -> Sc {
        Sc::of_level(self.level, self.signed_magnitude())
    }
}
