use serde::{Deserialize, Serialize};

use super::calendar::Duty;

/// An employee's workload over the historical window.
///
/// Only the fairness constraint reads these counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Shifts worked in the window.
    pub shift_count: u32,
    /// Tasks performed in the window, per duty.
    pub task_counts: [u32; Duty::COUNT],
}

impl Statistics {
    pub fn new(shift_count: u32, task_counts: [u32; Duty::COUNT]) -> Self {
        Self {
            shift_count,
            task_counts,
        }
    }

    /// Total tasks of every duty. Summed in `u64`, so it cannot overflow.
    pub fn prior_task_count(&self) -> u64 {
        Duty::ALL.iter().map(|&duty| u64::from(self.task_count(duty))).sum()
    }

    /// Tasks performed for one duty.
    pub fn task_count(&self, duty: Duty) -> u32 {
        self.task_counts[duty.index()]
    }

    /// Prior tasks per prior shift, or `None` without any prior shift.
    pub fn task_load(&self) -> Option<f64> {
        if self.shift_count == 0 {
            None
        } else {
            Some(self.prior_task_count() as f64 / f64::from(self.shift_count))
        }
    }
}
