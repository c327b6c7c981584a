use serde::{Deserialize, Serialize};

use super::calendar::{Duty, Shift};

/// Which duties an employee may perform in which shifts.
///
/// A dense shift-by-duty table. Always fully populated; a missing cell in
/// incoming data is a validation error, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences([[bool; Duty::COUNT]; Shift::COUNT]);

impl Preferences {
    /// Builds preferences from a full table.
    pub fn new(entries: [[bool; Duty::COUNT]; Shift::COUNT]) -> Self {
        Self(entries)
    }

    /// Every duty in every shift.
    pub fn all() -> Self {
        Self([[true; Duty::COUNT]; Shift::COUNT])
    }

    /// No duty in any shift.
    pub fn none() -> Self {
        Self([[false; Duty::COUNT]; Shift::COUNT])
    }

    #[inline]
    pub fn get(&self, shift: Shift, duty: Duty) -> bool {
        self.0[shift.index()][duty.index()]
    }

    pub fn set(&mut self, shift: Shift, duty: Duty, allowed: bool) {
        self.0[shift.index()][duty.index()] = allowed;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, shift: Shift, duty: Duty, allowed: bool) -> Self {
        self.set(shift, duty, allowed);
        self
    }

    /// Returns true if no cell allows any duty.
    pub fn is_all_no(&self) -> bool {
        self.0.iter().flatten().all(|allowed| !allowed)
    }

    /// Returns the raw table, shifts first.
    pub fn entries(&self) -> &[[bool; Duty::COUNT]; Shift::COUNT] {
        &self.0
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::none()
    }
}
