//! The closed enumerations a rota is indexed by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of ten half-day slots, two per weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    MondayAm,
    MondayPm,
    TuesdayAm,
    TuesdayPm,
    WednesdayAm,
    WednesdayPm,
    ThursdayAm,
    ThursdayPm,
    FridayAm,
    FridayPm,
}

impl Shift {
    /// Number of shifts in a week.
    pub const COUNT: usize = 10;

    /// All shifts in week order.
    pub const ALL: [Shift; Shift::COUNT] = [
        Shift::MondayAm,
        Shift::MondayPm,
        Shift::TuesdayAm,
        Shift::TuesdayPm,
        Shift::WednesdayAm,
        Shift::WednesdayPm,
        Shift::ThursdayAm,
        Shift::ThursdayPm,
        Shift::FridayAm,
        Shift::FridayPm,
    ];

    /// Position of this shift in the week, from 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Weekday of this shift, Monday = 0.
    #[inline]
    pub fn day_of_week(self) -> usize {
        self.index() / 2
    }

    /// Returns the shift at `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Shift> {
        Shift::ALL.get(index).copied()
    }

    /// Returns true for the afternoon half of the day.
    pub fn is_afternoon(self) -> bool {
        self.index() % 2 == 1
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
        let half = if self.is_afternoon() { "PM" } else { "AM" };
        write!(f, "{} {}", DAYS[self.day_of_week()], half)
    }
}

/// Kind of diagnostic work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Duty {
    Fish,
    Ds,
    LateDs,
    Ss,
}

impl Duty {
    /// Number of duty kinds.
    pub const COUNT: usize = 4;

    /// All duties in statistics order.
    pub const ALL: [Duty; Duty::COUNT] = [Duty::Fish, Duty::Ds, Duty::LateDs, Duty::Ss];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the duty at `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Duty> {
        Duty::ALL.get(index).copied()
    }

    /// DS and LATE_DS share a weekly limit.
    #[inline]
    pub fn is_ds_family(self) -> bool {
        matches!(self, Duty::Ds | Duty::LateDs)
    }
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Duty::Fish => "FISH",
            Duty::Ds => "DS",
            Duty::LateDs => "LATE_DS",
            Duty::Ss => "SS",
        };
        f.write_str(label)
    }
}

/// An employee's availability for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Available,
    Unavailable,
    WorkingFromHome,
    AnnualLeave,
    DoesNotWork,
}

impl Status {
    /// Returns true if the shift counts toward the employee's workload
    /// denominator, whether or not they can take a task in it.
    #[inline]
    pub fn counts_as_working(self) -> bool {
        matches!(
            self,
            Status::Available | Status::Unavailable | Status::WorkingFromHome
        )
    }
}

/// Organizational grouping of employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    Principals,
    AmlMds,
    MpnCml,
    Lymphoid,
}

impl Team {
    pub const ALL: [Team; 4] = [Team::Principals, Team::AmlMds, Team::MpnCml, Team::Lymphoid];

    /// Title shown in rota sheets.
    pub fn title(self) -> &'static str {
        match self {
            Team::Principals => "Principals",
            Team::AmlMds => "AML/MDS",
            Team::MpnCml => "MPN/CML",
            Team::Lymphoid => "Lymphoid",
        }
    }

    /// Looks a team up by its sheet title.
    pub fn from_title(title: &str) -> Option<Team> {
        Team::ALL.into_iter().find(|team| team.title() == title)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
