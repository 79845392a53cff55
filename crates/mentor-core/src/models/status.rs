//! Display status classification for calendar days.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of computed day statuses.
///
/// The classification precedence is fixed: a fully completed day wins over
/// everything; otherwise a past day is missed, today's day is today, and
/// anything else is upcoming. A day with zero tasks is never completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Every task on the day is done (and there is at least one task)
    Completed,

    /// The day's date has passed without all tasks completed
    Missed,

    /// The day's date is today
    Today,

    /// The day is still ahead
    #[default]
    Upcoming,
}

impl FromStr for DayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(DayStatus::Completed),
            "missed" => Ok(DayStatus::Missed),
            "today" => Ok(DayStatus::Today),
            "upcoming" => Ok(DayStatus::Upcoming),
            _ => Err(format!("Invalid day status: {s}")),
        }
    }
}

impl DayStatus {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Missed => "missed",
            DayStatus::Today => "today",
            DayStatus::Upcoming => "upcoming",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - every task on the day is done
    /// - `✗ Missed` - the date passed with tasks left open
    /// - `● Today` - the day scheduled for today
    /// - `○ Upcoming` - still ahead
    pub fn with_icon(&self) -> &'static str {
        match self {
            DayStatus::Completed => "✓ Completed",
            DayStatus::Missed => "✗ Missed",
            DayStatus::Today => "● Today",
            DayStatus::Upcoming => "○ Upcoming",
        }
    }

    /// Bare icon for compact calendar cells.
    pub fn icon(&self) -> &'static str {
        match self {
            DayStatus::Completed => "✓",
            DayStatus::Missed => "✗",
            DayStatus::Today => "●",
            DayStatus::Upcoming => "○",
        }
    }
}
