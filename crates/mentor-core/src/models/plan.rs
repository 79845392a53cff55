//! Learning plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Day;

/// Represents a complete multi-day study plan for one topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningPlan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// Topic the plan teaches
    pub topic: String,

    /// Total duration of the plan in days
    pub duration_days: u32,

    /// Free-text daily time budget (e.g. "2 hours per evening")
    pub daily_time: String,

    /// Timestamp when the plan was started (UTC); day 1 falls on this date
    pub started_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Ordered day sequence
    #[serde(default)]
    pub days: Vec<Day>,
}

impl LearningPlan {
    /// Assembles a new plan around a generated day sequence, stamped with the
    /// current time.
    pub fn new(topic: String, daily_time: String, days: Vec<Day>) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            topic,
            duration_days: days.len() as u32,
            daily_time,
            started_at: now,
            updated_at: now,
            days,
        }
    }

    /// Replaces the day sequence after a refinement.
    ///
    /// Duration is recomputed as the new day count and `updated_at` advances
    /// to the current time.
    pub fn replace_days(&mut self, days: Vec<Day>) {
        self.duration_days = days.len() as u32;
        self.days = days;
        self.updated_at = Timestamp::now();
    }

    /// Looks up a day by its 1-based day number.
    pub fn day(&self, number: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.number == number)
    }

    /// Mutable day lookup by its 1-based day number.
    pub fn day_mut(&mut self, number: u32) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.number == number)
    }
}
