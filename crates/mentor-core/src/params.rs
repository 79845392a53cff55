//! Parameter structures for Mentor operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future front ends) without framework-specific
//! derives or dependencies. Interface layers define their own wrapper types
//! (e.g. clap argument structs) and convert into these via `From` impls,
//! keeping the core free of UI framework concerns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic parameters for operations addressing a plan by ID.
///
/// Used for operations like show_plan, set_active, delete_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanId {
    /// The ID of the plan to operate on
    pub id: Uuid,
}

/// Parameters for generating a new learning plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Topic to build a curriculum for (required)
    pub topic: String,
    /// Plan length in days
    pub duration_days: u32,
    /// Free-text daily time budget (e.g. "90 minutes")
    pub daily_time: String,
}

impl GeneratePlan {
    /// Validate generation parameters.
    ///
    /// # Errors
    ///
    /// * `OrganizerError::InvalidInput` - empty topic or a zero-day duration
    pub fn validate(&self) -> crate::Result<()> {
        if self.topic.trim().is_empty() {
            return Err(crate::OrganizerError::invalid_input(
                "topic",
                "Topic must not be empty",
            ));
        }
        if self.duration_days == 0 {
            return Err(crate::OrganizerError::invalid_input(
                "duration_days",
                "Plan duration must be at least one day",
            ));
        }
        Ok(())
    }
}

/// Parameters for refining the active plan with a free-text instruction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefinePlan {
    /// What to change (e.g. "make week two more hands-on")
    pub instruction: String,
}

/// Parameters for toggling one task's completion flag.
///
/// The (day number, task id) pair addresses exactly one task in the active
/// plan; a pair that matches nothing makes the operation a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTask {
    /// 1-based day number within the active plan
    pub day_number: u32,
    /// ID of the task to toggle
    pub task_id: Uuid,
}

/// Parameters for replacing one day's notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNotes {
    /// 1-based day number within the active plan
    pub day_number: u32,
    /// Replacement notes text
    pub notes: String,
}

/// Parameters for operations addressing a day by number.
///
/// Used for show_day, toggle_session, and quiz generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayNumber {
    /// 1-based day number within the active plan
    pub number: u32,
}
