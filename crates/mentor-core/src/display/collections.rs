//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use uuid::Uuid;

use super::datetime::LocalDateTime;
use crate::models::LearningPlan;

/// Newtype wrapper for displaying the stored plan collection.
///
/// Formats each plan as a compact summary line group and marks the active
/// plan. Handles empty collections gracefully.
pub struct PlanList {
    plans: Vec<LearningPlan>,
    active: Option<Uuid>,
}

impl PlanList {
    /// Wraps a plan collection and the active selection for display.
    pub fn new(plans: Vec<LearningPlan>, active: Option<Uuid>) -> Self {
        Self { plans, active }
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.plans.len()
    }
}

impl fmt::Display for PlanList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return writeln!(f, "No plans yet. Try `mentor plan generate <topic>`.");
        }

        for plan in &self.plans {
            let marker = if self.active == Some(plan.id) {
                " (active)"
            } else {
                ""
            };
            writeln!(f, "## {}{marker}", plan.topic)?;
            writeln!(f)?;
            writeln!(f, "- **ID**: {}", plan.id)?;
            writeln!(f, "- **Duration**: {} days", plan.duration_days)?;
            writeln!(f, "- **Started**: {}", LocalDateTime(&plan.started_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan(topic: &str) -> LearningPlan {
        LearningPlan::new(topic.to_string(), "1 hour".to_string(), vec![])
    }

    #[test]
    fn test_empty_collection_message() {
        let list = PlanList::new(vec![], None);
        assert!(list.to_string().contains("No plans yet"));
    }

    #[test]
    fn test_active_plan_is_marked() {
        let first = sample_plan("Rust");
        let second = sample_plan("Go");
        let active = first.id;

        let output = PlanList::new(vec![first, second], Some(active)).to_string();
        assert!(output.contains("## Rust (active)"));
        assert!(output.contains("## Go\n"));
    }
}
