//! Plan-level operations for the Organizer.

use super::Organizer;
use crate::{
    error::{OrganizerError, Result},
    models::LearningPlan,
    params::PlanId,
};

impl Organizer {
    /// Stores a freshly generated plan.
    ///
    /// The plan is prepended to the collection and becomes the active plan.
    pub async fn create_plan(&self, plan: LearningPlan) -> Result<LearningPlan> {
        self.with_state(move |state| {
            state.active = Some(plan.id);
            state.plans.insert(0, plan.clone());
            Ok(plan)
        })
        .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &PlanId) -> Result<Option<LearningPlan>> {
        let plan_id = params.id;

        self.read_state(move |state| Ok(state.plans.iter().find(|p| p.id == plan_id).cloned()))
            .await
    }

    /// Lists all stored plans, most recently created first.
    pub async fn list_plans(&self) -> Result<Vec<LearningPlan>> {
        self.read_state(|state| Ok(state.plans.clone())).await
    }

    /// Returns the active plan, if any.
    pub async fn active_plan(&self) -> Result<Option<LearningPlan>> {
        self.read_state(|state| Ok(state.active_plan().cloned()))
            .await
    }

    /// Marks an existing plan as active.
    pub async fn set_active(&self, params: &PlanId) -> Result<LearningPlan> {
        let plan_id = params.id;

        self.with_state(move |state| {
            let plan = state
                .plans
                .iter()
                .find(|p| p.id == plan_id)
                .cloned()
                .ok_or(OrganizerError::PlanNotFound { id: plan_id })?;
            state.active = Some(plan_id);
            Ok(plan)
        })
        .await
    }

    /// Permanently deletes a plan.
    ///
    /// If the deleted plan was active, the collection's new head (or
    /// nothing, when the collection empties) becomes active. Returns the
    /// removed plan for confirmation, or `None` if the ID matched nothing.
    pub async fn delete_plan(&self, params: &PlanId) -> Result<Option<LearningPlan>> {
        let plan_id = params.id;

        self.with_state(move |state| {
            let index = state.plans.iter().position(|p| p.id == plan_id);
            let Some(index) = index else {
                return Ok(None);
            };

            let removed = state.plans.remove(index);
            if state.active == Some(plan_id) {
                state.active = state.plans.first().map(|p| p.id);
            }
            Ok(Some(removed))
        })
        .await
    }

    /// Replaces one stored plan wholesale, matched by ID.
    ///
    /// Used after AI refinement produced an updated day sequence.
    pub async fn apply_plan_update(&self, plan: LearningPlan) -> Result<LearningPlan> {
        self.with_state(move |state| {
            let slot = state
                .plans
                .iter_mut()
                .find(|p| p.id == plan.id)
                .ok_or(OrganizerError::PlanNotFound { id: plan.id })?;
            *slot = plan.clone();
            Ok(plan)
        })
        .await
    }
}
