//! Day-level operations for the Organizer.
//!
//! All day mutations address the active plan; the 1-based day number is the
//! addressing key.

use jiff::Timestamp;

use super::Organizer;
use crate::{
    error::{OrganizerError, Result},
    models::{Day, Session},
    params::{DayNumber, ToggleTask, UpdateNotes},
};

impl Organizer {
    /// Retrieves one day of the active plan.
    pub async fn get_day(&self, params: &DayNumber) -> Result<Day> {
        let number = params.number;

        self.read_state(move |state| {
            let plan = state.active_plan().ok_or(OrganizerError::NoActivePlan)?;
            plan.day(number)
                .cloned()
                .ok_or(OrganizerError::DayNotFound { number })
        })
        .await
    }

    /// Flips the completion flag of exactly one task in the active plan.
    ///
    /// Returns the new completion state, or `None` when the (day, task)
    /// pair matches nothing - a silent no-op by design of the store
    /// contract.
    pub async fn toggle_task(&self, params: &ToggleTask) -> Result<Option<bool>> {
        let day_number = params.day_number;
        let task_id = params.task_id;

        self.with_state(move |state| {
            let plan = state.active_plan_mut().ok_or(OrganizerError::NoActivePlan)?;
            let task = plan
                .day_mut(day_number)
                .and_then(|day| day.tasks.iter_mut().find(|t| t.id == task_id));

            Ok(task.map(|t| {
                t.done = !t.done;
                t.done
            }))
        })
        .await
    }

    /// Replaces the notes of one day in the active plan.
    pub async fn update_notes(&self, params: &UpdateNotes) -> Result<Day> {
        let day_number = params.day_number;
        let notes = params.notes.clone();

        self.with_state(move |state| {
            let plan = state.active_plan_mut().ok_or(OrganizerError::NoActivePlan)?;
            let day = plan
                .day_mut(day_number)
                .ok_or(OrganizerError::DayNotFound { number: day_number })?;

            day.notes = if notes.is_empty() { None } else { Some(notes) };
            Ok(day.clone())
        })
        .await
    }

    /// Start/stop toggle for a day's study stopwatch.
    ///
    /// If the day's last session is open it is closed with the current
    /// time; otherwise a new open session is appended. The appended-last
    /// position keeps the "one open session, always last" invariant.
    /// Returns the session that was opened or closed.
    pub async fn toggle_session(&self, params: &DayNumber) -> Result<Session> {
        let day_number = params.number;

        self.with_state(move |state| {
            let plan = state.active_plan_mut().ok_or(OrganizerError::NoActivePlan)?;
            let day = plan
                .day_mut(day_number)
                .ok_or(OrganizerError::DayNotFound { number: day_number })?;

            let now = Timestamp::now();
            match day.sessions.last_mut() {
                Some(last) if last.ended_at.is_none() => {
                    last.ended_at = Some(now);
                    Ok(last.clone())
                }
                _ => {
                    let session = Session {
                        started_at: now,
                        ended_at: None,
                    };
                    day.sessions.push(session.clone());
                    Ok(session)
                }
            }
        })
        .await
    }
}
