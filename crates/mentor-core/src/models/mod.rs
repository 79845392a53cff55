//! Data models for learning plans, days, tasks, and quizzes.
//!
//! This module contains the core domain models of the Mentor study-plan
//! organizer. Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! # Model Hierarchy
//!
//! ```text
//! LearningPlan ─── Day ─┬─ Task ─── Resource
//!                       └─ Session
//! ```
//!
//! - A [`LearningPlan`] is a multi-day curriculum for one topic.
//! - A [`Day`] is one unit of the plan, addressed by its 1-based day number.
//!   Day numbers are unique within a plan and are the addressing key for
//!   all mutations.
//! - A [`Task`] is one completable item within a day, optionally linked to
//!   [`Resource`] references.
//! - A [`Session`] is one contiguous interval of tracked study time. At most
//!   one session per day is open (`ended_at == None`) and it is always the
//!   last element of the day's session sequence.
//! - A [`QuizQuestion`] is one multiple-choice question produced by the AI
//!   service for a day's content.

pub mod day;
pub mod plan;
pub mod quiz;
pub mod status;
pub mod task;


// Re-export all public types at the models level
pub use day::{Day, Session};
pub use plan::LearningPlan;
pub use quiz::QuizQuestion;
pub use status::DayStatus;
pub use task::{Resource, ResourceKind, Task};
