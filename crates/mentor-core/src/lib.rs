//! Core library for the Mentor study-plan organizer.
//!
//! This crate provides the business logic for AI-generated learning plans:
//! the plan collection with durable JSON storage, day/task/session
//! mutations, the calendar view model, the quiz flow, and the generation
//! client that turns unreliable model output into domain data.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): plans, days, tasks, sessions, quiz
//!   questions; all serde-serializable and implementing
//!   [`std::fmt::Display`] (via [`display`]) for markdown terminal output
//! - **Organizer** ([`organizer`]): the high-level mutation API over the
//!   persisted plan collection
//! - **AI boundary** ([`ai`]): the [`TextModel`] port plus prompt
//!   construction and JSON repair; vendor adapters live in interface crates
//! - **Calendar** ([`calendar`]): pure date-bucketing and status
//!   classification
//! - **Quiz** ([`quiz`]): the forward-only question/answer state machine
//!
//! # Quick Start
//!
//! ```rust
//! use mentor_core::OrganizerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an organizer over the default XDG state file
//! let organizer = OrganizerBuilder::new().build()?;
//!
//! // List stored plans
//! for plan in organizer.list_plans().await? {
//!     println!("{} ({} days)", plan.topic, plan.duration_days);
//! }
//!
//! // Toggle the study stopwatch on day 3 of the active plan
//! use mentor_core::params::DayNumber;
//! let session = organizer.toggle_session(&DayNumber { number: 3 }).await?;
//! println!("session open: {}", session.ended_at.is_none());
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod calendar;
pub mod display;
pub mod error;
pub mod models;
pub mod organizer;
pub mod params;
pub mod quiz;
pub mod store;

// Re-export commonly used types
pub use ai::{CompletionRequest, PlanGenerator, TextModel};
pub use display::{MonthGrid, PlanList};
pub use error::{OrganizerError, Result};
pub use models::{
    Day, DayStatus, LearningPlan, QuizQuestion, Resource, ResourceKind, Session, Task,
};
pub use organizer::{Organizer, OrganizerBuilder};
pub use quiz::{QuizFlow, QuizState};
pub use store::{StateFile, StoreState};
