//! Plan and quiz generation on top of the text-model port.
//!
//! The generator owns prompt construction, response repair, and the
//! normalization of loosely shaped model output into domain models. Task
//! identifiers are minted fresh (uuid v4) for every generated or refined
//! task, so they never collide with prior state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{prompts, repair, CompletionRequest, TextModel};
use crate::error::{OrganizerError, Result};
use crate::models::{Day, LearningPlan, QuizQuestion, Resource, ResourceKind, Task};
use crate::params::GeneratePlan;

/// Default question count for a generated quiz.
pub const DEFAULT_QUIZ_COUNT: usize = 5;

/// Client for the generative-AI service: builds prompts, invokes the
/// [`TextModel`] port, and repairs/normalizes the responses.
pub struct PlanGenerator {
    model: Arc<dyn TextModel>,
    plan_model: String,
    quiz_model: String,
}

impl PlanGenerator {
    /// Creates a generator over a text-model port and the model identifiers
    /// to request for plan and quiz work.
    pub fn new(model: Arc<dyn TextModel>, plan_model: String, quiz_model: String) -> Self {
        Self {
            model,
            plan_model,
            quiz_model,
        }
    }

    /// Generates a fresh learning plan.
    ///
    /// Search grounding is requested so the service can verify resource
    /// URLs before returning them.
    ///
    /// # Errors
    ///
    /// * `OrganizerError::Service` - transport/service failure (propagated
    ///   unmodified, no retry)
    /// * `OrganizerError::MalformedResponse` - no JSON could be recovered
    /// * `OrganizerError::EmptyResult` - the model returned zero days
    pub async fn generate(&self, params: &GeneratePlan) -> Result<LearningPlan> {
        params.validate()?;

        let request = CompletionRequest {
            model: self.plan_model.clone(),
            system: prompts::PLAN_SYSTEM.to_string(),
            prompt: prompts::plan_prompt(params),
            web_search: true,
            json_output: false,
        };
        let text = self.model.complete(&request).await?;

        let days = parse_days(&text)?;
        Ok(LearningPlan::new(
            params.topic.clone(),
            params.daily_time.clone(),
            days,
        ))
    }

    /// Produces a replacement day sequence for an existing plan.
    ///
    /// Only a simplified outline of the plan (day numbers, titles,
    /// descriptions, task texts, resources) goes into the prompt - notes
    /// and study sessions are stripped so the model edits a minimal
    /// representation. The caller applies the result via
    /// [`LearningPlan::replace_days`], which recomputes the duration and
    /// advances the update timestamp.
    pub async fn refine(&self, plan: &LearningPlan, instruction: &str) -> Result<Vec<Day>> {
        let outline = serde_json::to_string_pretty(&PlanOutline::from(plan))?;

        let request = CompletionRequest {
            model: self.plan_model.clone(),
            system: prompts::REFINE_SYSTEM.to_string(),
            prompt: prompts::refine_prompt(&outline, instruction),
            web_search: true,
            json_output: false,
        };
        let text = self.model.complete(&request).await?;

        parse_days(&text)
    }

    /// Generates a quiz for a block of study material.
    ///
    /// Structured-output mode is requested; the repair cascade still runs
    /// for services that answer with prose anyway.
    pub async fn generate_quiz(&self, context: &str, count: usize) -> Result<Vec<QuizQuestion>> {
        let request = CompletionRequest {
            model: self.quiz_model.clone(),
            system: prompts::QUIZ_SYSTEM.to_string(),
            prompt: prompts::quiz_prompt(context, count),
            web_search: false,
            json_output: true,
        };
        let text = self.model.complete(&request).await?;

        let value = repair::recover_json(&text)?;
        let raw: RawQuiz =
            serde_json::from_value(value).map_err(|_| OrganizerError::MalformedResponse)?;

        let questions: Vec<QuizQuestion> = raw
            .into_questions()
            .into_iter()
            .map(|q| QuizQuestion {
                question: q.question,
                options: q.options,
                answer_index: q.answer_index,
                explanation: q.explanation,
            })
            .collect();

        if questions.is_empty() {
            return Err(OrganizerError::EmptyResult { what: "questions" });
        }
        if !questions.iter().all(QuizQuestion::is_well_formed) {
            return Err(OrganizerError::MalformedResponse);
        }
        Ok(questions)
    }
}

/// Repairs a plan-shaped response and normalizes it into domain days.
fn parse_days(text: &str) -> Result<Vec<Day>> {
    let value = repair::recover_json(text)?;
    let raw: RawPlan =
        serde_json::from_value(value).map_err(|_| OrganizerError::MalformedResponse)?;

    if raw.days.is_empty() {
        return Err(OrganizerError::EmptyResult { what: "days" });
    }

    // The model's day numbering is not trusted: days are renumbered 1..=N
    // in the order given, so duplicates or gaps cannot corrupt addressing.
    Ok(raw
        .days
        .into_iter()
        .enumerate()
        .map(|(index, day)| Day {
            number: index as u32 + 1,
            title: day.title,
            description: day.description,
            tasks: day.tasks.into_iter().map(RawTask::normalize).collect(),
            notes: None,
            sessions: vec![],
        })
        .collect())
}

// ----------------------------------------------------------------------------
// Raw response shapes
//
// Deliberately loose: every field the model tends to omit has a default,
// and task entries may be plain strings.
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlan {
    #[serde(default)]
    days: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tasks: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTask {
    Text(String),
    Detailed {
        text: String,
        #[serde(default)]
        resources: Vec<RawResource>,
    },
}

impl RawTask {
    /// A plain string becomes a task with no resources; an object
    /// contributes its text and resources. Either way the task gets a
    /// fresh id.
    fn normalize(self) -> Task {
        match self {
            RawTask::Text(text) => Task::new(text, vec![]),
            RawTask::Detailed { text, resources } => Task::new(
                text,
                resources
                    .into_iter()
                    .map(|r| Resource {
                        title: r.title,
                        url: r.url,
                        kind: ResourceKind::from_tag(&r.kind),
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawResource {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default, alias = "type", alias = "category")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawQuiz {
    Bare(Vec<RawQuestion>),
    Wrapped { questions: Vec<RawQuestion> },
}

impl RawQuiz {
    fn into_questions(self) -> Vec<RawQuestion> {
        match self {
            RawQuiz::Bare(questions) | RawQuiz::Wrapped { questions } => questions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    #[serde(alias = "correctAnswerIndex", alias = "correct_answer_index")]
    answer_index: usize,
    #[serde(default)]
    explanation: String,
}

// ----------------------------------------------------------------------------
// Simplified plan view for refinement prompts
// ----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PlanOutline<'a> {
    topic: &'a str,
    daily_time: &'a str,
    days: Vec<DayOutline<'a>>,
}

#[derive(Debug, Serialize)]
struct DayOutline<'a> {
    day: u32,
    title: &'a str,
    description: &'a str,
    tasks: Vec<TaskOutline<'a>>,
}

#[derive(Debug, Serialize)]
struct TaskOutline<'a> {
    text: &'a str,
    resources: &'a [Resource],
}

impl<'a> From<&'a LearningPlan> for PlanOutline<'a> {
    fn from(plan: &'a LearningPlan) -> Self {
        Self {
            topic: &plan.topic,
            daily_time: &plan.daily_time,
            days: plan
                .days
                .iter()
                .map(|day| DayOutline {
                    day: day.number,
                    title: &day.title,
                    description: &day.description,
                    tasks: day
                        .tasks
                        .iter()
                        .map(|task| TaskOutline {
                            text: &task.text,
                            resources: &task.resources,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
