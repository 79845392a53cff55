//! Prompt templates for plan generation, refinement, and quiz creation.
//!
//! Templates use `{placeholder}` markers filled by simple string
//! replacement. Each prompt carries a strict output-contract section; the
//! repair cascade in [`super::repair`] handles services that ignore it
//! anyway.

use crate::params::GeneratePlan;

pub(crate) const PLAN_SYSTEM: &str = r#"You are a curriculum designer building day-by-day study plans.

Rules for every plan you produce:
- Each day must be a self-contained unit of work that fits the learner's stated daily time budget.
- Day descriptions are short step-by-step instructions in plain markdown (numbered steps, no headings).
- Each task is one concrete, checkable action.
- Attach at most 2 resources per task. Only include resources with real, working URLs - verify them with web search before answering. When in doubt, attach fewer resources.
- Resource kinds are exactly one of: "video", "blog", "documentation", "other".

Output contract:
Respond with a single JSON object and nothing else:
{
  "days": [
    {
      "day": 1,
      "title": "...",
      "description": "1. ...\n2. ...",
      "tasks": [
        {"text": "...", "resources": [{"title": "...", "url": "...", "kind": "video"}]}
      ]
    }
  ]
}"#;

const PLAN_TEMPLATE: &str = r#"Build a {duration}-day study plan for the topic below.

TOPIC:
{topic}

DAILY TIME BUDGET:
{daily_time}

Spread the topic across all {duration} days, from fundamentals to more advanced material. Follow the output contract exactly."#;

pub(crate) const REFINE_SYSTEM: &str = r#"You are revising an existing day-by-day study plan according to the learner's instruction.

Rules:
- Keep everything the instruction does not ask you to change.
- You may add, remove, merge, or reorder days; renumber them 1..N in the result.
- Tasks and resources follow the same rules as the original plan: concrete checkable tasks, at most 2 resources each, real URLs only, resource kinds one of "video", "blog", "documentation", "other".

Output contract:
Respond with a single JSON object and nothing else, in the same shape the plan is given to you:
{"days": [{"day": 1, "title": "...", "description": "...", "tasks": [...]}]}"#;

const REFINE_TEMPLATE: &str = r#"CURRENT PLAN:
{plan}

INSTRUCTION:
{instruction}

Return the complete revised day list following the output contract."#;

pub(crate) const QUIZ_SYSTEM: &str = r#"You write short multiple-choice quizzes that check understanding of study material.

Rules for every question:
- Exactly four options.
- Exactly one correct option, identified by its 0-based index.
- A one- or two-sentence explanation of the correct answer.
- Questions must be answerable from the provided material alone.

Output contract:
Respond with a single JSON array and nothing else:
[{"question": "...", "options": ["...", "...", "...", "..."], "answer_index": 0, "explanation": "..."}]"#;

const QUIZ_TEMPLATE: &str = r#"Write {count} quiz questions about the following study material.

MATERIAL:
{context}

Follow the output contract exactly."#;

/// Builds the plan-generation prompt.
pub(crate) fn plan_prompt(params: &GeneratePlan) -> String {
    PLAN_TEMPLATE
        .replace("{duration}", &params.duration_days.to_string())
        .replace("{topic}", &params.topic)
        .replace("{daily_time}", &params.daily_time)
}

/// Builds the refinement prompt around a serialized plan outline.
pub(crate) fn refine_prompt(outline: &str, instruction: &str) -> String {
    REFINE_TEMPLATE
        .replace("{plan}", outline)
        .replace("{instruction}", instruction)
}

/// Builds the quiz-generation prompt.
pub(crate) fn quiz_prompt(context: &str, count: usize) -> String {
    QUIZ_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{context}", context)
}
