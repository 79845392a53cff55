//! Command handlers bridging parsed arguments to the core organizer.
//!
//! Each handler loads what it needs, runs one core operation, and renders
//! the outcome as markdown. AI-backed commands (generate, refine, quiz)
//! construct the OpenAI adapter on demand, so everything else works without
//! credentials. AI failures are not retried; the error is shown and the
//! user re-runs the command.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::info;
use mentor_core::{
    calendar::{self, Month},
    params::{DayNumber, PlanId, ToggleTask},
    Day, LearningPlan, MonthGrid, Organizer, PlanGenerator, PlanList,
};

use crate::{
    args::{
        CalendarArgs, DayCommands, DeletePlanArgs, PlanCommands, QuizArgs, ShowPlanArgs, TaskArgs,
    },
    config::AiConfig,
    openai::OpenAiTextModel,
    quiz_runner::QuizRunner,
    renderer::TerminalRenderer,
};

/// Command handler owning the organizer and the terminal renderer.
pub struct Cli {
    organizer: Organizer,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a handler over an organizer and renderer.
    pub fn new(organizer: Organizer, renderer: TerminalRenderer) -> Self {
        Self {
            organizer,
            renderer,
        }
    }

    /// Lists all stored plans; the default command.
    pub async fn list_plans(&self) -> Result<()> {
        let plans = self.organizer.list_plans().await?;
        let active = self.organizer.active_plan().await?.map(|p| p.id);
        self.renderer
            .render(&format!("# Plans\n\n{}", PlanList::new(plans, active)))
    }

    /// Dispatches a `plan` subcommand.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => self.generate_plan(args.into()).await,
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(args).await,
            PlanCommands::Use(args) => self.use_plan(args.into()).await,
            PlanCommands::Refine(args) => self.refine_plan(args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(args).await,
        }
    }

    /// Dispatches a `day` subcommand.
    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Show(args) => {
                let day = self.organizer.get_day(&args.into()).await?;
                self.renderer.render(&day.to_string())
            }
            DayCommands::Task(args) => self.toggle_task(args).await,
            DayCommands::Notes(args) => {
                let day = self.organizer.update_notes(&args.into()).await?;
                self.renderer
                    .render(&format!("Notes updated.\n\n{day}"))
            }
            DayCommands::Session(args) => self.toggle_session(args.into()).await,
        }
    }

    /// Renders the month view of the active plan's calendar.
    pub async fn handle_calendar(&self, args: CalendarArgs) -> Result<()> {
        let plan = self.require_active_plan().await?;
        let start = local_date(&plan.started_at);
        let today = local_date(&Timestamp::now());
        let (first, last) = calendar::month_bounds(start, plan.duration_days)?;

        let month = match args.month {
            Some(text) => text
                .parse::<Month>()
                .map_err(|e| anyhow!("{e}"))?,
            // Default to the current month, clamped into the plan's range
            None => Month::of(today).clamp(first, last),
        };

        let view = calendar::month_view(start, &plan.days, month, today, Timestamp::now())?;
        self.renderer.render(&MonthGrid(view).to_string())
    }

    /// Generates a quiz for a day and runs it interactively.
    pub async fn handle_quiz(&self, args: QuizArgs) -> Result<()> {
        let day = self
            .organizer
            .get_day(&DayNumber {
                number: args.number,
            })
            .await?;

        let config = AiConfig::from_env()?;
        let generator = self.generator(&config);

        self.renderer
            .render(&format!("Generating a quiz for day {}...\n", day.number))?;
        let questions = generator
            .generate_quiz(&quiz_context(&day), args.count)
            .await
            .context("Quiz generation failed; re-run to try again")?;
        info!("Generated {} quiz questions", questions.len());

        QuizRunner::new(&self.renderer).run(questions)
    }

    async fn generate_plan(&self, params: mentor_core::params::GeneratePlan) -> Result<()> {
        let config = AiConfig::from_env()?;
        let generator = self.generator(&config);

        self.renderer.render(&format!(
            "Generating a {}-day plan for \"{}\"...\n",
            params.duration_days, params.topic
        ))?;
        let plan = generator
            .generate(&params)
            .await
            .context("Plan generation failed; re-run to try again")?;
        info!("Generated plan {} with {} days", plan.id, plan.days.len());

        let plan = self.organizer.create_plan(plan).await?;
        self.renderer.render(&plan.to_string())?;
        self.render_today_hint(&plan)
    }

    async fn show_plan(&self, args: ShowPlanArgs) -> Result<()> {
        let plan = match args.id {
            Some(id) => self
                .organizer
                .get_plan(&PlanId { id })
                .await?
                .ok_or(mentor_core::OrganizerError::PlanNotFound { id })?,
            None => self.require_active_plan().await?,
        };
        self.renderer.render(&plan.to_string())?;
        self.render_today_hint(&plan)
    }

    async fn use_plan(&self, params: PlanId) -> Result<()> {
        let plan = self.organizer.set_active(&params).await?;
        self.renderer
            .render(&format!("Active plan is now \"{}\".", plan.topic))
    }

    async fn refine_plan(&self, params: mentor_core::params::RefinePlan) -> Result<()> {
        let mut plan = self.require_active_plan().await?;

        let config = AiConfig::from_env()?;
        let generator = self.generator(&config);

        self.renderer.render("Refining the plan...\n")?;
        let days = generator
            .refine(&plan, &params.instruction)
            .await
            .context("Plan refinement failed; re-run to try again")?;
        info!("Refinement produced {} days for plan {}", days.len(), plan.id);

        plan.replace_days(days);
        let plan = self.organizer.apply_plan_update(plan).await?;
        self.renderer.render(&plan.to_string())
    }

    async fn delete_plan(&self, args: DeletePlanArgs) -> Result<()> {
        if !args.confirm {
            return self.renderer.render(
                "Deletion is permanent. Re-run with --confirm to delete the plan.",
            );
        }

        match self.organizer.delete_plan(&PlanId { id: args.id }).await? {
            Some(plan) => self
                .renderer
                .render(&format!("Deleted plan \"{}\".", plan.topic)),
            None => self
                .renderer
                .render(&format!("No plan with ID {} found.", args.id)),
        }
    }

    async fn toggle_task(&self, args: TaskArgs) -> Result<()> {
        let day = self
            .organizer
            .get_day(&DayNumber {
                number: args.number,
            })
            .await?;

        // The CLI addresses tasks by their 1-based position; the store
        // contract addresses them by id.
        let task = args
            .position
            .checked_sub(1)
            .and_then(|i| day.tasks.get(i))
            .ok_or_else(|| {
                anyhow!(
                    "Day {} has {} tasks; no task at position {}",
                    args.number,
                    day.tasks.len(),
                    args.position
                )
            })?;

        let toggled = self
            .organizer
            .toggle_task(&ToggleTask {
                day_number: args.number,
                task_id: task.id,
            })
            .await?;

        match toggled {
            Some(done) => {
                let state = if done { "done" } else { "not done" };
                let day = self
                    .organizer
                    .get_day(&DayNumber {
                        number: args.number,
                    })
                    .await?;
                self.renderer
                    .render(&format!("Task {} marked {state}.\n\n{day}", args.position))
            }
            None => bail!("The task disappeared while toggling; try again"),
        }
    }

    async fn toggle_session(&self, params: DayNumber) -> Result<()> {
        let day_number = params.number;
        let session = self.organizer.toggle_session(&params).await?;

        let message = match session.ended_at {
            None => format!("Stopwatch started for day {day_number}."),
            Some(_) => {
                let day = self.organizer.get_day(&params).await?;
                let total = calendar::elapsed_seconds(&day, Timestamp::now());
                format!(
                    "Stopwatch stopped for day {day_number}. Total tracked: {}.",
                    mentor_core::display::Duration(total)
                )
            }
        };
        self.renderer.render(&message)
    }

    /// Points out today's day when today falls inside the plan's window.
    fn render_today_hint(&self, plan: &LearningPlan) -> Result<()> {
        let start = local_date(&plan.started_at);
        let today = local_date(&Timestamp::now());
        if let Some(number) = calendar::current_day_number(start, plan.duration_days, today) {
            self.renderer.render(&format!(
                "\nToday is day {number}. See it with `mentor day show {number}`."
            ))?;
        }
        Ok(())
    }

    async fn require_active_plan(&self) -> Result<LearningPlan> {
        Ok(self
            .organizer
            .active_plan()
            .await?
            .ok_or(mentor_core::OrganizerError::NoActivePlan)?)
    }

    fn generator(&self, config: &AiConfig) -> PlanGenerator {
        PlanGenerator::new(
            Arc::new(OpenAiTextModel::new(&config.api_key)),
            config.plan_model.clone(),
            config.quiz_model.clone(),
        )
    }
}

/// The calendar date of a timestamp in the system timezone.
fn local_date(timestamp: &Timestamp) -> Date {
    timestamp.to_zoned(TimeZone::system()).date()
}

/// Study material a quiz is generated from: the day's title, description,
/// and task texts. Notes and sessions stay private to the learner.
fn quiz_context(day: &Day) -> String {
    let mut context = format!("Day {}: {}\n\n{}\n", day.number, day.title, day.description);
    if !day.tasks.is_empty() {
        context.push_str("\nTasks:\n");
        for task in &day.tasks {
            context.push_str(&format!("- {}\n", task.text));
        }
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::Task;

    #[test]
    fn test_quiz_context_includes_tasks_but_not_notes() {
        let day = Day {
            number: 3,
            title: "Tactics".to_string(),
            description: "1. Solve puzzles".to_string(),
            tasks: vec![Task::new("Solve 10 puzzles".to_string(), vec![])],
            notes: Some("secret note".to_string()),
            sessions: vec![],
        };

        let context = quiz_context(&day);
        assert!(context.contains("Day 3: Tactics"));
        assert!(context.contains("Solve 10 puzzles"));
        assert!(!context.contains("secret note"));
    }
}
