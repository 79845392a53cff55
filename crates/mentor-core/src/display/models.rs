//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, with status icons
//! and structured sections. Elapsed study time is computed at format time,
//! so an open session ticks forward on every render.

use std::fmt;

use jiff::Timestamp;

use super::datetime::{Duration, LocalDateTime};
use crate::calendar;
use crate::models::{Day, DayStatus, LearningPlan, QuizQuestion, ResourceKind, Task};

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LearningPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.topic)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Duration: {} days", self.duration_days)?;
        writeln!(f, "- Daily time: {}", self.daily_time)?;
        writeln!(f, "- Started: {}", LocalDateTime(&self.started_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.days.is_empty() {
            writeln!(f, "\n## Days")?;
            writeln!(f)?;
            for day in &self.days {
                let done = day.tasks.iter().filter(|t| t.done).count();
                writeln!(
                    f,
                    "- Day {}: {} ({}/{} tasks)",
                    day.number,
                    day.title,
                    done,
                    day.tasks.len()
                )?;
            }
        } else {
            writeln!(f, "\nNo days in this plan.")?;
        }

        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}: {}", self.number, self.title)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(f, "### Tasks")?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks for this day.")?;
        } else {
            for (position, task) in self.tasks.iter().enumerate() {
                write!(f, "{}", TaskLine { position, task })?;
            }
        }

        let tracked = calendar::elapsed_seconds(self, Timestamp::now());
        if tracked > calendar::ELAPSED_DISPLAY_THRESHOLD_SECS {
            writeln!(f)?;
            write!(f, "Time tracked: {}", Duration(tracked))?;
            if self.open_session().is_some() {
                write!(f, " (session running)")?;
            }
            writeln!(f)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "\n### Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

/// A task rendered as one checklist line with its 1-based position.
struct TaskLine<'a> {
    position: usize,
    task: &'a Task,
}

impl<'a> fmt::Display for TaskLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.task.done { "x" } else { " " };
        writeln!(
            f,
            "- [{mark}] {}. {}",
            self.position + 1,
            self.task.text
        )?;
        for resource in &self.task.resources {
            writeln!(
                f,
                "    - [{}]({}) ({})",
                resource.title, resource.url, resource.kind
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for QuizQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.question)?;
        writeln!(f)?;
        for (index, option) in self.options.iter().enumerate() {
            let letter = (b'a' + index as u8) as char;
            writeln!(f, "  {letter}) {option}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;

    fn sample_day() -> Day {
        Day {
            number: 2,
            title: "Pointers".to_string(),
            description: "1. Read about ownership".to_string(),
            tasks: vec![
                Task {
                    done: true,
                    ..Task::new("Read chapter 4".to_string(), vec![])
                },
                Task::new(
                    "Watch the talk".to_string(),
                    vec![Resource {
                        title: "Ownership talk".to_string(),
                        url: "https://example.com/talk".to_string(),
                        kind: ResourceKind::Video,
                    }],
                ),
            ],
            notes: Some("Slices clicked today".to_string()),
            sessions: vec![],
        }
    }

    #[test]
    fn test_day_display_checklist_and_notes() {
        let output = sample_day().to_string();
        assert!(output.contains("## Day 2: Pointers"));
        assert!(output.contains("- [x] 1. Read chapter 4"));
        assert!(output.contains("- [ ] 2. Watch the talk"));
        assert!(output.contains("[Ownership talk](https://example.com/talk) (video)"));
        assert!(output.contains("Slices clicked today"));
        // Below the display threshold, no tracked-time line
        assert!(!output.contains("Time tracked"));
    }

    #[test]
    fn test_plan_display_summarizes_days() {
        let plan = LearningPlan::new(
            "Rust".to_string(),
            "1 hour".to_string(),
            vec![sample_day()],
        );
        let output = plan.to_string();
        assert!(output.contains("# Rust"));
        assert!(output.contains("- Duration: 1 days"));
        assert!(output.contains("Day 2: Pointers (1/2 tasks)"));
    }

    #[test]
    fn test_quiz_question_display_letters_options() {
        let question = QuizQuestion {
            question: "What moves?".to_string(),
            options: vec![
                "Knight".to_string(),
                "Rook".to_string(),
                "Pawn".to_string(),
                "King".to_string(),
            ],
            answer_index: 0,
            explanation: String::new(),
        };
        let output = question.to_string();
        assert!(output.contains("  a) Knight"));
        assert!(output.contains("  d) King"));
    }
}
