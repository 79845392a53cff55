//! Interactive quiz loop over the core quiz flow.
//!
//! Presents one question at a time, records the answer, and advances until
//! the flow reaches its results. The flow is strictly forward; aborting
//! and re-running the command regenerates the quiz from scratch.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use mentor_core::{QuizFlow, QuizQuestion, QuizState};

use crate::renderer::TerminalRenderer;

/// Drives a [`QuizFlow`] against stdin/stdout.
pub struct QuizRunner<'a> {
    renderer: &'a TerminalRenderer,
}

impl<'a> QuizRunner<'a> {
    pub fn new(renderer: &'a TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Runs the whole quiz and renders the results.
    pub fn run(&self, questions: Vec<QuizQuestion>) -> Result<()> {
        let mut flow = QuizFlow::new(questions)?;
        let total = flow.len();
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        while let QuizState::InProgress { index } = flow.state() {
            let Some(question) = flow.current_question() else {
                bail!("Quiz flow lost its current question");
            };
            self.renderer.render(&format!(
                "## Question {} of {total}\n\n{question}",
                index + 1
            ))?;

            let choice = loop {
                print!("Your answer [a-d]: ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    bail!("Quiz aborted: input closed");
                };
                match parse_choice(&line?) {
                    Some(choice) => break choice,
                    None => println!("Please answer a, b, c, or d."),
                }
            };

            flow.record_answer(choice)?;
            flow.advance();
        }

        self.renderer.render(&results_markdown(&flow))
    }
}

/// Maps an answer line to a 0-based option index.
///
/// Accepts letters a-d and digits 1-4.
fn parse_choice(line: &str) -> Option<usize> {
    match line.trim().to_lowercase().as_str() {
        "a" | "1" => Some(0),
        "b" | "2" => Some(1),
        "c" | "3" => Some(2),
        "d" | "4" => Some(3),
        _ => None,
    }
}

/// The results view: score plus a per-question breakdown with explanations.
fn results_markdown(flow: &QuizFlow) -> String {
    let mut output = format!("# Results: {} / {}\n\n", flow.score(), flow.len());

    for (index, (question, answer)) in flow.questions().iter().zip(flow.answers()).enumerate() {
        let correct = *answer == Some(question.answer_index);
        let mark = if correct { "✓" } else { "✗" };
        output.push_str(&format!("{mark} **{}. {}**\n\n", index + 1, question.question));

        if !correct {
            if let Some(chosen) = answer.and_then(|a| question.options.get(a)) {
                output.push_str(&format!("  - Your answer: {chosen}\n"));
            }
            if let Some(right) = question.options.get(question.answer_index) {
                output.push_str(&format!("  - Correct answer: {right}\n"));
            }
        }
        output.push_str(&format!("  - {}\n\n", question.explanation));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_letters_and_digits() {
        assert_eq!(parse_choice(" B "), Some(1));
        assert_eq!(parse_choice("d"), Some(3));
        assert_eq!(parse_choice("1"), Some(0));
        assert_eq!(parse_choice("e"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[test]
    fn test_results_markdown_marks_wrong_answers() {
        let questions = vec![
            QuizQuestion {
                question: "Q1".to_string(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_index: 0,
                explanation: "E1".to_string(),
            },
            QuizQuestion {
                question: "Q2".to_string(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer_index: 1,
                explanation: "E2".to_string(),
            },
        ];

        let mut flow = QuizFlow::new(questions).unwrap();
        flow.record_answer(0).unwrap();
        flow.advance();
        flow.record_answer(3).unwrap();
        flow.advance();

        let output = results_markdown(&flow);
        assert!(output.contains("# Results: 1 / 2"));
        assert!(output.contains("✓ **1. Q1**"));
        assert!(output.contains("✗ **2. Q2**"));
        assert!(output.contains("Correct answer: b"));
        assert!(output.contains("E2"));
    }
}
