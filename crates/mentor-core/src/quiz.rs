//! Quiz flow state machine.
//!
//! A strictly forward walk over a fixed question list: answer the current
//! question, advance, and land on the results once the final question is
//! answered. There is no backward transition - retaking means rebuilding
//! the whole flow with freshly generated questions.

use crate::error::{OrganizerError, Result};
use crate::models::QuizQuestion;

/// Position of the flow within its question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Presenting the question at this index
    InProgress { index: usize },
    /// All questions answered; the score is final
    Results,
}

/// An in-memory quiz run over a non-empty question list.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    state: QuizState,
}

impl QuizFlow {
    /// Starts a flow over the given questions.
    ///
    /// # Errors
    ///
    /// * `OrganizerError::EmptyResult` - the question list is empty
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(OrganizerError::EmptyResult { what: "questions" });
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            state: QuizState::InProgress { index: 0 },
        })
    }

    /// Current state of the flow.
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// All questions, in presentation order.
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The recorded answers, index-aligned with the questions.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// The question currently being presented, if any.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress { index } => self.questions.get(index),
            QuizState::Results => None,
        }
    }

    /// Records (or overwrites) the answer for the current question.
    ///
    /// # Errors
    ///
    /// * `OrganizerError::InvalidInput` - choice out of range, or the flow
    ///   has already reached the results
    pub fn record_answer(&mut self, choice: usize) -> Result<()> {
        let QuizState::InProgress { index } = self.state else {
            return Err(OrganizerError::invalid_input(
                "answer",
                "The quiz is already finished",
            ));
        };
        if choice >= QuizQuestion::OPTION_COUNT {
            return Err(OrganizerError::invalid_input(
                "answer",
                format!("Choice must be 0-{}", QuizQuestion::OPTION_COUNT - 1),
            ));
        }
        self.answers[index] = Some(choice);
        Ok(())
    }

    /// Moves to the next question, or to the results after the final one.
    ///
    /// Advancing requires a recorded answer for the current question;
    /// without one the state is unchanged and `false` is returned.
    pub fn advance(&mut self) -> bool {
        let QuizState::InProgress { index } = self.state else {
            return false;
        };
        if self.answers[index].is_none() {
            return false;
        }
        self.state = if index + 1 < self.questions.len() {
            QuizState::InProgress { index: index + 1 }
        } else {
            QuizState::Results
        };
        true
    }

    /// Number of correctly answered questions.
    ///
    /// An unanswered question never matches its correct index.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.answer_index))
            .count()
    }

    /// Total question count.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A flow is never empty; this mirrors `len` for completeness.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
