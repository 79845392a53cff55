//! Quiz question model definition.

use serde::{Deserialize, Serialize};

/// One multiple-choice quiz question with exactly four options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    /// Question text
    pub question: String,

    /// The four answer options, in presentation order
    pub options: Vec<String>,

    /// Index (0-3) of the correct option
    pub answer_index: usize,

    /// Explanation shown after answering
    pub explanation: String,
}

impl QuizQuestion {
    /// Number of options every question must carry.
    pub const OPTION_COUNT: usize = 4;

    /// Checks the structural invariants: four options, in-range answer.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == Self::OPTION_COUNT && self.answer_index < Self::OPTION_COUNT
    }
}
