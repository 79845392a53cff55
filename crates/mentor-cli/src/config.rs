//! AI service configuration loaded from the environment.
//!
//! Credentials and model names come from environment variables, with a
//! `.env` file honored for local development. Only the commands that talk
//! to the AI service load this; everything else works without credentials.

use anyhow::{Context, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Holds the AI-boundary configuration loaded at command start.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: String,
    pub plan_model: String,
    pub quiz_model: String,
}

impl AiConfig {
    /// Loads configuration from environment variables.
    ///
    /// Looks for a `.env` file in the current directory for development;
    /// this is skipped under test to keep tests hermetic.
    pub fn from_env() -> Result<Self> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} is not set; it is required for AI commands"))?;

        let plan_model =
            std::env::var("MENTOR_PLAN_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let quiz_model =
            std::env::var("MENTOR_QUIZ_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(Self {
            api_key,
            plan_model,
            quiz_model,
        })
    }
}
