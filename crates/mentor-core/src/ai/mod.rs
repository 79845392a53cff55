//! AI service boundary: the text-model port and the plan/quiz generation
//! client built on top of it.
//!
//! The external generative-AI service is treated as an opaque, unreliably
//! formatted text-completion capability behind the [`TextModel`] trait.
//! Adapters (e.g. the CLI's OpenAI-backed implementation) live outside the
//! core; everything format-related - prompt construction, JSON repair, task
//! normalization - lives here, so the core stays independent of any vendor
//! SDK.
//!
//! Failure semantics: transport and parse failures propagate to the caller
//! unmodified, with no automatic retry. Every retry is user-initiated.

use async_trait::async_trait;

use crate::error::Result;

pub mod generator;
pub mod prompts;
pub mod repair;

pub use generator::PlanGenerator;

/// One request to the text-completion boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier understood by the backing service
    pub model: String,
    /// System instruction text
    pub system: String,
    /// User prompt text
    pub prompt: String,
    /// Ask the service to verify facts/URLs against live web search
    /// before returning them
    pub web_search: bool,
    /// Ask the service for structured JSON output instead of free text
    pub json_output: bool,
}

/// Service contract for the AI text-completion boundary.
///
/// Implementations map transport failures to
/// [`OrganizerError::Service`](crate::OrganizerError::Service) and return
/// the raw response text otherwise; response parsing is not their concern.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Produces a completion for the request.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
