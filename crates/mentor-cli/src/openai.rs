//! OpenAI-backed adapter for the core's text-model port.
//!
//! Two request paths, chosen per request:
//! - search grounding on: the Responses API with the web-search tool, so
//!   the service verifies resource URLs against live search before
//!   answering;
//! - otherwise: Chat Completions, with the JSON response format when
//!   structured output is requested.
//!
//! Transport failures map to `OrganizerError::Service` and propagate to
//! the caller unmodified; no retries here.

use async_openai::{
    config::OpenAIConfig,
    types::{
        chat::{
            ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
            ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        },
        responses::{CreateResponseArgs, Tool, WebSearchTool},
    },
    Client,
};
use async_trait::async_trait;
use log::debug;
use mentor_core::{CompletionRequest, OrganizerError, TextModel};

/// An adapter that implements [`TextModel`] against an OpenAI-compatible
/// service.
pub struct OpenAiTextModel {
    client: Client<OpenAIConfig>,
}

impl OpenAiTextModel {
    /// Creates an adapter authenticating with the given API key.
    pub fn new(api_key: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
        }
    }

    async fn complete_grounded(
        &self,
        request: &CompletionRequest,
    ) -> mentor_core::Result<String> {
        let api_request = CreateResponseArgs::default()
            .model(&request.model)
            .instructions(request.system.clone())
            .input(request.prompt.clone())
            .tools(vec![Tool::WebSearch(WebSearchTool::default())])
            .max_output_tokens(8192u32)
            .build()
            .map_err(OrganizerError::service)?;

        let response = self
            .client
            .responses()
            .create(api_request)
            .await
            .map_err(OrganizerError::service)?;

        Ok(response.output_text().unwrap_or_default())
    }

    async fn complete_chat(&self, request: &CompletionRequest) -> mentor_core::Result<String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(request.system.clone())
                    .build()
                    .map_err(OrganizerError::service)?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(request.prompt.clone())
                    .build()
                    .map_err(OrganizerError::service)?,
            ),
        ];

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder
            .model(&request.model)
            .messages(messages)
            .max_tokens(4096u32);
        if request.json_output {
            builder.response_format(ResponseFormat::JsonObject);
        }
        let api_request = builder.build().map_err(OrganizerError::service)?;

        let response = self
            .client
            .chat()
            .create(api_request)
            .await
            .map_err(OrganizerError::service)?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| OrganizerError::service("The model returned no content"))
    }
}

#[async_trait]
impl TextModel for OpenAiTextModel {
    async fn complete(&self, request: &CompletionRequest) -> mentor_core::Result<String> {
        debug!(
            "completion request: model={} web_search={} json_output={}",
            request.model, request.web_search, request.json_output
        );

        if request.web_search {
            self.complete_grounded(request).await
        } else {
            self.complete_chat(request).await
        }
    }
}
