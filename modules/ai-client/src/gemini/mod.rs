mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::{AiError, Result};
use crate::traits::TextGenerator;

use client::GeminiClient;
use types::*;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Send one prompt and return the first candidate's text verbatim.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::prompt(prompt);
        let response = self.client().generate_content(&self.model, &request).await?;

        if let Some(reason) = response.finish_reason() {
            tracing::debug!(
                model = %self.model,
                finish_reason = reason,
                "Gemini response received"
            );
        }

        response.text().ok_or_else(|| {
            AiError::EmptyResponse(match &response.prompt_feedback {
                Some(feedback) => format!("no candidate text (prompt feedback: {feedback})"),
                None => "no candidate text".to_string(),
            })
        })
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}
