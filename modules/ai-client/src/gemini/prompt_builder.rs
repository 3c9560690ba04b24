use anyhow::Result;
use async_trait::async_trait;

use crate::error::AiError;
use crate::traits::PromptBuilder;

use super::types::*;
use super::Gemini;

pub struct GeminiPromptBuilder {
    agent: Gemini,
    input: String,
    preamble: Option<String>,
    temperature: Option<f32>,
}

impl GeminiPromptBuilder {
    pub(crate) fn new(agent: Gemini, input: String) -> Self {
        Self {
            agent,
            input,
            preamble: None,
            temperature: None,
        }
    }

    pub(crate) fn build_request(&self) -> GenerateRequest {
        let mut request = GenerateRequest::new();

        if let Some(temp) = self.temperature {
            request = request.temperature(temp);
        }

        if let Some(ref preamble) = self.preamble {
            request = request.system(preamble);
        }

        if !self.input.is_empty() {
            request = request.content(Content::user(&self.input));
        }

        request
    }
}

#[async_trait]
impl PromptBuilder for GeminiPromptBuilder {
    fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    async fn send(self) -> Result<String> {
        let request = self.build_request();

        let response = self
            .agent
            .client()
            .generate(&self.agent.model, &request)
            .await?;

        Ok(response
            .text()
            .ok_or_else(|| AiError::Empty("No response from Gemini".to_string()))?)
    }
}
