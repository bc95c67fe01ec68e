use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::llm::{BackendError, LlmBackend};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Groq chat-completions backend (OpenAI-compatible API).
pub struct GroqProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
    temperature: f32,
}

impl GroqProvider {
    pub fn new(api_key: String, model: String, temperature: f32) -> Self {
        Self {
            api_key,
            model,
            base_url: GROQ_API_URL.to_string(),
            client: Client::new(),
            temperature,
        }
    }

    fn request_body(&self, system_prompt: &str, user_input: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_input},
            ],
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl LlmBackend for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<String, BackendError> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(system_prompt, user_input))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::MalformedResponse("no choices in response".to_string()))?;

        if let Some(reason) = choice.finish_reason.as_deref() {
            if reason != "stop" {
                warn!("Groq response finished with reason '{}'; it may be incomplete", reason);
            }
        }

        if choice.message.content.trim().is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        Ok(choice.message.content)
    }
}
