//! OpenAI-compatible chat-completions backend.
//!
//! Any server speaking the `/chat/completions` format works (vLLM, llama.cpp
//! server, text-generation-inference, hosted APIs). Requests are
//! non-streaming with fixed sampling parameters.

use std::time::Duration;

use async_trait::async_trait;
use haven_core::{Error, ModelSettings, Result};
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::debug;

use crate::generator::{strip_special_tokens, ReplyGenerator, Turn};

pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.92;
pub const MAX_TOKENS: usize = 200;

/// Instruction placed ahead of the conversation.
const INSTRUCTION: &str = "You are a warm, supportive companion for someone who wants to talk \
     about how they are feeling. Reply briefly and kindly.";

/// Generator backed by an HTTP text-generation service.
pub struct HttpGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl HttpGenerator {
    /// Build a generator from settings. Fails if no URL is configured or it does not parse.
    pub fn new(settings: &ModelSettings) -> Result<Self> {
        let base = settings
            .api_url
            .as_deref()
            .ok_or_else(|| Error::Config("No model endpoint configured".into()))?;

        let url = Url::parse(base)
            .map_err(|e| Error::Config(format!("Invalid model URL {}: {}", base, e)))?;
        let endpoint = format!("{}/chat/completions", url.as_str().trim_end_matches('/'));

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the message array: instruction, prior turns, then the new prompt.
    pub fn build_messages(prompt: &str, history: &[Turn]) -> Vec<Value> {
        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(json!({"role": "system", "content": INSTRUCTION}));

        for turn in history {
            messages.push(json!({"role": "user", "content": turn.user}));
            messages.push(json!({"role": "assistant", "content": turn.bot}));
        }

        messages.push(json!({"role": "user", "content": prompt}));
        messages
    }
}

#[async_trait]
impl ReplyGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str, history: &[Turn]) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": Self::build_messages(prompt, history),
            "temperature": TEMPERATURE,
            "top_p": TOP_P,
            "max_tokens": MAX_TOKENS,
            "stream": false,
        });

        debug!(
            "Generating with {} ({} prior turns)",
            self.model,
            history.len()
        );

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("API error {}: {}", status, text)));
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Invalid response body: {}", e)))?;

        let content = parsed["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| Error::Inference("Response has no message content".into()))?;

        Ok(strip_special_tokens(content))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
