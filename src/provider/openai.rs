//! OpenAI-compatible chat-completions provider.
//!
//! The whole batch goes out as a single chat request whose user message is a
//! JSON document of requests; the model is asked to answer with the
//! `{"translations": [...]}` shape that [`BatchResponse`] deserializes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::{ProviderError, TranslationProvider};
use crate::core::{BatchResponse, TranslationRequest};

const SYSTEM_PROMPT: &str = "You translate user interface strings for an app. \
The user message is a JSON object with \"sourceLanguage\" and \"requests\". \
Each request has a \"key\", the source \"text\", the \"targetLanguages\" to produce, \
and an optional \"comment\" describing where the text appears. \
Keep placeholders such as %@, %lld, %1$@ and \\n exactly as they are. \
Reply with a JSON object of the form \
{\"translations\": [{\"key\": \"<key>\", \"translations\": {\"<language>\": \"<text>\"}}]} \
containing one item per request and one value per requested language.";

/// Maximum number of characters of an error body kept in [`ProviderError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL up to and including the API version, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TranslationProvider for OpenAiProvider {
    async fn translate_batch(
        &self,
        requests: &[TranslationRequest],
        source_language: &str,
    ) -> Result<BatchResponse, ProviderError> {
        let body = chat_request_body(&self.config.model, requests, source_language);
        debug!(
            requests = requests.len(),
            model = %self.config.model,
            "sending translation batch"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        parse_chat_response(&text)
    }
}

fn chat_request_body(model: &str, requests: &[TranslationRequest], source_language: &str) -> Value {
    let payload = json!({
        "sourceLanguage": source_language,
        "requests": requests,
    });

    json!({
        "model": model,
        "temperature": 0,
        "response_format": { "type": "json_object" },
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": payload.to_string() },
        ],
    })
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

fn parse_chat_response(text: &str) -> Result<BatchResponse, ProviderError> {
    let completion: ChatCompletion =
        serde_json::from_str(text).map_err(ProviderError::InvalidResponse)?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ProviderError::EmptyResponse)?;

    serde_json::from_str(strip_code_fence(&content)).map_err(ProviderError::InvalidResponse)
}

/// Drop a surrounding Markdown code fence (```json ... ```) if the model added one.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
