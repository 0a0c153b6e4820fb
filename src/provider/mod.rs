//! Translation providers.
//!
//! A provider receives every [`TranslationRequest`] of a run in one call and
//! answers with a [`BatchResponse`]. The response may cover only part of the
//! batch; the merge step tolerates that.

mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::{BatchResponse, TranslationRequest};

pub use openai::{OpenAiConfig, OpenAiProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to translation provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("translation provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("translation provider returned no content")]
    EmptyResponse,
    #[error("translation provider returned malformed JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a batch of keys from `source_language`.
    async fn translate_batch(
        &self,
        requests: &[TranslationRequest],
        source_language: &str,
    ) -> Result<BatchResponse, ProviderError>;
}
