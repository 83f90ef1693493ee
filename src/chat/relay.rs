//! Streaming client for the upstream chat gateway.
//!
//! Posts the relay body (system prompt prepended, `stream: true`) with bearer
//! auth and decodes the event stream as it arrives.

use futures_util::StreamExt;
use reqwest::Client;

use super::{upstream_body, ChatRequest, DeltaDecoder, RelayConfig};
use crate::error::RelayError;

/// Chat relay bound to one gateway configuration.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    http: Client,
    config: RelayConfig,
}

impl ChatRelay {
    /// Creates a relay with a fresh HTTP client.
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Builds a relay from `AI_API_URL`, `AI_API_KEY` and `AI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NotConfigured`] when the URL or key is missing.
    pub fn from_env() -> Result<Self, RelayError> {
        RelayConfig::from_env().map(Self::new)
    }

    /// Gateway settings in use.
    #[must_use]
    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Streams a reply, calling `on_delta` for each content fragment.
    ///
    /// Returns the full assistant text once the stream ends.
    ///
    /// # Errors
    ///
    /// - Non-OK upstream status, mapped by [`RelayError::from_status`].
    /// - [`RelayError::EmptyBody`] if the response carries no bytes.
    /// - [`RelayError::ConnectionFailed`] on transport errors.
    pub async fn stream_chat<F>(
        &self,
        request: &ChatRequest,
        mut on_delta: F,
    ) -> Result<String, RelayError>
    where
        F: FnMut(&str),
    {
        tracing::info!(
            messages = request.messages.len(),
            model = %self.config.model,
            "relaying chat request"
        );

        let body = upstream_body(request, &self.config.model);
        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(connection_failed)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %text, "upstream gateway error");
            return Err(RelayError::from_status(status.as_u16()));
        }

        let mut decoder = DeltaDecoder::new();
        let mut reply = String::new();
        let mut received = 0usize;
        let mut emit = |delta: String, reply: &mut String| {
            on_delta(&delta);
            reply.push_str(&delta);
        };

        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let bytes = chunk.map_err(connection_failed)?;
            received += bytes.len();
            for delta in decoder.push_bytes(&bytes) {
                emit(delta, &mut reply);
            }
            if decoder.is_done() {
                break;
            }
        }

        if received == 0 {
            return Err(RelayError::EmptyBody);
        }
        for delta in decoder.finish() {
            emit(delta, &mut reply);
        }

        tracing::debug!(bytes = received, chars = reply.len(), "chat stream complete");
        Ok(reply)
    }
}

fn connection_failed(e: reqwest::Error) -> RelayError {
    tracing::error!(error = %e, "chat relay transport error");
    RelayError::ConnectionFailed {
        message: e.to_string(),
    }
}
