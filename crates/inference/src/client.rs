//! HTTP client for the remote text-generation endpoint.
//!
//! The relay core talks to [`TextGenerator`] only; [`HttpInferenceClient`] is
//! the production implementation. Tests substitute their own generator or
//! point the client at a mock server.

use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    tracing::{debug, info},
};

use crate::{
    config::InferenceConfig,
    error::{Error, Result},
    region::extract_region,
};

// ── Generation parameters ────────────────────────────────────────────────────

const MAX_NEW_TOKENS: u32 = 512;
const DO_SAMPLE: bool = true;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

/// Fixed-shape payload sent to the generation endpoint.
///
/// Derived solely from the latest user message — the transcript is not
/// forwarded, and the sampling parameters are constants of the design rather
/// than anything history-dependent.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationRequest {
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: DO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

// ── Upstream response shape ──────────────────────────────────────────────────

// The endpoint's schema is an external contract; every field is defaulted so
// a missing key surfaces as "no text" instead of a decode error elsewhere in
// the tree.

#[derive(Debug, Default, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    output: Option<GenerationOutput>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerationOutput {
    #[serde(default)]
    message: Option<GeneratedMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct GeneratedMessage {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl GenerationResponse {
    /// Traverse `output.message.content[0].text`, requiring non-empty text.
    fn into_text(self) -> Option<String> {
        let text = self.output?.message?.content.into_iter().next()?.text?;
        (!text.is_empty()).then_some(text)
    }
}

// ── TextGenerator seam ───────────────────────────────────────────────────────

/// Single-shot text generation.
///
/// Implemented by [`HttpInferenceClient`] in production and injected into the
/// relay core at construction time, so the mediation logic never owns a
/// network client of its own.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt`. Exactly one upstream call, no retries.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// ── HTTP implementation ──────────────────────────────────────────────────────

pub struct HttpInferenceClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpInferenceClient {
    /// Build a client from config. The embedded `reqwest::Client` is a reuse
    /// cache across invocations; rebuilding it per call would be observably
    /// identical, just slower.
    pub fn new(config: &InferenceConfig) -> Self {
        let region = config
            .service_arn
            .as_deref()
            .map_or(crate::region::DEFAULT_REGION, extract_region);
        info!(
            endpoint = %config.endpoint,
            model_id = %config.model_id,
            %region,
            "inference client ready"
        );
        Self {
            endpoint: config.endpoint.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for HttpInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest::single_turn(prompt);
        debug!(endpoint = %self.endpoint, payload = ?request, "calling inference endpoint");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let raw = resp.text().await?;
        debug!(%status, body = %raw, "inference endpoint replied");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        let decoded: GenerationResponse = serde_json::from_str(&raw)
            .map_err(|e| Error::invalid_response(format!("undecodable body: {e}")))?;

        decoded
            .into_text()
            .ok_or_else(|| Error::invalid_response("no valid response content received from the model"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> HttpInferenceClient {
        HttpInferenceClient::new(&InferenceConfig::with_endpoint(server.url()))
    }

    fn reply_body(text: &str) -> String {
        serde_json::json!({
            "output": {"message": {"content": [{"text": text}]}}
        })
        .to_string()
    }

    #[tokio::test]
    async fn generate_extracts_text_and_sends_fixed_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "prompt": "hello",
                "max_new_tokens": 512,
                "do_sample": true,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_body("hi there"))
            .create_async()
            .await;

        let text = client_for(&server).generate("hello").await.unwrap();
        assert_eq!(text, "hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_a_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            },
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_text_field_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"output":{"message":{"content":[]}}}"#)
            .create_async()
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert!(err.to_string().contains("no valid response content"));
    }

    #[tokio::test]
    async fn empty_text_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(reply_body(""))
            .create_async()
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
        assert!(err.to_string().contains("undecodable body"));
    }

    #[test]
    fn only_the_first_content_block_counts() {
        let decoded: GenerationResponse = serde_json::from_str(
            r#"{"output":{"message":{"content":[{"text":"first"},{"text":"second"}]}}}"#,
        )
        .unwrap();
        assert_eq!(decoded.into_text().as_deref(), Some("first"));
    }
}
