//! The inference capability boundary: trait seam plus the Gemini backend.
//!
//! The core treats the model as a black box with a single entry point: given
//! a short free-text context, one image payload, and one instruction string,
//! return generated text or fail. [`InferenceProvider`] is that seam —
//! production wires in [`GeminiProvider`], tests wire in stubs, and neither
//! side knows anything about the other's error taxonomy: every backend
//! failure is folded into [`InferenceFailure`] before it crosses the trait.

use crate::document::NormalizedPayload;
use crate::error::{AnalysisError, InferenceFailure};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Single entry point to the multimodal inference capability.
///
/// Implementations must be cheap to share behind an `Arc` and safe for
/// concurrent calls; each invocation is independent.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Backend name used in error classification and logs.
    fn name(&self) -> &str;

    /// Submit the ordered triple (context, payload, instruction) and return
    /// the generated text.
    async fn generate(
        &self,
        context: &str,
        payload: &NormalizedPayload,
        instruction: &str,
    ) -> Result<String, InferenceFailure>;
}

// ── Gemini wire types ────────────────────────────────────────────────────
//
// The generateContent request/response envelope. Field names are camelCase
// on the wire; `Part` is untagged so text and inline-data parts mix freely
// in one `parts` array.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_output_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

// ── Gemini provider ──────────────────────────────────────────────────────

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model; the one the original deployment ran against.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// [`InferenceProvider`] backed by the Gemini `generateContent` REST API.
///
/// The credential is injected at construction; this type never reads the
/// environment or any secret store itself.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    timeout: Duration,
    temperature: Option<f32>,
    max_output_tokens: usize,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider for the default model.
    ///
    /// Fails with [`AnalysisError::InvalidConfig`] if the key is empty —
    /// better to reject at startup than to burn a request on a guaranteed
    /// 401.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AnalysisError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "Gemini API key must not be empty".into(),
            ));
        }
        Ok(Self {
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: Duration::from_secs(60),
            temperature: None,
            max_output_tokens: 8192,
            client: reqwest::Client::new(),
        })
    }

    /// Override the model id (e.g. "gemini-2.0-flash").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the per-call timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs.max(1));
        self
    }

    /// Override generation parameters.
    pub fn with_generation(mut self, temperature: Option<f32>, max_output_tokens: usize) -> Self {
        self.temperature = temperature;
        self.max_output_tokens = max_output_tokens;
        self
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_ENDPOINT}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl InferenceProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        context: &str,
        payload: &NormalizedPayload,
        instruction: &str,
    ) -> Result<String, InferenceFailure> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::Text {
                        text: context.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: payload.mime_type.clone(),
                            data: payload.data.clone(),
                        },
                    },
                    Part::Text {
                        text: instruction.to_string(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            }),
        };

        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceFailure::Timeout {
                        elapsed_ms: start.elapsed().as_millis() as u64,
                    }
                } else {
                    InferenceFailure::Transport {
                        provider: self.name().to_string(),
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http_failure(
                self.name(),
                status,
                retry_after_secs,
                body,
            ));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| InferenceFailure::Api {
                provider: self.name().to_string(),
                detail: format!("malformed response body: {e}"),
            })?;

        let text = extract_text(&parsed);
        if text.is_empty() {
            return Err(InferenceFailure::Api {
                provider: self.name().to_string(),
                detail: "response contained no generated text".into(),
            });
        }

        debug!(
            "Gemini call succeeded: {} chars in {:?}",
            text.len(),
            start.elapsed()
        );
        Ok(text)
    }
}

/// Map a non-success HTTP status onto the failure taxonomy.
fn classify_http_failure(
    provider: &str,
    status: reqwest::StatusCode,
    retry_after_secs: Option<u64>,
    body: String,
) -> InferenceFailure {
    match status.as_u16() {
        401 | 403 => InferenceFailure::Auth {
            provider: provider.to_string(),
            detail: format!("HTTP {status}: {body}"),
        },
        429 => InferenceFailure::RateLimited {
            provider: provider.to_string(),
            retry_after_secs,
        },
        _ => InferenceFailure::Api {
            provider: provider.to_string(),
            detail: format!("HTTP {status}: {body}"),
        },
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .filter_map(|p| match p {
                    Part::Text { text } => Some(text.as_str()),
                    Part::InlineData { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_rejected() {
        assert!(GeminiProvider::new("").is_err());
        assert!(GeminiProvider::new("   ").is_err());
        assert!(GeminiProvider::new("AIza-test").is_ok());
    }

    #[test]
    fn request_serialises_ordered_triple() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![
                    Part::Text {
                        text: "focus on security".into(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".into(),
                            data: "QUJD".into(),
                        },
                    },
                    Part::Text {
                        text: "You are a Senior IT Consultant…".into(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.2),
                max_output_tokens: 4096,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "focus on security");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "QUJD");
        assert!(parts[2]["text"].as_str().unwrap().starts_with("You are"));
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "RISK: "}, {"text": "LOW"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(&parsed), "RISK: LOW");
    }

    #[test]
    fn empty_candidates_yield_empty_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&parsed), "");
    }

    #[test]
    fn http_status_classification() {
        use reqwest::StatusCode;
        assert!(matches!(
            classify_http_failure("gemini", StatusCode::UNAUTHORIZED, None, "bad key".into()),
            InferenceFailure::Auth { .. }
        ));
        assert!(matches!(
            classify_http_failure(
                "gemini",
                StatusCode::TOO_MANY_REQUESTS,
                Some(30),
                String::new()
            ),
            InferenceFailure::RateLimited {
                retry_after_secs: Some(30),
                ..
            }
        ));
        assert!(matches!(
            classify_http_failure(
                "gemini",
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
                "oops".into()
            ),
            InferenceFailure::Api { .. }
        ));
    }
}
