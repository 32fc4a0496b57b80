//! Error types for the doc-consult library.
//!
//! Three enums reflect the three layers a request passes through:
//!
//! * [`NormalizeError`] — the uploaded document could not be turned into an
//!   image payload. Splits **input faults** (`CorruptDocument`,
//!   `EmptyDocument` — the user can upload a different file) from the
//!   **environment fault** `MissingNativeDependency` (the operator must
//!   install the pdfium library; no amount of re-uploading will help).
//!
//! * [`InferenceFailure`] — the model-invocation boundary failed. Classified
//!   so the retry policy can distinguish transient transport trouble from
//!   permanent auth/quota problems, but always carrying the provider's own
//!   diagnostic text verbatim.
//!
//! * [`AnalysisError`] — everything the top-level `analyze`/`run_analysis`
//!   entry points can return. Nothing in the library escapes as a panic or an
//!   unhandled fault; callers branch on the variant, not on message text.

use thiserror::Error;

/// Failures while converting an uploaded document into a normalized payload.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The document decoded cleanly but contains no pages.
    #[error("Document has no pages.\nUpload a file with at least one page.")]
    EmptyDocument,

    /// The bytes could not be decoded as a paginated document.
    #[error("Document could not be decoded: {detail}\nCheck that the file is a valid, uncorrupted PDF.")]
    CorruptDocument { detail: String },

    /// The page-rasterization library is not installed on this host.
    ///
    /// Operator-correctable, never user-correctable — kept distinct from
    /// [`NormalizeError::CorruptDocument`] so a missing system library is not
    /// misreported as a bad upload.
    #[error(
        "PDF rasterisation library unavailable: {detail}\n\
         Install the pdfium shared library system-wide or place it in the working directory."
    )]
    MissingNativeDependency { detail: String },

    /// Rasterisation of the first page failed inside pdfium.
    #[error("Rasterisation failed for page 1: {detail}")]
    RasterisationFailed { detail: String },

    /// The rendered page could not be JPEG-encoded.
    #[error("Image encoding failed: {detail}")]
    EncodingFailed { detail: String },
}

/// A classified failure from the inference capability.
///
/// The classification exists for the retry policy and for operator messaging;
/// the provider's diagnostic text is always preserved in `detail`. The core
/// assumes no particular taxonomy from the provider itself — whatever it
/// returns lands in exactly one of these buckets.
#[derive(Debug, Clone, Error)]
pub enum InferenceFailure {
    /// Authentication or authorization rejected (401/403, bad API key).
    #[error("Authentication failed for provider '{provider}': {detail}\nCheck the configured API key.")]
    Auth { provider: String, detail: String },

    /// Quota exhausted or rate limit hit (HTTP 429).
    #[error("Rate limit or quota exceeded for provider '{provider}'")]
    RateLimited {
        provider: String,
        retry_after_secs: Option<u64>,
    },

    /// The call exceeded the configured timeout.
    #[error("Inference call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    #[error("Transport failure talking to provider '{provider}': {detail}")]
    Transport { provider: String, detail: String },

    /// The provider answered but rejected the request or returned an
    /// unusable body (4xx/5xx, empty candidates, malformed JSON).
    #[error("Provider '{provider}' returned an error: {detail}")]
    Api { provider: String, detail: String },
}

impl InferenceFailure {
    /// Whether retrying the identical request could plausibly succeed.
    ///
    /// Auth and quota failures are permanent until the operator intervenes,
    /// so they are never retried. Timeouts and transport errors are the
    /// classic transient classes; `Api` is retried too since it covers 5xx
    /// responses from an overloaded backend.
    pub fn is_transient(&self) -> bool {
        match self {
            InferenceFailure::Auth { .. } | InferenceFailure::RateLimited { .. } => false,
            InferenceFailure::Timeout { .. }
            | InferenceFailure::Transport { .. }
            | InferenceFailure::Api { .. } => true,
        }
    }
}

/// All errors returned by the top-level analysis entry points.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An action was triggered with no document uploaded.
    ///
    /// The composed flow short-circuits on this before the normalizer runs.
    #[error("No document uploaded.\nUpload a PDF document before requesting an analysis.")]
    NoDocument,

    /// Document normalization failed.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The template catalog has no entry for the requested action.
    ///
    /// This indicates a wiring bug (the catalog must cover every `ActionId`),
    /// not bad user input. It is surfaced loudly rather than swallowed.
    #[error("No instruction template registered for action '{action}' — this is a bug in the catalog wiring")]
    UnknownAction { action: String },

    /// The inference capability failed; the original diagnostic is preserved.
    #[error("Analysis failed: {0}")]
    Inference(#[source] InferenceFailure),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dependency_mentions_pdfium() {
        let e = NormalizeError::MissingNativeDependency {
            detail: "no library found".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("pdfium"), "got: {msg}");
        assert!(msg.contains("no library found"));
    }

    #[test]
    fn corrupt_and_empty_are_distinct_messages() {
        let corrupt = NormalizeError::CorruptDocument {
            detail: "bad xref".into(),
        }
        .to_string();
        let empty = NormalizeError::EmptyDocument.to_string();
        assert!(corrupt.contains("bad xref"));
        assert!(empty.contains("no pages"));
        assert_ne!(corrupt, empty);
    }

    #[test]
    fn auth_is_not_transient() {
        let e = InferenceFailure::Auth {
            provider: "gemini".into(),
            detail: "invalid key".into(),
        };
        assert!(!e.is_transient());
        assert!(e.to_string().contains("invalid key"));
    }

    #[test]
    fn rate_limit_is_not_transient() {
        let e = InferenceFailure::RateLimited {
            provider: "gemini".into(),
            retry_after_secs: Some(30),
        };
        assert!(!e.is_transient());
    }

    #[test]
    fn timeout_and_transport_are_transient() {
        assert!(InferenceFailure::Timeout { elapsed_ms: 60_000 }.is_transient());
        assert!(InferenceFailure::Transport {
            provider: "gemini".into(),
            detail: "connection reset".into(),
        }
        .is_transient());
    }

    #[test]
    fn analysis_error_preserves_inference_detail() {
        let e = AnalysisError::Inference(InferenceFailure::Api {
            provider: "gemini".into(),
            detail: "HTTP 500: backend overloaded".into(),
        });
        assert!(e.to_string().contains("backend overloaded"));
    }
}
