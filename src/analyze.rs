//! Template dispatch and inference invocation.
//!
//! `analyze` is the single-shot heart of the system: resolve the template for
//! the selected action, build the ordered (context, payload, template) triple,
//! submit it to the inference capability once, and translate any failure into
//! a typed result. Nothing here retries by default — the original behaviour is
//! single attempt, fail fast — but callers that opt in via
//! [`AnalysisConfig::max_retries`] get bounded exponential backoff for
//! transient failure classes only. Auth and quota failures always surface
//! immediately; retrying them just burns time.
//!
//! Per request the state machine is trivial: pending → succeeded | failed,
//! terminal on the first definitive response.

use crate::config::AnalysisConfig;
use crate::document::{normalize, NormalizedPayload, UploadedDocument};
use crate::error::{AnalysisError, InferenceFailure};
use crate::provider::InferenceProvider;
use crate::templates::{template_for, ActionId};
use serde::Serialize;
use std::time::Instant;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

/// The assembled inference input: optional context, one payload, one template.
///
/// Constructed fresh per invocation; never cached or reused across requests.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// Optional free-text focus areas supplied by the user.
    pub context: Option<String>,
    /// The normalized first-page image payload.
    pub payload: NormalizedPayload,
    /// The instruction template selected for the action.
    pub template: &'static str,
}

/// A completed analysis: the generated text plus request accounting.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    /// The model's response, surfaced unmodified.
    pub text: String,
    /// The action that produced this output.
    pub action: ActionId,
    /// Backend that served the request.
    pub provider: String,
    /// Wall-clock time for the inference call(s).
    pub duration_ms: u64,
    /// Retries consumed before success (0 on a first-attempt success).
    pub retries: u32,
}

/// Run one analysis action against an already-normalized payload.
///
/// # Errors
/// * [`AnalysisError::UnknownAction`] — the catalog has no template for
///   `action`; a wiring bug, never a user-input condition
/// * [`AnalysisError::Inference`] — the provider failed; the original
///   diagnostic text is preserved in the classified failure
pub async fn analyze(
    provider: &dyn InferenceProvider,
    action: ActionId,
    context: Option<&str>,
    payload: &NormalizedPayload,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AnalysisError> {
    let template = template_for(action).ok_or_else(|| AnalysisError::UnknownAction {
        action: format!("{action:?}"),
    })?;

    let request = AnalysisRequest {
        context: context.map(|s| s.to_string()),
        payload: payload.clone(),
        template,
    };
    // The provider contract takes context-or-empty-string, matching the
    // ordered triple the original system submitted.
    let context_text = request.context.as_deref().unwrap_or("");

    info!("Dispatching action {:?} to '{}'", action, provider.name());
    let start = Instant::now();
    let mut last_failure: Option<InferenceFailure> = None;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            let backoff = config.retry_backoff_ms * 2u64.pow(attempt - 1);
            warn!(
                "{:?}: retry {}/{} after {}ms",
                action, attempt, config.max_retries, backoff
            );
            sleep(Duration::from_millis(backoff)).await;
        }

        match provider
            .generate(context_text, &request.payload, request.template)
            .await
        {
            Ok(text) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                debug!("{:?}: {} chars in {}ms", action, text.len(), duration_ms);
                return Ok(AnalysisOutput {
                    text,
                    action,
                    provider: provider.name().to_string(),
                    duration_ms,
                    retries: attempt,
                });
            }
            Err(failure) => {
                warn!("{:?}: attempt {} failed — {}", action, attempt + 1, failure);
                if !failure.is_transient() {
                    return Err(AnalysisError::Inference(failure));
                }
                last_failure = Some(failure);
            }
        }
    }

    Err(AnalysisError::Inference(last_failure.unwrap_or_else(|| {
        InferenceFailure::Api {
            provider: provider.name().to_string(),
            detail: "no attempt was made (max_retries underflow)".into(),
        }
    })))
}

/// The composed user-action flow: gate on a document, normalize, analyze.
///
/// Triggering an action with no uploaded document short-circuits with
/// [`AnalysisError::NoDocument`] before the normalizer (or any native
/// library) is ever touched.
pub async fn run_analysis(
    provider: &dyn InferenceProvider,
    action: ActionId,
    context: Option<&str>,
    document: Option<&UploadedDocument>,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AnalysisError> {
    let document = document.ok_or(AnalysisError::NoDocument)?;
    let payload = normalize(document, config).await?;
    analyze(provider, action, context, &payload, config).await
}
