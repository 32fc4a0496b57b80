//! Configuration for document analysis.
//!
//! Every knob lives in one [`AnalysisConfig`] struct, built via its
//! [`AnalysisConfigBuilder`]. One struct means configs are trivial to share
//! across threads, log, and diff between runs.
//!
//! # Design choice: builder over constructor
//! Setters clamp obviously-wrong values into range immediately; `build()`
//! does the cross-field validation. Callers set only what they care about
//! and rely on documented defaults for the rest.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Configuration for normalizing a document and invoking an analysis.
///
/// # Example
/// ```rust
/// use doc_consult::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .max_rendered_pixels(1600)
///     .jpeg_quality(90)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum rendered image dimension (width or height) in pixels. Default: 2000.
    ///
    /// A safety cap independent of the page's physical size. An A0 poster page
    /// would otherwise rasterize into a five-figure-pixel image and exhaust
    /// memory; this caps either dimension, scaling the other proportionally.
    /// 1,000–2,000 px also matches the resolution sweet spot of current
    /// vision models.
    pub max_rendered_pixels: u32,

    /// JPEG encoding quality, 1–100. Default: 85.
    ///
    /// The payload format is lossy by contract (`image/jpeg`). 85 keeps body
    /// text legible to the model while staying well under typical API
    /// upload limits; raise it for documents with dense small print.
    pub jpeg_quality: u8,

    /// Sampling temperature for the model, if the provider honours one.
    pub temperature: Option<f32>,

    /// Maximum tokens the model may generate. Default: 8192.
    ///
    /// The instruction templates ask for long, multi-section reports; a low
    /// cap silently truncates them mid-sentence.
    pub max_output_tokens: usize,

    /// Maximum retry attempts on a *transient* inference failure. Default: 0.
    ///
    /// The default preserves single-attempt, fail-fast behaviour: the request
    /// has no side effects, so callers opting in to retries duplicate nothing.
    /// Authentication and quota failures are never retried regardless of this
    /// setting.
    pub max_retries: u32,

    /// Initial retry delay in milliseconds (doubles per attempt). Default: 500.
    pub retry_backoff_ms: u64,

    /// Per-inference-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_rendered_pixels: 2000,
            jpeg_quality: 85,
            temperature: None,
            max_output_tokens: 8192,
            max_retries: 0,
            retry_backoff_ms: 500,
            api_timeout_secs: 60,
        }
    }
}

impl AnalysisConfig {
    /// Create a new builder for `AnalysisConfig`.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.max(100);
        self
    }

    pub fn jpeg_quality(mut self, q: u8) -> Self {
        self.config.jpeg_quality = q.clamp(1, 100);
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = Some(t.clamp(0.0, 2.0));
        self
    }

    pub fn max_output_tokens(mut self, n: usize) -> Self {
        self.config.max_output_tokens = n;
        self
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.config.max_retries = n;
        self
    }

    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = ms;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AnalysisConfig, AnalysisError> {
        let c = &self.config;
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(AnalysisError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        if c.max_output_tokens == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_output_tokens must be ≥ 1".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(AnalysisError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AnalysisConfig::builder().build().expect("valid defaults");
        assert_eq!(config.max_rendered_pixels, 2000);
        assert_eq!(config.jpeg_quality, 85);
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn setters_clamp_into_range() {
        let config = AnalysisConfig::builder()
            .jpeg_quality(250)
            .max_rendered_pixels(10)
            .temperature(9.0)
            .build()
            .expect("clamped values are valid");
        assert_eq!(config.jpeg_quality, 100);
        assert_eq!(config.max_rendered_pixels, 100);
        assert_eq!(config.temperature, Some(2.0));
    }

    #[test]
    fn zero_max_tokens_rejected() {
        let result = AnalysisConfig::builder().max_output_tokens(0).build();
        assert!(matches!(result, Err(AnalysisError::InvalidConfig(_))));
    }
}
