//! # doc-consult
//!
//! Analyse consulting documents (BRDs, CRDs, technical specifications) with
//! a vision language model.
//!
//! ## How it works
//!
//! The first page of an uploaded PDF is rasterized and sent to the model as
//! an image, together with one of eight fixed instruction templates (BRD
//! analysis, feasibility assessment, stakeholder email, …) and an optional
//! free-text context. The model reads the page as a human reviewer would and
//! returns a structured textual analysis.
//!
//! ```text
//! upload
//!  │
//!  ├─ 1. Normalize  rasterise page 1 via pdfium (spawn_blocking), JPEG + base64
//!  ├─ 2. Dispatch   ActionId → instruction template (immutable catalog)
//!  ├─ 3. Invoke     (context, payload, template) → Gemini generateContent
//!  └─ 4. Result     generated text, or a classified typed failure
//! ```
//!
//! Only the first page is analysed — a deliberate product restriction.
//! Nothing is persisted; every request is independent and single-shot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc_consult::{
//!     run_analysis, ActionId, AnalysisConfig, GeminiProvider, UploadedDocument,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The credential comes from the caller; the library never reads the
//!     // environment itself.
//!     let provider = GeminiProvider::new(std::env::var("GOOGLE_API_KEY")?)?;
//!     let config = AnalysisConfig::default();
//!
//!     let document = UploadedDocument::pdf(std::fs::read("brd.pdf")?);
//!     let output = run_analysis(
//!         &provider,
//!         ActionId::BrdAnalysis,
//!         Some("Focus on integration risks"),
//!         Some(&document),
//!         &config,
//!     )
//!     .await?;
//!
//!     println!("{}", output.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc-consult` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod analyze;
pub mod config;
pub mod document;
pub mod error;
pub mod provider;
pub mod templates;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use analyze::{analyze, run_analysis, AnalysisOutput, AnalysisRequest};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use document::{normalize, NormalizedPayload, UploadedDocument, JPEG_MIME};
pub use error::{AnalysisError, InferenceFailure, NormalizeError};
pub use provider::{GeminiProvider, InferenceProvider, DEFAULT_GEMINI_MODEL};
pub use templates::{template_for, ActionId};
