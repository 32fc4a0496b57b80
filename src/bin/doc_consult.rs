//! CLI binary for doc-consult.
//!
//! A thin shim over the library crate: maps CLI flags to `AnalysisConfig`
//! and a `GeminiProvider`, runs one analysis action, and prints or writes
//! the result. Credential loading (`GOOGLE_API_KEY`) happens here, at the
//! edge — the library itself never touches the environment.

use anyhow::{Context, Result};
use clap::Parser;
use doc_consult::{
    run_analysis, ActionId, AnalysisConfig, GeminiProvider, UploadedDocument,
    DEFAULT_GEMINI_MODEL,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Analyse a Business Requirements Document (result on stdout)
  doc-consult brd.pdf --action brd-analysis

  # Add free-text focus areas
  doc-consult brd.pdf --action brd-analysis --context "Focus on GDPR compliance"

  # Feasibility assessment, saved to a file
  doc-consult proposal.pdf --action project-feasibility -o feasibility.txt

  # Stakeholder email with a different model
  doc-consult crd.pdf --action stakeholder-email --model gemini-2.0-flash

  # Structured JSON envelope instead of plain text
  doc-consult spec.pdf --action technical-analysis --json

ACTIONS:
  brd-analysis                  BRD review with technology recommendations
  crd-analysis                  CRD review with solution mapping and gap analysis
  technical-analysis            Technical specification / architecture review
  pre-execution-questions       Questions and gaps to clarify before execution
  project-feasibility           Technical, resource, timeline, budget feasibility
  architecture-recommendations  Architecture and technology stack recommendations
  implementation-roadmap        Phased implementation roadmap with risk assessment
  stakeholder-email             Professional stakeholder summary email

ENVIRONMENT VARIABLES:
  GOOGLE_API_KEY    Gemini API key (get one at https://makersuite.google.com/app/apikey)

NOTES:
  Only the FIRST PAGE of the document is analysed — by design.
  The pdfium shared library must be installed (system-wide or in the
  working directory) for PDF rasterisation.
"#;

/// Analyse consulting documents (BRD/CRD/technical specs) with a vision LLM.
#[derive(Parser, Debug)]
#[command(
    name = "doc-consult",
    version,
    about = "Analyse consulting documents (BRD/CRD/technical specs) with a vision LLM",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF document to analyse.
    input: PathBuf,

    /// Analysis action to run.
    #[arg(short, long, value_enum)]
    action: ActionId,

    /// Optional free-text context or focus areas for the analysis.
    #[arg(long, conflicts_with = "context_file")]
    context: Option<String>,

    /// Read the free-text context from a file instead.
    #[arg(long)]
    context_file: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Gemini API key. Prefer the environment variable over the flag.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model id.
    #[arg(long, default_value = DEFAULT_GEMINI_MODEL)]
    model: String,

    /// Maximum rendered image dimension in pixels.
    #[arg(long, default_value_t = 2000)]
    max_pixels: u32,

    /// JPEG encoding quality (1-100).
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,

    /// Sampling temperature (0.0-2.0).
    #[arg(long)]
    temperature: Option<f32>,

    /// Max tokens the model may generate.
    #[arg(long, default_value_t = 8192)]
    max_output_tokens: usize,

    /// Retries on transient inference failures (0 = single attempt).
    #[arg(long, default_value_t = 0)]
    max_retries: u32,

    /// Per-call API timeout in seconds.
    #[arg(long, default_value_t = 60)]
    api_timeout: u64,

    /// Output a structured JSON envelope instead of plain text.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except the result and errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Gather inputs ────────────────────────────────────────────────────
    let bytes = tokio::fs::read(&cli.input)
        .await
        .with_context(|| format!("Failed to read '{}'", cli.input.display()))?;
    let document = UploadedDocument::pdf(bytes);

    let context = match (&cli.context, &cli.context_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read context from '{}'", path.display()))?,
        ),
        (None, None) => None,
    };

    // ── Build config and provider ────────────────────────────────────────
    let mut builder = AnalysisConfig::builder()
        .max_rendered_pixels(cli.max_pixels)
        .jpeg_quality(cli.jpeg_quality)
        .max_output_tokens(cli.max_output_tokens)
        .max_retries(cli.max_retries)
        .api_timeout_secs(cli.api_timeout);
    if let Some(t) = cli.temperature {
        builder = builder.temperature(t);
    }
    let config = builder.build().context("Invalid configuration")?;

    let provider = GeminiProvider::new(cli.api_key.clone())
        .context("Invalid provider configuration")?
        .with_model(cli.model.clone())
        .with_timeout_secs(cli.api_timeout)
        .with_generation(config.temperature, config.max_output_tokens);

    // ── Run the analysis ─────────────────────────────────────────────────
    let output = run_analysis(
        &provider,
        cli.action,
        context.as_deref(),
        Some(&document),
        &config,
    )
    .await
    .with_context(|| format!("{} failed", cli.action.label()))?;

    // ── Surface the result ───────────────────────────────────────────────
    if let Some(ref path) = cli.output {
        let body = if cli.json {
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        } else {
            output.text.clone()
        };
        tokio::fs::write(path, &body)
            .await
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        if !cli.quiet {
            eprintln!(
                "{}  →  {}  ({}ms)",
                output.action.label(),
                path.display(),
                output.duration_ms
            );
        }
    } else if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
    } else {
        if !cli.quiet {
            eprintln!("── {} ──", output.action.label());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.text.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.text.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
        if !cli.quiet {
            eprintln!("   {}ms, {} retries", output.duration_ms, output.retries);
        }
    }

    Ok(())
}
