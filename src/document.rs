//! Document normalization: uploaded bytes → first page → base64 JPEG payload.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, so the interactive surface
//! driving the upload stays responsive during rasterisation.
//!
//! ## Why only the first page?
//!
//! A deliberate product restriction, not a shortcut: an analysis covers the
//! first page of the uploaded document and pages beyond it are never touched.
//!
//! ## Why JPEG?
//!
//! The payload contract fixes the mime type to `image/jpeg`. Lossy
//! compression keeps the base64 body small enough for inline upload; the
//! quality knob lives in [`AnalysisConfig::jpeg_quality`].

use crate::config::AnalysisConfig;
use crate::error::NormalizeError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use pdfium_render::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fixed mime type every normalized payload is tagged with.
pub const JPEG_MIME: &str = "image/jpeg";

/// A raw uploaded document: bytes plus the declared media type.
///
/// Ephemeral — lives only for the duration of one user action and is borrowed
/// immutably by [`normalize`], so re-normalizing the same upload for a second
/// action needs no rewinding or copying.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// The raw file contents as uploaded.
    pub bytes: Vec<u8>,
    /// Declared media type; must be a paginated-document format.
    pub media_type: String,
}

impl UploadedDocument {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    /// Convenience constructor for the common case: bytes declared as PDF.
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "application/pdf")
    }
}

/// The provider-agnostic image payload derived from a document's first page.
///
/// Exactly one payload per document; never partial, never multi-page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedPayload {
    /// Always [`JPEG_MIME`].
    pub mime_type: String,
    /// Base64-encoded JPEG bytes of the rasterized first page.
    pub data: String,
}

/// Rasterize the first page of an uploaded document into a [`NormalizedPayload`].
///
/// # Errors
/// * [`NormalizeError::CorruptDocument`] — bytes (or declared media type) are
///   not a decodable paginated document
/// * [`NormalizeError::EmptyDocument`] — valid document, zero pages
/// * [`NormalizeError::MissingNativeDependency`] — pdfium is not installed
pub async fn normalize(
    document: &UploadedDocument,
    config: &AnalysisConfig,
) -> Result<NormalizedPayload, NormalizeError> {
    if !is_paginated_media_type(&document.media_type) {
        return Err(NormalizeError::CorruptDocument {
            detail: format!(
                "declared media type '{}' is not a paginated document format",
                document.media_type
            ),
        });
    }

    let bytes = document.bytes.clone();
    let max_pixels = config.max_rendered_pixels;
    let quality = config.jpeg_quality;

    tokio::task::spawn_blocking(move || normalize_blocking(&bytes, max_pixels, quality))
        .await
        .map_err(|e| NormalizeError::RasterisationFailed {
            detail: format!("normalize task panicked: {e}"),
        })?
}

/// Media types accepted as paginated documents.
fn is_paginated_media_type(media_type: &str) -> bool {
    matches!(
        media_type.to_ascii_lowercase().as_str(),
        "application/pdf" | "application/x-pdf"
    )
}

/// Blocking implementation: bind pdfium, decode, render page 1, encode.
fn normalize_blocking(
    bytes: &[u8],
    max_pixels: u32,
    quality: u8,
) -> Result<NormalizedPayload, NormalizeError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| NormalizeError::CorruptDocument {
            detail: format!("{e:?}"),
        })?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    debug!("Document decoded: {} pages", page_count);

    if page_count == 0 {
        return Err(NormalizeError::EmptyDocument);
    }

    // First page only; the longest edge is capped so an oversized page
    // cannot exhaust memory or blow past API upload limits.
    let render_config = PdfRenderConfig::new()
        .set_target_width(max_pixels as i32)
        .set_maximum_height(max_pixels as i32);

    let page = pages
        .get(0)
        .map_err(|e| NormalizeError::RasterisationFailed {
            detail: format!("{e:?}"),
        })?;

    let bitmap =
        page.render_with_config(&render_config)
            .map_err(|e| NormalizeError::RasterisationFailed {
                detail: format!("{e:?}"),
            })?;

    let image = bitmap.as_image();
    debug!("Rendered page 1 → {}x{} px", image.width(), image.height());

    encode_jpeg(&image, quality)
}

/// Bind to the pdfium native library, local copy first, then system-wide.
///
/// Binding failure is an environment fault: the host is missing a runtime
/// prerequisite. It must never be reported as a problem with the upload.
fn bind_pdfium() -> Result<Pdfium, NormalizeError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| NormalizeError::MissingNativeDependency {
            detail: format!("{e:?}"),
        })
}

/// Encode a rasterized page as base64 JPEG wrapped in a [`NormalizedPayload`].
///
/// pdfium hands back RGBA bitmaps; JPEG has no alpha channel, so the image is
/// flattened to RGB before encoding.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<NormalizedPayload, NormalizeError> {
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| NormalizeError::EncodingFailed {
            detail: e.to_string(),
        })?;

    let data = STANDARD.encode(&buf);
    debug!("Encoded page 1 → {} bytes base64", data.len());

    Ok(NormalizedPayload {
        mime_type: JPEG_MIME.to_string(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encode_small_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let payload = encode_jpeg(&img, 85).expect("encode should succeed");
        assert_eq!(payload.mime_type, JPEG_MIME);

        let decoded = STANDARD.decode(&payload.data).expect("valid base64");
        // JPEG SOI marker
        assert_eq!(&decoded[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn accepted_media_types() {
        assert!(is_paginated_media_type("application/pdf"));
        assert!(is_paginated_media_type("Application/PDF"));
        assert!(!is_paginated_media_type("image/png"));
        assert!(!is_paginated_media_type("text/plain"));
        assert!(!is_paginated_media_type(""));
    }

    #[tokio::test]
    async fn wrong_media_type_is_corrupt_document() {
        let doc = UploadedDocument::new(vec![1, 2, 3], "image/png");
        let err = normalize(&doc, &AnalysisConfig::default())
            .await
            .expect_err("non-document media type must fail");
        assert!(matches!(err, NormalizeError::CorruptDocument { .. }));
    }
}
