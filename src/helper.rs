//! High-level entry points tying the pipeline together:
//! validate -> encode -> classify -> render.

use tracing::debug;

use crate::encode::encode;
use crate::error::Result;
use crate::raster::{render_image, render_png};
use crate::style::{OutputFormat, RenderRequest, StyleSpec};
use crate::svg::render_svg;

/// A finished image payload plus the MIME type to serve it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Generates a styled QR image from a raw request.
///
/// Runs the full pipeline: the request is normalized once (including the
/// SVG downgrade rule), the data is handed to the symbol encoder, and the
/// matrix is rendered in the requested output format. Everything is
/// request-scoped; concurrent calls share no state.
///
/// # Example
///
/// ```rust
/// use qr_creator::helper::generate;
/// use qr_creator::style::RenderRequest;
///
/// let request = RenderRequest {
///     data: "https://example.com".into(),
///     style: "dots".into(),
///     fill_color: "#1a1a2e".into(),
///     ..RenderRequest::default()
/// };
/// let output = generate(&request).unwrap();
/// assert_eq!(output.content_type, "image/png");
/// ```
pub fn generate(request: &RenderRequest) -> Result<RenderOutput> {
    let spec = request.normalize()?;
    debug!(
        format = spec.format.content_type(),
        style = spec.style.as_str(),
        "handling render request"
    );
    let matrix = encode(&request.data, spec.error_correction)?;
    let (bytes, content_type) = match spec.format {
        OutputFormat::Png => (render_png(&spec, &matrix)?, OutputFormat::Png.content_type()),
        OutputFormat::Svg => (
            render_svg(&spec, &matrix).into_bytes(),
            OutputFormat::Svg.content_type(),
        ),
    };
    Ok(RenderOutput {
        bytes,
        content_type,
    })
}

/// Generates an in-memory RGB image buffer for a raw request, skipping the
/// byte encoding step. Useful when the caller wants to composite further.
pub fn generate_image_buffer(request: &RenderRequest) -> Result<image::RgbImage> {
    let spec: StyleSpec = request.normalize()?;
    let matrix = encode(&request.data, spec.error_correction)?;
    Ok(render_image(&spec, &matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QrGenError, ValidationError};

    #[test]
    fn generate_returns_png_payload_by_default() {
        let req = RenderRequest {
            data: "HELLO".into(),
            ..RenderRequest::default()
        };
        let out = generate(&req).unwrap();
        assert_eq!(out.content_type, "image/png");
        assert_eq!(&out.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn generate_returns_svg_payload_when_requested() {
        let req = RenderRequest {
            data: "HELLO".into(),
            format: "svg".into(),
            ..RenderRequest::default()
        };
        let out = generate(&req).unwrap();
        assert_eq!(out.content_type, "image/svg+xml");
        assert!(String::from_utf8(out.bytes).unwrap().contains("<svg"));
    }

    #[test]
    fn validation_errors_surface_before_encoding() {
        let req = RenderRequest::default(); // empty data
        match generate(&req).unwrap_err() {
            QrGenError::Validation(ValidationError::EmptyData) => {}
            other => panic!("expected EmptyData, got {other:?}"),
        }
    }

    #[test]
    fn image_buffer_matches_expected_extent() {
        let req = RenderRequest {
            data: "HELLO".into(),
            box_size: 10,
            border: 4,
            ..RenderRequest::default()
        };
        let img = generate_image_buffer(&req).unwrap();
        assert_eq!(img.dimensions(), (290, 290));
    }
}
