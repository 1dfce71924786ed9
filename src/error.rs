use thiserror::Error;

/// Top-level error type for QR generation.
///
/// Validation problems are the caller's to fix; encoding problems come from
/// the symbol encoder (typically data too long for the chosen error
/// correction level). Neither is retried internally: the pipeline is
/// deterministic, so a retry with the same input reproduces the same error.
#[derive(Error, Debug)]
pub enum QrGenError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("QR encoding failed: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// A request parameter that cannot be normalized into a [`StyleSpec`].
///
/// Every variant carries enough detail for the caller to fix the request.
///
/// [`StyleSpec`]: crate::style::StyleSpec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("'data' must be a non-empty string")]
    EmptyData,

    #[error("'data' exceeds {max} bytes (got {got})")]
    DataTooLong { max: usize, got: usize },

    #[error("'{field}' must be between {min} and {max} (got {got})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        got: f64,
    },

    #[error("invalid color for '{field}': '{value}' (use hex like #ff0000 or #f00)")]
    BadColor { field: &'static str, value: String },

    #[error("invalid value for '{field}': '{value}' (allowed: {allowed})")]
    BadVariant {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, QrGenError>;
