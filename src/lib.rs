//! # qr-creator
//!
//! A Rust library for rendering styled QR codes from text or URLs.
//!
//! Symbol encoding (error correction, masking) is delegated to the
//! [`qrcode`] crate; this library owns everything between the encoded
//! module matrix and the finished image: classifying modules into body and
//! finder-pattern ("eye") regions, shaping each module per style, resolving
//! solid or vertical-gradient fills, and emitting PNG or SVG, while keeping
//! the result scannable (quiet zone, module alignment and finder geometry
//! are never styled away).
//!
//! ## Features
//!
//! - Six module styles: square, dots, rounded, gapped, vertical and
//!   horizontal bars, with an independently styleable eye region.
//! - Solid fills or vertical gradients, plus an optional eye color override.
//! - PNG and SVG output; SVG silently degrades to the scanner-safe baseline
//!   (square modules, single solid fill) instead of rejecting styled requests.
//! - Deterministic: identical requests produce byte-identical images.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qr-creator = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Generate a styled PNG:
//!
//! ```rust
//! use qr_creator::helper::generate;
//! use qr_creator::style::RenderRequest;
//!
//! let request = RenderRequest {
//!     data: "https://example.com".into(),
//!     style: "dots".into(),
//!     fill_mode: "gradient".into(),
//!     fill_color: "#0f172a".into(),
//!     fill_color_to: Some("#3b82f6".into()),
//!     box_size: 8,
//!     border: 4,
//!     ..RenderRequest::default()
//! };
//!
//! let output = generate(&request).unwrap();
//! assert_eq!(output.content_type, "image/png");
//! ```
//!
//! ## Modules
//!
//! - [`style`]: Request validation and the normalized [`StyleSpec`].
//! - [`encode`]: Seam to the external symbol encoder.
//! - [`classify`]: Body / eye / quiet-zone module classification.
//! - [`shape`]: Per-module shape geometry.
//! - [`color`]: Hex colors, gradients, per-module color resolution.
//! - [`raster`]: PNG rendering.
//! - [`svg`]: SVG rendering.
//! - [`helper`]: One-call pipeline entry points.
//!
//! [`StyleSpec`]: style::StyleSpec

#![forbid(unsafe_code)]

pub mod classify;
pub mod color;
pub mod encode;
pub mod error;
pub mod helper;
pub mod raster;
pub mod shape;
pub mod style;
pub mod svg;

pub use classify::{ClassifiedMatrix, ModuleClass};
pub use color::{FillMode, Rgb};
pub use encode::{ErrorCorrection, ModuleMatrix};
pub use error::{QrGenError, ValidationError};
pub use helper::{generate, RenderOutput};
pub use shape::Style;
pub use style::{OutputFormat, RenderRequest, StyleSpec};
