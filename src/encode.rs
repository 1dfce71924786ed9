//! Seam to the external QR symbol encoder.
//!
//! All Reed-Solomon and mask-selection math lives in the `qrcode` crate; this
//! module only turns its output into a [`ModuleMatrix`], the opaque 2-D
//! boolean grid the rest of the pipeline consumes. Any encoder that can
//! produce a square dark/light grid is substitutable behind [`encode`].

use qrcode::{EcLevel, QrCode};
use serde::Deserialize;

use crate::error::Result;

/// Error correction level, passed through to the symbol encoder verbatim.
///
/// Higher levels add redundancy and may bump the symbol to a larger version
/// for the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "L" => Some(Self::L),
            "M" => Some(Self::M),
            "Q" => Some(Self::Q),
            "H" => Some(Self::H),
            _ => None,
        }
    }

    fn ec_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

/// A square grid of dark/light modules produced by the symbol encoder.
///
/// Immutable once built. The dimension is always odd and at least 21
/// (version 1). Out-of-range lookups through [`is_dark`] read as light, so
/// renderers can iterate over the quiet zone without bounds juggling.
///
/// [`is_dark`]: ModuleMatrix::is_dark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: i32,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a matrix from a row-major darkness grid.
    ///
    /// # Panics
    ///
    /// Panics if `modules.len() != size * size`.
    pub fn new(size: i32, modules: Vec<bool>) -> Self {
        assert!(size > 0, "matrix dimension must be positive");
        assert_eq!(
            modules.len(),
            (size * size) as usize,
            "module count must match dimension"
        );
        Self { size, modules }
    }

    /// The width and height of the matrix, in modules.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns whether the module at the given coordinates is dark.
    /// Coordinates outside the matrix read as light.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && self.modules[(y * self.size + x) as usize]
    }
}

/// Encodes text into a module matrix at the given error correction level.
///
/// The symbol version (and therefore the matrix dimension) is chosen by the
/// encoder from the data length and correction level. Data the encoder
/// cannot fit surfaces as [`QrGenError::Encoding`].
///
/// [`QrGenError::Encoding`]: crate::error::QrGenError::Encoding
pub fn encode(data: &str, ec: ErrorCorrection) -> Result<ModuleMatrix> {
    let code = QrCode::with_error_correction_level(data, ec.ec_level())?;
    let size = code.width() as i32;
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == qrcode::Color::Dark)
        .collect();
    Ok(ModuleMatrix::new(size, modules))
}
