//! Request validation and normalization.
//!
//! A [`RenderRequest`] arrives with the loose, stringly-typed shape of a
//! query string; [`RenderRequest::normalize`] turns it into an immutable
//! [`StyleSpec`] or a [`ValidationError`] the caller can act on. One rule is
//! deliberate and asymmetric: SVG output silently downgrades styling to the
//! scanner-safe baseline (square modules, solid fill, no eye override)
//! instead of rejecting the request, so the same payload degrades gracefully
//! across formats. Everything else invalid is an error, never a silent fix.

use serde::Deserialize;

use crate::color::{FillMode, Rgb};
use crate::encode::ErrorCorrection;
use crate::error::ValidationError;
use crate::shape::{Style, STYLE_VALUES};

/// Inclusive bounds for `box_size`, in pixels per module.
pub const BOX_SIZE_RANGE: (i64, i64) = (1, 32);

/// Inclusive bounds for `border`, in modules.
pub const BORDER_RANGE: (i64, i64) = (0, 10);

/// Inclusive bounds for `gap_ratio`.
pub const GAP_RATIO_RANGE: (f64, f64) = (0.0, 0.9);

/// Maximum accepted `data` length, in bytes.
pub const MAX_DATA_LEN: usize = 1024;

const DEFAULT_GAP_RATIO: f64 = 0.2;

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// The MIME type of the finished payload.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// A raw rendering request, before validation.
///
/// Field defaults mirror the service this crate fronts: PNG output, error
/// correction M, 10px modules, 2-module border, black on white, square
/// modules, solid fill.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub data: String,
    pub format: String,
    pub error_correction: String,
    pub box_size: i64,
    pub border: i64,
    pub fill_color: String,
    pub back_color: String,
    pub eye_color: Option<String>,
    pub fill_color_to: Option<String>,
    pub fill_mode: String,
    pub style: String,
    pub eye_style: String,
    pub gap_ratio: f64,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            data: String::new(),
            format: "png".into(),
            error_correction: "M".into(),
            box_size: 10,
            border: 2,
            fill_color: "#000000".into(),
            back_color: "#ffffff".into(),
            eye_color: None,
            fill_color_to: None,
            fill_mode: "solid".into(),
            style: "square".into(),
            eye_style: "auto".into(),
            gap_ratio: DEFAULT_GAP_RATIO,
        }
    }
}

/// The normalized, validated rendering request. Immutable once built.
///
/// Invariant: when `format` is SVG, `style` and `eye_style` are
/// [`Style::Square`], `fill_mode` is solid and `eye_color` is unset. The
/// renderers rely on this and never re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    pub format: OutputFormat,
    pub error_correction: ErrorCorrection,
    pub box_size: u32,
    pub border: u32,
    pub style: Style,
    /// Eye style with `auto` already resolved to the body style.
    pub eye_style: Style,
    pub fill_mode: FillMode,
    pub fill_color: Rgb,
    /// Gradient end color; equals `fill_color` when the request left it
    /// unset, which renders a gradient indistinguishable from solid.
    pub fill_color_to: Rgb,
    pub back_color: Rgb,
    pub eye_color: Option<Rgb>,
    pub gap_ratio: f32,
}

impl RenderRequest {
    /// Validates every field and produces the normalized [`StyleSpec`].
    ///
    /// Bounds, colors and enum values are checked here so the renderers can
    /// assume a well-formed spec. The `data` field is validated for length
    /// only; whether it fits the symbol is the encoder's call.
    pub fn normalize(&self) -> Result<StyleSpec, ValidationError> {
        if self.data.is_empty() {
            return Err(ValidationError::EmptyData);
        }
        if self.data.len() > MAX_DATA_LEN {
            return Err(ValidationError::DataTooLong {
                max: MAX_DATA_LEN,
                got: self.data.len(),
            });
        }

        let format = OutputFormat::parse(&self.format).ok_or(ValidationError::BadVariant {
            field: "format",
            value: self.format.clone(),
            allowed: "png, svg",
        })?;
        let error_correction =
            ErrorCorrection::parse(&self.error_correction).ok_or(ValidationError::BadVariant {
                field: "error_correction",
                value: self.error_correction.clone(),
                allowed: "L, M, Q, H",
            })?;

        let box_size = in_range("box_size", self.box_size, BOX_SIZE_RANGE)? as u32;
        let border = in_range("border", self.border, BORDER_RANGE)? as u32;
        let gap_ratio = {
            let (min, max) = GAP_RATIO_RANGE;
            if !(min..=max).contains(&self.gap_ratio) {
                return Err(ValidationError::OutOfRange {
                    field: "gap_ratio",
                    min,
                    max,
                    got: self.gap_ratio,
                });
            }
            self.gap_ratio as f32
        };

        let fill_color = parse_color("fill_color", &self.fill_color)?;
        let back_color = parse_color("back_color", &self.back_color)?;
        let mut eye_color = self
            .eye_color
            .as_deref()
            .map(|s| parse_color("eye_color", s))
            .transpose()?;
        let fill_color_to = self
            .fill_color_to
            .as_deref()
            .map(|s| parse_color("fill_color_to", s))
            .transpose()?
            .unwrap_or(fill_color);

        let mut style = Style::parse(&self.style).ok_or(ValidationError::BadVariant {
            field: "style",
            value: self.style.clone(),
            allowed: STYLE_VALUES,
        })?;
        let mut eye_style = match self.eye_style.as_str() {
            "auto" => style,
            other => Style::parse(other).ok_or(ValidationError::BadVariant {
                field: "eye_style",
                value: other.to_string(),
                allowed: "auto, square, dots, rounded, gapped, bars-vertical, bars-horizontal",
            })?,
        };
        let mut fill_mode = FillMode::parse(&self.fill_mode).ok_or(ValidationError::BadVariant {
            field: "fill_mode",
            value: self.fill_mode.clone(),
            allowed: "solid, gradient",
        })?;

        // SVG keeps the reduced feature set: downgrade rather than reject,
        // after the fields above have already been checked for validity.
        if format == OutputFormat::Svg {
            style = Style::Square;
            eye_style = Style::Square;
            fill_mode = FillMode::Solid;
            eye_color = None;
        }

        Ok(StyleSpec {
            format,
            error_correction,
            box_size,
            border,
            style,
            eye_style,
            fill_mode,
            fill_color,
            fill_color_to,
            back_color,
            eye_color,
            gap_ratio,
        })
    }
}

fn in_range(
    field: &'static str,
    value: i64,
    (min, max): (i64, i64),
) -> Result<i64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: min as f64,
            max: max as f64,
            got: value as f64,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgb, ValidationError> {
    Rgb::from_hex(value).ok_or(ValidationError::BadColor {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RenderRequest {
        RenderRequest {
            data: "HELLO".into(),
            ..RenderRequest::default()
        }
    }

    #[test]
    fn defaults_normalize_cleanly() {
        let spec = request().normalize().unwrap();
        assert_eq!(spec.format, OutputFormat::Png);
        assert_eq!(spec.error_correction, ErrorCorrection::M);
        assert_eq!(spec.box_size, 10);
        assert_eq!(spec.border, 2);
        assert_eq!(spec.style, Style::Square);
        assert_eq!(spec.eye_style, Style::Square);
        assert_eq!(spec.fill_mode, FillMode::Solid);
        assert_eq!(spec.fill_color, Rgb::BLACK);
        assert_eq!(spec.back_color, Rgb::WHITE);
        assert_eq!(spec.eye_color, None);
    }

    #[test]
    fn empty_data_is_rejected() {
        let req = RenderRequest::default();
        assert_eq!(req.normalize().unwrap_err(), ValidationError::EmptyData);
    }

    #[test]
    fn oversized_data_is_rejected() {
        let mut req = request();
        req.data = "x".repeat(MAX_DATA_LEN + 1);
        assert!(matches!(
            req.normalize().unwrap_err(),
            ValidationError::DataTooLong { max: 1024, .. }
        ));
    }

    #[test]
    fn numeric_bounds_are_enforced() {
        for (box_size, border) in [(0, 2), (33, 2), (10, -1), (10, 11)] {
            let mut req = request();
            req.box_size = box_size;
            req.border = border;
            assert!(
                matches!(
                    req.normalize().unwrap_err(),
                    ValidationError::OutOfRange { .. }
                ),
                "box_size={box_size} border={border} should be out of range"
            );
        }
        let mut req = request();
        req.box_size = 32;
        req.border = 0;
        assert!(req.normalize().is_ok());
    }

    #[test]
    fn gap_ratio_bounds_are_enforced() {
        for bad in [-0.1, 0.91, 1.0] {
            let mut req = request();
            req.gap_ratio = bad;
            assert!(matches!(
                req.normalize().unwrap_err(),
                ValidationError::OutOfRange {
                    field: "gap_ratio",
                    ..
                }
            ));
        }
    }

    #[test]
    fn bad_colors_are_rejected_with_the_field_name() {
        let mut req = request();
        req.eye_color = Some("chartreuse".into());
        assert_eq!(
            req.normalize().unwrap_err(),
            ValidationError::BadColor {
                field: "eye_color",
                value: "chartreuse".into(),
            }
        );
    }

    #[test]
    fn bad_enum_values_are_rejected() {
        for (mutate, field) in [
            (
                Box::new(|r: &mut RenderRequest| r.format = "gif".into())
                    as Box<dyn Fn(&mut RenderRequest)>,
                "format",
            ),
            (Box::new(|r| r.error_correction = "Z".into()), "error_correction"),
            (Box::new(|r| r.style = "stars".into()), "style"),
            (Box::new(|r| r.eye_style = "stars".into()), "eye_style"),
            (Box::new(|r| r.fill_mode = "radial".into()), "fill_mode"),
        ] {
            let mut req = request();
            mutate(&mut req);
            match req.normalize().unwrap_err() {
                ValidationError::BadVariant { field: got, .. } => assert_eq!(got, field),
                other => panic!("expected BadVariant for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn eye_style_auto_falls_back_to_body_style() {
        let mut req = request();
        req.style = "dots".into();
        let spec = req.normalize().unwrap();
        assert_eq!(spec.eye_style, Style::Dots);

        req.eye_style = "rounded".into();
        let spec = req.normalize().unwrap();
        assert_eq!(spec.style, Style::Dots);
        assert_eq!(spec.eye_style, Style::Rounded);
    }

    #[test]
    fn svg_downgrades_styling_instead_of_rejecting() {
        let mut req = request();
        req.format = "svg".into();
        req.style = "dots".into();
        req.eye_style = "rounded".into();
        req.fill_mode = "gradient".into();
        req.fill_color_to = Some("#ff0000".into());
        req.eye_color = Some("#00ff00".into());
        let spec = req.normalize().unwrap();
        assert_eq!(spec.style, Style::Square);
        assert_eq!(spec.eye_style, Style::Square);
        assert_eq!(spec.fill_mode, FillMode::Solid);
        assert_eq!(spec.eye_color, None);
    }

    #[test]
    fn svg_downgrade_still_validates_the_fields_it_overrides() {
        let mut req = request();
        req.format = "svg".into();
        req.style = "stars".into();
        assert!(matches!(
            req.normalize().unwrap_err(),
            ValidationError::BadVariant { field: "style", .. }
        ));
    }

    #[test]
    fn unset_gradient_end_defaults_to_fill_color() {
        let mut req = request();
        req.fill_mode = "gradient".into();
        req.fill_color = "#336699".into();
        let spec = req.normalize().unwrap();
        assert_eq!(spec.fill_color_to, spec.fill_color);
    }

    #[test]
    fn request_deserializes_from_query_shaped_json() {
        let req: RenderRequest = serde_json::from_str(
            r#"{"data": "HELLO", "format": "svg", "style": "dots", "box_size": 4}"#,
        )
        .unwrap();
        assert_eq!(req.data, "HELLO");
        assert_eq!(req.box_size, 4);
        assert_eq!(req.border, 2);
        let spec = req.normalize().unwrap();
        assert_eq!(spec.format, OutputFormat::Svg);
        assert_eq!(spec.style, Style::Square);
    }
}
