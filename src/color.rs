//! Color parsing and per-module color resolution.
//!
//! Gradient interpolation is a channel-wise sRGB lerp with round-half-up
//! rounding per channel. Rounding convention: `floor(v + 0.5)` after
//! clamping to `[0, 255]`, so the same inputs always produce the same byte
//! values and both gradient endpoints reproduce their configured colors
//! exactly.

use serde::Deserialize;

use crate::classify::ModuleClass;
use crate::style::StyleSpec;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parses a hex color: 3 or 6 hex digits, leading `#` optional.
    /// 3-digit shorthand expands by doubling each digit (`f00` -> `ff0000`).
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Rgb {
                    r: channel(0)?,
                    g: channel(2)?,
                    b: channel(4)?,
                })
            }
            3 => {
                let channel = |i: usize| {
                    let d = u8::from_str_radix(&digits[i..i + 1], 16).ok()?;
                    Some(d * 17)
                };
                Some(Rgb {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear interpolation toward `other` at position `t`
    /// in `[0, 1]`, rounded half-up per channel.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    (v.clamp(0.0, 255.0) + 0.5).floor() as u8
}

/// How dark body modules are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Solid,
    Gradient,
}

impl FillMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "solid" => Some(Self::Solid),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }
}

/// Resolves the concrete color of one module from its class and row.
///
/// Pure and request-scoped: built once from the normalized spec, then read
/// concurrently per module with no ordering constraints.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver {
    fill: Rgb,
    fill_to: Rgb,
    back: Rgb,
    eye: Option<Rgb>,
    mode: FillMode,
}

impl ColorResolver {
    pub fn new(spec: &StyleSpec) -> Self {
        Self {
            fill: spec.fill_color,
            fill_to: spec.fill_color_to,
            back: spec.back_color,
            eye: spec.eye_color,
            mode: spec.fill_mode,
        }
    }

    /// The color for the module at `row` of `total_rows`.
    ///
    /// Light modules and quiet zone are always background. Dark eye modules
    /// take the eye override when set; otherwise they follow the same fill
    /// rule as body modules, gradient included.
    pub fn color_for(&self, class: ModuleClass, dark: bool, row: i32, total_rows: i32) -> Rgb {
        if !dark || class == ModuleClass::Quiet {
            return self.back;
        }
        let base = match self.mode {
            FillMode::Solid => self.fill,
            FillMode::Gradient => {
                let t = if total_rows > 1 {
                    row as f32 / (total_rows - 1) as f32
                } else {
                    0.0
                };
                self.fill.lerp(self.fill_to, t)
            }
        };
        match class {
            ModuleClass::EyeOuter | ModuleClass::EyeInner => self.eye.unwrap_or(base),
            _ => base,
        }
    }
}
