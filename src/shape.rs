//! Per-module shape geometry.
//!
//! Each style maps one module cell to a single filled primitive in
//! cell-local coordinates. Shapes depend only on the style, the cell size
//! and the gap ratio, never on neighboring modules, so rendering is
//! order-independent and byte-stable: bar styles look continuous purely
//! because adjacent dark cells each draw a bar that reaches the cell edge.
//!
//! Rasterization convention: a pixel is filled iff its center lies inside
//! the shape, with rectangle edges half-open (`[min, max)`) and curved
//! boundaries inclusive (`distance <= radius`). This is the one rounding
//! rule the whole raster path uses, which is what makes repeated renders
//! byte-identical.

use serde::Deserialize;

/// Module shape tag, applied per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Full-cell filled square. The only style the SVG output supports.
    #[default]
    Square,
    /// Inscribed centered circle, diameter `size * (1 - gap_ratio)`.
    Dots,
    /// Full-cell square with corner radius `size * 0.3`.
    Rounded,
    /// Square inset by `gap_ratio / 2 * size` per side.
    Gapped,
    /// Full-height bar of width `size * (1 - gap_ratio)`, centered.
    BarsVertical,
    /// Full-width bar of height `size * (1 - gap_ratio)`, centered.
    BarsHorizontal,
}

pub const STYLE_VALUES: &str = "square, dots, rounded, gapped, bars-vertical, bars-horizontal";

impl Style {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "square" => Some(Self::Square),
            "dots" => Some(Self::Dots),
            "rounded" => Some(Self::Rounded),
            "gapped" => Some(Self::Gapped),
            "bars-vertical" => Some(Self::BarsVertical),
            "bars-horizontal" => Some(Self::BarsHorizontal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Dots => "dots",
            Self::Rounded => "rounded",
            Self::Gapped => "gapped",
            Self::BarsVertical => "bars-vertical",
            Self::BarsHorizontal => "bars-horizontal",
        }
    }
}

/// A filled primitive in cell-local coordinates, `(0,0)` at the cell's
/// top-left corner. Always contained within the `size x size` cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    RoundedRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
}

impl Shape {
    /// Whether the point lies inside the shape, per the module-level
    /// rasterization convention.
    pub fn covers(&self, px: f32, py: f32) -> bool {
        match *self {
            Shape::Rect { x, y, w, h } => px >= x && px < x + w && py >= y && py < y + h,
            Shape::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
            Shape::RoundedRect { x, y, w, h, radius } => {
                if !(px >= x && px < x + w && py >= y && py < y + h) {
                    return false;
                }
                // Clamp the corner radius the same way bounds() does.
                let r = radius.min(w / 2.0).min(h / 2.0);
                let cx = px.clamp(x + r, x + w - r);
                let cy = py.clamp(y + r, y + h - r);
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
        }
    }

    /// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        match *self {
            Shape::Rect { x, y, w, h } | Shape::RoundedRect { x, y, w, h, .. } => {
                (x, y, x + w, y + h)
            }
            Shape::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
        }
    }

    /// Precomputed pixel coverage for a `size x size` cell, row-major.
    /// Every module of the same style shares one mask, so the per-module
    /// raster work is a plain lookup.
    pub fn coverage_mask(&self, size: u32) -> Vec<bool> {
        let mut mask = Vec::with_capacity((size * size) as usize);
        for py in 0..size {
            for px in 0..size {
                mask.push(self.covers(px as f32 + 0.5, py as f32 + 0.5));
            }
        }
        mask
    }
}

/// The primitive for one module cell of the given style.
///
/// `gap_ratio` is the fraction of the cell left uncovered by the reduced
/// styles (dots, gapped, bars); the square and rounded styles span the full
/// cell regardless.
pub fn shape_for(style: Style, size: f32, gap_ratio: f32) -> Shape {
    match style {
        Style::Square => Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: size,
            h: size,
        },
        Style::Dots => Shape::Circle {
            cx: size / 2.0,
            cy: size / 2.0,
            r: size * (1.0 - gap_ratio) / 2.0,
        },
        Style::Rounded => Shape::RoundedRect {
            x: 0.0,
            y: 0.0,
            w: size,
            h: size,
            radius: size * 0.3,
        },
        Style::Gapped => {
            let inset = gap_ratio / 2.0 * size;
            Shape::Rect {
                x: inset,
                y: inset,
                w: size - 2.0 * inset,
                h: size - 2.0 * inset,
            }
        }
        Style::BarsVertical => {
            let w = size * (1.0 - gap_ratio);
            Shape::Rect {
                x: (size - w) / 2.0,
                y: 0.0,
                w,
                h: size,
            }
        }
        Style::BarsHorizontal => {
            let h = size * (1.0 - gap_ratio);
            Shape::Rect {
                x: 0.0,
                y: (size - h) / 2.0,
                w: size,
                h,
            }
        }
    }
}
