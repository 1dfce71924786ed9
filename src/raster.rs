//! Raster (PNG) rendering.
//!
//! Composes the classified matrix into an RGB pixel buffer of
//! `(n + 2 * border) * box_size` pixels per side, then encodes it as PNG.
//! No anti-aliasing anywhere: each module stamps a precomputed pixel mask
//! for its style, so rendering the same spec and matrix twice produces
//! byte-identical output.

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb as ImageRgb, RgbImage};
use tracing::debug;

use crate::classify::{finder_anchors, ClassifiedMatrix, ModuleClass};
use crate::color::ColorResolver;
use crate::encode::ModuleMatrix;
use crate::error::Result;
use crate::shape::shape_for;
use crate::style::StyleSpec;

/// Renders the matrix into an in-memory RGB image per the style spec.
pub fn render_image(spec: &StyleSpec, matrix: &ModuleMatrix) -> RgbImage {
    let n = matrix.size();
    let cell = spec.box_size;
    let px = (n as u32 + 2 * spec.border) * cell;
    debug!(n, px, style = spec.style.as_str(), "rendering raster image");

    let back = ImageRgb([spec.back_color.r, spec.back_color.g, spec.back_color.b]);
    let mut img: RgbImage = ImageBuffer::from_pixel(px, px, back);

    let classes = ClassifiedMatrix::classify(matrix, &finder_anchors(n));
    let colors = ColorResolver::new(spec);
    let body_mask = shape_for(spec.style, cell as f32, spec.gap_ratio).coverage_mask(cell);
    let eye_mask = shape_for(spec.eye_style, cell as f32, spec.gap_ratio).coverage_mask(cell);

    for y in 0..n {
        for x in 0..n {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let class = classes.class_at(x, y);
            let mask = match class {
                ModuleClass::EyeOuter | ModuleClass::EyeInner => &eye_mask,
                _ => &body_mask,
            };
            let color = colors.color_for(class, true, y, n);
            let pixel = ImageRgb([color.r, color.g, color.b]);
            let origin_x = (spec.border + x as u32) * cell;
            let origin_y = (spec.border + y as u32) * cell;
            for dy in 0..cell {
                for dx in 0..cell {
                    if mask[(dy * cell + dx) as usize] {
                        img.put_pixel(origin_x + dx, origin_y + dy, pixel);
                    }
                }
            }
        }
    }
    img
}

/// Renders the matrix and encodes it to PNG bytes.
pub fn render_png(spec: &StyleSpec, matrix: &ModuleMatrix) -> Result<Vec<u8>> {
    let img = render_image(spec, matrix);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
