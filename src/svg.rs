//! Vector (SVG) rendering.
//!
//! The validator has already downgraded the spec to the SVG feature set:
//! full-cell squares, one solid foreground color, one background rectangle.
//! Keeping the vector path this small is what keeps the output scanner-safe
//! and tiny regardless of what was requested for raster mode.

use tracing::debug;

use crate::encode::ModuleMatrix;
use crate::style::StyleSpec;

// The string always uses Unix newlines (\n), regardless of the platform.
pub fn render_svg(spec: &StyleSpec, matrix: &ModuleMatrix) -> String {
    let n = matrix.size();
    let dimension = n + 2 * spec.border as i32;
    let px = dimension as u32 * spec.box_size;
    debug!(n, px, "rendering svg document");

    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{px}\" height=\"{px}\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += &format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        spec.back_color.to_hex()
    );
    result += "\t<path d=\"";
    let border = spec.border as i32;
    let mut first = true;
    for y in 0..n {
        for x in 0..n {
            if matrix.is_dark(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += &format!("\" fill=\"{}\"/>\n", spec.fill_color.to_hex());
    result += "</svg>\n";
    result
}
