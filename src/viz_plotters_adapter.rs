//! Adapter helpers turning crate colors into plotters styles.

use plotters::prelude::*;

use crate::colormap::Rgb;

/// Light gray used for gridlines.
pub const GRID_COLOR: RGBColor = RGBColor(0xB0, 0xB0, 0xB0);

pub fn rgb_color(c: &Rgb) -> RGBColor {
    let (r, g, b) = c.to_rgb8();
    RGBColor(r, g, b)
}

/// Filled style for bars.
pub fn fill_style(c: &Rgb) -> ShapeStyle {
    rgb_color(c).filled()
}

/// Stroke for gridlines.
pub fn grid_style() -> ShapeStyle {
    GRID_COLOR.stroke_width(1)
}

/// Stroke for visible spines.
pub fn spine_style() -> ShapeStyle {
    BLACK.stroke_width(1)
}
