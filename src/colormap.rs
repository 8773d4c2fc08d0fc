//! Sequential grayscale palette and color ramps.
//!
//! The palette is the 9-class ColorBrewer "Greys" scheme, resampled to a small number of
//! levels. [`gray_sequentials`] ramps between levels 1 and 2 of the 5-level resampling, which
//! keeps bars light enough for black tick labels while still telling neighbours apart.

use crate::error::{PlotError, Result};

/// ColorBrewer "Greys", 9 classes, light to dark.
const GREYS9: [u8; 9] = [0xFF, 0xF0, 0xD9, 0xBD, 0x96, 0x73, 0x52, 0x25, 0x00];

/// Number of levels the bar palette is resampled to.
pub const GREYS_LEVELS: usize = 5;
/// Palette index of the ramp start.
pub const RAMP_START: usize = 1;
/// Palette index of the ramp end.
pub const RAMP_END: usize = 2;

/// A color with three channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    /// Same value on every channel.
    pub const fn gray(v: f64) -> Self {
        Rgb { r: v, g: v, b: v }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8 bits per channel.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// `#RRGGBB`, uppercase.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// A discrete palette: an ordered list of colors addressed by index.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Resample the 9-class Greys scheme to `levels` evenly spaced colors (light to dark).
    pub fn greys(levels: usize) -> Result<Self> {
        if levels < 2 {
            return Err(PlotError::invalid(
                "levels",
                format!("palette needs at least 2 levels, got {levels}"),
            ));
        }
        let last = (GREYS9.len() - 1) as f64;
        let colors = (0..levels)
            .map(|i| {
                let x = i as f64 / (levels - 1) as f64 * last;
                let lo = x.floor() as usize;
                let hi = (lo + 1).min(GREYS9.len() - 1);
                let t = x - lo as f64;
                let a = GREYS9[lo] as f64 / 255.0;
                let b = GREYS9[hi] as f64 / 255.0;
                Rgb::gray(a + (b - a) * t)
            })
            .collect();
        Ok(Palette { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    pub fn sample(&self, index: usize) -> Result<Rgb> {
        self.colors.get(index).copied().ok_or_else(|| {
            PlotError::invalid(
                "index",
                format!("palette has {} levels, index {index} is out of range", self.len()),
            )
        })
    }

    /// `n` colors interpolated channel by channel from level `from` to level `to`.
    pub fn ramp(&self, n: usize, from: usize, to: usize) -> Result<Vec<Rgb>> {
        if n == 0 {
            return Err(PlotError::EmptyRamp);
        }
        let start = self.sample(from)?.channels();
        let end = self.sample(to)?.channels();
        let chans: Vec<Vec<f64>> = (0..3).map(|c| linspace(start[c], end[c], n)).collect();
        Ok((0..n)
            .map(|i| Rgb::new(chans[0][i], chans[1][i], chans[2][i]))
            .collect())
    }
}

/// `n` gray colors between the two lightest non-white levels of the 5-level Greys palette.
///
/// Fails with [`PlotError::EmptyRamp`] when `n == 0`.
pub fn gray_sequentials(n: usize) -> Result<Vec<Rgb>> {
    Palette::greys(GREYS_LEVELS)?.ramp(n, RAMP_START, RAMP_END)
}

/// `n` evenly spaced values from `start` to `end`; the endpoints are hit exactly.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}
