//! Sorted bar layout: order categories by value and place one bar every `BAR_STEP`.

use std::cmp::Ordering;

use crate::colormap::{Rgb, gray_sequentials};
use crate::error::{PlotError, Result};
use crate::models::CategoryValues;

/// Thickness of one bar, in category-axis units.
pub const BAR_WIDTH: f64 = 0.25;
/// Gap between two neighbouring bars.
pub const BAR_PADDING: f64 = 0.05;
/// Distance between two consecutive bar centres.
pub const BAR_STEP: f64 = BAR_WIDTH + BAR_PADDING;

/// Bars sorted by value, with positions and colors. All vectors have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Bar centres along the category axis, starting at 0.
    pub positions: Vec<f64>,
    pub colors: Vec<Rgb>,
    pub width: f64,
    /// Distance between consecutive positions.
    pub step: f64,
}

impl BarLayout {
    /// Sort `data` by value (`descending == true` puts the largest first) and lay it out.
    ///
    /// Equal values keep the mapping's insertion order.
    pub fn compute(data: &CategoryValues, descending: bool) -> Result<Self> {
        if data.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if let Some((label, _)) = data.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlotError::NonFiniteValue {
                label: label.to_string(),
            });
        }

        let mut entries: Vec<(&str, f64)> = data.iter().collect();
        // Values are finite here; `partial_cmp` also ties 0.0 with -0.0.
        let by_value = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        if descending {
            entries.sort_by(|a, b| by_value(b.1, a.1));
        } else {
            entries.sort_by(|a, b| by_value(a.1, b.1));
        }

        let n = entries.len();
        let mut positions = vec![0.0; n];
        for i in 1..n {
            positions[i] = positions[i - 1] + BAR_STEP;
        }
        let colors = gray_sequentials(n)?;
        log::debug!("bar layout: {n} categories, descending={descending}");

        Ok(BarLayout {
            labels: entries.iter().map(|(l, _)| l.to_string()).collect(),
            values: entries.iter().map(|(_, v)| *v).collect(),
            positions,
            colors,
            width: BAR_WIDTH,
            step: BAR_STEP,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Value-axis extent, always including zero. A flat range is widened to one unit.
    pub fn value_range(&self) -> (f64, f64) {
        let lo = self.values.iter().cloned().fold(0.0, f64::min);
        let hi = self.values.iter().cloned().fold(0.0, f64::max);
        if (hi - lo).abs() < f64::EPSILON {
            (lo, lo + 1.0)
        } else {
            (lo, hi)
        }
    }

    /// Category-axis extent from the outer edge of the first bar to the outer edge of the last.
    pub fn category_range(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        let first = self.positions.first().copied().unwrap_or(0.0);
        let last = self.positions.last().copied().unwrap_or(0.0);
        (first - half, last + half)
    }

    /// Iterate `(label, value, position, color)` per bar.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64, f64, Rgb)> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .zip(&self.positions)
            .zip(&self.colors)
            .map(|(((l, v), p), c)| (l.as_str(), *v, *p, *c))
    }
}
