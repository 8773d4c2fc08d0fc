//! Utility functions for rendering: locale mapping, tick formatting, axis extents, gutters.

use num_format::{Locale, ToFormattedString};

use super::text::estimate_text_width_px;

/// Share of the data span added as breathing room away from the bar baseline.
pub const AXIS_MARGIN: f64 = 0.05;

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Anything else falls back to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Tick label for a value: grouped thousands, at most two decimals, trailing zeros dropped.
pub fn format_tick(v: f64, locale: &Locale) -> String {
    let a = v.abs();
    if !v.is_finite() || a >= 1.0e15 {
        return format!("{v:e}");
    }
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    let rounded = format!("{:.*}", prec, a);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let int_val: u64 = int_part.parse().unwrap_or(0);
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if v < 0.0 && (int_val != 0 || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&int_val.to_formatted_string(locale));
    if !frac.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(frac);
    }
    out
}

/// Pad a value range on the side(s) away from zero, so bars start flush at the baseline.
pub fn pad_value_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let pad = (hi - lo) * AXIS_MARGIN;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    let hi = if hi > 0.0 { hi + pad } else { hi };
    (lo, hi)
}

/// Pad a category range symmetrically.
pub fn pad_category_range((lo, hi): (f64, f64)) -> (f64, f64) {
    let pad = (hi - lo) * AXIS_MARGIN;
    (lo - pad, hi + pad)
}

/// Gutter width (px) for category labels drawn beside horizontal bars.
pub fn category_label_area_px(labels: &[String], font_px: u32, max_px: u32) -> u32 {
    let widest = labels
        .iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0);
    widest.saturating_add(16).clamp(24, max_px.max(24))
}

/// Gutter width (px) for value tick labels on a vertical value axis.
///
/// Samples the same number of tick positions plotters is asked for and measures the
/// formatted labels.
pub fn value_label_area_px(range: (f64, f64), ticks: usize, font_px: u32, locale: &Locale) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = range.0 + (range.1 - range.0) * t;
        max_px = max_px.max(estimate_text_width_px(&format_tick(v, locale), font_px));
    }
    max_px.saturating_add(18).clamp(40, 200)
}
