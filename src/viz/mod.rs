//! Rendering: draw a [`Figure`] to **SVG** or **PNG** with plotters.
//!
//! Per axes the drawing order is gridlines, bars, spines, then category labels, so gridlines
//! always sit below the data. Value ticks use locale-aware thousands separators.

pub mod fonts;
pub mod text;
pub mod util;

use std::path::Path;

use num_format::Locale;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::TRANSPARENT;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use crate::error::{Result, render_err};
use crate::figure::{Axes, Figure};
use crate::style::{FontConfig, Orientation};
use crate::viz_plotters_adapter::{fill_style, grid_style, spine_style};
use text::truncate_to_width;
use util::{
    category_label_area_px, format_tick, map_locale, pad_category_range, pad_value_range,
    value_label_area_px,
};

const MARGIN: u32 = 16;
const VALUE_TICKS: usize = 10;
/// Distance between a category label and the axis it belongs to.
const LABEL_GAP_PX: i32 = 8;

/// Render `fig` to `path`; the extension picks the backend (`svg` or bitmap).
pub(crate) fn save_figure(fig: &Figure, path: &Path) -> Result<()> {
    fonts::ensure_font(&fig.font().family)?;
    let size = fig.size();
    let path_string = path.to_string_lossy().into_owned();

    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_figure(root, fig)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_figure(root, fig)?;
    }
    log::info!("wrote figure to {}", path.display());
    Ok(())
}

pub(crate) fn figure_to_svg_string(fig: &Figure) -> Result<String> {
    fonts::ensure_font(&fig.font().family)?;
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, fig.size()).into_drawing_area();
        draw_figure(root, fig)?;
    }
    Ok(buf)
}

fn draw_figure<DB>(root: DrawingArea<DB, Shift>, fig: &Figure) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(render_err)?;
    let locale = map_locale(fig.locale());
    let cells = root.split_evenly(fig.grid());
    for (cell, axes) in cells.iter().zip(fig.all_axes()) {
        draw_axes(cell, axes, fig.font(), locale)?;
    }
    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_axes<DB>(
    area: &DrawingArea<DB, Shift>,
    axes: &Axes,
    font: &FontConfig,
    locale: &Locale,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let family = font.family.as_str();
    let font_px = font.size_px();
    let tick_font = (family, font.size);
    let (area_w, _) = area.dim_in_pixel();
    let max_label_px = area_w * 2 / 5;

    let series = axes.bars();
    let orientation = series.map_or(Orientation::Horizontal, |s| s.orientation);
    let labels: Vec<String> = series
        .map(|s| {
            s.layout
                .labels
                .iter()
                .map(|l| truncate_to_width(l, font_px, max_label_px))
                .collect()
        })
        .unwrap_or_default();

    // ----------------------------
    // 1) Axis extents
    // ----------------------------
    let (value_range, category_range) = match series {
        Some(s) => (
            pad_value_range(s.layout.value_range()),
            pad_category_range(s.layout.category_range()),
        ),
        None => ((0.0, 1.0), (0.0, 1.0)),
    };
    let (mut x_range, mut y_range) = match orientation {
        Orientation::Horizontal => (value_range, category_range),
        Orientation::Vertical => (category_range, value_range),
    };
    if let Some(lim) = axes.x_limits() {
        x_range = lim;
    }
    if let Some(lim) = axes.y_limits() {
        y_range = lim;
    }
    log::debug!(
        "axes: {} bars, x={x_range:?}, y={y_range:?}, {orientation:?}",
        labels.len()
    );

    // ----------------------------
    // 2) Gutters & chart
    // ----------------------------
    let bottom_px = font_px * 2 + 8;
    let left_px = match orientation {
        Orientation::Horizontal => category_label_area_px(&labels, font_px, max_label_px + 16),
        Orientation::Vertical => value_label_area_px(y_range, VALUE_TICKS, font_px, locale),
    };

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(MARGIN)
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_px);
    if let Some(title) = axes.title() {
        builder.caption(title, (family, font.size * 1.25));
    }
    let mut chart = builder
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(render_err)?;

    // ----------------------------
    // 3) Gridlines & value ticks (below the data)
    // ----------------------------
    let value_fmt = |v: &f64| format_tick(*v, locale);
    let blank = |_: &f64| String::new();
    // Category ticks are drawn by hand at the bar positions.
    let category_fmt: &dyn Fn(&f64) -> String = if series.is_some() {
        &blank
    } else {
        &value_fmt
    };
    {
        let mut mesh = chart.configure_mesh();
        mesh.axis_style(TRANSPARENT.stroke_width(1))
            .bold_line_style(grid_style())
            .light_line_style(TRANSPARENT.stroke_width(0))
            .label_style(tick_font)
            .x_labels(VALUE_TICKS)
            .y_labels(VALUE_TICKS);
        match orientation {
            Orientation::Horizontal => mesh
                .x_label_formatter(&value_fmt)
                .y_label_formatter(category_fmt),
            Orientation::Vertical => mesh
                .x_label_formatter(category_fmt)
                .y_label_formatter(&value_fmt),
        };
        if !axes.x_grid() {
            mesh.disable_x_mesh();
        }
        if !axes.y_grid() {
            mesh.disable_y_mesh();
        }
        mesh.draw().map_err(render_err)?;
    }

    // ----------------------------
    // 4) Bars
    // ----------------------------
    if let Some(series) = series {
        let half = series.layout.width / 2.0;
        let rects: Vec<_> = series
            .layout
            .bars()
            .map(|(_, v, p, c)| {
                let (v0, v1) = (v.min(0.0), v.max(0.0));
                let corners = match series.orientation {
                    Orientation::Horizontal => [(v0, p - half), (v1, p + half)],
                    Orientation::Vertical => [(p - half, v0), (p + half, v1)],
                };
                Rectangle::new(corners, fill_style(&c))
            })
            .collect();
        chart.draw_series(rects).map_err(render_err)?;
    }

    // ----------------------------
    // 5) Spines
    // ----------------------------
    let spines = axes.spines();
    let (x0, x1, y0, y1) = (x_range.0, x_range.1, y_range.0, y_range.1);
    let mut edges: Vec<Vec<(f64, f64)>> = Vec::new();
    if spines.left {
        edges.push(vec![(x0, y0), (x0, y1)]);
    }
    if spines.right {
        edges.push(vec![(x1, y0), (x1, y1)]);
    }
    if spines.bottom {
        edges.push(vec![(x0, y0), (x1, y0)]);
    }
    if spines.top {
        edges.push(vec![(x0, y1), (x1, y1)]);
    }
    chart
        .draw_series(
            edges
                .into_iter()
                .map(|pts| PathElement::new(pts, spine_style())),
        )
        .map_err(render_err)?;

    // ----------------------------
    // 6) Category labels beside each bar
    // ----------------------------
    if let Some(series) = series {
        let base = TextStyle::from(tick_font).color(&BLACK);
        let texts: Vec<_> = labels
            .iter()
            .zip(&series.layout.positions)
            .map(|(label, &p)| match series.orientation {
                Orientation::Horizontal => {
                    EmptyElement::at((x0, p))
                        + Text::new(
                            label.clone(),
                            (-LABEL_GAP_PX, 0),
                            base.pos(Pos::new(HPos::Right, VPos::Center)),
                        )
                }
                Orientation::Vertical => {
                    EmptyElement::at((p, y0))
                        + Text::new(
                            label.clone(),
                            (0, LABEL_GAP_PX),
                            base.pos(Pos::new(HPos::Center, VPos::Top)),
                        )
                }
            })
            .collect();
        chart.draw_series(texts).map_err(render_err)?;
    }

    Ok(())
}
