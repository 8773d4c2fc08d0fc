//! Figure and axes handles.
//!
//! A [`Figure`] is a plain description of what to draw: its pixel size, the font, and a grid
//! of [`Axes`]. Nothing touches a drawing backend until [`Figure::save`] or
//! [`Figure::to_svg_string`] is called, so callers can keep adjusting the handles returned by
//! the chart helpers.

use std::path::Path;

use crate::error::{PlotError, Result};
use crate::layout::BarLayout;
use crate::style::{FontConfig, Orientation, Spines};

/// Size of [`Figure::normalised`] in pixels (a 12 x 10 inch figure at 100 dpi).
pub const NORMALISED_SIZE: (u32, u32) = (1200, 1000);

/// Bars attached to an axes.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub layout: BarLayout,
    pub orientation: Orientation,
}

/// One plotting area with its decorations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axes {
    bars: Option<BarSeries>,
    spines: Spines,
    x_grid: bool,
    y_grid: bool,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    title: Option<String>,
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal bars: categories on y, values on x.
    pub fn barh(&mut self, layout: BarLayout) -> &mut Self {
        self.bars = Some(BarSeries {
            layout,
            orientation: Orientation::Horizontal,
        });
        self
    }

    /// Vertical bars: categories on x, values on y.
    pub fn bar(&mut self, layout: BarLayout) -> &mut Self {
        self.bars = Some(BarSeries {
            layout,
            orientation: Orientation::Vertical,
        });
        self
    }

    /// Hide the bounding box.
    pub fn remove_spines(&mut self) -> &mut Self {
        self.spines = Spines::none();
        self
    }

    pub fn set_spines(&mut self, spines: Spines) -> &mut Self {
        self.spines = spines;
        self
    }

    /// Gridlines at the x ticks only. Gridlines are always drawn below the data.
    pub fn xaxis_grid(&mut self) -> &mut Self {
        self.x_grid = true;
        self.y_grid = false;
        self
    }

    /// Gridlines at the y ticks only.
    pub fn yaxis_grid(&mut self) -> &mut Self {
        self.y_grid = true;
        self.x_grid = false;
        self
    }

    pub fn set_xlim(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.x_limits = Some((lo, hi));
        self
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) -> &mut Self {
        self.y_limits = Some((lo, hi));
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn bars(&self) -> Option<&BarSeries> {
        self.bars.as_ref()
    }

    pub fn spines(&self) -> Spines {
        self.spines
    }

    pub fn x_grid(&self) -> bool {
        self.x_grid
    }

    pub fn y_grid(&self) -> bool {
        self.y_grid
    }

    pub fn x_limits(&self) -> Option<(f64, f64)> {
        self.x_limits
    }

    pub fn y_limits(&self) -> Option<(f64, f64)> {
        self.y_limits
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// A grid of axes rendered onto one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    size: (u32, u32),
    rows: usize,
    cols: usize,
    font: FontConfig,
    locale: String,
    axes: Vec<Axes>,
}

impl Figure {
    /// A `rows x cols` grid of empty axes on a `size` pixel canvas.
    pub fn subplots(rows: usize, cols: usize, size: (u32, u32)) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlotError::InvalidGrid { rows, cols });
        }
        if size.0 == 0 || size.1 == 0 {
            return Err(PlotError::invalid(
                "size",
                format!("figure size must be positive, got {}x{}", size.0, size.1),
            ));
        }
        Ok(Figure {
            size,
            rows,
            cols,
            font: FontConfig::default(),
            locale: "en".to_string(),
            axes: vec![Axes::new(); rows * cols],
        })
    }

    /// A single axes on a 1200 x 1000 canvas.
    pub fn normalised() -> Self {
        Figure {
            size: NORMALISED_SIZE,
            rows: 1,
            cols: 1,
            font: FontConfig::default(),
            locale: "en".to_string(),
            axes: vec![Axes::new()],
        }
    }

    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    /// Locale tag for tick labels (`en`, `de`, `fr`, ...).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn set_font(&mut self, font: FontConfig) {
        self.font = font;
    }

    pub fn font(&self) -> &FontConfig {
        &self.font
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// `(rows, cols)`.
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The first (top-left) axes.
    pub fn ax(&self) -> &Axes {
        &self.axes[0]
    }

    pub fn ax_mut(&mut self) -> &mut Axes {
        &mut self.axes[0]
    }

    pub fn axes(&self, row: usize, col: usize) -> Option<&Axes> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.axes.get(row * self.cols + col)
    }

    pub fn axes_mut(&mut self, row: usize, col: usize) -> Option<&mut Axes> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.axes.get_mut(row * self.cols + col)
    }

    /// All axes in row-major order.
    pub fn all_axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Render to `path`: SVG when the extension is `svg`, a bitmap (PNG, ...) otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::viz::save_figure(self, path.as_ref())
    }

    /// Render to an in-memory SVG document.
    pub fn to_svg_string(&self) -> Result<String> {
        crate::viz::figure_to_svg_string(self)
    }
}
