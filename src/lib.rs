//! prettyplot
//!
//! Small helpers for good-looking charts on top of `plotters`: a sequential grayscale color
//! ramp and a sorted horizontal bar chart ("gray bars") with the usual clutter removed.
//!
//! ### Features
//! - Grayscale ramps sampled from the ColorBrewer Greys scheme
//! - Sorted bar layout with fixed bar width and padding
//! - Figure/axes handles that can be tweaked before saving to SVG or PNG
//! - CSV/JSON loading of `label -> value` data
//!
//! ### Example
//! ```no_run
//! use prettyplot::{CategoryValues, GrayBarsOptions, gray_bars};
//!
//! let data = CategoryValues::from([("a", 3.0), ("b", 1.0), ("c", 2.0)]);
//! let mut fig = gray_bars(&data, &GrayBarsOptions::default())?;
//! fig.ax_mut().set_title("Scores");
//! fig.save("scores.svg")?;
//! # Ok::<(), prettyplot::PlotError>(())
//! ```

pub mod charts;
pub mod colormap;
pub mod error;
pub mod figure;
pub mod layout;
pub mod models;
pub mod options;
pub mod storage;
pub mod style;
pub mod viz;
pub mod viz_plotters_adapter;

pub use charts::{gray_bars, gray_bars_json};
pub use colormap::{Palette, Rgb, gray_sequentials};
pub use error::PlotError;
pub use figure::{Axes, Figure};
pub use layout::{BAR_PADDING, BAR_STEP, BAR_WIDTH, BarLayout};
pub use models::CategoryValues;
pub use options::GrayBarsOptions;
pub use style::{FontConfig, Orientation, Spines};
