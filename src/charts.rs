//! Ready-made charts.

use crate::error::Result;
use crate::figure::Figure;
use crate::layout::{BAR_STEP, BarLayout};
use crate::models::CategoryValues;
use crate::options::GrayBarsOptions;
use crate::style::Orientation;

/// Sorted gray bar chart: labels beside the bars, values along the other axis.
///
/// With `order == true` the largest value comes first (position 0), with `false` the
/// smallest. The returned figure has a single axes with every spine removed and gridlines on
/// the value axis only; adjust it further or call [`Figure::save`].
///
/// ```no_run
/// use prettyplot::{CategoryValues, GrayBarsOptions, gray_bars};
///
/// let data = CategoryValues::from([("rust", 3.0), ("c", 1.0), ("go", 2.0)]);
/// let fig = gray_bars(&data, &GrayBarsOptions::new().order(false))?;
/// fig.save("langs.svg")?;
/// # Ok::<(), prettyplot::PlotError>(())
/// ```
pub fn gray_bars(data: &CategoryValues, options: &GrayBarsOptions) -> Result<Figure> {
    options.validate()?;
    let font = options.font.clone().unwrap_or_default();

    let layout = BarLayout::compute(data, options.order)?;

    let mut fig = Figure::subplots(1, 1, options.size)?
        .with_font(font)
        .with_locale(options.locale.clone());
    let ax = fig.ax_mut();
    match options.orientation {
        Orientation::Horizontal => {
            ax.barh(layout);
            ax.xaxis_grid();
        }
        Orientation::Vertical => {
            ax.bar(layout);
            ax.yaxis_grid();
        }
    }
    ax.remove_spines();
    if let Some(title) = &options.title {
        ax.set_title(title.clone());
    }

    // Zero means unset, like an absent option.
    if let Some(h) = options.max_height.filter(|h| *h > 0.0) {
        let (lo, hi) = (-1.0, h * BAR_STEP + 1.0);
        match options.orientation {
            Orientation::Horizontal => ax.set_ylim(lo, hi),
            Orientation::Vertical => ax.set_xlim(lo, hi),
        };
    }

    Ok(fig)
}

/// [`gray_bars`] with options given as an untyped JSON object.
///
/// Options are checked before any layout is computed; a non-boolean `order` fails with
/// [`crate::PlotError::InvalidOption`] naming the parameter.
pub fn gray_bars_json(data: &CategoryValues, options: &serde_json::Value) -> Result<Figure> {
    let options = GrayBarsOptions::from_json(options)?;
    gray_bars(data, &options)
}
