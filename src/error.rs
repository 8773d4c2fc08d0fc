//! Error type shared by the library modules.

use thiserror::Error;

/// Everything that can go wrong while building or rendering a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// An option had the wrong type or an unusable value.
    #[error("invalid option \"{param}\": {reason}")]
    InvalidOption { param: String, reason: String },

    /// A color ramp was requested with zero samples.
    #[error("color ramp needs at least one sample")]
    EmptyRamp,

    /// A bar chart was requested for an empty mapping.
    #[error("no categories to plot")]
    EmptyData,

    /// A category carried NaN or an infinite value.
    #[error("value for category \"{label}\" is not finite")]
    NonFiniteValue { label: String },

    /// Subplot grids need at least one row and one column.
    #[error("subplot grid must have at least one row and one column (got {rows}x{cols})")]
    InvalidGrid { rows: usize, cols: usize },

    /// No font could be registered for the text renderer.
    #[error("no usable font found; register one with fonts::register_font_file")]
    FontUnavailable,

    /// Any error reported by the plotting backend.
    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    pub(crate) fn invalid(param: &str, reason: impl Into<String>) -> Self {
        PlotError::InvalidOption {
            param: param.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = PlotError> = std::result::Result<T, E>;

/// Map a plotters drawing error into [`PlotError::Render`].
pub(crate) fn render_err<E: std::fmt::Debug>(e: E) -> PlotError {
    PlotError::Render(format!("{e:?}"))
}
