//! Styling primitives carried by figures and axes: fonts, spines, bar orientation.

use serde::{Deserialize, Serialize};

/// Font family used when nothing else is configured.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
/// Font size (px) used when nothing else is configured.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Font properties applied to every text element of a figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontConfig {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        FontConfig {
            family: family.into(),
            size,
        }
    }

    /// Size rounded to whole pixels, never below 1.
    pub fn size_px(&self) -> u32 {
        self.size.round().max(1.0) as u32
    }
}

/// Visibility of the four lines bounding a plotting area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Spines::all()
    }
}

impl Spines {
    pub const fn all() -> Self {
        Spines {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    pub const fn none() -> Self {
        Spines {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    pub fn any_visible(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Direction bars grow in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Bars grow to the right; categories are stacked along the y axis.
    #[default]
    Horizontal,
    /// Bars grow upwards; categories run along the x axis.
    Vertical,
}
