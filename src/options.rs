//! Options for [`crate::charts::gray_bars`].
//!
//! The typed struct is the normal way in. [`GrayBarsOptions::from_json`] exists for options
//! that arrive untyped (config files, the CLI's `--config`) and checks each key before
//! anything is laid out, so a bad `order` is reported by name instead of as a generic
//! deserialization failure.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PlotError, Result};
use crate::figure::NORMALISED_SIZE;
use crate::style::{FontConfig, Orientation};

const KNOWN_KEYS: [&str; 7] = [
    "font",
    "order",
    "max_height",
    "orientation",
    "size",
    "locale",
    "title",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrayBarsOptions {
    /// Font for all text; `None` means [`FontConfig::default`].
    pub font: Option<FontConfig>,
    /// `true` sorts highest value first, `false` lowest first.
    pub order: bool,
    /// Fix the category axis to `[-1, max_height * BAR_STEP + 1]`; `0` leaves it automatic.
    pub max_height: Option<f64>,
    pub orientation: Orientation,
    pub size: (u32, u32),
    pub locale: String,
    pub title: Option<String>,
}

impl Default for GrayBarsOptions {
    fn default() -> Self {
        GrayBarsOptions {
            font: None,
            order: true,
            max_height: None,
            orientation: Orientation::Horizontal,
            size: NORMALISED_SIZE,
            locale: "en".to_string(),
            title: None,
        }
    }
}

impl GrayBarsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: FontConfig) -> Self {
        self.font = Some(font);
        self
    }

    pub fn order(mut self, descending: bool) -> Self {
        self.order = descending;
        self
    }

    pub fn max_height(mut self, h: f64) -> Self {
        self.max_height = Some(h);
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = o;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parse options from an untyped JSON object, checking every key first.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| PlotError::invalid("options", "expected a JSON object"))?;

        if let Some(key) = obj.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(PlotError::invalid(key, "unknown option"));
        }
        if let Some(order) = obj.get("order")
            && !order.is_boolean()
        {
            return Err(PlotError::invalid("order", "\"order\" must be boolean"));
        }
        if let Some(font) = obj.get("font") {
            check_font(font)?;
        }
        if let Some(h) = obj.get("max_height")
            && !h.is_null()
        {
            match h.as_f64() {
                Some(v) if v.is_finite() && v >= 0.0 => {}
                _ => {
                    return Err(PlotError::invalid(
                        "max_height",
                        "expected a finite, non-negative number",
                    ));
                }
            }
        }

        let opts: GrayBarsOptions = serde_json::from_value(value.clone())?;
        opts.validate()?;
        Ok(opts)
    }

    /// Checks that hold for typed options too.
    pub fn validate(&self) -> Result<()> {
        if let Some(h) = self.max_height
            && !(h.is_finite() && h >= 0.0)
        {
            return Err(PlotError::invalid(
                "max_height",
                "expected a finite, non-negative number",
            ));
        }
        if let Some(font) = &self.font
            && !(font.size.is_finite() && font.size > 0.0)
        {
            return Err(PlotError::invalid("font", "size must be a positive number"));
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(PlotError::invalid("size", "width and height must be positive"));
        }
        Ok(())
    }
}

fn check_font(font: &Value) -> Result<()> {
    if font.is_null() {
        return Ok(());
    }
    let props = font
        .as_object()
        .ok_or_else(|| PlotError::invalid("font", "expected an object of font properties"))?;
    for (key, v) in props {
        let ok = match key.as_str() {
            "family" => v.is_string(),
            "size" => v.as_f64().is_some_and(|s| s.is_finite() && s > 0.0),
            _ => {
                return Err(PlotError::invalid(
                    "font",
                    format!("unknown font property \"{key}\""),
                ));
            }
        };
        if !ok {
            return Err(PlotError::invalid(
                "font",
                format!("bad value for font property \"{key}\""),
            ));
        }
    }
    Ok(())
}
