//! Font registration for the `ab_glyph` text path.
//!
//! `ab_glyph` does not discover OS fonts, so every family a figure uses must be registered
//! with plotters before drawing. Registration is process-wide and happens at most once per
//! family.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use plotters::style::FontStyle;

use crate::error::{PlotError, Result};

/// Well-known locations of a plain sans-serif face.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());
static FALLBACK: Mutex<Option<&'static [u8]>> = Mutex::new(None);
static SYSTEM_FONT: OnceLock<Option<&'static [u8]>> = OnceLock::new();

/// Register `bytes` (a TTF/OTF file) under `family`.
pub fn register_font_bytes(family: &str, bytes: &'static [u8]) -> Result<()> {
    plotters::style::register_font(family, FontStyle::Normal, bytes)
        .map_err(|_| PlotError::FontUnavailable)?;
    REGISTERED
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .insert(family.to_string());
    log::debug!("registered font family {family:?}");
    Ok(())
}

/// Load a font file and register it under `family`. It also becomes the face used for any
/// family that has not been registered explicitly.
pub fn register_font_file<P: AsRef<Path>>(family: &str, path: P) -> Result<()> {
    let bytes = std::fs::read(path.as_ref())?;
    // plotters keeps registered font data for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font_bytes(family, bytes)?;
    *FALLBACK.lock().unwrap_or_else(|e| e.into_inner()) = Some(bytes);
    Ok(())
}

pub fn is_registered(family: &str) -> bool {
    REGISTERED
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .contains(family)
}

/// Make sure `family` can be drawn, registering the fallback face under its name if needed.
pub fn ensure_font(family: &str) -> Result<()> {
    if is_registered(family) {
        return Ok(());
    }
    let bytes = fallback_bytes().ok_or(PlotError::FontUnavailable)?;
    register_font_bytes(family, bytes)
}

/// Register the default `sans-serif` family.
pub fn ensure_default_font() -> Result<()> {
    ensure_font(crate::style::DEFAULT_FONT_FAMILY)
}

fn fallback_bytes() -> Option<&'static [u8]> {
    if let Some(bytes) = *FALLBACK.lock().unwrap_or_else(|e| e.into_inner()) {
        return Some(bytes);
    }
    *SYSTEM_FONT.get_or_init(|| {
        SYSTEM_FONT_CANDIDATES.iter().find_map(|p| {
            let bytes = std::fs::read(p).ok()?;
            log::debug!("using system font {p}");
            Some(&*Box::leak(bytes.into_boxed_slice()))
        })
    })
}
