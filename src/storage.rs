use crate::error::{PlotError, Result};
use crate::layout::BarLayout;
use crate::models::CategoryValues;
use csv::{ReaderBuilder, WriterBuilder};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Load `label,value` rows (with a header row) in file order.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CategoryValues> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut out = CategoryValues::new();
    for row in rdr.deserialize::<(String, f64)>() {
        let (label, value) = row?;
        out.insert(label, value);
    }
    Ok(out)
}

/// Load a JSON object `{ "label": number, ... }`, keeping key order.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<CategoryValues> {
    let f = File::open(path)?;
    let v: Value = serde_json::from_reader(BufReader::new(f))?;
    let obj = v
        .as_object()
        .ok_or_else(|| PlotError::invalid("data", "expected a JSON object of label -> number"))?;
    let mut out = CategoryValues::new();
    for (label, value) in obj {
        let n = value.as_f64().ok_or_else(|| {
            PlotError::invalid("data", format!("value for \"{label}\" is not a number"))
        })?;
        out.insert(label.clone(), n);
    }
    Ok(out)
}

/// Load by extension: `.json` as JSON, anything else as CSV.
pub fn load<P: AsRef<Path>>(path: P) -> Result<CategoryValues> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_csv(path),
    }
}

/// Write a computed layout as CSV with header `label,value,position,r,g,b,color`.
pub fn write_layout_csv<W: Write>(layout: &BarLayout, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.serialize(("label", "value", "position", "r", "g", "b", "color"))?;
    for (label, value, position, c) in layout.bars() {
        wtr.serialize((label, value, position, c.r, c.g, c.b, c.hex()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_layout_csv`] into a file.
pub fn save_layout_csv<P: AsRef<Path>>(layout: &BarLayout, path: P) -> Result<()> {
    write_layout_csv(layout, File::create(path)?)
}
