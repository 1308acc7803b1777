use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::LightCurve;
use crate::error::Result;
use crate::table::{read_table2_file, read_table3_file, RowFormat};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a light curve from a file.  Dispatch by extension.
///
/// * `.csv` – `time,value`
/// * anything else – whitespace separated `time value error`, filtered by
///   `max_error`
pub fn load_file(path: &Path, max_error: f64) -> Result<LightCurve> {
    LightCurveFormat::from_path(path).read(path, max_error)
}

/// On-disk light-curve layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightCurveFormat {
    /// `time value error`
    Wg,
    /// `index time value error limit`
    Wg2,
    /// `time value`
    Mc,
    /// `time,value`
    Csv,
}

impl LightCurveFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => LightCurveFormat::Csv,
            _ => LightCurveFormat::Wg,
        }
    }

    /// Whether files in this layout carry per-point errors.
    pub fn has_errors(self) -> bool {
        matches!(self, LightCurveFormat::Wg | LightCurveFormat::Wg2)
    }

    /// Read `path` in this layout. `max_error` is ignored for layouts
    /// without errors.
    pub fn read(self, path: &Path, max_error: f64) -> Result<LightCurve> {
        match self {
            LightCurveFormat::Wg => read_wg_light_curve(path, max_error),
            LightCurveFormat::Wg2 => read_wg2_light_curve(path, max_error),
            LightCurveFormat::Mc => read_mc_light_curve(path),
            LightCurveFormat::Csv => read_csv_light_curve(path),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-format readers
// ---------------------------------------------------------------------------

/// Read a `time value error` file, drop points with error above
/// `max_error`, and sort by time.
pub fn read_wg_light_curve(path: &Path, max_error: f64) -> Result<LightCurve> {
    load_with_errors(path, &RowFormat::wg(), max_error)
}

/// Read an `index time value error limit` file, drop points with error above
/// `max_error`, and sort by time.
pub fn read_wg2_light_curve(path: &Path, max_error: f64) -> Result<LightCurve> {
    load_with_errors(path, &RowFormat::wg2(), max_error)
}

/// Read a whitespace separated `time value` file and sort by time.
pub fn read_mc_light_curve(path: &Path) -> Result<LightCurve> {
    load_without_errors(path, &RowFormat::mc())
}

/// Read a comma separated `time,value` file and sort by time.
pub fn read_csv_light_curve(path: &Path) -> Result<LightCurve> {
    load_without_errors(path, &RowFormat::csv())
}

fn load_with_errors(path: &Path, format: &RowFormat, max_error: f64) -> Result<LightCurve> {
    let (times, values, errors) = read_table3_file(path, format)?;
    let read = times.len();

    let mut lc = LightCurve::with_errors(times, values, errors)?;
    lc.filter_errors(max_error)?;
    lc.sort_by_time()?;

    log::info!(
        "loaded {} of {read} points from {} (max error {max_error})",
        lc.len(),
        path.display()
    );
    Ok(lc)
}

fn load_without_errors(path: &Path, format: &RowFormat) -> Result<LightCurve> {
    let (times, values) = read_table2_file(path, format)?;

    let mut lc = LightCurve::new(times, values)?;
    lc.sort_by_time()?;

    log::info!("loaded {} points from {}", lc.len(), path.display());
    Ok(lc)
}
