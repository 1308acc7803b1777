use std::io::Write;
use std::path::Path;

use crate::error::{check_parallel, Error, Result};
use crate::table::writer::{create_output, print_table, write_table};

/// Write a periodogram preceded by its false-alarm line.
///
/// The first line reads `FAP <p>% above <threshold>`, where `<p>` is
/// `fap * 100` to one significant digit when `fap < 0.05` and rounded to a
/// whole percent otherwise.
pub fn write_periodogram<W: Write>(
    mut out: W,
    freq: &[f64],
    power: &[f64],
    threshold: f64,
    fap: f64,
) -> Result<()> {
    check_parallel("print_periodogram", &[freq, power])?;

    let percent = if fap < 0.05 {
        one_significant_digit(fap * 100.0)
    } else {
        format!("{:.0}", fap * 100.0)
    };
    writeln!(out, "FAP {percent}% above {threshold:7.1}")
        .map_err(|e| Error::io("writing periodogram header", e))?;

    write_table(out, "Freq\tPower", freq, power)
}

pub fn print_periodogram(
    path: &Path,
    freq: &[f64],
    power: &[f64],
    threshold: f64,
    fap: f64,
) -> Result<()> {
    check_parallel("print_periodogram", &[freq, power])?;
    write_periodogram(create_output(path)?, freq, power, threshold, fap)?;
    log::info!("wrote periodogram to {}", path.display());
    Ok(())
}

/// Autocorrelation function against time offset.
pub fn print_acf(path: &Path, offsets: &[f64], acf: &[f64]) -> Result<()> {
    print_table(path, "Offset\tACF", offsets, acf)
}

/// Δm–Δt scatter: time offsets and the matching magnitude differences.
pub fn print_dm_dt(path: &Path, delta_t: &[f64], delta_m: &[f64]) -> Result<()> {
    print_table(path, "Offset\tMag Diff.", delta_t, delta_m)
}

/// RMS against time interval.
pub fn print_rms_t(path: &Path, intervals: &[f64], rms: &[f64]) -> Result<()> {
    print_table(path, "Interval\tRMS", intervals, rms)
}

/// Shortest rendering with a single significant digit, switching to
/// exponent notation for very small or large magnitudes.
fn one_significant_digit(x: f64) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{x}");
    }
    // `{:.0e}` rounds to one digit and reports the post-rounding exponent.
    let sci = format!("{x:.0e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-4..1).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = exp.unsigned_abs() as usize;
        format!("{x:.decimals$}")
    }
}
