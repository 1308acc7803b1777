use std::ops::Range;

use crate::error::{check_parallel, Error, Result};

// ---------------------------------------------------------------------------
// Error threshold
// ---------------------------------------------------------------------------

/// Remove every observation whose error exceeds `max_error`.
///
/// An observation is kept when `errors[i] <= max_error`; a NaN error is
/// therefore dropped. Relative order is preserved. The three vectors are
/// rebuilt in scratch space in one pass and only replaced once the new
/// contents are complete, so on error they are untouched.
///
/// # Errors
/// [`Error::InvalidArgument`] if the vectors differ in length.
pub fn error_filter(
    max_error: f64,
    times: &mut Vec<f64>,
    values: &mut Vec<f64>,
    errors: &mut Vec<f64>,
) -> Result<()> {
    let len = check_parallel(
        "error_filter",
        &[times.as_slice(), values.as_slice(), errors.as_slice()],
    )?;

    let mut kept_times = Vec::with_capacity(len);
    let mut kept_values = Vec::with_capacity(len);
    let mut kept_errors = Vec::with_capacity(len);
    for ((&t, &v), &e) in times.iter().zip(values.iter()).zip(errors.iter()) {
        if e <= max_error {
            kept_times.push(t);
            kept_values.push(v);
            kept_errors.push(e);
        }
    }

    log::debug!(
        "error_filter kept {} of {len} points with error <= {max_error}",
        kept_times.len()
    );

    *times = kept_times;
    *values = kept_values;
    *errors = kept_errors;
    Ok(())
}

// ---------------------------------------------------------------------------
// Date window
// ---------------------------------------------------------------------------

/// Trim `times` and the two parallel vectors to `date1 <= t <= date2`.
///
/// `times` must already be sorted ascending (see
/// [`sort_by_time`](super::sort::sort_by_time)); this is not checked. The
/// retained observations are then a single contiguous run.
///
/// # Errors
/// [`Error::NoValidTimes`] if no time falls inside the window (including
/// `date2 < date1`), [`Error::InvalidArgument`] if the vectors differ in
/// length. The vectors are untouched on error.
pub fn filter_light_curve(
    date1: f64,
    date2: f64,
    times: &mut Vec<f64>,
    arr1: &mut Vec<f64>,
    arr2: &mut Vec<f64>,
) -> Result<()> {
    trim_columns("filter_light_curve", date1, date2, [times, arr1, arr2])
}

/// Shared by the three-column entry point and [`LightCurve::trim`](super::LightCurve::trim).
/// `columns[0]` holds the times.
pub(crate) fn trim_columns<const N: usize>(
    operation: &str,
    date1: f64,
    date2: f64,
    columns: [&mut Vec<f64>; N],
) -> Result<()> {
    let slices: [&[f64]; N] = std::array::from_fn(|c| columns[c].as_slice());
    check_parallel(operation, &slices)?;

    let range = valid_range(date1, date2, slices[0])?;
    let trimmed: [Vec<f64>; N] = std::array::from_fn(|c| slices[c][range.clone()].to_vec());

    log::debug!(
        "{operation} kept {} of {} points in [{date1}, {date2}]",
        range.len(),
        slices[0].len()
    );

    for (column, fresh) in columns.into_iter().zip(trimmed) {
        *column = fresh;
    }
    Ok(())
}

/// Indices `[first_ok, first_not_ok)` of sorted `times` inside `[date1, date2]`.
fn valid_range(date1: f64, date2: f64, times: &[f64]) -> Result<Range<usize>> {
    let first_ok = times.partition_point(|&t| t < date1);
    let first_not_ok = first_ok + times[first_ok..].partition_point(|&t| t <= date2);

    if first_ok == first_not_ok {
        return Err(Error::NoValidTimes(format!(
            "No photometry in [{date1}, {date2}]"
        )));
    }
    Ok(first_ok..first_not_ok)
}
