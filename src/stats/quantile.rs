use super::Sample;
use crate::error::{Error, Result};

/// Uninterpolated (nearest-rank) quantile of `data`.
///
/// Sorts a private copy and returns element `floor(q * n)`, or the largest
/// element when `q == 1`. The result is always one of the input values;
/// callers wanting linear interpolation must post-process. `data` is never
/// modified. NaNs, whatever their sign, sort above every number, so they
/// only surface at the top quantiles.
///
/// # Errors
/// [`Error::InvalidArgument`] if `q` is not in `[0, 1]` (NaN included),
/// [`Error::NotEnoughData`] if `data` is empty.
pub fn quantile<T: Sample>(data: &[T], q: f64) -> Result<T> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidArgument(format!(
            "Invalid quantile of {q} passed to quantile()"
        )));
    }
    if data.is_empty() {
        return Err(Error::NotEnoughData(
            "Supplied empty data set to quantile()".to_string(),
        ));
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(T::total_order);

    let n = sorted.len();
    let index = if q < 1.0 {
        ((q * n as f64) as usize).min(n - 1)
    } else {
        n - 1
    };
    Ok(sorted[index])
}
