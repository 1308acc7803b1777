use super::Sample;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Mean and variance – single forward pass
// ---------------------------------------------------------------------------

/// Arithmetic mean of the elements of `data`.
///
/// Works on anything that can be walked once by reference: `&Vec<T>`,
/// `&LinkedList<T>`, `slice.iter()`, ... The data must not contain NaN.
///
/// # Errors
/// [`Error::NotEnoughData`] if `data` is empty, [`Error::Unrepresentable`] if
/// the mean cannot be stored in `T`.
pub fn mean<'a, T, I>(data: I) -> Result<T>
where
    T: Sample + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut sum = 0.0;
    let mut count: u64 = 0;
    for &x in data {
        sum += x.as_f64();
        count += 1;
    }
    if count == 0 {
        return Err(Error::NotEnoughData(
            "Not enough data to compute mean".to_string(),
        ));
    }

    narrow(sum / count as f64, "mean")
}

/// Unbiased sample variance of the elements of `data`.
///
/// Uses the one-pass sum / sum-of-squares formula
/// `(Σx² − (Σx)²/n) / (n − 1)`, so `data` is traversed exactly once. For
/// integral `T` the result is truncated toward zero.
///
/// # Errors
/// [`Error::NotEnoughData`] with fewer than two elements,
/// [`Error::Unrepresentable`] if the variance cannot be stored in `T`.
pub fn variance<'a, T, I>(data: I) -> Result<T>
where
    T: Sample + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    let mut count: u64 = 0;
    for &x in data {
        let x = x.as_f64();
        sum += x;
        sum_sq += x * x;
        count += 1;
    }
    if count <= 1 {
        return Err(Error::NotEnoughData(
            "Not enough data to compute variance".to_string(),
        ));
    }

    let n = count as f64;
    narrow((sum_sq - sum * sum / n) / (n - 1.0), "variance")
}

fn narrow<T: Sample>(value: f64, statistic: &str) -> Result<T> {
    T::from_f64(value).ok_or_else(|| {
        Error::Unrepresentable(format!(
            "The {statistic} {value} cannot be represented in the element type"
        ))
    })
}
