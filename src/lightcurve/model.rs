use crate::error::{check_parallel, Result};
use crate::stats::is_sorted;

use super::filter::{error_filter, trim_columns};
use super::sort::{sort_by_time, sort_by_time_with_errors};

// ---------------------------------------------------------------------------
// LightCurve – parallel (time, value[, error]) columns
// ---------------------------------------------------------------------------

/// A time series of measurements, optionally with per-point uncertainties.
///
/// The columns always have equal length; every mutating method either
/// succeeds completely or leaves the curve as it was.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightCurve {
    times: Vec<f64>,
    values: Vec<f64>,
    errors: Option<Vec<f64>>,
}

impl LightCurve {
    /// Build a curve without errors. Fails if the lengths differ.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        check_parallel("LightCurve::new", &[times.as_slice(), values.as_slice()])?;
        Ok(LightCurve {
            times,
            values,
            errors: None,
        })
    }

    /// Build a curve with errors. Fails if the lengths differ.
    pub fn with_errors(times: Vec<f64>, values: Vec<f64>, errors: Vec<f64>) -> Result<Self> {
        check_parallel(
            "LightCurve::with_errors",
            &[times.as_slice(), values.as_slice(), errors.as_slice()],
        )?;
        Ok(LightCurve {
            times,
            values,
            errors: Some(errors),
        })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn errors(&self) -> Option<&[f64]> {
        self.errors.as_deref()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn is_time_sorted(&self) -> bool {
        is_sorted(&self.times)
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Option<Vec<f64>>) {
        (self.times, self.values, self.errors)
    }

    /// Drop observations whose error exceeds `max_error`. No-op without errors.
    pub fn filter_errors(&mut self, max_error: f64) -> Result<()> {
        match &mut self.errors {
            Some(errors) => error_filter(max_error, &mut self.times, &mut self.values, errors),
            None => {
                log::debug!("light curve has no errors; skipping error filter");
                Ok(())
            }
        }
    }

    /// Reorder every column so that the times are non-descending.
    pub fn sort_by_time(&mut self) -> Result<()> {
        match &mut self.errors {
            Some(errors) => sort_by_time_with_errors(&mut self.times, &mut self.values, errors),
            None => sort_by_time(&mut self.times, &mut self.values),
        }
    }

    /// Keep only observations with `date1 <= time <= date2`. The curve must
    /// already be sorted by time.
    pub fn trim(&mut self, date1: f64, date2: f64) -> Result<()> {
        match &mut self.errors {
            Some(errors) => trim_columns(
                "LightCurve::trim",
                date1,
                date2,
                [&mut self.times, &mut self.values, errors],
            ),
            None => trim_columns(
                "LightCurve::trim",
                date1,
                date2,
                [&mut self.times, &mut self.values],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> LightCurve {
        LightCurve::with_errors(
            vec![4.0, 2.0, 1.0, 3.0],
            vec![40.0, 20.0, 10.0, 30.0],
            vec![0.2, 0.5, 0.1, 0.05],
        )
        .unwrap()
    }

    #[test]
    fn constructors_check_lengths() {
        let err = LightCurve::new(vec![1.0], vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = LightCurve::with_errors(vec![1.0], vec![1.0], vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(LightCurve::new(vec![], vec![]).unwrap().is_empty());
    }

    #[test]
    fn full_pipeline() {
        let mut lc = sample();
        lc.filter_errors(0.2).unwrap();
        lc.sort_by_time().unwrap();
        assert!(lc.is_time_sorted());
        assert_eq!(lc.times(), &[1.0, 3.0, 4.0]);
        assert_eq!(lc.values(), &[10.0, 30.0, 40.0]);
        assert_eq!(lc.errors(), Some(&[0.1, 0.05, 0.2][..]));

        lc.trim(2.5, 3.5).unwrap();
        assert_eq!(lc.len(), 1);
        assert_eq!(lc.values(), &[30.0]);
    }

    #[test]
    fn failed_trim_leaves_curve_alone() {
        let mut lc = sample();
        lc.sort_by_time().unwrap();
        let before = lc.clone();

        let err = lc.trim(100.0, 200.0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoValidRange);
        assert_eq!(lc, before);
    }

    #[test]
    fn curve_without_errors() {
        let mut lc = LightCurve::new(vec![3.0, 1.0, 2.0], vec![0.3, 0.1, 0.2]).unwrap();
        lc.filter_errors(0.0).unwrap();
        assert_eq!(lc.len(), 3);

        lc.sort_by_time().unwrap();
        lc.trim(1.5, 3.0).unwrap();

        let (times, values, errors) = lc.into_parts();
        assert_eq!(times, vec![2.0, 3.0]);
        assert_eq!(values, vec![0.2, 0.3]);
        assert!(errors.is_none());
    }
}
