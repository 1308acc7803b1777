use std::fmt;

use serde::Serialize;

use super::{mean, quantile, variance};
use crate::error::Result;

/// Descriptive statistics of one column, for reports and logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// `None` for a single observation.
    pub variance: Option<f64>,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise `data`, which must be non-empty and NaN-free.
    pub fn of(data: &[f64]) -> Result<Self> {
        let mean = mean(data)?;
        let variance = if data.len() >= 2 {
            Some(variance(data)?)
        } else {
            None
        };
        Ok(Summary {
            count: data.len(),
            mean,
            variance,
            min: quantile(data, 0.0)?,
            median: quantile(data, 0.5)?,
            max: quantile(data, 1.0)?,
        })
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.variance.map(f64::sqrt)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.4} median={:.4} range=[{:.4}, {:.4}]",
            self.count, self.mean, self.median, self.min, self.max
        )?;
        if let Some(sd) = self.std_dev() {
            write!(f, " sd={sd:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn summary_of_small_set() {
        let s = Summary::of(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 2.5);
        assert_relative_eq!(s.variance.unwrap(), 5.0 / 3.0, epsilon = 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.max, 4.0);
        assert!(s.to_string().starts_with("n=4 mean=2.5000"));
    }

    #[test]
    fn single_observation_has_no_spread() {
        let s = Summary::of(&[9.5]).unwrap();
        assert_eq!(s.variance, None);
        assert_eq!(s.std_dev(), None);
        assert!(!s.to_string().contains("sd="));
    }

    #[test]
    fn empty_fails() {
        assert!(Summary::of(&[]).is_err());
    }
}
