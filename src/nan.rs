use num_traits::Float;

// ---------------------------------------------------------------------------
// NaN / non-finite predicates
// ---------------------------------------------------------------------------

/// True iff `x` is a quiet or signalling NaN.
#[allow(clippy::eq_op)]
pub fn is_nan<F: Float>(x: F) -> bool {
    x != x
}

/// True iff `x` is NaN or either infinity.
pub fn is_nan_or_inf<F: Float>(x: F) -> bool {
    is_nan(x) || x == F::infinity() || x == F::neg_infinity()
}

/// Stateless "keep it unless it is NaN" predicate for filter adaptors.
///
/// ```
/// use lctools::nan::NotNan;
///
/// let clean: Vec<f64> = [1.0, f64::NAN, 3.0]
///     .into_iter()
///     .filter(|&x| NotNan.check(x))
///     .collect();
/// assert_eq!(clean, vec![1.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNan;

impl NotNan {
    pub fn check<F: Float>(&self, x: F) -> bool {
        !is_nan(x)
    }
}

/// Copy of `data` with every NaN removed, order preserved.
pub fn drop_nans<F: Float>(data: &[F]) -> Vec<F> {
    data.iter().copied().filter(|&x| NotNan.check(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_special_values() {
        assert!(!is_nan(f64::INFINITY));
        assert!(!is_nan(3.0));
        assert!(!is_nan(0.0));
        assert!(!is_nan(-3.0));
        assert!(!is_nan(f64::NEG_INFINITY));
        assert!(is_nan(-f64::NAN));
        assert!(is_nan(f32::NAN));
        // Signalling NaN bit pattern.
        assert!(is_nan(f64::from_bits(0x7ff0_0000_0000_0001)));

        assert!(is_nan_or_inf(f64::INFINITY));
        assert!(!is_nan_or_inf(3.0));
        assert!(!is_nan_or_inf(0.0));
        assert!(!is_nan_or_inf(-3.0));
        assert!(is_nan_or_inf(f64::NEG_INFINITY));
        assert!(is_nan_or_inf(-f64::NAN));
        assert!(!is_nan_or_inf(f64::MAX));
    }

    #[test]
    fn not_nan_filters() {
        assert!(NotNan.check(f64::INFINITY));
        assert!(!NotNan.check(f64::NAN));

        let kept = drop_nans(&[f64::NAN, 1.0, f64::NAN, f64::INFINITY]);
        assert_eq!(kept, vec![1.0, f64::INFINITY]);
        assert!(drop_nans::<f64>(&[]).is_empty());
    }
}
