//! Sample statistics over arbitrary numeric containers.
//!
//! ```text
//!   &Vec<T> / &LinkedList<T> / slice.iter()      &[T]
//!              │                                    │
//!              ▼                                    ▼
//!   ┌────────────────────┐               ┌──────────────────┐
//!   │ moments            │ one pass      │ quantile         │ sorted copy
//!   │ mean, variance     │               └──────────────────┘
//!   ├────────────────────┤
//!   │ order              │ one pass
//!   │ is_sorted          │
//!   └────────────────────┘
//! ```
//!
//! Accumulation happens in `f64` whatever the element type; the result is
//! converted back to the element type only at the end, so integer inputs
//! never see integer-division rounding in the middle of a computation.

use std::cmp::Ordering;

use num_traits::NumCast;

pub mod moments;
pub mod order;
pub mod quantile;
pub mod summary;

pub use moments::{mean, variance};
pub use order::is_sorted;
pub use quantile::quantile;
pub use summary::Summary;

// ---------------------------------------------------------------------------
// Sample – element types the statistics accept
// ---------------------------------------------------------------------------

/// A primitive numeric value that can be summarised.
pub trait Sample: Copy + PartialOrd + NumCast {
    /// Widen to `f64` for accumulation.
    fn as_f64(self) -> f64;

    /// Narrow an `f64` result back to the element type. Integers truncate
    /// toward zero; `None` if the value is out of range (or NaN for integers).
    fn from_f64(value: f64) -> Option<Self> {
        num_traits::cast(value)
    }

    /// Total order used when sorting scratch copies.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sample_int {
    ($($t:ty),* $(,)?) => {$(
        impl Sample for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

macro_rules! impl_sample_float {
    ($($t:ty),* $(,)?) => {$(
        impl Sample for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            /// NaNs of either sign sort after every number.
            #[inline]
            fn total_order(&self, other: &Self) -> Ordering {
                match (self.is_nan(), other.is_nan()) {
                    (false, false) => self.total_cmp(other),
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                }
            }
        }
    )*};
}

impl_sample_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sample_float!(f32, f64);
