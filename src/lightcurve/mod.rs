//! Light-curve preprocessing: loading, cleaning and export.
//!
//! ```text
//!   .lc / .dat / .txt / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → LightCurve
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  error_filter: drop points with error > max
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  sort    │  stable joint sort on time
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  filter_light_curve: keep date1 ≤ t ≤ date2
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export  │  periodogram / ACF / Δm–Δt / RMS tables
//!   └──────────┘
//! ```
//!
//! Every stage either completes or leaves its inputs untouched.

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

pub use filter::{error_filter, filter_light_curve};
pub use loader::{load_file, LightCurveFormat};
pub use model::LightCurve;
pub use sort::{sort_by_time, sort_by_time_with_errors};
