//! Light-curve preprocessing and sample statistics.
//!
//! * [`stats`] – mean, variance, quantiles and sortedness over any numeric
//!   container
//! * [`nan`] – NaN predicates for generic floats
//! * [`lightcurve`] – error filtering, time sorting and date trimming of
//!   parallel time/value/error columns, plus the light-curve file formats
//! * [`table`] – the plain-text numeric tables those files are made of
//! * [`config`] – the JSON job description read by `lcprep`
//!
//! Library functions log through the `log` facade and never install a
//! logger.

pub mod config;
pub mod error;
pub mod lightcurve;
pub mod nan;
pub mod stats;
pub mod table;

pub use error::{Error, ErrorKind, Result};
