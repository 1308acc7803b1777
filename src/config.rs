use std::path::{Path, PathBuf};

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lightcurve::{LightCurve, LightCurveFormat};

/// Inclusive observation window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: f64,
    pub end: f64,
}

/// What `lcprep` should do, read from a JSON file:
///
/// ```json
/// {
///   "input": "star.lc",
///   "format": "wg",
///   "max_error": 0.05,
///   "date_range": { "start": 2455000.0, "end": 2455100.0 },
///   "quantiles": [0.1, 0.5, 0.9],
///   "output": "star.clean.txt"
/// }
/// ```
///
/// Only `input` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub format: Option<LightCurveFormat>,
    #[serde(default)]
    pub max_error: Option<f64>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default = "default_quantiles")]
    pub quantiles: Vec<f64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_quantiles() -> Vec<f64> {
    vec![0.25, 0.5, 0.75]
}

impl PipelineConfig {
    /// A configuration that reads `input` with every default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input: input.into(),
            format: None,
            max_error: None,
            date_range: None,
            quantiles: default_quantiles(),
            output: None,
        }
    }

    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> AnyResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: PipelineConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate().context("invalid config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(&q) = self.quantiles.iter().find(|q| !(0.0..=1.0).contains(*q)) {
            return Err(Error::InvalidArgument(format!(
                "Invalid quantile of {q} in configuration"
            )));
        }
        if self.max_error.is_some_and(f64::is_nan) {
            return Err(Error::InvalidArgument(
                "max_error must be a number".to_string(),
            ));
        }
        if let Some(range) = self.date_range {
            if range.end < range.start {
                return Err(Error::InvalidArgument(format!(
                    "date_range ends ({}) before it starts ({})",
                    range.end, range.start
                )));
            }
        }
        Ok(())
    }

    /// The explicit format, or the one implied by the input's extension.
    pub fn format(&self) -> LightCurveFormat {
        self.format
            .unwrap_or_else(|| LightCurveFormat::from_path(&self.input))
    }

    /// Error threshold; everything is kept when none is configured.
    pub fn max_error(&self) -> f64 {
        self.max_error.unwrap_or(f64::INFINITY)
    }

    /// Load the input and apply the configured cleaning steps.
    pub fn process(&self) -> Result<LightCurve> {
        let format = self.format();
        if self.max_error.is_some() && !format.has_errors() {
            log::warn!("{format:?} files carry no errors; ignoring max_error");
        }

        let mut lc = format.read(&self.input, self.max_error())?;
        if let Some(DateRange { start, end }) = self.date_range {
            lc.trim(start, end)?;
            log::info!("{} points in [{start}, {end}]", lc.len());
        }
        Ok(lc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{"input": "star.csv"}"#).unwrap();

        assert_eq!(config, PipelineConfig::new("star.csv"));
        assert_eq!(config.format(), LightCurveFormat::Csv);
        assert_eq!(config.max_error(), f64::INFINITY);
        config.validate().unwrap();
    }

    #[test]
    fn full_config() {
        let config: PipelineConfig = serde_json::from_str(
            r#"{
                "input": "star.txt",
                "format": "wg2",
                "max_error": 0.05,
                "date_range": {"start": 10.0, "end": 20.0},
                "quantiles": [0.5],
                "output": "out.txt"
            }"#,
        )
        .unwrap();

        assert_eq!(config.format(), LightCurveFormat::Wg2);
        assert_eq!(config.max_error(), 0.05);
        assert_eq!(config.date_range, Some(DateRange { start: 10.0, end: 20.0 }));
        assert_eq!(config.output.as_deref(), Some(Path::new("out.txt")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<PipelineConfig>(r#"{"input": "a", "maxerr": 1}"#).is_err());
    }

    #[test]
    fn validation() {
        let mut config = PipelineConfig::new("a.lc");
        config.quantiles = vec![0.5, 1.5];
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::InvalidArgument);

        let mut config = PipelineConfig::new("a.lc");
        config.max_error = Some(f64::NAN);
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::new("a.lc");
        config.date_range = Some(DateRange { start: 5.0, end: 1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reports_the_file() {
        let err = PipelineConfig::load(Path::new("/nonexistent/lcprep.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lcprep.json"));
    }
}
