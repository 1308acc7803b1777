use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use lctools::config::PipelineConfig;
use lctools::nan::drop_nans;
use lctools::stats::{quantile, Summary};
use lctools::table::print_table;

#[derive(Serialize)]
struct Report {
    input: PathBuf,
    points: usize,
    summary: Option<Summary>,
    quantiles: Vec<(f64, f64)>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("lcprep: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let Some(config_path) = args.next().map(PathBuf::from) else {
        bail!("usage: lcprep <config.json>");
    };
    if args.next().is_some() {
        bail!("usage: lcprep <config.json>");
    }

    let config = PipelineConfig::load(&config_path)?;
    let lc = config
        .process()
        .with_context(|| format!("processing {}", config.input.display()))?;

    let values = drop_nans(lc.values());
    if values.len() < lc.len() {
        log::warn!("ignoring {} NaN values", lc.len() - values.len());
    }

    let summary = if values.is_empty() {
        log::warn!("no usable values in {}", config.input.display());
        None
    } else {
        let summary = Summary::of(&values)?;
        log::info!("{summary}");
        Some(summary)
    };

    let mut quantiles = Vec::with_capacity(config.quantiles.len());
    if !values.is_empty() {
        for &q in &config.quantiles {
            let value = quantile(&values, q)?;
            log::info!("q{q} = {value:.4}");
            quantiles.push((q, value));
        }
    }

    if let Some(output) = &config.output {
        print_table(output, "Time\tValue", lc.times(), lc.values())
            .with_context(|| format!("writing {}", output.display()))?;
    }

    let report = Report {
        input: config.input.clone(),
        points: lc.len(),
        summary,
        quantiles,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
