use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

const POINTS: usize = 500;
const START: f64 = 2_455_000.0;
const SPAN_DAYS: f64 = 120.0;
const PERIOD_DAYS: f64 = 3.7;
const MEAN_MAG: f64 = 14.2;
const AMPLITUDE: f64 = 0.35;
const GOOD_ERROR: f64 = 0.02;
const BAD_FRACTION: f64 = 0.08;

/// SplitMix64: one word of state, good enough for reproducible test data.
struct SplitMix64(u64);

impl SplitMix64 {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal deviate scaled by `sigma` (Box-Muller, cosine branch).
    fn normal(&mut self, sigma: f64) -> f64 {
        let radius = (-2.0 * self.uniform().max(f64::MIN_POSITIVE).ln()).sqrt();
        sigma * radius * (TAU * self.uniform()).cos()
    }
}

struct Observation {
    time: f64,
    mag: f64,
    error: f64,
}

/// A sinusoidal variable observed at random, unsorted epochs. A few points
/// carry inflated errors and extra scatter, as from bad nights.
fn observe(rng: &mut SplitMix64) -> Vec<Observation> {
    (0..POINTS)
        .map(|_| {
            let time = START + SPAN_DAYS * rng.uniform();
            let phase = TAU * (time - START) / PERIOD_DAYS;
            let error = if rng.uniform() < BAD_FRACTION {
                GOOD_ERROR * (5.0 + 20.0 * rng.uniform())
            } else {
                GOOD_ERROR * (0.5 + rng.uniform())
            };
            let mag = MEAN_MAG + AMPLITUDE * phase.sin() + rng.normal(error);
            Observation { time, mag, error }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_lightcurve.lc"));

    let mut rng = SplitMix64(42);
    let observations = observe(&mut rng);

    let file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Synthetic light curve, period {PERIOD_DAYS} d")?;
    writeln!(out, "# JD            mag        err")?;
    for (i, obs) in observations.iter().enumerate() {
        if i == POINTS / 2 {
            writeln!(out, "# -- second half --")?;
        }
        writeln!(out, "{:.5}  {:.4}  {:.4}", obs.time, obs.mag, obs.error)?;
    }
    out.flush()?;

    let noisy = observations
        .iter()
        .filter(|o| o.error > 4.0 * GOOD_ERROR)
        .count();
    log::info!("{noisy} of {POINTS} points have inflated errors");
    println!("Wrote {POINTS} observations to {}", output_path.display());
    Ok(())
}
