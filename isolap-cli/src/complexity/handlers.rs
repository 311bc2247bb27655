use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use isolap_core::utils::create_parent_dirs;

/// One sample of both reference curves.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub n: u64,
    pub n_squared: u64,
    pub two_n_log_n: f64,
}

impl CurvePoint {
    pub fn at(n: u64) -> Self {
        let x = n as f64;
        CurvePoint {
            n,
            n_squared: n.saturating_mul(n),
            two_n_log_n: 2.0 * x * x.ln(),
        }
    }
}

pub fn run_complexity(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");
    let max_n = *matches.get_one::<u64>("max-n").expect("max-n has a default value");
    let step = *matches.get_one::<u64>("step").expect("step has a default value");

    let points = complexity_curves(max_n, step)?;
    write_curves(Path::new(output), &points)?;
    info!("Wrote {} curve points to {}", points.len(), output);
    Ok(())
}

/// Sample both curves for `n` in `[1, max_n)`, every `step`.
pub fn complexity_curves(max_n: u64, step: u64) -> Result<Vec<CurvePoint>> {
    if step == 0 {
        bail!("step must be at least 1");
    }
    Ok((1..max_n).step_by(step as usize).map(CurvePoint::at).collect())
}

fn write_curves(path: &Path, points: &[CurvePoint]) -> Result<()> {
    create_parent_dirs(path)
        .with_context(|| format!("Failed to create directories for {}", path.display()))?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
