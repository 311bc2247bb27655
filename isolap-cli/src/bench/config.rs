use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use isolap_detect::DetectorType;
use isolap_io::{Coord, DEFAULT_COUNT, DEFAULT_MAX_SPAN, DEFAULT_UPPER_BOUND, GeneratorConfig};

/// Settings for a benchmark session.
///
/// Read from TOML; every key is optional. Example:
///
/// ```toml
/// inputs = ["tests/data/overlapping_intervals.csv"]
/// runs = 3
/// count = 100000
/// max_span = 1048576
/// seed = 7
/// detectors = ["naive", "sweep"]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// CSV files to run every detector on.
    pub inputs: Vec<PathBuf>,
    /// Number of random datasets to generate and run.
    pub runs: usize,
    /// Intervals per random dataset.
    pub count: usize,
    /// Endpoints of random intervals are drawn from `[0, upper_bound)`.
    pub upper_bound: Coord,
    /// Longest span of a random interval.
    pub max_span: Coord,
    /// Seed for the first random dataset; run `k` uses `seed + k`.
    pub seed: Option<u64>,
    /// Detectors to compare.
    pub detectors: Vec<DetectorType>,
    /// Optional CSV file receiving one row per detector call.
    pub report: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            inputs: Vec::new(),
            runs: 0,
            count: DEFAULT_COUNT,
            upper_bound: DEFAULT_UPPER_BOUND,
            max_span: DEFAULT_MAX_SPAN,
            seed: None,
            detectors: DetectorType::ALL.to_vec(),
            report: None,
        }
    }
}

impl BenchConfig {
    /// Generator settings for random run number `run`.
    pub fn generator_for_run(&self, run: usize) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            upper_bound: self.upper_bound,
            max_span: self.max_span,
            seed: self.seed.map(|seed| seed.wrapping_add(run as u64)),
        }
    }
}

impl TryFrom<&Path> for BenchConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read bench config {:?}", path))?;
        let config = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse bench config {:?}", path))?;
        Ok(config)
    }
}
