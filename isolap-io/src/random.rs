use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use isolap_core::models::Interval;

use crate::consts::{DEFAULT_COUNT, DEFAULT_MAX_SPAN, DEFAULT_UPPER_BOUND};
use crate::error::{IoError, Result};
use crate::table::Coord;

/// Settings for synthetic interval data.
///
/// Each interval comes from two draws in `[0, upper_bound)`; the smaller becomes
/// `low`, the larger becomes `high`, and `high` is pulled down to `low + max_span`
/// when the pair lies further apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub upper_bound: Coord,
    pub max_span: Coord,
    /// Fixed seed for reproducible data. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: DEFAULT_COUNT,
            upper_bound: DEFAULT_UPPER_BOUND,
            max_span: DEFAULT_MAX_SPAN,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.upper_bound <= 0 {
            return Err(IoError::InvalidGenerator(format!(
                "upper bound must be positive, got {}",
                self.upper_bound
            )));
        }
        if self.max_span < 0 {
            return Err(IoError::InvalidGenerator(format!(
                "max span must not be negative, got {}",
                self.max_span
            )));
        }
        Ok(())
    }
}

/// Generates random intervals per a [`GeneratorConfig`].
pub struct IntervalGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl IntervalGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(IntervalGenerator { config, rng })
    }

    /// Draw a single interval.
    pub fn next_interval(&mut self) -> Interval<Coord> {
        let a = self.rng.random_range(0..self.config.upper_bound);
        let b = self.rng.random_range(0..self.config.upper_bound);
        let low = a.min(b);
        let high = a.max(b).min(low.saturating_add(self.config.max_span));
        Interval::from_unordered(low, high)
    }

    /// Draw `config.count` intervals.
    pub fn generate(&mut self) -> Vec<Interval<Coord>> {
        let intervals: Vec<_> = (0..self.config.count).map(|_| self.next_interval()).collect();
        debug!(
            "generated {} intervals (upper bound {}, max span {})",
            intervals.len(),
            self.config.upper_bound,
            self.config.max_span
        );
        intervals
    }
}

/// Generate one batch of random intervals.
pub fn generate_intervals(config: GeneratorConfig) -> Result<Vec<Interval<Coord>>> {
    Ok(IntervalGenerator::new(config)?.generate())
}
