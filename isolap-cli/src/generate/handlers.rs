use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use isolap_io::{GeneratorConfig, generate_intervals, write_intervals};

pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .expect("An output path is required.");

    let defaults = GeneratorConfig::default();
    let config = GeneratorConfig {
        count: matches.get_one::<usize>("count").copied().unwrap_or(defaults.count),
        upper_bound: matches
            .get_one::<i64>("upper-bound")
            .copied()
            .unwrap_or(defaults.upper_bound),
        max_span: matches
            .get_one::<i64>("max-span")
            .copied()
            .unwrap_or(defaults.max_span),
        seed: matches.get_one::<u64>("seed").copied(),
    };

    generate_file(Path::new(output), config)
}

/// Generate intervals per `config` and write them to `output`.
pub fn generate_file(output: &Path, config: GeneratorConfig) -> Result<()> {
    let intervals = generate_intervals(config)?;
    write_intervals(output, &intervals)
        .with_context(|| format!("Failed to write intervals to {}", output.display()))?;
    info!("Wrote {} intervals to {}", intervals.len(), output.display());
    Ok(())
}
