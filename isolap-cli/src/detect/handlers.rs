use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use isolap_core::models::DetectionResult;
use isolap_detect::{Detector, DetectorType};
use isolap_io::{Coord, read_intervals};

pub fn run_detect(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an interval file is required.");

    let detector = matches
        .get_one::<String>("detector")
        .expect("detector has a default value")
        .parse::<DetectorType>()
        .map_err(anyhow::Error::msg)?;

    let json = matches.get_flag("json");

    let result = detect_file(input, detector)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(out, "{}", result)?;
    }

    Ok(())
}

/// Load `input` and run `detector` over it.
pub fn detect_file(input: &str, detector: DetectorType) -> Result<DetectionResult<Coord>> {
    let intervals =
        read_intervals(input).with_context(|| format!("Failed to load intervals from {}", input))?;

    let start = Instant::now();
    let result = detector.detect(&intervals);
    info!(
        "{} detector checked {} intervals in {}us: found = {}",
        detector,
        intervals.len(),
        start.elapsed().as_micros(),
        result.found()
    );

    Ok(result)
}
