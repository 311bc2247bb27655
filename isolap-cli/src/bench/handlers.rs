use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::Serialize;

use isolap_core::models::Interval;
use isolap_core::utils::create_parent_dirs;
use isolap_detect::{DetectorType, SortedIntervals};
use isolap_io::{Coord, generate_intervals, read_intervals};

use super::config::BenchConfig;
use super::timing::{as_micros, format_duration};

/// One timed detector call.
///
/// `sort_micros` is the one-off sort shared by every detector on the same source;
/// `micros` covers the detector alone.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BenchRecord {
    pub source: String,
    pub detector: DetectorType,
    pub intervals: usize,
    pub found: bool,
    pub low: Option<Coord>,
    pub high: Option<Coord>,
    pub sort_micros: u64,
    pub micros: u64,
}

pub fn run_bench(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;

    if config.inputs.is_empty() && config.runs == 0 {
        warn!("Nothing to benchmark: pass --input or --runs (or set them in --config)");
        return Ok(());
    }

    let mut records = Vec::new();

    for input in &config.inputs {
        records.extend(bench_file(input, &config.detectors)?);
    }

    if config.runs > 0 {
        records.extend(bench_random(&config)?);
    }

    if let Some(report) = &config.report {
        write_report(report, &records)?;
        info!("Timing report written to {}", report.display());
    }

    Ok(())
}

/// Merge the optional config file with command line overrides.
fn resolve_config(matches: &ArgMatches) -> Result<BenchConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => BenchConfig::try_from(Path::new(path))?,
        None => BenchConfig::default(),
    };

    if let Some(inputs) = matches.get_many::<String>("input") {
        config.inputs = inputs.map(PathBuf::from).collect();
    }
    if let Some(runs) = matches.get_one::<usize>("runs") {
        config.runs = *runs;
    }
    if let Some(count) = matches.get_one::<usize>("count") {
        config.count = *count;
    }
    if let Some(max_span) = matches.get_one::<i64>("max-span") {
        config.max_span = *max_span;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if let Some(list) = matches.get_one::<String>("detectors") {
        config.detectors = parse_detectors(list)?;
    }
    if let Some(report) = matches.get_one::<String>("report") {
        config.report = Some(PathBuf::from(report));
    }

    if config.detectors.is_empty() {
        bail!("At least one detector is required");
    }

    Ok(config)
}

fn parse_detectors(list: &str) -> Result<Vec<DetectorType>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<DetectorType>().map_err(anyhow::Error::msg))
        .collect()
}

fn bench_file(input: &Path, detectors: &[DetectorType]) -> Result<Vec<BenchRecord>> {
    info!("[#######]");
    info!("[RUN    ] Test with {}", input.display());
    let intervals = read_intervals(input)
        .with_context(|| format!("Failed to load intervals from {}", input.display()))?;
    let records = execute_test(&input.display().to_string(), &intervals, detectors)?;
    info!("[SUCCESS] Test with {}", input.display());
    Ok(records)
}

fn bench_random(config: &BenchConfig) -> Result<Vec<BenchRecord>> {
    info!("[#######]");
    info!(
        "[RUN    ] {} random runs of {} intervals (max span {})",
        config.runs, config.count, config.max_span
    );

    let pb = ProgressBar::new(config.runs as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let mut records = Vec::new();
    for run in 0..config.runs {
        let intervals = generate_intervals(config.generator_for_run(run))?;
        let source = format!("random-{}", run);
        let run_records = pb.suspend(|| execute_test(&source, &intervals, &config.detectors))?;
        records.extend(run_records);
        pb.inc(1);
    }
    pb.finish_with_message("done");

    info!("[SUCCESS] {} random runs", config.runs);
    Ok(records)
}

/// Sort `intervals` once, time every detector on the sorted copy, and fail if they
/// disagree on whether an isolated interval exists.
pub fn execute_test(
    source: &str,
    intervals: &[Interval<Coord>],
    detectors: &[DetectorType],
) -> Result<Vec<BenchRecord>> {
    let start = Instant::now();
    let sorted = SortedIntervals::from(intervals);
    let sort_took = start.elapsed();
    let sort_micros = as_micros(sort_took);

    let mut records = Vec::with_capacity(detectors.len());
    let mut elapsed = Vec::with_capacity(detectors.len());

    for detector in detectors {
        info!("[RUN    ] Execute test: {} approach", detector);
        let start = Instant::now();
        let result = detector.detect_presorted(&sorted);
        let took = start.elapsed();
        info!(
            "[SUCCESS] Execute test: {} approach with '{}'",
            detector,
            result.found()
        );

        elapsed.push(took);
        records.push(BenchRecord {
            source: source.to_string(),
            detector: *detector,
            intervals: intervals.len(),
            found: result.found(),
            low: result.interval().map(|iv| iv.low()),
            high: result.interval().map(|iv| iv.high()),
            sort_micros,
            micros: as_micros(took),
        });
    }

    if let Some(first) = records.first() {
        if let Some(other) = records.iter().find(|r| r.found != first.found) {
            bail!(
                "Detectors disagree on {}: {} found = {}, {} found = {}",
                source,
                first.detector,
                first.found,
                other.detector,
                other.found
            );
        }
    }

    info!(
        "[EVAL   ] {:<8} step     took {} || {:12}us",
        "sort",
        format_duration(sort_took),
        sort_micros
    );
    for (record, took) in records.iter().zip(&elapsed) {
        info!(
            "[EVAL   ] {:<8} approach took {} || {:12}us",
            record.detector,
            format_duration(*took),
            record.micros
        );
    }

    Ok(records)
}

fn write_report(path: &Path, records: &[BenchRecord]) -> Result<()> {
    create_parent_dirs(path)
        .with_context(|| format!("Failed to create directories for {}", path.display()))?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
