use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;
use num_traits::PrimInt;

use isolap_core::models::Interval;
use isolap_core::utils::{create_parent_dirs, get_dynamic_reader_w_stdin, is_gzipped};

use crate::consts::{HIGH_COLUMN, LOW_COLUMN};
use crate::error::{IoError, Result};

/// Coordinate type of intervals read from disk.
pub type Coord = i64;

///
/// Read a two-column interval file.
///
/// The first row is a header and is skipped. Every following row must start with two
/// integer columns, `low` and `high`; further columns are ignored. Paths ending in
/// `.gz` are decompressed, and `-` reads stdin.
///
/// # Arguments
/// - path: the path to the file to read
///
pub fn read_intervals<P: AsRef<Path>>(path: P) -> Result<Vec<Interval<Coord>>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader_w_stdin(&path.to_string_lossy())?;
    let intervals = read_intervals_from_reader(reader)?;
    debug!("read {} intervals from {:?}", intervals.len(), path);
    Ok(intervals)
}

/// Read intervals from any CSV source. See [`read_intervals`].
pub fn read_intervals_from_reader<R: Read>(reader: R) -> Result<Vec<Interval<Coord>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut intervals = Vec::new();
    for record in csv_reader.records() {
        intervals.push(parse_record(&record?)?);
    }
    Ok(intervals)
}

fn parse_record(record: &StringRecord) -> Result<Interval<Coord>> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let low = parse_field(record, 0, LOW_COLUMN, line)?;
    let high = parse_field(record, 1, HIGH_COLUMN, line)?;
    Interval::new(low, high).map_err(|source| IoError::InvalidInterval { line, source })
}

fn parse_field(record: &StringRecord, idx: usize, column: &'static str, line: u64) -> Result<Coord> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or(IoError::MissingColumn { line, column })?;
    raw.parse::<Coord>().map_err(|_| IoError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}

///
/// Write intervals as a two-column CSV file with a `low,high` header.
///
/// Paths ending in `.gz` are gzip'd. Parent directories are created as needed.
///
/// # Arguments
/// - path: the path to the file to dump to
/// - intervals: the intervals to write, in order
///
pub fn write_intervals<P, I>(path: P, intervals: &[Interval<I>]) -> Result<()>
where
    P: AsRef<Path>,
    I: PrimInt + Send + Sync + Display,
{
    let path = path.as_ref();

    create_parent_dirs(path)?;
    let file = File::create(path)?;
    if is_gzipped(path) {
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        write_records(encoder, intervals)?.finish()?.flush()?;
    } else {
        write_records(BufWriter::new(file), intervals)?.flush()?;
    }

    debug!("wrote {} intervals to {:?}", intervals.len(), path);
    Ok(())
}

fn write_records<W, I>(sink: W, intervals: &[Interval<I>]) -> Result<W>
where
    W: Write,
    I: PrimInt + Send + Sync + Display,
{
    let mut writer = WriterBuilder::new().from_writer(sink);
    writer.write_record([LOW_COLUMN, HIGH_COLUMN])?;
    for interval in intervals {
        writer.write_record([interval.low().to_string(), interval.high().to_string()])?;
    }
    writer.into_inner().map_err(|e| IoError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn get_test_path(file_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(file_name)
    }

    fn iv(low: Coord, high: Coord) -> Interval<Coord> {
        Interval::new(low, high).unwrap()
    }

    #[rstest]
    fn test_read_skips_header() {
        let data = "low,high\n0,3\n4,6\n 5 , 7 \n7,10,extra\n";
        let intervals = read_intervals_from_reader(data.as_bytes()).unwrap();
        assert_eq!(intervals, vec![iv(0, 3), iv(4, 6), iv(5, 7), iv(7, 10)]);
    }

    #[rstest]
    fn test_read_header_only() {
        let intervals = read_intervals_from_reader("low,high\n".as_bytes()).unwrap();
        assert!(intervals.is_empty());
    }

    #[rstest]
    fn test_read_rejects_inverted_row() {
        let err = read_intervals_from_reader("low,high\n0,3\n5,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::InvalidInterval { line: 3, .. }));
        assert_eq!(
            err.to_string(),
            "Line 3: Invalid interval: low (5) is greater than high (2)"
        );
    }

    #[rstest]
    #[case("low,high\n1,x\n", "high")]
    #[case("low,high\n1.5,3\n", "low")]
    fn test_read_rejects_non_integer(#[case] data: &str, #[case] expected_column: &str) {
        let err = read_intervals_from_reader(data.as_bytes()).unwrap_err();
        match err {
            IoError::InvalidNumber { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, expected_column);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case("low,high\n1\n")]
    #[case("low,high\n1,\n")]
    fn test_read_rejects_missing_column(#[case] data: &str) {
        let err = read_intervals_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IoError::MissingColumn {
                line: 2,
                column: "high"
            }
        ));
    }

    #[rstest]
    fn test_read_fixture_files() {
        let with = read_intervals(get_test_path("overlapping_intervals.csv")).unwrap();
        let without = read_intervals(get_test_path("no_overlapping_intervals.csv")).unwrap();
        assert!(!with.is_empty());
        assert!(!without.is_empty());
    }

    #[rstest]
    fn test_read_missing_file() {
        let err = read_intervals(get_test_path("nope.csv")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[rstest]
    #[case("out.csv")]
    #[case("nested/out.csv.gz")]
    fn test_write_then_read(#[case] name: &str) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        let intervals = vec![iv(-4, 6), iv(5, 7), iv(25, 50)];

        write_intervals(&path, &intervals).unwrap();
        assert_eq!(read_intervals(&path).unwrap(), intervals);
    }

    #[rstest]
    fn test_write_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.csv");
        write_intervals(&path, &[Interval::new(1u32, 2).unwrap()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "low,high\n1,2\n");
    }
}
