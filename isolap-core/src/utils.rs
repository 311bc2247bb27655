use std::ffi::OsStr;
use std::fs::{File, create_dir_all};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Check whether a path points to a gzip'd file, judged by its extension.
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

/// Create the directories leading up to `path`, if any are missing.
pub fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {:?}: {}", path, e))
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> io::Result<Box<dyn BufRead>> {
    if file_path_str == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        Ok(Box::new(get_dynamic_reader(Path::new(file_path_str))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[rstest]
    #[case("intervals.csv", false)]
    #[case("intervals.csv.gz", true)]
    #[case("gz", false)]
    fn test_is_gzipped(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_gzipped(Path::new(name)), expected);
    }

    #[rstest]
    #[case("plain.csv")]
    #[case("compressed.csv.gz")]
    fn test_dynamic_reader(#[case] name: &str) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        let body = b"low,high\n0,3\n";

        let file = File::create(&path).unwrap();
        if is_gzipped(&path) {
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(body).unwrap();
            encoder.finish().unwrap();
        } else {
            let mut file = file;
            file.write_all(body).unwrap();
        }

        let mut contents = String::new();
        get_dynamic_reader(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "low,high\n0,3\n");
    }

    #[rstest]
    fn test_create_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/out.csv");
        create_parent_dirs(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
        assert!(!path.exists());

        // bare file names and existing dirs are fine
        create_parent_dirs(Path::new("out.csv")).unwrap();
        create_parent_dirs(&path).unwrap();
    }

    #[rstest]
    fn test_missing_file_names_path() {
        let err = get_dynamic_reader(Path::new("does/not/exist.csv")).err().expect("expected an error");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("exist.csv"));
    }
}
