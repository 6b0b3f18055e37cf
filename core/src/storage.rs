//! Flat-file output for the narrative log and the results table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

/// Write one line per entry, replacing any existing file.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<usize, OutputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(io_err)?;
        count += 1;
    }
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), lines = count, "Wrote output file");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.log");
        std::fs::write(&path, "stale contents\n").unwrap();

        let written = write_lines(&path, ["first", "second"]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_write_lines_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("result.txt");

        let err = write_lines(&path, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
