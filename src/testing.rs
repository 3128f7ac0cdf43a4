//! Mock I/O helpers for testing readers and writers.
//!
//! This module provides utilities for exercising CSV I/O against temporary
//! files and against sinks that fail on purpose:
//!
//! - [`TempFilePath`]: a temporary file that deletes itself when dropped
//! - [`mock_csv_file`]: write positional rows to a temporary CSV file
//! - [`FailingWriter`]: a sink with a byte budget and, optionally, a
//!   failing `flush`
//! - [`FlushCounter`]: a sink that counts `flush` calls

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

/// Shared view of every byte a mock sink has accepted.
pub type SinkLog = Arc<Mutex<Vec<u8>>>;

/// A temporary file that is automatically deleted when dropped.
pub struct TempFilePath {
    #[allow(dead_code)]
    temp_file: NamedTempFile,
    path: PathBuf,
}

impl TempFilePath {
    /// Create a new temporary file.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn new() -> io::Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_path_buf();
        Ok(Self { temp_file, path })
    }

    /// Create a new temporary file with a specific extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn with_extension(extension: &str) -> io::Result<Self> {
        let temp_file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()?;
        let path = temp_file.path().to_path_buf();
        Ok(Self { temp_file, path })
    }

    /// Get the path to the temporary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Create a temporary CSV file from a header and positional rows.
///
/// Rows may be ragged; the underlying writer is configured with
/// `flexible(true)` so short and long rows land in the file as given.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written.
///
/// # Example
///
/// ```
/// use csvmap::Reader;
/// use csvmap::testing::mock_csv_file;
///
/// let fixture = mock_csv_file(&["name", "age"], &[&["John", "8"]])?;
/// let mut rdr = Reader::from_reader(std::fs::File::open(fixture.path())?)?;
/// assert_eq!(rdr.header(), &["name", "age"]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn mock_csv_file(header: &[&str], rows: &[&[&str]]) -> io::Result<TempFilePath> {
    let temp = TempFilePath::with_extension("csv")?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(temp.path())?;

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(*row)?;
    }

    writer.flush()?;
    Ok(temp)
}

/// An `io::Write` that accepts up to a fixed number of bytes and fails
/// afterwards.
///
/// Accepted bytes are recorded in a shared [`SinkLog`], so a test can
/// assert exactly which prefix reached the sink before the failure.
pub struct FailingWriter {
    log: SinkLog,
    budget: usize,
    fail_flush: bool,
}

impl FailingWriter {
    /// A sink that accepts `budget` bytes, then fails every further write.
    /// Flushing succeeds.
    #[must_use]
    pub fn new(budget: usize) -> (Self, SinkLog) {
        let log = SinkLog::default();
        let writer = Self {
            log: Arc::clone(&log),
            budget,
            fail_flush: false,
        };
        (writer, log)
    }

    /// Like [`FailingWriter::new`], but `flush` fails as well.
    #[must_use]
    pub fn with_failing_flush(budget: usize) -> (Self, SinkLog) {
        let (mut writer, log) = Self::new(budget);
        writer.fail_flush = true;
        (writer, log)
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut log = self.log.lock().expect("sink log poisoned");
        if log.len() + buf.len() > self.budget {
            return Err(io::Error::other("sink byte budget exhausted"));
        }
        log.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            return Err(io::Error::other("sink flush failed"));
        }
        Ok(())
    }
}

/// An `io::Write` that swallows bytes and counts `flush` calls.
pub struct FlushCounter {
    flushes: Arc<AtomicUsize>,
}

impl FlushCounter {
    /// A sink plus a shared counter of how many times it has been flushed.
    #[must_use]
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let flushes = Arc::new(AtomicUsize::new(0));
        let writer = Self {
            flushes: Arc::clone(&flushes),
        };
        (writer, flushes)
    }
}

impl Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_file_path_exists() {
        let temp = TempFilePath::new().unwrap();
        assert!(temp.path().exists());
    }

    #[test]
    fn temp_file_path_with_extension() {
        let temp = TempFilePath::with_extension("csv").unwrap();
        assert_eq!(temp.path().extension().unwrap(), "csv");
    }

    #[test]
    fn mock_csv_file_writes_rows_as_given() {
        let temp = mock_csv_file(&["a", "b"], &[&["1", "2"], &["3"]]).unwrap();
        let contents = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(contents, "a,b\n1,2\n3\n");
    }

    #[test]
    fn failing_writer_stops_at_its_budget() {
        let (mut writer, log) = FailingWriter::new(4);
        writer.write_all(b"ab").unwrap();
        writer.write_all(b"cd").unwrap();
        assert!(writer.write_all(b"e").is_err());
        assert_eq!(*log.lock().unwrap(), b"abcd");
        assert!(writer.flush().is_ok());
    }

    #[test]
    fn failing_flush_reports_an_error() {
        let (mut writer, _log) = FailingWriter::with_failing_flush(1024);
        writer.write_all(b"fine").unwrap();
        assert!(writer.flush().is_err());
    }

    #[test]
    fn flush_counter_counts_flushes() {
        let (mut writer, flushes) = FlushCounter::new();
        writer.write_all(b"ignored").unwrap();
        assert_eq!(flushes.load(Ordering::SeqCst), 0);
        writer.flush().unwrap();
        writer.flush().unwrap();
        assert_eq!(flushes.load(Ordering::SeqCst), 2);
    }
}
