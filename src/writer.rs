//! Header-ordered writing over a positional [`csv::Writer`].
//!
//! This module provides [`Writer`], which turns records given as maps of
//! column names to values back into positional CSV records following a
//! fixed, caller-supplied header.
//!
//! # Design notes
//! - Every output record has exactly `header.len()` fields. A key missing
//!   from a record writes as the empty string; keys not named in the header
//!   are never written.
//! - The wrapped `csv::Writer` owns quoting and buffering. [`Writer::write`]
//!   does not flush; [`Writer::write_all`] flushes once after its batch.

use std::io;

use anyhow::Result;

use crate::Record;
use crate::header::contains_column;

/// Writes records given as maps of column names to values, instead of lists
/// of values. Only columns present in the header are written, in the order
/// they appear in the header.
///
/// # Example
///
/// ```
/// use csvmap::{Record, Writer};
///
/// let mut record = Record::new();
/// record.insert("name".to_string(), "Marie".to_string());
/// record.insert("email".to_string(), "marie@example.com".to_string());
///
/// let mut buf = Vec::new();
/// let mut wtr = Writer::from_writer(&mut buf, vec!["email".into(), "name".into()]);
/// wtr.write_header()?;
/// wtr.write_all(&[record])?;
/// drop(wtr);
///
/// assert_eq!(buf, b"email,name\nmarie@example.com,Marie\n");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Writer<W: io::Write> {
    inner: csv::Writer<W>,
    header: Vec<String>,
}

impl<W: io::Write> Writer<W> {
    /// Wrap an already-configured `csv::Writer` with the given header. The
    /// header fixes the output columns and their order for the lifetime of
    /// this writer. No I/O happens here.
    ///
    /// To customize how the CSV content is formatted, build the inner
    /// writer with [`csv::WriterBuilder`] first.
    pub fn new(inner: csv::Writer<W>, header: Vec<String>) -> Self {
        Self { inner, header }
    }

    /// Write to `wtr` with the `csv` crate's default settings.
    pub fn from_writer(wtr: W, header: Vec<String>) -> Self {
        Self::new(csv::Writer::from_writer(wtr), header)
    }

    /// The header supplied at construction, a list of column names.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Reports whether the header contains a column with the given name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        contains_column(&self.header, name)
    }

    /// Write the header as a single positional record, with any necessary
    /// quoting. A well-formed file wants this at most once, before any
    /// records; that discipline is left to the caller.
    ///
    /// # Errors
    /// Any error from the underlying writer is passed through unchanged.
    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(&self.header)?;
        Ok(())
    }

    /// Write a single record, with any necessary quoting.
    ///
    /// For each header column in order, the field is the record's value for
    /// that name, or the empty string if the record has no such key. Keys
    /// not named in the header are ignored.
    ///
    /// # Errors
    /// Any error from the underlying writer is passed through unchanged.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        let fields = self
            .header
            .iter()
            .map(|name| record.get(name).map_or("", String::as_str));
        self.inner.write_record(fields)?;
        Ok(())
    }

    /// Write multiple records using [`Writer::write`], then flush.
    ///
    /// Records are written in input order. The first failure stops the
    /// batch; later records are not written, and whatever prefix already
    /// reached the sink stays there. On success the sink is flushed exactly
    /// once, even for an empty batch, and a flush error is returned even
    /// when every write succeeded.
    ///
    /// # Errors
    /// The first write or flush error from the underlying writer, unchanged.
    pub fn write_all(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write(record)?;
        }
        self.flush()
    }

    /// Flush buffered output to the underlying sink.
    ///
    /// # Errors
    /// Any error from the underlying writer is passed through unchanged.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
