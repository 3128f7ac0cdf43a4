//! Name-keyed reading over a positional [`csv::Reader`].
//!
//! This module provides:
//! - [`Reader`]: wraps a `csv::Reader` and yields records as maps of column
//!   names to values, using the input's first record as the header
//! - [`Records`]: a borrowing iterator over those maps
//!
//! # Design notes
//! - The wrapped `csv::Reader` must be built with `has_headers(false)`;
//!   header handling belongs to this type, which consumes exactly one record
//!   at construction.
//! - Header and record lengths may diverge. Pairing stops at the shorter of
//!   the two: extra fields are dropped, and columns with no field are left
//!   out of the map rather than filled with empty strings.

use std::io;

use anyhow::{Result, bail};
use csv::StringRecord;

use crate::Record;
use crate::header::contains_column;

/// Reads CSV records as maps of column names to values, instead of lists of
/// values. The first record of the input is the header with column names.
///
/// # Example
///
/// ```
/// use csvmap::Reader;
///
/// let mut rdr = Reader::from_reader("name,age\nJohn,8\n".as_bytes())?;
/// let record = rdr.read().expect("one data record")?;
/// assert_eq!(record["name"], "John");
/// assert_eq!(record["age"], "8");
/// assert!(rdr.read().is_none());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Reader<R> {
    inner: csv::Reader<R>,
    header: Vec<String>,
}

impl<R: io::Read> Reader<R> {
    /// Wrap an already-configured `csv::Reader`, consuming its first record
    /// as the header.
    ///
    /// The inner reader must be built with `has_headers(false)` so the
    /// header record reaches this type, and with `flexible(true)` if records
    /// with lengths different from the header's should be tolerated rather
    /// than rejected by the tokenizer. [`Reader::from_reader`] applies both.
    ///
    /// # Errors
    /// Returns an error if the header read fails, or if the input ends
    /// before any record is seen.
    pub fn new(mut inner: csv::Reader<R>) -> Result<Self> {
        let mut record = StringRecord::new();
        if !inner.read_record(&mut record)? {
            bail!("empty CSV input: no header record");
        }
        let header = record.iter().map(str::to_string).collect();
        Ok(Self { inner, header })
    }

    /// Read from `rdr` with default settings suited to this type:
    /// `has_headers(false)` and `flexible(true)`.
    ///
    /// To customize how the CSV content is parsed (delimiter, quoting,
    /// strict record lengths), build a `csv::Reader` with
    /// [`csv::ReaderBuilder`] and pass it to [`Reader::new`] instead.
    ///
    /// # Errors
    /// See [`Reader::new`].
    pub fn from_reader(rdr: R) -> Result<Self> {
        Self::new(
            csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(rdr),
        )
    }

    /// The header captured at construction, a list of column names.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Reports whether the header contains a column with the given name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        contains_column(&self.header, name)
    }

    /// Read one record as a map of column names to values.
    ///
    /// Returns `None` at end of input. Fields are paired with header columns
    /// by position, up to the shorter of the two lengths; see the module
    /// docs for the exact divergence rules. Each call builds a fresh map.
    ///
    /// # Errors
    /// Any error from the underlying reader is passed through unchanged;
    /// downcasting to [`csv::Error`] remains possible.
    pub fn read(&mut self) -> Option<Result<Record>> {
        let mut record = StringRecord::new();
        match self.inner.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => Some(Ok(self.zip(&record))),
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Iterate over the remaining records.
    ///
    /// ```
    /// use csvmap::Reader;
    ///
    /// let mut rdr = Reader::from_reader("k,v\nx,1\ny,2\n".as_bytes())?;
    /// let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 2);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn records(&mut self) -> Records<'_, R> {
        Records { rdr: self }
    }

    // Later positions overwrite earlier ones, so a duplicated column name
    // ends up holding its last value.
    fn zip(&self, record: &StringRecord) -> Record {
        let mut out = Record::with_capacity(self.header.len().min(record.len()));
        for (name, field) in self.header.iter().zip(record.iter()) {
            out.insert(name.clone(), field.to_string());
        }
        out
    }
}

/// Borrowing iterator over a [`Reader`]'s remaining records, as returned by
/// [`Reader::records`].
pub struct Records<'r, R> {
    rdr: &'r mut Reader<R>,
}

impl<R: io::Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rdr.read()
    }
}
