//! # csvmap
//!
//! A companion to the [`csv`] crate that represents records as **maps of
//! column names to values** instead of positional lists, providing direct
//! access to fields by column name and making it easy to filter and reorder
//! columns in CSV files.
//!
//! ## Key Features
//!
//! - **Name-keyed reads** - [`Reader`] captures the first record as a header
//!   and turns every following record into a [`Record`] map
//! - **Header-driven writes** - [`Writer`] takes an explicit header and emits
//!   each [`Record`] with exactly those columns, in that order
//! - **Length tolerance** - header and record lengths may diverge; the
//!   shorter side wins on the read path, the header always wins on the
//!   write path
//! - **Transparent errors** - tokenizer and sink errors pass through
//!   unchanged, so callers can still inspect the original [`csv::Error`]
//!   or [`std::io::Error`]
//!
//! Quoting, escaping, and delimiter configuration stay with the wrapped
//! `csv::Reader` / `csv::Writer`. Configure those with [`csv::ReaderBuilder`]
//! and [`csv::WriterBuilder`] before handing them to this crate.
//!
//! ## Reading
//!
//! ```
//! use csvmap::Reader;
//!
//! let input = "\
//! name,age
//! John,8
//! Jane,12
//! ";
//!
//! let mut rdr = Reader::from_reader(input.as_bytes())?;
//! assert_eq!(rdr.header(), &["name", "age"]);
//! assert!(rdr.has_column("age"));
//!
//! let mut ages = Vec::new();
//! for record in rdr.records() {
//!     let record = record?;
//!     ages.push(record["age"].clone());
//! }
//! assert_eq!(ages, ["8", "12"]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Writing
//!
//! ```
//! use csvmap::{Record, Writer};
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), "John".to_string());
//! record.insert("email".to_string(), "john@example.com".to_string());
//! record.insert("age".to_string(), "8".to_string());
//!
//! // Only the columns named in the header are written, in header order.
//! let mut buf = Vec::new();
//! let mut wtr = Writer::from_writer(&mut buf, vec!["email".into(), "name".into()]);
//! wtr.write_header()?;
//! wtr.write_all(&[record])?;
//! drop(wtr);
//!
//! assert_eq!(buf, b"email,name\njohn@example.com,John\n");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Header Semantics
//!
//! Both sides treat the header as immutable once established. The two sides
//! are deliberately asymmetric about missing data:
//!
//! - Reading a record **shorter** than the header leaves the trailing
//!   columns out of the map entirely (no empty-string entries).
//! - Writing a record that **lacks** a header column fills that field with
//!   the empty string, so the output always has `header.len()` fields.
//! - Duplicate header names are allowed; on lookup the later position
//!   shadows the earlier one, since a map holds one value per name.
//!
//! ## Module Overview
//!
//! - [`reader`] - name-keyed reading over a positional `csv::Reader`
//! - [`writer`] - header-ordered writing over a positional `csv::Writer`
//! - [`testing`] - mock I/O helpers for exercising readers and writers

mod header;

pub mod reader;
pub mod testing;
pub mod writer;

pub use reader::{Reader, Records};
pub use writer::Writer;

/// One CSV record, keyed by column name.
///
/// Lookups are by name only; ordering lives in the header, not the record.
pub type Record = std::collections::HashMap<String, String>;
