//! Persona records and CSV serialization.
//!
//! A [`Dataset`] is the header row plus its records. It is written in one pass
//! and never read back by this crate.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::HEADER;
use crate::errors::DatasetError;

/// One synthetic person entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "City")]
    pub city: String,
}

/// Header plus the ordered records of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    header: [&'static str; 3],
    records: Vec<Record>,
}

impl Dataset {
    /// Wraps `records` behind the fixed `Name,Age,City` header.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            header: HEADER,
            records,
        }
    }

    pub fn header(&self) -> &[&'static str; 3] {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of lines the dataset occupies once written, header included.
    pub fn line_count(&self) -> usize {
        self.records.len() + 1
    }
}

#[cfg(windows)]
const LINE_TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const LINE_TERMINATOR: Terminator = Terminator::Any(b'\n');

/// Serializes `dataset` as CSV into any writer.
///
/// The writer is flushed before returning so buffered failures surface here.
pub fn write_csv_to<W: io::Write>(dataset: &Dataset, writer: W) -> Result<(), DatasetError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(LINE_TERMINATOR)
        .from_writer(writer);

    csv_writer.write_record(dataset.header())?;
    for record in dataset.records() {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Writes `dataset` to `path`, creating or truncating the file.
///
/// Fails with [`DatasetError::Io`] when the path cannot be created or written,
/// e.g. when its parent directory does not exist.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let file = File::create(path)?;

    write_csv_to(dataset, BufWriter::new(file))?;

    info!(
        "Wrote {} persona records to {}",
        dataset.records().len(),
        path.display()
    );
    Ok(())
}
