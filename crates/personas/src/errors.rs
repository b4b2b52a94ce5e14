use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(csv::Error),

    #[error("Fixed set `{0}` must not be empty")]
    EmptyFixedSet(&'static str),

    #[error("Invalid age range: {min}..={max}")]
    InvalidAgeRange { min: u8, max: u8 },
}

impl From<csv::Error> for DatasetError {
    /// Unwraps I/O failures so callers can match on the underlying `io::ErrorKind`.
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return DatasetError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => DatasetError::Io(io_err),
            // is_io_error() guarantees the Io kind
            _ => DatasetError::Io(io::Error::other("csv I/O error")),
        }
    }
}
