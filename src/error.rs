use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error – everything the library can report
// ---------------------------------------------------------------------------

/// Errors raised by the statistics, pipeline and table functions.
///
/// Every failure leaves the caller's in/out arguments exactly as they were.
#[derive(Debug, Error)]
pub enum Error {
    /// A statistic needs more elements than the sequence holds.
    #[error("{0}")]
    NotEnoughData(String),

    /// A parameter is outside its valid domain.
    #[error("{0}")]
    InvalidArgument(String),

    /// A statistic was computed but does not fit in the element type.
    #[error("{0}")]
    Unrepresentable(String),

    /// A date-range filter left no observations.
    #[error("{0}")]
    NoValidTimes(String),

    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A table row could not be parsed. `line` is 1-based.
    #[error("misformatted file at line {line}: {reason}")]
    Misformatted { line: usize, reason: String },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InsufficientData,
    InvalidArgument,
    NoValidRange,
    IoFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotEnoughData(_) => ErrorKind::InsufficientData,
            Error::InvalidArgument(_) | Error::Unrepresentable(_) => ErrorKind::InvalidArgument,
            Error::NoValidTimes(_) => ErrorKind::NoValidRange,
            Error::Open { .. } | Error::Io { .. } | Error::Csv(_) | Error::Misformatted { .. } => {
                ErrorKind::IoFailure
            }
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ---------------------------------------------------------------------------
// Parallel-sequence length checks
// ---------------------------------------------------------------------------

/// Fail with `InvalidArgument` unless every column has the same length.
pub(crate) fn check_parallel(operation: &str, columns: &[&[f64]]) -> Result<usize> {
    let expected = columns.first().map_or(0, |c| c.len());
    if columns.iter().any(|c| c.len() != expected) {
        let lengths: Vec<String> = columns.iter().map(|c| c.len().to_string()).collect();
        return Err(Error::InvalidArgument(format!(
            "Mismatched vectors passed to {operation}() (gave {})",
            lengths.join(", ")
        )));
    }
    Ok(expected)
}
