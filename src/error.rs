use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("failed to load {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed number in record at byte offset {offset}: {record:?}")]
    MalformedNumber { offset: usize, record: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Per-record problems. The scanner counts them and moves on, unless the run
/// is strict.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no `;` delimiter")]
    MissingDelimiter,

    #[error("value is not a `-?digits[.digits]` number")]
    MalformedNumber,
}
