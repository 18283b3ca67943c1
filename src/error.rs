// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse grouping used by the runner report and the CLI summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Parse,
    Filesystem,
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("no <table> found in page")]
    NoTable,

    #[error("unexpected schema: column {missing:?} not found (columns: {found:?})")]
    UnexpectedSchema { missing: String, found: Vec<String> },

    #[error("path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Client(_)
            | ScrapeError::Transport { .. }
            | ScrapeError::Status { .. } => ErrorKind::Transport,
            ScrapeError::NoTable | ScrapeError::UnexpectedSchema { .. } => ErrorKind::Parse,
            ScrapeError::NotADirectory { .. }
            | ScrapeError::Io { .. }
            | ScrapeError::Csv { .. } => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        ScrapeError::Csv { path: path.into(), source }
    }
}
