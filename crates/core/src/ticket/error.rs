//! Error types for the ticket module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating, writing or reading a batch.
#[derive(Debug, Error)]
pub enum TicketError {
    /// File could not be created or written.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("CSV error in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No unused ID could be drawn for a ticket.
    #[error("No unique ID found for ticket {serial} after {attempts} attempts")]
    IdSpaceExhausted { serial: String, attempts: usize },
}

impl TicketError {
    /// Creates a CSV error for the given file.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Creates an I/O error for the given file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
