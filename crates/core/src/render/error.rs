//! Error types for the render module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering a batch.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Batch CSV does not exist.
    #[error("{} not found. Please run `tantalize generate` first.", path.display())]
    InputNotFound { path: PathBuf },

    /// Batch CSV could not be read or a row could not be decoded.
    #[error("Failed to read {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row decoded but its contents are unusable.
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// Payload does not fit in any QR version.
    #[error("Failed to encode QR code for ticket {ticket_id}")]
    Encode {
        ticket_id: String,
        #[source]
        source: qrcode::types::QrError,
    },

    /// Requested image edge does not fit in a `u32`.
    #[error("QR image too large: {modules} modules, box size {box_size}, border {border}")]
    ImageTooLarge {
        modules: u32,
        box_size: u32,
        border: u32,
    },

    /// Output directory could not be created.
    #[error("Failed to create output directory: {}", path.display())]
    OutputDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image could not be written.
    #[error("Failed to save image: {}", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl RenderError {
    /// Creates a malformed row error.
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }

    /// Whether this error is the missing-input precondition rather than a
    /// failure partway through a run.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}
