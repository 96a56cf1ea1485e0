//! Consistency checks over a generated batch.

use std::collections::HashMap;
use std::fmt;

use super::id::is_ticket_id;
use super::types::{format_serial, ticket_link, Ticket};

/// A single inconsistency found in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchIssue {
    /// ID is not eight uppercase hex characters.
    InvalidId { serial: String, id: String },
    /// ID already used by an earlier row.
    DuplicateId {
        id: String,
        first_serial: String,
        serial: String,
    },
    /// Link is not `base_url` followed by the ID.
    LinkMismatch {
        serial: String,
        expected: String,
        actual: String,
    },
    /// Serial breaks the contiguous `0001, 0002, ...` sequence.
    SerialOutOfSequence {
        row: usize,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for BatchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { serial, id } => {
                write!(f, "serial {serial}: malformed ID {id:?}")
            }
            Self::DuplicateId {
                id,
                first_serial,
                serial,
            } => write!(f, "serial {serial}: ID {id} already issued to {first_serial}"),
            Self::LinkMismatch {
                serial,
                expected,
                actual,
            } => write!(f, "serial {serial}: link {actual:?}, expected {expected:?}"),
            Self::SerialOutOfSequence {
                row,
                expected,
                actual,
            } => write!(f, "row {row}: serial {actual:?}, expected {expected:?}"),
        }
    }
}

/// Outcome of [`verify_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: usize,
    pub issues: Vec<BatchIssue>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks ID shape, ID uniqueness, link composition and serial order.
///
/// `row` in reported issues is 1-based and excludes the header.
pub fn verify_batch(tickets: &[Ticket], base_url: &str) -> BatchReport {
    let mut issues = Vec::new();
    let mut first_seen: HashMap<&str, &str> = HashMap::with_capacity(tickets.len());

    for (i, ticket) in tickets.iter().enumerate() {
        let row = i + 1;
        let serial = &ticket.serial_number;
        let id = &ticket.human_readable_id;

        let expected_serial = format_serial(row as u32);
        if *serial != expected_serial {
            issues.push(BatchIssue::SerialOutOfSequence {
                row,
                expected: expected_serial,
                actual: serial.clone(),
            });
        }

        if !is_ticket_id(id) {
            issues.push(BatchIssue::InvalidId {
                serial: serial.clone(),
                id: id.clone(),
            });
        }

        if let Some(first_serial) = first_seen.get(id.as_str()) {
            issues.push(BatchIssue::DuplicateId {
                id: id.clone(),
                first_serial: first_serial.to_string(),
                serial: serial.clone(),
            });
        } else {
            first_seen.insert(id.as_str(), serial.as_str());
        }

        let expected_link = ticket_link(base_url, id);
        if ticket.qr_link_url != expected_link {
            issues.push(BatchIssue::LinkMismatch {
                serial: serial.clone(),
                expected: expected_link,
                actual: ticket.qr_link_url.clone(),
            });
        }
    }

    BatchReport {
        rows: tickets.len(),
        issues,
    }
}
