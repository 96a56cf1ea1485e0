//! Core ticket data types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum width of a serial number; shorter values are zero-padded.
const SERIAL_PAD: usize = 4;

/// One issued ticket, exactly as it appears as a CSV row.
///
/// Field order matches the column order of the batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Position in the batch, zero-padded (`"0001"`).
    #[serde(rename = "Serial_Number")]
    pub serial_number: String,
    /// Eight uppercase hex characters.
    #[serde(rename = "Human_Readable_ID")]
    pub human_readable_id: String,
    /// Base URL followed by the ID; the literal QR payload.
    #[serde(rename = "QR_Link_URL")]
    pub qr_link_url: String,
    #[serde(rename = "Ticket_Status")]
    pub ticket_status: TicketStatus,
}

impl Ticket {
    /// Builds the record for serial `index` (1-based).
    pub fn new(index: u32, id: String, base_url: &str, status: TicketStatus) -> Self {
        Self {
            serial_number: format_serial(index),
            qr_link_url: ticket_link(base_url, &id),
            human_readable_id: id,
            ticket_status: status,
        }
    }
}

/// Ticket type as written in the `Ticket_Status` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Normal,
    Vip,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Vip => "VIP",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a 1-based serial with a minimum width of four digits.
///
/// Values above 9999 are not truncated, they simply print wider.
pub fn format_serial(index: u32) -> String {
    format!("{:0width$}", index, width = SERIAL_PAD)
}

/// The URL encoded into a ticket's QR image.
pub fn ticket_link(base_url: &str, id: &str) -> String {
    format!("{base_url}{id}")
}
